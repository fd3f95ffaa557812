use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use terrafault_core::TerrainError;
use terrafault_terrain::{edges, fault, grid, normals};

use crate::scenes::{self, SceneConfig};

/// Timing data for one pipeline stage across all iterations.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Per-stage timings of the terrain pipeline.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct StageTimings {
    pub grid: TimingSeries,
    pub shaping: TimingSeries,
    pub normals: TimingSeries,
    pub edges: TimingSeries,
    pub total: TimingSeries,
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub vertices: usize,
    pub faces: usize,
    pub passes: u32,
    pub iterations: u32,
    pub min_elevation: f32,
    pub max_elevation: f32,
    pub stages: StageTimings,
}

impl BenchmarkResult {
    /// Million fault-vertex updates per second during shaping.
    pub fn shaping_throughput(&self) -> f64 {
        let work = self.passes as f64 * self.vertices as f64;
        if self.stages.shaping.mean_ms <= 0.0 {
            return 0.0;
        }
        work / (self.stages.shaping.mean_ms * 1000.0)
    }
}

/// Runs every pipeline stage separately so each one can be timed.
pub struct BenchmarkRunner {
    iterations: u32,
    seed: u64,
}

impl BenchmarkRunner {
    pub fn new(iterations: u32, seed: u64) -> Self {
        Self {
            iterations: iterations.max(1),
            seed,
        }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Run a single benchmark scene and return timing results.
    pub fn run_scene(&self, config: &SceneConfig) -> Result<BenchmarkResult, TerrainError> {
        let params = &config.params;
        params.validate()?;
        log::info!(
            "Running scene '{}' ({} fault-vertex updates)...",
            config.name,
            scenes::displacement_work(params)
        );

        let mut grid_times = Vec::with_capacity(self.iterations as usize);
        let mut shaping_times = Vec::with_capacity(self.iterations as usize);
        let mut normal_times = Vec::with_capacity(self.iterations as usize);
        let mut edge_times = Vec::with_capacity(self.iterations as usize);
        let mut total_times = Vec::with_capacity(self.iterations as usize);

        let mut vertices = 0;
        let mut faces = 0;
        let mut elevation = (0.0f32, 0.0f32);

        for _ in 0..self.iterations {
            // Same seed every iteration so all runs do identical work
            let mut rng = StdRng::seed_from_u64(self.seed);

            let start = Instant::now();
            let mut mesh = grid::generate_grid(params.divisions, params.bounds)?;
            let t_grid = start.elapsed();

            fault::shape_terrain(&mut mesh.positions, &params.bounds, &params.shaping, &mut rng)?;
            let t_shaping = start.elapsed();

            let vertex_normals = normals::compute_vertex_normals(
                &mesh.positions,
                &mesh.faces,
                params.normal_weighting,
            );
            let t_normals = start.elapsed();

            let edge_list = edges::derive_edges(&mesh.faces);
            let t_edges = start.elapsed();

            grid_times.push(to_ms(t_grid));
            shaping_times.push(to_ms(t_shaping - t_grid));
            normal_times.push(to_ms(t_normals - t_shaping));
            edge_times.push(to_ms(t_edges - t_normals));
            total_times.push(to_ms(t_edges));

            vertices = mesh.positions.len();
            faces = mesh.faces.len();
            elevation = mesh
                .positions
                .iter()
                .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                    (lo.min(p.z), hi.max(p.z))
                });
            debug_assert_eq!(vertex_normals.normals.len(), vertices);
            debug_assert_eq!(edge_list.len(), faces * 3);
        }

        let stages = StageTimings {
            grid: compute_timings(&grid_times),
            shaping: compute_timings(&shaping_times),
            normals: compute_timings(&normal_times),
            edges: compute_timings(&edge_times),
            total: compute_timings(&total_times),
        };
        log::info!(
            "  Done: total mean={:.2}ms, shaping mean={:.2}ms, normals mean={:.2}ms",
            stages.total.mean_ms,
            stages.shaping.mean_ms,
            stages.normals.mean_ms
        );

        Ok(BenchmarkResult {
            scene_name: config.name.clone(),
            vertices,
            faces,
            passes: params.shaping.passes,
            iterations: self.iterations,
            min_elevation: elevation.0,
            max_elevation: elevation.1,
            stages,
        })
    }
}

fn to_ms(d: std::time::Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Compute timing statistics from a list of durations in milliseconds.
pub fn compute_timings(times: &[f64]) -> TimingSeries {
    if times.is_empty() {
        return TimingSeries::default();
    }

    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let p95_idx = ((n as f64) * 0.95).ceil() as usize;

    TimingSeries {
        mean_ms: mean,
        median_ms: median,
        p95_ms: sorted[p95_idx.min(n - 1)],
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
    }
}
