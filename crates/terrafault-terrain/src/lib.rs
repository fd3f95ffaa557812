pub mod config;
pub mod edges;
pub mod export;
pub mod fault;
pub mod grid;
pub mod normals;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use terrafault_core::types::TerrainParams;
use terrafault_core::TerrainError;

/// Fault-shaped heightfield mesh with normals and wireframe edges.
///
/// Built in one go by [`Terrain::generate`]: grid layout, triangulation,
/// fault shaping, normal calculation, edge derivation. All buffers are
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Terrain {
    params: TerrainParams,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    faces: Vec<[u32; 3]>,
    edges: Vec<[u32; 2]>,
    degenerate_normals: usize,
}

impl Terrain {
    /// Build a terrain, drawing fault planes from `rng`.
    pub fn generate<R: Rng>(params: TerrainParams, rng: &mut R) -> Result<Self, TerrainError> {
        params.validate()?;

        let grid::GridMesh {
            mut positions,
            faces,
        } = grid::generate_grid(params.divisions, params.bounds)?;
        log::info!(
            "Terrain: generated {} vertices, {} triangles",
            positions.len(),
            faces.len()
        );

        fault::shape_terrain(&mut positions, &params.bounds, &params.shaping, rng)?;
        log::info!("Terrain: applied {} fault passes", params.shaping.passes);

        let vertex_normals =
            normals::compute_vertex_normals(&positions, &faces, params.normal_weighting);
        log::info!("Terrain: computed normals ({:?})", params.normal_weighting);

        let edges = edges::derive_edges(&faces);
        log::info!("Terrain: derived {} edges", edges.len());

        Ok(Self {
            params,
            positions,
            normals: vertex_normals.normals,
            faces,
            edges,
            degenerate_normals: vertex_normals.degenerate_count,
        })
    }

    /// Build a terrain with a `StdRng` seeded from `seed`. Equal seeds and
    /// parameters give bit-identical buffers.
    pub fn from_seed(params: TerrainParams, seed: u64) -> Result<Self, TerrainError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(params, &mut rng)
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Positions as a flat `[x0, y0, z0, x1, ...]` buffer.
    pub fn position_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Normals as a flat buffer, indexed like [`Terrain::position_data`].
    pub fn normal_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Triangle indices, three per face.
    pub fn face_data(&self) -> &[u32] {
        bytemuck::cast_slice(&self.faces)
    }

    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Line indices, two per edge segment.
    pub fn edge_data(&self) -> &[u32] {
        bytemuck::cast_slice(&self.edges)
    }

    /// Wireframe edges with shared edges emitted once.
    pub fn unique_edges(&self) -> Vec<[u32; 2]> {
        edges::unique_edges(&self.faces)
    }

    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex(&self, index: usize) -> Option<Vec3> {
        self.positions.get(index).copied()
    }

    /// Vertices whose normal could not be normalized and was left as zero.
    pub fn degenerate_normal_count(&self) -> usize {
        self.degenerate_normals
    }

    /// Lowest z. Validated parameters keep every z finite; the scan seeds
    /// from `+inf`, which is what an empty or all-NaN set would return.
    pub fn min_elevation(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| p.z)
            .fold(f32::INFINITY, f32::min)
    }

    /// Highest z, seeded from `-inf` like [`Terrain::min_elevation`].
    pub fn max_elevation(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| p.z)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// `(min, max)` elevation in a single scan. NaN z values are skipped by
    /// `f32::min`/`f32::max`, so they never surface as an extreme.
    pub fn elevation_range(&self) -> (f32, f32) {
        self.positions
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.z), hi.max(p.z))
            })
    }
}
