//! Random-faulting terrain shaping.
//!
//! Each pass drops a vertical fault plane at a random point with a random
//! horizontal orientation, raises vertices in front of it and lowers those
//! behind it. Displacement fades smoothly to zero at the falloff radius and
//! the pass magnitude decays geometrically, approximating fractal relief.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;
use terrafault_core::math::{point_plane_distance, signed_plane_offset};
use terrafault_core::types::{GridBounds, ShapingParams};
use terrafault_core::TerrainError;

/// Passes between debug log lines while shaping.
const LOG_INTERVAL: u32 = 100;

/// A vertical plane through `point` with horizontal unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultPlane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl FaultPlane {
    /// Plane through `point` (z ignored) whose normal makes angle `theta`
    /// with the +x axis.
    pub fn from_angle(point: Vec3, theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            point: Vec3::new(point.x, point.y, 0.0),
            normal: Vec3::new(cos, sin, 0.0),
        }
    }

    /// Sample a point uniformly in `[min_x, max_x) x [min_y, max_y)` and an
    /// orientation uniformly in `[0, 2pi)`.
    pub fn sample<R: Rng>(rng: &mut R, bounds: &GridBounds) -> Result<Self, TerrainError> {
        bounds.validate()?;
        Ok(Self::sample_within(rng, bounds))
    }

    /// `bounds` must already be validated.
    fn sample_within<R: Rng>(rng: &mut R, bounds: &GridBounds) -> Self {
        let x = rng.random_range(bounds.min_x..bounds.max_x);
        let y = rng.random_range(bounds.min_y..bounds.max_y);
        let theta = rng.random_range(0.0..TAU);
        Self::from_angle(Vec3::new(x, y, 0.0), theta)
    }

    /// Signed displacement for a vertex at `b`: `delta * g(r)`, negated
    /// when `b` lies behind the plane.
    pub fn displacement(&self, b: Vec3, delta: f32, falloff_radius: f32) -> f32 {
        let dp = signed_plane_offset(self.point, self.normal, b);
        // Only a zero normal fails here, and then dp is zero as well.
        let r = point_plane_distance(self.point, self.normal, b).unwrap_or(dp.abs());
        let magnitude = delta * weight_displacement_coefficient(r, falloff_radius);
        if dp < 0.0 {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Smooth falloff `g(r) = (1 - (r/R)^2)^2` inside the radius, zero outside.
///
/// Exactly 1 at `r = 0` and exactly 0 for `r >= R`.
pub fn weight_displacement_coefficient(r: f32, falloff_radius: f32) -> f32 {
    if r < falloff_radius {
        let t = r / falloff_radius;
        let s = 1.0 - t * t;
        s * s
    } else {
        0.0
    }
}

/// Add one fault's displacement to the z of every vertex.
pub fn apply_fault(positions: &mut [Vec3], plane: &FaultPlane, delta: f32, falloff_radius: f32) {
    for b in positions.iter_mut() {
        b.z += plane.displacement(*b, delta, falloff_radius);
    }
}

/// Run `params.passes` random faults over `positions`, decaying the
/// displacement by `2^H` after each one. Returns the delta that the next
/// pass would have used.
///
/// Bounds and parameters are validated before any vertex is touched.
pub fn shape_terrain<R: Rng>(
    positions: &mut [Vec3],
    bounds: &GridBounds,
    params: &ShapingParams,
    rng: &mut R,
) -> Result<f32, TerrainError> {
    bounds.validate()?;
    params.validate()?;

    let divisor = params.decay_divisor();
    let mut current_delta = params.delta;

    for pass in 0..params.passes {
        let plane = FaultPlane::sample_within(rng, bounds);
        apply_fault(positions, &plane, current_delta, params.falloff_radius);
        current_delta /= divisor;

        if (pass + 1) % LOG_INTERVAL == 0 {
            log::debug!(
                "Shaping: pass {}/{} done, delta now {:.6}",
                pass + 1,
                params.passes,
                current_delta
            );
        }
    }

    Ok(current_delta)
}
