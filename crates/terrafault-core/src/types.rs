use crate::constants::*;
use crate::error::{Axis, TerrainError};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in the XY plane covered by the terrain grid.
/// Fields omitted from a config keep their [-1, 1] defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for GridBounds {
    fn default() -> Self {
        Self {
            min_x: DEFAULT_MIN_COORD,
            max_x: DEFAULT_MAX_COORD,
            min_y: DEFAULT_MIN_COORD,
            max_y: DEFAULT_MAX_COORD,
        }
    }
}

impl GridBounds {
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    /// Length of the rectangle's diagonal.
    pub fn diagonal(&self) -> f32 {
        self.width().hypot(self.height())
    }

    pub fn validate(&self) -> Result<(), TerrainError> {
        let all_finite = [self.min_x, self.max_x, self.min_y, self.max_y]
            .iter()
            .all(|v| v.is_finite());
        // The spans must be finite as well.
        if !all_finite || !self.width().is_finite() || !self.height().is_finite() {
            return Err(TerrainError::NonFiniteBounds);
        }
        if self.min_x >= self.max_x {
            return Err(TerrainError::DegenerateBounds {
                axis: Axis::X,
                min: self.min_x,
                max: self.max_x,
            });
        }
        if self.min_y >= self.max_y {
            return Err(TerrainError::DegenerateBounds {
                axis: Axis::Y,
                min: self.min_y,
                max: self.max_y,
            });
        }
        Ok(())
    }
}

/// Hyperparameters of the fault-displacement shaping engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapingParams {
    /// Number of fault passes (P).
    pub passes: u32,
    /// Displacement magnitude of the first pass (delta).
    pub delta: f32,
    /// Falloff radius around each fault plane (R).
    pub falloff_radius: f32,
    /// Decay exponent (H): delta is divided by 2^H after each pass.
    pub decay: f32,
}

impl Default for ShapingParams {
    fn default() -> Self {
        Self {
            passes: DEFAULT_PASSES,
            delta: DEFAULT_DELTA,
            falloff_radius: DEFAULT_FALLOFF_RADIUS,
            decay: DEFAULT_DECAY,
        }
    }
}

impl ShapingParams {
    pub fn validate(&self) -> Result<(), TerrainError> {
        if !self.delta.is_finite() {
            return Err(TerrainError::NonFiniteParameter {
                name: "delta",
                value: self.delta,
            });
        }
        if !self.decay.is_finite() {
            return Err(TerrainError::NonFiniteParameter {
                name: "decay",
                value: self.decay,
            });
        }
        if self.decay < 0.0 {
            return Err(TerrainError::NegativeDecay(self.decay));
        }
        if !(self.falloff_radius.is_finite() && self.falloff_radius > 0.0) {
            return Err(TerrainError::InvalidFalloffRadius(self.falloff_radius));
        }
        // With decay >= 0 no pass moves a vertex by more than |delta|.
        if !(self.delta.abs() * self.passes as f32).is_finite() {
            return Err(TerrainError::DisplacementOverflow {
                delta: self.delta,
                passes: self.passes,
            });
        }
        Ok(())
    }

    /// Divisor applied to delta after every pass: 2^H.
    pub fn decay_divisor(&self) -> f32 {
        2f32.powf(self.decay)
    }
}

/// How face normals are weighted when accumulated into vertex normals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NormalWeighting {
    /// Cross product scaled by half its own length, so each face counts in
    /// proportion to its squared area. Matches the reference terrain output.
    #[default]
    SquaredArea,
    /// Unscaled cross product: conventional area weighting.
    Area,
}

/// Everything needed to build a terrain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    pub divisions: u32,
    pub bounds: GridBounds,
    pub shaping: ShapingParams,
    pub normal_weighting: NormalWeighting,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            divisions: DEFAULT_DIVISIONS,
            bounds: GridBounds::default(),
            shaping: ShapingParams::default(),
            normal_weighting: NormalWeighting::default(),
        }
    }
}

impl TerrainParams {
    /// Default shaping over the given grid.
    pub fn with_grid(divisions: u32, bounds: GridBounds) -> Self {
        Self {
            divisions,
            bounds,
            ..Self::default()
        }
    }

    /// Vertices per grid side: divisions + 1.
    pub fn vertices_per_side(&self) -> u64 {
        self.divisions as u64 + 1
    }

    /// Check every parameter, failing on the first problem found.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.divisions < 1 {
            return Err(TerrainError::InvalidDivisions(self.divisions));
        }
        let per_side = self.vertices_per_side();
        match per_side.checked_mul(per_side) {
            Some(count) if count <= MAX_VERTICES => {}
            _ => return Err(TerrainError::GridTooLarge(self.divisions)),
        }
        self.bounds.validate()?;
        self.shaping.validate()
    }
}
