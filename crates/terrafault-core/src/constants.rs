//! Single source of truth for terrain generation defaults.
//! Config files and the bench runner fall back to these values.

/// Default number of grid divisions per side.
pub const DEFAULT_DIVISIONS: u32 = 64;

/// Default grid extent on both axes: [-1, 1].
pub const DEFAULT_MIN_COORD: f32 = -1.0;
pub const DEFAULT_MAX_COORD: f32 = 1.0;

/// Number of random fault passes applied to the flat grid.
pub const DEFAULT_PASSES: u32 = 300;

/// Vertical displacement magnitude of the first fault pass.
pub const DEFAULT_DELTA: f32 = 0.012;

/// Planar distance from a fault plane beyond which displacement vanishes.
pub const DEFAULT_FALLOFF_RADIUS: f32 = 0.3;

/// Decay exponent: delta shrinks by a factor of 2^H after every pass.
pub const DEFAULT_DECAY: f32 = 0.005;

/// Largest vertex count addressable with u32 indices.
pub const MAX_VERTICES: u64 = u32::MAX as u64 + 1;
