pub mod constants;
pub mod error;
pub mod math;
pub mod types;

pub use error::{Axis, MathError, TerrainError};
pub use types::{GridBounds, NormalWeighting, ShapingParams, TerrainParams};
