use thiserror::Error;

/// Grid axis named in bounds validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Errors raised while validating terrain parameters at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    #[error("grid divisions must be at least 1, got {0}")]
    InvalidDivisions(u32),

    #[error("degenerate {axis} bounds: min {min} must be less than max {max}")]
    DegenerateBounds { axis: Axis, min: f32, max: f32 },

    #[error("grid bounds must be finite")]
    NonFiniteBounds,

    #[error("falloff radius must be positive and finite, got {0}")]
    InvalidFalloffRadius(f32),

    #[error("shaping parameter '{name}' must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f32 },

    #[error("decay exponent must be non-negative, got {0}")]
    NegativeDecay(f32),

    #[error("{passes} passes of delta {delta} overflow the elevation range")]
    DisplacementOverflow { delta: f32, passes: u32 },

    #[error("grid with {0} divisions exceeds the u32 vertex index range")]
    GridTooLarge(u32),
}

/// Numeric errors from the vector helpers in [`crate::math`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("cannot normalize a zero-length or non-finite vector")]
    ZeroLengthVector,
}
