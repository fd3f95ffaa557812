use crate::error::MathError;
use glam::Vec3;

/// Euclidean length of `v`.
pub fn magnitude(v: Vec3) -> f32 {
    v.length()
}

/// Unit vector in the direction of `v`.
///
/// Fails instead of returning NaN components when `v` has zero (or
/// underflowing, or non-finite) length.
pub fn unit_vector(v: Vec3) -> Result<Vec3, MathError> {
    let len = magnitude(v);
    if len <= 0.0 || !len.is_finite() {
        return Err(MathError::ZeroLengthVector);
    }
    Ok(v / len)
}

/// Projection of `b - p` onto the (not necessarily unit) plane normal `n`.
/// Negative when `b` lies behind the plane.
pub fn signed_plane_offset(p: Vec3, n: Vec3, b: Vec3) -> f32 {
    (b - p).dot(n)
}

/// Unsigned distance from point `b` to the plane through `p` with normal `n`.
pub fn point_plane_distance(p: Vec3, n: Vec3, b: Vec3) -> Result<f32, MathError> {
    let unit_normal = unit_vector(n)?;
    Ok(signed_plane_offset(p, unit_normal, b).abs())
}

/// Triangle normal `(v1 - v0) x (v2 - v0)`; its length is twice the triangle area.
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0)
}
