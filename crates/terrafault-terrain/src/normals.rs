use glam::Vec3;
use terrafault_core::math::{face_normal, magnitude, unit_vector};
use terrafault_core::types::NormalWeighting;

/// Per-vertex normals plus the number of vertices whose accumulated normal
/// had zero length.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexNormals {
    /// Unit normals, or `Vec3::ZERO` for degenerate vertices.
    pub normals: Vec<Vec3>,
    pub degenerate_count: usize,
}

/// Face contribution added to each of the face's three vertices.
fn weighted_face_normal(v0: Vec3, v1: Vec3, v2: Vec3, weighting: NormalWeighting) -> Vec3 {
    let n = face_normal(v0, v1, v2);
    match weighting {
        NormalWeighting::SquaredArea => n * (0.5 * magnitude(n)),
        NormalWeighting::Area => n,
    }
}

/// Accumulate weighted face normals into their vertices, in face order, then
/// normalize.
///
/// Vertices touched by no face, or whose contributions cancel out, keep a
/// zero normal and are counted in `degenerate_count`.
pub fn compute_vertex_normals(
    positions: &[Vec3],
    faces: &[[u32; 3]],
    weighting: NormalWeighting,
) -> VertexNormals {
    let mut accum = vec![Vec3::ZERO; positions.len()];

    for &[i0, i1, i2] in faces {
        let (i0, i1, i2) = (i0 as usize, i1 as usize, i2 as usize);
        let contribution =
            weighted_face_normal(positions[i0], positions[i1], positions[i2], weighting);
        accum[i0] += contribution;
        accum[i1] += contribution;
        accum[i2] += contribution;
    }

    let mut degenerate_count = 0;
    let normals = accum
        .into_iter()
        .map(|n| {
            unit_vector(n).unwrap_or_else(|_| {
                degenerate_count += 1;
                Vec3::ZERO
            })
        })
        .collect();

    if degenerate_count > 0 {
        log::warn!(
            "Normals: {} vertices have zero-length normals, left as zero",
            degenerate_count
        );
    }

    VertexNormals {
        normals,
        degenerate_count,
    }
}
