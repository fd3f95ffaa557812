use glam::Vec3;
use terrafault_core::types::{GridBounds, TerrainParams};
use terrafault_core::TerrainError;

/// Flat grid before shaping: vertex positions plus triangle faces.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMesh {
    pub positions: Vec<Vec3>,
    pub faces: Vec<[u32; 3]>,
}

/// Lay out a `(divisions + 1)^2` vertex lattice over `bounds` at z = 0 and
/// split every cell into two triangles.
///
/// Vertices are row-major: row `i` walks y, column `j` walks x.
/// Cell `(i, j)` emits `[ll, ur, ul]` then `[ll, lr, ur]`, which winds both
/// triangles counter-clockwise seen from +z.
pub fn generate_grid(divisions: u32, bounds: GridBounds) -> Result<GridMesh, TerrainError> {
    TerrainParams::with_grid(divisions, bounds).validate()?;

    let d = divisions as usize;
    let per_side = d + 1;
    let dx = bounds.width() / divisions as f32;
    let dy = bounds.height() / divisions as f32;

    let mut positions = Vec::with_capacity(per_side * per_side);
    for i in 0..per_side {
        for j in 0..per_side {
            positions.push(Vec3::new(
                bounds.min_x + j as f32 * dx,
                bounds.min_y + i as f32 * dy,
                0.0,
            ));
        }
    }

    let stride = per_side as u32;
    let mut faces = Vec::with_capacity(2 * d * d);
    for i in 0..divisions {
        for j in 0..divisions {
            let ll = i * stride + j;
            let lr = ll + 1;
            let ul = ll + stride;
            let ur = ul + 1;
            faces.push([ll, ur, ul]);
            faces.push([ll, lr, ur]);
        }
    }

    Ok(GridMesh { positions, faces })
}
