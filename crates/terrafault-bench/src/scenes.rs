use terrafault_core::types::{GridBounds, ShapingParams, TerrainParams};

/// Configuration for a single benchmark scene.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub name: String,
    pub params: TerrainParams,
}

impl SceneConfig {
    pub fn new(name: impl Into<String>, params: TerrainParams) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

fn grid_scene(divisions: u32, passes: u32) -> SceneConfig {
    let params = TerrainParams {
        shaping: ShapingParams {
            passes,
            ..ShapingParams::default()
        },
        ..TerrainParams::with_grid(divisions, GridBounds::default())
    };
    SceneConfig::new(format!("{divisions}x{divisions}/{passes}p"), params)
}

/// Standard suite: grid sizes from 32 to 256 divisions at the default pass
/// count, plus a pass-heavy scene on the reference grid.
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        grid_scene(32, 300),
        grid_scene(64, 300),
        grid_scene(128, 300),
        grid_scene(256, 300),
        grid_scene(64, 1200),
    ]
}

/// Fault-vertex updates a scene performs: passes x vertices.
pub fn displacement_work(params: &TerrainParams) -> u64 {
    let per_side = params.vertices_per_side();
    params.shaping.passes as u64 * per_side * per_side
}
