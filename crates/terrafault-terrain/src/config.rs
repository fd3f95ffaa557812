use std::path::{Path, PathBuf};

use terrafault_core::types::TerrainParams;
use terrafault_core::TerrainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse terrain RON: {0}")]
    ParseError(String),
    #[error("Failed to serialize terrain RON: {0}")]
    SerializeError(String),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid terrain config: {0}")]
    Invalid(#[from] TerrainError),
}

/// Parse and validate terrain parameters from a RON string.
/// Omitted fields take their default values.
pub fn load_params_from_str(ron_str: &str) -> Result<TerrainParams, ConfigError> {
    let options = ron::Options::default();
    let params: TerrainParams = options
        .from_str(ron_str)
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;
    params.validate()?;
    Ok(params)
}

/// Read, parse and validate a terrain RON file.
pub fn load_params_from_file(path: &Path) -> Result<TerrainParams, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let params = load_params_from_str(&contents)?;
    log::info!("Loaded terrain config from {}", path.display());
    Ok(params)
}

/// Pretty-print parameters in the format [`load_params_from_str`] reads.
pub fn to_ron_string(params: &TerrainParams) -> Result<String, ConfigError> {
    ron::ser::to_string_pretty(params, ron::ser::PrettyConfig::default())
        .map_err(|e| ConfigError::SerializeError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrafault_core::types::{GridBounds, NormalWeighting};

    #[test]
    fn test_default_file_matches_defaults() {
        let ron = include_str!("../../../data/terrain/default.ron");
        let params = load_params_from_str(ron).expect("should parse");
        assert_eq!(params, TerrainParams::default());
    }

    #[test]
    fn test_rugged_file() {
        let ron = include_str!("../../../data/terrain/rugged.ron");
        let params = load_params_from_str(ron).expect("should parse");
        assert_eq!(params.divisions, 128);
        assert_eq!(params.bounds, GridBounds::new(-2.0, 2.0, -2.0, 2.0));
        assert_eq!(params.shaping.passes, 1200);
        assert_eq!(params.normal_weighting, NormalWeighting::Area);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let ron = include_str!("../../../data/terrain/gentle.ron");
        let params = load_params_from_str(ron).expect("should parse");
        assert_eq!(params.divisions, 32);
        assert_eq!(params.shaping.passes, 100);
        assert_eq!(params.shaping.delta, 0.006);
        assert_eq!(params.shaping.falloff_radius, 0.3);
        assert_eq!(params.bounds, GridBounds::default());
        assert_eq!(params.normal_weighting, NormalWeighting::SquaredArea);
    }

    #[test]
    fn test_partial_bounds_fill_defaults() {
        let params = load_params_from_str("(bounds: (max_x: 3.0))").expect("should parse");
        assert_eq!(params.bounds, GridBounds::new(-1.0, 3.0, -1.0, 1.0));

        let result = load_params_from_str("(bounds: (min_y: 1.0))");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid(TerrainError::DegenerateBounds { .. }))
        ));
    }

    #[test]
    fn test_empty_struct_is_default() {
        let params = load_params_from_str("()").expect("should parse");
        assert_eq!(params, TerrainParams::default());
    }

    #[test]
    fn test_malformed_ron_rejected() {
        let result = load_params_from_str("(divisions: [oops");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = load_params_from_str("(divisions: 0)");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid(TerrainError::InvalidDivisions(0)))
        ));

        let result = load_params_from_str(
            "(bounds: (min_x: 1.0, max_x: -1.0, min_y: -1.0, max_y: 1.0))",
        );
        assert!(matches!(
            result,
            Err(ConfigError::Invalid(TerrainError::DegenerateBounds { .. }))
        ));
    }

    #[test]
    fn test_ron_roundtrip() {
        let params = TerrainParams {
            divisions: 7,
            normal_weighting: NormalWeighting::Area,
            ..TerrainParams::default()
        };
        let text = to_ron_string(&params).expect("should serialize");
        let back = load_params_from_str(&text).expect("should parse");
        assert_eq!(back, params);
    }

    #[test]
    fn test_missing_file() {
        let result = load_params_from_file(Path::new("/nonexistent/terrain.ron"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
