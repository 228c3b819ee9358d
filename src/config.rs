use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::board::DimensionRange;
use crate::error::ConfigError;
use crate::tools::ToolState;

/// Environment variable naming an optional JSON config file (native only).
pub const CONFIG_ENV: &str = "PIXEL_SKETCHER_CONFIG";

/// Startup settings. Any field missing from the config file keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketcherConfig {
    pub dimensions: DimensionRange,
    pub initial_dimension: usize,
    pub pencil_color: Color32,
    pub eraser_color: Color32,
    pub grid_color: Color32,
    /// Directory (native) or URL prefix (web) holding `<cue>.wav` clips.
    pub sounds_dir: String,
    pub audio_enabled: bool,
}

impl Default for SketcherConfig {
    fn default() -> Self {
        let tools = ToolState::default();
        Self {
            dimensions: DimensionRange::default(),
            initial_dimension: 16,
            pencil_color: tools.pencil_color,
            eraser_color: tools.eraser_color,
            grid_color: tools.grid_color,
            sounds_dir: "sounds".to_owned(),
            audio_enabled: true,
        }
    }
}

impl SketcherConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Config from the file named by [`CONFIG_ENV`], or the defaults. A file
    /// that can't be read or parsed is logged and ignored.
    pub fn load() -> Self {
        Self::load_from_env().unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_from_env() -> Option<Self> {
        let path = std::path::PathBuf::from(std::env::var_os(CONFIG_ENV)?);
        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(err) => {
                log::warn!("Ignoring {}: {err}", path.display());
                None
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn load_from_env() -> Option<Self> {
        None
    }

    /// Tool settings a fresh board starts with.
    pub fn tool_state(&self) -> ToolState {
        ToolState {
            pencil_color: self.pencil_color,
            eraser_color: self.eraser_color,
            grid_color: self.grid_color,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SketcherConfig::from_json(r#"{ "initial_dimension": 8, "audio_enabled": false }"#)
            .unwrap();
        assert_eq!(config.initial_dimension, 8);
        assert!(!config.audio_enabled);
        assert_eq!(config.dimensions, DimensionRange::default());
        assert_eq!(config.sounds_dir, "sounds");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = SketcherConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = SketcherConfig::from_file(std::path::Path::new("/nonexistent/sketcher.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[test]
    fn test_tool_state_uses_configured_colors() {
        let config = SketcherConfig {
            pencil_color: Color32::RED,
            ..Default::default()
        };
        let tools = config.tool_state();
        assert_eq!(tools.pencil_color, Color32::RED);
        assert_eq!(tools.background(), config.eraser_color);
    }
}
