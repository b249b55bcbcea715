//! Engine configuration
//!
//! Every widget's timings and thresholds in one document. Any field may be
//! omitted; missing values take the stock defaults.
//!
//! ```toml
//! [drawer]
//! height = 360.0
//!
//! [drawer.dismiss]
//! distance_threshold = 100.0
//! velocity_threshold = 650.0
//!
//! [resizable]
//! min_ratio = 20.0
//! max_ratio = 80.0
//!
//! [tooltip]
//! delay_ms = 300
//! side = "bottom"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tactile_gesture::ResizeConfig;
use thiserror::Error;

use crate::widgets::{DrawerConfig, SheetConfig, TooltipConfig};

/// Errors loading or saving an [`EngineConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or schema error
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The config could not be written as TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// JSON syntax or schema error
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration for every widget host
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub drawer: DrawerConfig,
    pub sheet: SheetConfig,
    pub resizable: ResizeConfig,
    pub tooltip: TooltipConfig,
}

impl EngineConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a file; `.json` files are parsed as JSON, anything else as TOML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_toml_str(&content)?,
        };
        tracing::debug!("loaded engine config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write as TOML
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactile_core::Side;
    use tactile_gesture::FeedbackKind;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
        assert_eq!(EngineConfig::from_json_str("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [drawer]
            height = 360.0

            [drawer.dismiss]
            velocity_threshold = 650.0

            [resizable]
            min_ratio = 20.0
            commit_feedback = "heavy"

            [tooltip]
            delay_ms = 300
            side = "bottom"
            "#,
        )
        .unwrap();

        assert_eq!(config.drawer.height, 360.0);
        assert_eq!(config.drawer.dismiss.velocity_threshold, 650.0);
        assert_eq!(config.drawer.dismiss.distance_threshold, 120.0);
        assert_eq!(config.resizable.min_ratio, 20.0);
        assert_eq!(config.resizable.max_ratio, 90.0);
        assert_eq!(config.resizable.commit_feedback, Some(FeedbackKind::Heavy));
        assert_eq!(config.tooltip.delay_ms, 300);
        assert_eq!(config.tooltip.side, Side::Bottom);
        assert_eq!(config.tooltip.side_offset, 8.0);
        assert_eq!(config.sheet, SheetConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = EngineConfig::default();
        config.sheet = SheetConfig::side(Side::Left).with_swipe_dismiss();
        let text = config.to_toml_string().unwrap();
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_json_config() {
        let config = EngineConfig::from_json_str(
            r#"{ "tooltip": { "auto_flip": true, "align": "start" }, "drawer": { "transition": { "easing": "linear" } } }"#,
        )
        .unwrap();
        assert!(config.tooltip.auto_flip);
        assert_eq!(config.tooltip.delay_ms, 500);
        assert_eq!(config.drawer.transition.close_duration_ms, 200);
    }

    #[test]
    fn test_invalid_document() {
        assert!(matches!(
            EngineConfig::from_toml_str("[tooltip]\nside = \"sideways\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            EngineConfig::from_json_str("{"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            EngineConfig::load("/nonexistent/tactile.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
