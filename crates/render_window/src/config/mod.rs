//! Configuration system
//!
//! Window settings are plain serde types loadable from TOML, so applications
//! can ship a config file next to the binary and fall back to defaults when
//! it is absent.

pub use serde::{Deserialize, Serialize};

/// Configuration trait
///
/// Implemented by configuration structs that can be persisted as TOML.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a TOML file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to a TOML file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Window construction settings
///
/// Every field has a default, and deserialization fills missing fields from
/// those defaults, so partial config files are valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title bar text
    pub title: String,
    /// Initial client-area width in pixels
    pub width: u32,
    /// Initial client-area height in pixels
    pub height: u32,
    /// Synchronize buffer swaps with the display refresh (swap interval 1)
    pub vsync: bool,
    /// Request window closure when Escape is pressed
    pub close_on_escape: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "render_window".to_string(),
            width: 640,
            height: 480,
            vsync: true,
            close_on_escape: true,
        }
    }
}

impl Config for WindowConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sensible() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert!(config.vsync);
        assert!(config.close_on_escape);
        assert!(!config.title.is_empty());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = WindowConfig::default();
        config.title = "demo".to_string();
        config.width = 1280;
        config.vsync = false;

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: WindowConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.title, "demo");
        assert_eq!(parsed.width, 1280);
        assert_eq!(parsed.height, 480);
        assert!(!parsed.vsync);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let parsed: WindowConfig = toml::from_str("title = \"partial\"\n").unwrap();
        assert_eq!(parsed.title, "partial");
        assert_eq!(parsed.width, 640);
        assert_eq!(parsed.height, 480);
        assert!(parsed.close_on_escape);
    }
}
