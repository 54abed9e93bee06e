//! Configuration management for schema outlining
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (outline.toml)
//! - Environment variables (SCHEMA_OUTLINE__*)
//!
//! ## Example config file (outline.toml):
//! ```toml
//! [walker]
//! max_depth = 64
//!
//! [render]
//! format = "text"
//! indent = 2
//! show_descriptions = true
//! root_placeholder = "(no properties)"
//! ```

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutlineConfig {
    /// Tree walker settings
    #[serde(default)]
    pub walker: WalkerConfig,

    /// Output settings
    #[serde(default)]
    pub render: RenderConfig,
}

/// Tree walker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Deepest nesting level the walker descends to before failing
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

/// Renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Spaces per nesting level in text output
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Print `description` annotations after property lines
    #[serde(default = "default_true")]
    pub show_descriptions: bool,

    /// Text printed for an object without properties at the root
    #[serde(default = "default_root_placeholder")]
    pub root_placeholder: String,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Compact,
}

// Default value functions
fn default_max_depth() -> usize {
    64
}

fn default_indent() -> usize {
    2
}

fn default_true() -> bool {
    true
}

fn default_root_placeholder() -> String {
    "(no properties)".to_string()
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            indent: default_indent(),
            show_descriptions: true,
            root_placeholder: default_root_placeholder(),
        }
    }
}

impl OutlineConfig {
    /// Load configuration from the default locations, with an optional
    /// explicit file layered on top
    pub fn load_from(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_locations = ["outline.toml", ".outline.toml", "config/outline.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "schema-outline", "schema-outline") {
            let xdg_config = config_dir.config_dir().join("outline.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        // SCHEMA_OUTLINE__WALKER__MAX_DEPTH=32
        builder = builder.add_source(
            Environment::with_prefix("SCHEMA_OUTLINE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let config: Self = config.try_deserialize()?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OutlineConfig::default();
        assert_eq!(config.walker.max_depth, 64);
        assert_eq!(config.render.format, OutputFormat::Text);
        assert_eq!(config.render.indent, 2);
    }

    #[test]
    fn test_serialize_config() {
        let config = OutlineConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[walker]"));
        assert!(toml_str.contains("[render]"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[walker]\nmax_depth = 8\n\n[render]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = OutlineConfig::load_from(Some(&path)).unwrap();
        assert_eq!(config.walker.max_depth, 8);
        assert_eq!(config.render.format, OutputFormat::Json);
        assert_eq!(config.render.indent, 2);
    }

    #[test]
    fn test_missing_explicit_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        match OutlineConfig::load_from(Some(&path)) {
            Err(crate::error::OutlineError::Config(_)) => {}
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_round_trips_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");

        let mut config = OutlineConfig::default();
        config.render.root_placeholder = "// empty".to_string();
        config.save(&path).unwrap();

        let loaded = OutlineConfig::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.render.root_placeholder, "// empty");
    }
}
