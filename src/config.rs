//! Configuration management for the generator
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (avrogen.toml)
//! - Environment variables (AVROGEN__*)
//!
//! ## Example config file (avrogen.toml):
//! ```toml
//! [generate]
//! package = "avro"
//! validate = true
//!
//! [output]
//! dir = "src/avro"
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the generator
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AvrogenConfig {
    /// Generation settings
    #[serde(default)]
    pub generate: GenerateConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Package name, used in generated module docs
    #[serde(default = "default_package")]
    pub package: String,

    /// Parse every rendered file before writing anything
    #[serde(default = "default_true")]
    pub validate: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the package files are written to
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

// Default value functions
fn default_package() -> String {
    "avro".to_string()
}

fn default_true() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated")
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            validate: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl AvrogenConfig {
    /// Load configuration, adding a required file on top of the defaults
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = [
            "avrogen.toml",
            ".avrogen.toml",
            "config/avrogen.toml",
        ];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "avrogen", "avrogen") {
            let xdg_config = config_dir.config_dir().join("avrogen.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // AVROGEN__GENERATE__PACKAGE=... and friends
        builder = builder.add_source(
            Environment::with_prefix("AVROGEN")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Output directory, resolved against the working directory
    pub fn output_dir(&self) -> PathBuf {
        if self.output.dir.is_absolute() {
            self.output.dir.clone()
        } else {
            std::env::current_dir()
                .unwrap_or_default()
                .join(&self.output.dir)
        }
    }
}
