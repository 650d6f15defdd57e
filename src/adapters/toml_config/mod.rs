// TOML config adapter - Configuration management using TOML files

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{FragpackError, FragpackResult};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "fragpack.toml";

/// Application configuration.
///
/// Precedence: defaults, then an optional TOML file, then `FRAGPACK_*`
/// environment variables. CLI flags override on top of this at the edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Engine binary invoked by the subprocess adapter
    pub engine_binary: String,
    /// Default log level when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine_binary: "ffmpeg".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration with the documented precedence.
    ///
    /// An explicitly given path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> FragpackResult<Self> {
        let mut config = AppConfig::default();

        match path {
            Some(path) => {
                config = Self::read_file(path)?;
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    config = Self::read_file(default_path)?;
                }
            }
        }

        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse a TOML config file
    fn read_file(path: &Path) -> FragpackResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FragpackError::ConfigError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let config = toml::from_str(&content).map_err(|e| FragpackError::ConfigError {
            message: format!("Failed to parse {}: {}", path.display(), e),
        })?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply `FRAGPACK_*` environment overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("FRAGPACK_ENGINE_BINARY") {
            info!("Environment override: engine_binary = {}", value);
            self.engine_binary = value;
        }
        if let Ok(value) = std::env::var("FRAGPACK_LOG_LEVEL") {
            self.log_level = value;
        }
    }
}
