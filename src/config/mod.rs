//! Configuration management for patchbump

pub mod schema;

pub use schema::{Config, LogFormat, OutputFormat};

use crate::error::{BumpError, BumpResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Project-local config filename
pub const LOCAL_CONFIG_FILE: &str = ".patchbump.toml";

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("patchbump")
            .join("config.toml")
    }

    /// Find the nearest `.patchbump.toml` in `start` or its ancestors
    pub fn find_local_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(LOCAL_CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Load configuration, using defaults if the file does not exist
    pub fn load(&self) -> BumpResult<Config> {
        self.load_merged(None)
    }

    /// Load global configuration overlaid with an optional local file
    pub fn load_merged(&self, local: Option<&Path>) -> BumpResult<Config> {
        let mut merged = if self.config_path.exists() {
            read_table(&self.config_path)?
        } else {
            debug!("Config file not found, using defaults");
            toml::Value::Table(toml::map::Map::new())
        };

        if let Some(local) = local {
            debug!("Applying local config {}", local.display());
            merge(&mut merged, read_table(local)?);
        }

        let origin = local.unwrap_or(&self.config_path);
        merged.try_into().map_err(|e: toml::de::Error| BumpError::ConfigInvalid {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Save configuration to file
    pub fn save(&self, config: &Config) -> BumpResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BumpError::ConfigDirCreate {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).map_err(|e| {
            BumpError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn read_table(path: &Path) -> BumpResult<toml::Value> {
    let content = fs::read_to_string(path)
        .map_err(|e| BumpError::io(format!("reading config from {}", path.display()), e))?;

    content
        .parse::<toml::Table>()
        .map(toml::Value::Table)
        .map_err(|e| BumpError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Overlay `overlay` onto `base`, recursing into tables
fn merge(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
