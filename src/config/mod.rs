//! TOML configuration for the command line client
//!
//! The file lives at `<config dir>/ntfy-publish/config.toml` unless a path is
//! given explicitly. A missing file is equivalent to the defaults.

pub mod types;

pub use types::{Config, DefaultsConfig, ServerConfig};

use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{check_state, NtfyError, NtfyResult};

/// Loads and persists a [`Config`] at a fixed path
///
/// # Example
///
/// ```rust,no_run
/// use ntfy_publish::config::ConfigManager;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let manager = ConfigManager::load(ConfigManager::default_path()?)?;
///     let topic = manager.config().server.topic("alerts")?;
///     println!("Publishing to {}", topic.url());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
    config: Config,
}

impl ConfigManager {
    /// Load the configuration at `path`, falling back to defaults if it does not exist
    pub fn load(path: impl Into<PathBuf>) -> NtfyResult<Self> {
        let config_path = path.into();
        let config = if config_path.exists() {
            Self::read(&config_path)?
        } else {
            Config::default()
        };

        Ok(ConfigManager {
            config_path,
            config,
        })
    }

    /// Write a default configuration to `path`
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn init(path: impl Into<PathBuf>, force: bool) -> NtfyResult<Self> {
        let config_path = path.into();
        check_state(
            force || !config_path.exists(),
            "configuration file already exists, use --force to overwrite",
        )?;

        let manager = ConfigManager {
            config_path,
            config: Config::default(),
        };
        manager.save()?;
        Ok(manager)
    }

    /// Default location of the configuration file
    pub fn default_path() -> NtfyResult<PathBuf> {
        let dirs = ProjectDirs::from("", "", "ntfy-publish")
            .ok_or_else(|| NtfyError::config("Failed to determine configuration directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    fn read(path: &Path) -> NtfyResult<Config> {
        let content = fs::read_to_string(path)
            .map_err(|e| NtfyError::config_io_with_source(path, "read config file", e))?;
        toml::from_str(&content)
            .map_err(|e| NtfyError::config_with_source("Failed to parse config file", e))
    }

    /// Write the configuration back to its file, creating parent directories
    pub fn save(&self) -> NtfyResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| NtfyError::config_io_with_source(parent, "create config directory", e))?;
        }
        let content = toml::to_string_pretty(&self.config)
            .map_err(|e| NtfyError::config_with_source("Failed to serialize config", e))?;
        fs::write(&self.config_path, content)
            .map_err(|e| NtfyError::config_io_with_source(&self.config_path, "write config file", e))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}
