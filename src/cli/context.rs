//! CLI Context for dependency injection and shared state
//!
//! This module provides the CliContext abstraction that centralizes
//! configuration loading for the CLI handlers.

use anyhow::Result;
use ntfy_publish::config::ConfigManager;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI execution context containing shared dependencies and configuration
#[derive(Clone)]
pub struct CliContext {
    pub config_path: PathBuf,
    pub verbose: bool,
    pub config_manager: Arc<ConfigManager>,
}

impl CliContext {
    /// Load the configuration at `config_path`, or at the default location
    pub fn new(config_path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => ConfigManager::default_path()?,
        };
        let config_manager = Arc::new(ConfigManager::load(config_path.clone())?);

        Ok(Self {
            config_path,
            verbose,
            config_manager,
        })
    }

    /// Initialize logging subsystem based on verbosity and configuration
    pub fn init_logging(&self) -> Result<()> {
        let log_level = if self.verbose {
            "debug"
        } else {
            self.config_manager.config().log_level.as_str()
        };

        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(log_level.parse().unwrap_or_else(|_| tracing::Level::WARN.into())),
            )
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

        tracing::debug!("Config path: {}", self.config_path.display());
        Ok(())
    }
}
