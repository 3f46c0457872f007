//! Configuration management handler
//!
//! This module handles the configuration commands: writing a default file,
//! showing the effective configuration and printing its location.

use anyhow::{Context, Result};
use ntfy_publish::config::{Config, ConfigManager};
use ntfy_publish::NtfyError;

use super::super::commands::ConfigAction;
use super::super::CliContext;

const REDACTED: &str = "<redacted>";

/// Handler for configuration operations
pub struct ConfigHandler<'a> {
    context: &'a CliContext,
}

impl<'a> ConfigHandler<'a> {
    /// Create new configuration handler
    pub fn new(context: &'a CliContext) -> Self {
        Self { context }
    }

    pub fn handle(&self, action: ConfigAction) -> Result<()> {
        match action {
            ConfigAction::Init { force } => self.handle_init(force),
            ConfigAction::Show => self.handle_show(),
            ConfigAction::Path => {
                println!("{}", self.context.config_path.display());
                Ok(())
            }
        }
    }

    /// Handle configuration initialization
    fn handle_init(&self, force: bool) -> Result<()> {
        let path = &self.context.config_path;
        match ConfigManager::init(path.clone(), force) {
            Ok(_) => {
                println!("Configuration initialized successfully at: {}", path.display());
                Ok(())
            }
            Err(NtfyError::InvalidState { .. }) => {
                println!("Configuration already initialized at: {}", path.display());
                println!("Use --force to overwrite");
                Ok(())
            }
            Err(e) => Err(e).context("Failed to initialize configuration"),
        }
    }

    fn handle_show(&self) -> Result<()> {
        let config = redacted(self.context.config_manager.config());
        println!("{}", toml::to_string_pretty(&config)?);
        Ok(())
    }
}

/// Copy of `config` with credentials masked
fn redacted(config: &Config) -> Config {
    let mut config = config.clone();
    if config.server.token.is_some() {
        config.server.token = Some(REDACTED.to_string());
    }
    if config.server.password.is_some() {
        config.server.password = Some(REDACTED.to_string());
    }
    config
}
