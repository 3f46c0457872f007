//! Command handlers
//!
//! Each handler borrows the [`CliContext`] and implements one command.

pub mod config;
pub mod publish;

use anyhow::Result;

use super::{CliContext, Commands};
use config::ConfigHandler;
use publish::PublishHandler;

/// Routes parsed commands to their handlers
pub struct CommandHandler {
    context: CliContext,
}

impl CommandHandler {
    /// Create a new command handler instance with the provided context
    pub fn new(context: CliContext) -> Self {
        Self { context }
    }

    /// Route commands to their appropriate handlers
    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Publish(args) => PublishHandler::new(&self.context).handle(args).await,
            Commands::Config { action } => ConfigHandler::new(&self.context).handle(action),
        }
    }
}
