//! Command definitions and structures for the CLI
//!
//! This module contains the clap-based command line argument definitions,
//! including the main CLI structure and all subcommands.

use clap::{Args, Parser, Subcommand};
use ntfy_publish::Priority;
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "ntfy-publish")]
#[command(about = "Publish notifications to an ntfy server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the configuration file
    #[arg(short, long, global = true, env = "NTFY_PUBLISH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Publish a message to a topic
    Publish(PublishArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments of the publish command
#[derive(Args, Debug, Clone, Default)]
pub struct PublishArgs {
    /// Message body
    pub message: Option<String>,

    /// Topic to publish to (defaults to `defaults.topic`)
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Server URL, overriding the configured host
    #[arg(long, env = "NTFY_HOST")]
    pub host: Option<String>,

    /// Access token, overriding the configured credentials
    #[arg(long, env = "NTFY_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Message title
    #[arg(long)]
    pub title: Option<String>,

    /// Priority: max, high, default, low, min or 1-5
    #[arg(short, long)]
    pub priority: Option<Priority>,

    /// Tag or emoji shortcode, may be repeated
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Render the body as markdown
    #[arg(long)]
    pub markdown: bool,

    /// URL opened when the notification is clicked
    #[arg(long)]
    pub click: Option<String>,

    /// Attach a file hosted at this URL
    #[arg(long, conflicts_with = "file")]
    pub attach: Option<String>,

    /// Upload a local file as attachment
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// File name shown for the attachment
    #[arg(long)]
    pub filename: Option<String>,

    /// Notification icon URL
    #[arg(long)]
    pub icon: Option<String>,

    /// Forward the notification to this e-mail address
    #[arg(long)]
    pub email: Option<String>,

    /// Call this phone number
    #[arg(long)]
    pub call: Option<String>,

    /// Do not cache the message on the server
    #[arg(long)]
    pub no_cache: bool,

    /// Do not forward the message to Firebase
    #[arg(long)]
    pub no_firebase: bool,

    /// Deliver the message this many seconds from now
    #[arg(long, value_name = "SECONDS")]
    pub delay: Option<u64>,

    /// Add a view action, may be repeated
    #[arg(long = "view", value_name = "LABEL=URL", value_parser = parse_view)]
    pub views: Vec<(String, String)>,

    /// Print the request instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

/// Configuration management actions
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,
}

fn parse_view(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((label, url)) if !label.is_empty() && !url.is_empty() => {
            Ok((label.to_string(), url.to_string()))
        }
        _ => Err(format!("expected LABEL=URL, got '{value}'")),
    }
}
