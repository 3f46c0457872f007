use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::client::{Topic, TopicBuilder, DEFAULT_HOST};
use crate::errors::NtfyResult;
use crate::model::Priority;

/// Contents of the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    pub server: ServerConfig,
    pub defaults: DefaultsConfig,
}

/// Server connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Values applied to messages that do not set them explicitly
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    pub tags: Vec<String>,
    pub markdown: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            server: ServerConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            token: None,
            username: None,
            password: None,
            timeout_secs: Some(30),
        }
    }
}

impl ServerConfig {
    /// Builder for topic `name` with this server's host, credentials and timeout
    pub fn topic_builder(&self, name: impl Into<String>) -> TopicBuilder {
        let mut builder = Topic::builder(name).host(self.host.clone());
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(token) = &self.token {
            builder = builder.token(token.clone());
        }
        if let Some(username) = &self.username {
            builder = builder.username(username.clone());
        }
        if let Some(password) = &self.password {
            builder = builder.password(password.clone());
        }
        builder
    }

    pub fn topic(&self, name: impl Into<String>) -> NtfyResult<Topic> {
        self.topic_builder(name).build()
    }
}
