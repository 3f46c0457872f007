//! Error types for the ntfy publishing client
//!
//! Every failure the library can report is a variant of [`NtfyError`]. Errors
//! reported by the server itself are not failures of the call and never appear
//! here; they travel inside [`crate::Outcome::Error`].

use std::path::PathBuf;
use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main library error type
///
/// Variants are grouped by the phase in which they occur: construction of
/// topics and builders, preparation of the request body, the HTTP exchange,
/// decoding of the response, and loading of the configuration file.
#[derive(Error, Debug)]
pub enum NtfyError {
    // Construction errors
    #[error("Invalid value for '{field}': {reason}")]
    InvalidArgument {
        field: String,
        reason: String,
    },

    #[error("Invalid state: {message}")]
    InvalidState {
        message: String,
    },

    #[error("Invalid topic '{name}' for host '{host}'")]
    InvalidTopic {
        host: String,
        name: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("Topic cannot have both token and basic authentication")]
    ConflictingAuth,

    #[error("{provided} provided without {missing}")]
    IncompleteAuth {
        provided: &'static str,
        missing: &'static str,
    },

    // Resource errors
    #[error("Attachment file not found: {path}")]
    AttachmentNotFound {
        path: PathBuf,
    },

    #[error("Failed to open attachment '{path}'")]
    AttachmentIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Transport errors
    #[error("HTTP request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("HTTP request to {url} timed out")]
    Timeout {
        url: String,
    },

    #[error("Failed to start a runtime for the blocking call")]
    Runtime {
        #[source]
        source: std::io::Error,
    },

    // Response decoding errors
    #[error("Failed to decode HTTP {status} response: {context}")]
    Decode {
        status: u16,
        context: String,
        #[source]
        source: Option<BoxedSource>,
    },

    // Configuration file errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("Configuration file I/O error for '{path}': {operation}")]
    ConfigIo {
        path: PathBuf,
        operation: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

/// Result type used throughout the library
pub type NtfyResult<T> = std::result::Result<T, NtfyError>;

impl NtfyError {
    /// Create a new InvalidArgument error
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a new InvalidState error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Create a new InvalidTopic error
    pub fn invalid_topic(host: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidTopic {
            host: host.into(),
            name: name.into(),
            source: None,
        }
    }

    /// Create a new InvalidTopic error with source
    pub fn invalid_topic_with_source(
        host: impl Into<String>,
        name: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InvalidTopic {
            host: host.into(),
            name: name.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Transport error with source
    pub fn transport_with_source(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            url: url.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Decode error with source
    pub fn decode_with_source(
        status: u16,
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Decode {
            status,
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new Config error with source
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new ConfigIo error with source
    pub fn config_io_with_source(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigIo {
            path: path.into(),
            operation: operation.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Map an I/O error raised while opening an attachment
    pub fn attachment_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::AttachmentNotFound { path }
        } else {
            Self::AttachmentIo { path, source }
        }
    }

    /// Whether this error was raised while building a value, before any I/O
    pub fn is_construction(&self) -> bool {
        self.category() == "construction"
    }

    /// Get the error category for diagnostics
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. }
            | Self::InvalidState { .. }
            | Self::InvalidTopic { .. }
            | Self::ConflictingAuth
            | Self::IncompleteAuth { .. } => "construction",
            Self::AttachmentNotFound { .. } | Self::AttachmentIo { .. } => "resource",
            Self::Transport { .. } | Self::Timeout { .. } | Self::Runtime { .. } => "transport",
            Self::Decode { .. } => "decode",
            Self::Config { .. } | Self::ConfigIo { .. } => "config",
        }
    }
}

impl From<reqwest::Error> for NtfyError {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        if err.is_timeout() {
            Self::Timeout { url }
        } else {
            Self::Transport {
                url,
                source: Some(Box::new(err)),
            }
        }
    }
}

impl From<toml::de::Error> for NtfyError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
