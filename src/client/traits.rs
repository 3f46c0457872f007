use async_trait::async_trait;

use crate::errors::NtfyResult;
use crate::request::{PreparedBody, PublishRequest};

/// HTTP transport capable of executing a publish request
///
/// Implementations send exactly one request per call and never retry. Any
/// status code is a successful exchange; only I/O failures and timeouts are
/// errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` with `body` and return the raw response
    async fn execute(&self, request: &PublishRequest, body: PreparedBody) -> NtfyResult<RawResponse>;
}

/// Status and body text of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
