//! Response payloads returned by the ntfy server
//!
//! A `200 OK` carries the published message (of which only `id`, `time` and
//! `expires` are kept); anything else carries an error envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{NtfyError, NtfyResult};
use crate::outcome::{Outcome, PublishOutcome};
use crate::client::RawResponse;

/// Success envelope of a publish request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResponse {
    /// Message id assigned by the server
    pub id: String,
    /// When the message was received by the server
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,
    /// When the message is removed from the server cache
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub expires: Option<DateTime<Utc>>,
}

/// Error envelope returned with a non-200 status
///
/// See <https://docs.ntfy.sh/publish/#error-responses>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// ntfy specific error code, e.g. `40401`
    pub code: u32,
    /// HTTP status code
    pub http: u16,
    /// Human readable description
    pub error: String,
    /// Link to documentation about the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl PublishResponse {
    pub fn from_json(json: &str) -> NtfyResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| NtfyError::decode_with_source(200, "invalid publish response", e))
    }
}

impl ErrorResponse {
    pub fn from_json(status: u16, json: &str) -> NtfyResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| NtfyError::decode_with_source(status, "invalid error response", e))
    }
}

/// Classify a raw response by status code and decode its payload
pub fn classify(response: RawResponse) -> NtfyResult<PublishOutcome> {
    if response.status == 200 {
        PublishResponse::from_json(&response.body).map(Outcome::Success)
    } else {
        ErrorResponse::from_json(response.status, &response.body).map(Outcome::Error)
    }
}
