//! Assembly of a single outbound publish request
//!
//! [`PublishRequest::assemble`] is pure: it orders the headers and picks the
//! body transfer mode. Opening an attachment file happens later, in
//! [`PreparedBody::open`], so a missing file surfaces when the body is
//! prepared rather than while headers are assembled.

use chrono::{DateTime, Utc};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncReadExt;
use url::Url;

use crate::errors::{NtfyError, NtfyResult};
use crate::model::{Attachment, Message};
use crate::protocol::headers::{self as header, HeaderSet};

/// User agent attached to every request
pub const DEFAULT_USER_AGENT: &str = concat!("ntfy-publish/", env!("CARGO_PKG_VERSION"));

/// HTTP method of a publish request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishMethod {
    Post,
    Put,
}

impl PublishMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishMethod::Post => "POST",
            PublishMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for PublishMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the request body is transferred
///
/// The body is reserved for attachment bytes; the message text always
/// travels in the `Message` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyTransfer {
    Empty,
    File(PathBuf),
}

/// A fully assembled request, ready to be handed to a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    method: PublishMethod,
    url: Url,
    headers: HeaderSet,
    body: BodyTransfer,
    timeout: Option<Duration>,
}

impl PublishRequest {
    /// Build the request publishing `message` to `url`
    ///
    /// Headers are emitted in a fixed order: `User-Agent`, the message
    /// headers, then `Delay` and `Authorization` when given.
    pub fn assemble(
        url: &Url,
        message: &Message,
        delay: Option<DateTime<Utc>>,
        authorization: Option<&str>,
        timeout: Option<Duration>,
    ) -> Self {
        let mut headers = HeaderSet::new();
        headers.insert(header::USER_AGENT, DEFAULT_USER_AGENT);
        header::write_message_headers(message, &mut headers);

        let (method, body) = match message.attachment() {
            Some(Attachment::File(file)) => (
                PublishMethod::Put,
                BodyTransfer::File(file.file().to_path_buf()),
            ),
            Some(Attachment::Url(_)) | None => (PublishMethod::Post, BodyTransfer::Empty),
        };

        if let Some(at) = delay {
            headers.insert(header::DELAY, header::delay_value(at));
        }

        if let Some(authorization) = authorization {
            headers.insert(header::AUTHORIZATION, authorization);
        }

        Self {
            method,
            url: url.clone(),
            headers,
            body,
            timeout,
        }
    }

    pub fn method(&self) -> PublishMethod {
        self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    pub fn body(&self) -> &BodyTransfer {
        &self.body
    }

    /// Per-request timeout configured on the topic
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Display for PublishRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.method, self.url)?;
        write!(f, "{}", self.headers)?;
        if let BodyTransfer::File(path) = &self.body {
            writeln!(f, "<body: contents of {}>", path.display())?;
        }
        Ok(())
    }
}

/// Request body opened and ready to stream
#[derive(Debug)]
pub enum PreparedBody {
    Empty,
    File {
        path: PathBuf,
        file: tokio::fs::File,
        len: u64,
    },
}

impl PreparedBody {
    /// Open the body described by `transfer`
    ///
    /// Fails with [`NtfyError::AttachmentNotFound`] if the attachment file
    /// does not exist.
    pub async fn open(transfer: &BodyTransfer) -> NtfyResult<Self> {
        match transfer {
            BodyTransfer::Empty => Ok(PreparedBody::Empty),
            BodyTransfer::File(path) => {
                let file = tokio::fs::File::open(path)
                    .await
                    .map_err(|e| NtfyError::attachment_io(path, e))?;
                let len = file
                    .metadata()
                    .await
                    .map_err(|e| NtfyError::attachment_io(path, e))?
                    .len();
                Ok(PreparedBody::File {
                    path: path.clone(),
                    file,
                    len,
                })
            }
        }
    }

    pub fn len(&self) -> u64 {
        match self {
            PreparedBody::Empty => 0,
            PreparedBody::File { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            PreparedBody::Empty => None,
            PreparedBody::File { path, .. } => Some(path),
        }
    }

    /// Read the whole body into memory
    pub async fn into_bytes(self) -> NtfyResult<Vec<u8>> {
        match self {
            PreparedBody::Empty => Ok(Vec::new()),
            PreparedBody::File {
                path,
                mut file,
                len,
            } => {
                let mut bytes = Vec::with_capacity(usize::try_from(len).unwrap_or_default());
                file.read_to_end(&mut bytes)
                    .await
                    .map_err(|e| NtfyError::attachment_io(path, e))?;
                Ok(bytes)
            }
        }
    }
}
