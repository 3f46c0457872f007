use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_LENGTH};
use reqwest::{Body, Client, Method};
use std::time::Duration;
use tokio_util::io::ReaderStream;
use tracing::debug;

use super::traits::{RawResponse, Transport};
use crate::errors::{NtfyError, NtfyResult};
use crate::request::{PreparedBody, PublishMethod, PublishRequest};

/// [`Transport`] backed by a pooled [`reqwest::Client`]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a fresh connection pool
    pub fn new() -> NtfyResult<Self> {
        let client = Client::builder()
            .http1_title_case_headers()
            .tcp_keepalive(Duration::from_secs(60))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| NtfyError::transport_with_source("client", e))?;

        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn header_map(request: &PublishRequest) -> NtfyResult<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(request.headers().len());
        for (name, value) in request.headers().iter() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| NtfyError::invalid_argument(name, "not a valid header name"))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| NtfyError::invalid_argument(name, "not a valid header value"))?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &PublishRequest, body: PreparedBody) -> NtfyResult<RawResponse> {
        let method = match request.method() {
            PublishMethod::Post => Method::POST,
            PublishMethod::Put => Method::PUT,
        };

        let mut builder = self
            .client
            .request(method, request.url().clone())
            .headers(Self::header_map(request)?);

        if let Some(timeout) = request.timeout() {
            builder = builder.timeout(timeout);
        }

        builder = match body {
            PreparedBody::Empty => builder,
            PreparedBody::File { file, len, .. } => builder
                .header(CONTENT_LENGTH, len)
                .body(Body::wrap_stream(ReaderStream::new(file))),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, url = %request.url(), "Received publish response");
        Ok(RawResponse { status, body })
    }
}
