use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::auth::Auth;
use super::blocking::BlockingTopic;
use super::http::ReqwestTransport;
use super::traits::Transport;
use crate::errors::{check_argument, NtfyError, NtfyResult};
use crate::model::Message;
use crate::outcome::PublishOutcome;
use crate::request::{PreparedBody, PublishRequest};
use crate::response::classify;

/// Host used when a topic does not name one
pub const DEFAULT_HOST: &str = "https://ntfy.sh";

static DEFAULT_TRANSPORT: OnceCell<Arc<dyn Transport>> = OnceCell::new();

fn default_transport() -> NtfyResult<Arc<dyn Transport>> {
    DEFAULT_TRANSPORT
        .get_or_try_init(|| {
            ReqwestTransport::new().map(|transport| Arc::new(transport) as Arc<dyn Transport>)
        })
        .cloned()
}

/// A named channel on an ntfy server
///
/// A topic is immutable once built. Its endpoint URL and credentials are
/// validated by [`TopicBuilder::build`], so publishing never fails on
/// configuration.
#[derive(Clone)]
pub struct Topic {
    host: String,
    name: String,
    url: Url,
    auth: Option<Auth>,
    timeout: Option<Duration>,
    transport: Arc<dyn Transport>,
}

impl Topic {
    /// Topic `name` on [`DEFAULT_HOST`]
    pub fn new(name: impl Into<String>) -> NtfyResult<Self> {
        Self::builder(name).build()
    }

    pub fn builder(name: impl Into<String>) -> TopicBuilder {
        TopicBuilder::new(name)
    }

    /// Topic protected with basic authentication
    pub fn secured(
        host: impl Into<String>,
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> NtfyResult<Self> {
        Self::builder(name)
            .host(host)
            .username(username)
            .password(password)
            .build()
    }

    /// Topic protected with an access token
    pub fn with_token(
        host: impl Into<String>,
        name: impl Into<String>,
        token: impl Into<String>,
    ) -> NtfyResult<Self> {
        Self::builder(name).host(host).token(token).build()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved endpoint of this topic
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn auth(&self) -> Option<&Auth> {
        self.auth.as_ref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Assemble the request that publishing `message` would send
    pub fn prepare(&self, message: &Message, delay: Option<DateTime<Utc>>) -> PublishRequest {
        let authorization = self.auth.as_ref().map(Auth::header_value);
        PublishRequest::assemble(
            &self.url,
            message,
            delay,
            authorization.as_deref(),
            self.timeout,
        )
    }

    /// Publish `message` for immediate delivery
    pub async fn publish(&self, message: &Message) -> NtfyResult<PublishOutcome> {
        self.send(message, None).await
    }

    /// Publish `message` for delivery at `at`
    pub async fn schedule_at(
        &self,
        message: &Message,
        at: DateTime<Utc>,
    ) -> NtfyResult<PublishOutcome> {
        self.send(message, Some(at)).await
    }

    /// Publish `message` for delivery `delay` from now
    pub async fn schedule_in(&self, message: &Message, delay: Duration) -> NtfyResult<PublishOutcome> {
        let at = delivery_time(delay)?;
        self.send(message, Some(at)).await
    }

    /// Blocking view of this topic
    pub fn blocking(&self) -> BlockingTopic {
        BlockingTopic::new(self.clone())
    }

    pub fn to_builder(&self) -> TopicBuilder {
        let builder = TopicBuilder::new(self.name.clone())
            .host(self.host.clone())
            .shared_transport(Arc::clone(&self.transport));
        let builder = match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        match &self.auth {
            Some(Auth::Basic { username, password }) => {
                builder.username(username.clone()).password(password.clone())
            }
            Some(Auth::Bearer { token }) => builder.token(token.clone()),
            None => builder,
        }
    }

    async fn send(&self, message: &Message, delay: Option<DateTime<Utc>>) -> NtfyResult<PublishOutcome> {
        let request = self.prepare(message, delay);
        debug!(
            method = %request.method(),
            url = %request.url(),
            headers = ?request.headers().names(),
            "Publishing message"
        );

        let body = PreparedBody::open(request.body()).await?;
        let response = self.transport.execute(&request, body).await?;
        classify(response)
    }
}

/// Absolute delivery time `delay` from now
pub fn delivery_time(delay: Duration) -> NtfyResult<DateTime<Utc>> {
    chrono::Duration::from_std(delay)
        .ok()
        .and_then(|delay| Utc::now().checked_add_signed(delay))
        .ok_or_else(|| NtfyError::invalid_argument("delay", "out of range"))
}

impl PartialEq for Topic {
    fn eq(&self, other: &Self) -> bool {
        self.host == other.host
            && self.name == other.name
            && self.url == other.url
            && self.auth == other.auth
            && self.timeout == other.timeout
    }
}

impl Eq for Topic {}

impl fmt::Debug for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Topic")
            .field("host", &self.host)
            .field("name", &self.name)
            .field("url", &self.url.as_str())
            .field("auth", &self.auth)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Topic`]
#[derive(Clone)]
pub struct TopicBuilder {
    name: String,
    host: String,
    timeout: Option<Duration>,
    token: Option<String>,
    username: Option<String>,
    password: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl TopicBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: DEFAULT_HOST.to_string(),
            timeout: None,
            token: None,
            username: None,
            password: None,
            transport: None,
        }
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Timeout applied to every request of the topic; must not be zero
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Send requests through `transport` instead of the shared HTTP client
    pub fn transport(self, transport: impl Transport + 'static) -> Self {
        self.shared_transport(Arc::new(transport))
    }

    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> NtfyResult<Topic> {
        if let Some(timeout) = self.timeout {
            check_argument(!timeout.is_zero(), "timeout", "must be positive")?;
        }

        let auth = resolve_auth(self.token, self.username, self.password)?;
        let url = resolve_url(&self.host, &self.name)?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport()?,
        };

        Ok(Topic {
            host: self.host,
            name: self.name,
            url,
            auth,
            timeout: self.timeout,
            transport,
        })
    }
}

impl fmt::Debug for TopicBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopicBuilder")
            .field("name", &self.name)
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

fn resolve_auth(
    token: Option<String>,
    username: Option<String>,
    password: Option<String>,
) -> NtfyResult<Option<Auth>> {
    match (token, username, password) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(NtfyError::ConflictingAuth),
        (Some(token), None, None) => {
            check_argument(
                !token.is_empty() && token.bytes().all(|b| b.is_ascii_graphic()),
                "token",
                "must be non-empty visible ASCII",
            )?;
            Ok(Some(Auth::Bearer { token }))
        }
        (None, Some(username), Some(password)) => {
            check_argument(!username.contains(':'), "username", "must not contain ':'")?;
            Ok(Some(Auth::Basic { username, password }))
        }
        (None, Some(_), None) => Err(NtfyError::IncompleteAuth {
            provided: "Username",
            missing: "password",
        }),
        (None, None, Some(_)) => Err(NtfyError::IncompleteAuth {
            provided: "Password",
            missing: "username",
        }),
        (None, None, None) => Ok(None),
    }
}

/// Resolve `name` against `host` into an absolute http(s) URL
fn resolve_url(host: &str, name: &str) -> NtfyResult<Url> {
    let mut base =
        Url::parse(host).map_err(|e| NtfyError::invalid_topic_with_source(host, name, e))?;

    if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
        return Err(NtfyError::invalid_topic(host, name));
    }

    if name.is_empty()
        || name
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#' | ':' | '\\') || c.is_whitespace() || c.is_control())
    {
        return Err(NtfyError::invalid_topic(host, name));
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(name)
        .map_err(|e| NtfyError::invalid_topic_with_source(host, name, e))
}
