//! Action buttons attached to a notification
//!
//! ntfy supports three kinds of buttons: opening a URL (`view`), firing an
//! Android broadcast (`broadcast`) and issuing an HTTP request (`http`).
//! See <https://docs.ntfy.sh/publish/#action-buttons>.

use std::collections::BTreeMap;
use std::fmt;

/// Intent fired by a broadcast action when none is configured
pub const DEFAULT_INTENT: &str = "io.heckel.ntfy.USER_ACTION";

/// Method used by an HTTP action when none is configured
pub const DEFAULT_METHOD: HttpMethod = HttpMethod::Post;

/// An action button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    View(ViewAction),
    Broadcast(BroadcastAction),
    Http(HttpAction),
}

impl Action {
    /// Create a view action that opens `url`
    pub fn view(label: impl Into<String>, url: impl Into<String>) -> Self {
        Action::View(ViewAction::new(label, url, false))
    }

    /// Create a view action, choosing whether tapping it clears the notification
    pub fn view_with_clear(label: impl Into<String>, url: impl Into<String>, clear: bool) -> Self {
        Action::View(ViewAction::new(label, url, clear))
    }

    /// Start building a broadcast action
    pub fn broadcast(label: impl Into<String>) -> BroadcastActionBuilder {
        BroadcastActionBuilder::new(label)
    }

    /// Create a broadcast action firing a custom intent
    pub fn broadcast_with_intent(label: impl Into<String>, intent: impl Into<String>) -> Self {
        Action::Broadcast(BroadcastActionBuilder::new(label).intent(intent).build())
    }

    /// Start building an HTTP action targeting `url`
    pub fn http(label: impl Into<String>, url: impl Into<String>) -> HttpActionBuilder {
        HttpActionBuilder::new(label, url)
    }

    /// The variant tag used on the wire
    pub fn action(&self) -> &'static str {
        match self {
            Action::View(_) => "view",
            Action::Broadcast(_) => "broadcast",
            Action::Http(_) => "http",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Action::View(view) => &view.label,
            Action::Broadcast(broadcast) => &broadcast.label,
            Action::Http(http) => &http.label,
        }
    }

    /// Whether the notification is cleared after the action is tapped
    pub fn clear(&self) -> bool {
        match self {
            Action::View(view) => view.clear,
            Action::Broadcast(broadcast) => broadcast.clear,
            Action::Http(http) => http.clear,
        }
    }
}

impl From<ViewAction> for Action {
    fn from(action: ViewAction) -> Self {
        Action::View(action)
    }
}

impl From<BroadcastAction> for Action {
    fn from(action: BroadcastAction) -> Self {
        Action::Broadcast(action)
    }
}

impl From<BroadcastActionBuilder> for Action {
    fn from(builder: BroadcastActionBuilder) -> Self {
        Action::Broadcast(builder.build())
    }
}

impl From<HttpAction> for Action {
    fn from(action: HttpAction) -> Self {
        Action::Http(action)
    }
}

impl From<HttpActionBuilder> for Action {
    fn from(builder: HttpActionBuilder) -> Self {
        Action::Http(builder.build())
    }
}

/// Opens a website or app when tapped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewAction {
    label: String,
    url: String,
    clear: bool,
}

impl ViewAction {
    pub fn new(label: impl Into<String>, url: impl Into<String>, clear: bool) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            clear,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn clear(&self) -> bool {
        self.clear
    }
}

/// Sends an Android broadcast intent when tapped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastAction {
    label: String,
    intent: String,
    extras: BTreeMap<String, String>,
    clear: bool,
}

impl BroadcastAction {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn intent(&self) -> &str {
        &self.intent
    }

    /// Extras passed along with the intent
    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extras
    }

    pub fn clear(&self) -> bool {
        self.clear
    }

    pub fn to_builder(&self) -> BroadcastActionBuilder {
        BroadcastActionBuilder {
            label: self.label.clone(),
            intent: self.intent.clone(),
            extras: self.extras.clone(),
            clear: self.clear,
        }
    }
}

/// Builder for [`BroadcastAction`]
#[derive(Debug, Clone)]
pub struct BroadcastActionBuilder {
    label: String,
    intent: String,
    extras: BTreeMap<String, String>,
    clear: bool,
}

impl BroadcastActionBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            intent: DEFAULT_INTENT.to_string(),
            extras: BTreeMap::new(),
            clear: false,
        }
    }

    pub fn intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = intent.into();
        self
    }

    /// Replace all extras
    pub fn extras<I, K, V>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.extras = extras
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self
    }

    pub fn set_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    pub fn clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn build(self) -> BroadcastAction {
        BroadcastAction {
            label: self.label,
            intent: self.intent,
            extras: self.extras,
            clear: self.clear,
        }
    }
}

/// Request methods available to an HTTP action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    Get,
    Head,
    #[default]
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Patch,
}

impl HttpMethod {
    pub fn name(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Connect => "CONNECT",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sends an HTTP request from the subscriber's device when tapped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpAction {
    label: String,
    url: String,
    method: HttpMethod,
    headers: BTreeMap<String, String>,
    body: Option<String>,
    clear: bool,
}

impl HttpAction {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn clear(&self) -> bool {
        self.clear
    }

    pub fn to_builder(&self) -> HttpActionBuilder {
        HttpActionBuilder {
            label: self.label.clone(),
            url: self.url.clone(),
            method: self.method,
            headers: self.headers.clone(),
            body: self.body.clone(),
            clear: self.clear,
        }
    }
}

/// Builder for [`HttpAction`]
#[derive(Debug, Clone)]
pub struct HttpActionBuilder {
    label: String,
    url: String,
    method: HttpMethod,
    headers: BTreeMap<String, String>,
    body: Option<String>,
    clear: bool,
}

impl HttpActionBuilder {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            method: DEFAULT_METHOD,
            headers: BTreeMap::new(),
            body: None,
            clear: false,
        }
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Replace all request headers
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = headers
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self
    }

    pub fn set_header(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(header.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn build(self) -> HttpAction {
        HttpAction {
            label: self.label,
            url: self.url,
            method: self.method,
            headers: self.headers,
            body: self.body,
            clear: self.clear,
        }
    }
}
