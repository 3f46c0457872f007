//! Mapping of message fields onto ntfy publish headers
//!
//! Each present field becomes at most one header. Free-form text goes through
//! [`ascii_safe`] so arbitrary user content always fits on one header line.

use chrono::{DateTime, Utc};
use std::fmt;

use super::encoding::{ascii_safe, encode_actions};
use crate::model::{Attachment, Message};

pub const USER_AGENT: &str = "User-Agent";
pub const MESSAGE: &str = "Message";
pub const TITLE: &str = "Title";
pub const PRIORITY: &str = "Priority";
pub const TAGS: &str = "Tags";
pub const MARKDOWN: &str = "Markdown";
pub const ACTIONS: &str = "Actions";
pub const CLICK: &str = "Click";
pub const FILENAME: &str = "Filename";
pub const ATTACH: &str = "Attach";
pub const ICON: &str = "Icon";
pub const EMAIL: &str = "Email";
pub const CALL: &str = "Call";
pub const CACHE: &str = "Cache";
pub const FIREBASE: &str = "Firebase";
pub const DELAY: &str = "Delay";
pub const AUTHORIZATION: &str = "Authorization";

/// Ordered list of request headers
///
/// Names keep the case they were inserted with; lookups ignore case.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderSet {
    entries: Vec<(&'static str, String)>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header, replacing any earlier value under the same name
    pub fn insert(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for HeaderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            if name == AUTHORIZATION {
                writeln!(f, "{name}: <redacted>")?;
            } else {
                writeln!(f, "{name}: {value}")?;
            }
        }
        Ok(())
    }
}

/// Append the headers describing `message`
pub fn write_message_headers(message: &Message, headers: &mut HeaderSet) {
    if let Some(body) = message.body() {
        headers.insert(MESSAGE, ascii_safe(body));
    }

    if let Some(title) = message.title() {
        headers.insert(TITLE, ascii_safe(title));
    }

    if !message.priority().is_default() {
        headers.insert(PRIORITY, message.priority().name());
    }

    if !message.tags().is_empty() {
        headers.insert(TAGS, ascii_safe(&message.tags().join(",")));
    }

    if message.markdown() {
        headers.insert(MARKDOWN, "true");
    }

    if !message.actions().is_empty() {
        headers.insert(ACTIONS, ascii_safe(&encode_actions(message.actions())));
    }

    if let Some(click) = message.click_action() {
        headers.insert(CLICK, ascii_safe(click));
    }

    if let Some(attachment) = message.attachment() {
        if let Some(file_name) = attachment.effective_file_name() {
            headers.insert(FILENAME, ascii_safe(&file_name));
        }
        if let Attachment::Url(url) = attachment {
            headers.insert(ATTACH, ascii_safe(url.url()));
        }
    }

    if let Some(icon) = message.icon() {
        headers.insert(ICON, ascii_safe(icon));
    }

    if let Some(email) = message.email() {
        headers.insert(EMAIL, ascii_safe(email));
    }

    if let Some(phone) = message.phone() {
        headers.insert(CALL, ascii_safe(phone));
    }

    if !message.cache() {
        headers.insert(CACHE, "no");
    }

    if !message.firebase() {
        headers.insert(FIREBASE, "no");
    }
}

/// Headers for `message` alone, without transport headers
pub fn message_headers(message: &Message) -> HeaderSet {
    let mut headers = HeaderSet::new();
    write_message_headers(message, &mut headers);
    headers
}

/// Value of the `Delay` header: Unix seconds of the delivery time
pub fn delay_value(at: DateTime<Utc>) -> String {
    at.timestamp().to_string()
}
