//! Value types describing a notification
//!
//! All types here are immutable once built and cheap to share between
//! concurrent publish calls.

pub mod action;
pub mod attachment;
pub mod message;
pub mod priority;

pub use action::{
    Action, BroadcastAction, BroadcastActionBuilder, HttpAction, HttpActionBuilder, HttpMethod,
    ViewAction, DEFAULT_INTENT, DEFAULT_METHOD,
};
pub use attachment::{Attachment, FileAttachment, UrlAttachment};
pub use message::{Message, MessageBuilder};
pub use priority::Priority;
