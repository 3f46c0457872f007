//! ntfy publish wire protocol
//!
//! Pure functions turning a [`crate::Message`] into header values. Nothing in
//! this module performs I/O or can fail.

pub mod encoding;
pub mod headers;

pub use encoding::{ascii_safe, encode_action, encode_actions, quote_value};
pub use headers::{delay_value, message_headers, write_message_headers, HeaderSet};
