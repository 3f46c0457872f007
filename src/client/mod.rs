//! Publishing client
//!
//! [`Topic`] binds a validated endpoint and credentials to a [`Transport`].
//! The async methods on `Topic` are the primary API; [`BlockingTopic`] wraps
//! them for callers without a runtime.

pub mod auth;
pub mod blocking;
pub mod http;
pub mod topic;
pub mod traits;

pub use auth::Auth;
pub use blocking::BlockingTopic;
pub use http::ReqwestTransport;
pub use topic::{Topic, TopicBuilder, DEFAULT_HOST};
pub use traits::{RawResponse, Transport};
