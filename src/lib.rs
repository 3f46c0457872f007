//! Publish client library for ntfy
//!
//! Turns a [`Message`] into a single HTTP request understood by an ntfy
//! server and turns the server's response back into a typed [`Outcome`].
//!
//! ```rust,no_run
//! use ntfy_publish::{Action, Message, Priority, Topic};
//!
//! # async fn run() -> ntfy_publish::NtfyResult<()> {
//! let topic = Topic::builder("alerts").token("tk_mytoken").build()?;
//! let message = Message::builder()
//!     .title("Backup finished")
//!     .body("All volumes were copied")
//!     .priority(Priority::High)
//!     .add_action(Action::view("Open log", "https://example.com/log"))
//!     .build();
//!
//! let outcome = topic
//!     .publish(&message)
//!     .await?
//!     .if_success(|response| println!("published {}", response.id))
//!     .if_error(|error| eprintln!("rejected: {}", error.error));
//! assert!(outcome.is_success() || outcome.is_error());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod model;
pub mod outcome;
pub mod protocol;
pub mod request;
pub mod response;

pub use client::{Auth, BlockingTopic, RawResponse, ReqwestTransport, Topic, TopicBuilder, Transport};
pub use errors::{NtfyError, NtfyResult};
pub use model::{
    Action, Attachment, BroadcastAction, HttpAction, HttpMethod, Message, MessageBuilder,
    Priority, ViewAction,
};
pub use outcome::{Outcome, PublishOutcome};
pub use request::{PreparedBody, PublishRequest};
pub use response::{ErrorResponse, PublishResponse};
