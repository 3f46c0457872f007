use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use std::future::Future;
use std::time::Duration;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::topic::Topic;
use crate::errors::{NtfyError, NtfyResult};
use crate::model::Message;
use crate::outcome::PublishOutcome;

/// Blocking wrapper around a [`Topic`]
///
/// Each call blocks the current thread for one request. Inside a
/// multi-threaded tokio runtime the call runs on the ambient runtime through
/// `block_in_place`; outside of any runtime a private current-thread runtime
/// is created on first use and reused afterwards. Calling from a
/// current-thread runtime is an [`NtfyError::InvalidState`].
#[derive(Debug)]
pub struct BlockingTopic {
    inner: Topic,
    runtime: OnceCell<Runtime>,
}

impl BlockingTopic {
    pub fn new(inner: Topic) -> Self {
        Self {
            inner,
            runtime: OnceCell::new(),
        }
    }

    /// The wrapped async topic
    pub fn topic(&self) -> &Topic {
        &self.inner
    }

    pub fn into_inner(self) -> Topic {
        self.inner
    }

    /// Publish `message` for immediate delivery (blocking)
    pub fn publish(&self, message: &Message) -> NtfyResult<PublishOutcome> {
        self.block_on(self.inner.publish(message))
    }

    /// Publish `message` for delivery at `at` (blocking)
    pub fn schedule_at(&self, message: &Message, at: DateTime<Utc>) -> NtfyResult<PublishOutcome> {
        self.block_on(self.inner.schedule_at(message, at))
    }

    /// Publish `message` for delivery `delay` from now (blocking)
    pub fn schedule_in(&self, message: &Message, delay: Duration) -> NtfyResult<PublishOutcome> {
        self.block_on(self.inner.schedule_in(message, delay))
    }

    fn block_on<F, T>(&self, future: F) -> NtfyResult<T>
    where
        F: Future<Output = NtfyResult<T>>,
    {
        match Handle::try_current() {
            Ok(handle) => {
                if handle.runtime_flavor() != RuntimeFlavor::MultiThread {
                    return Err(NtfyError::invalid_state(
                        "blocking publish called from a current-thread runtime",
                    ));
                }
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            Err(_) => {
                let runtime = self.runtime.get_or_try_init(|| {
                    tokio::runtime::Builder::new_current_thread()
                        .enable_all()
                        .build()
                        .map_err(|source| NtfyError::Runtime { source })
                })?;
                runtime.block_on(future)
            }
        }
    }
}

impl From<Topic> for BlockingTopic {
    fn from(topic: Topic) -> Self {
        Self::new(topic)
    }
}
