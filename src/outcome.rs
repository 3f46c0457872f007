//! Two-variant outcome of a publish call
//!
//! A server rejecting a message is not a failure of the call: it is reported
//! as [`Outcome::Error`] carrying the decoded error payload, while transport
//! and I/O failures travel in the surrounding `Result`.

use crate::errors::{NtfyError, NtfyResult};
use crate::response::{ErrorResponse, PublishResponse};

/// Message passed to the error factory of [`Outcome::get_or_raise`]
pub const NO_VALUE_MESSAGE: &str = "Error outcome does not have a value";

/// Outcome of a publish call as reported by the server
pub type PublishOutcome = Outcome<PublishResponse, ErrorResponse>;

/// Either a success value or an error value, never both
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome<V, E> {
    Success(V),
    Error(E),
}

impl<V, E> Outcome<V, E> {
    pub fn success(value: V) -> Self {
        Outcome::Success(value)
    }

    pub fn failure(error: E) -> Self {
        Outcome::Error(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Error(error) => Some(error),
        }
    }

    pub fn into_value(self) -> Option<V> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Error(_) => None,
        }
    }

    pub fn into_error(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Error(error) => Some(error),
        }
    }

    /// Return the value, or build an error with `factory` from [`NO_VALUE_MESSAGE`]
    pub fn get_or_raise<X, F>(self, factory: F) -> Result<V, X>
    where
        F: FnOnce(&'static str) -> X,
    {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Error(_) => Err(factory(NO_VALUE_MESSAGE)),
        }
    }

    /// Return the value, or fail with [`NtfyError::InvalidState`]
    pub fn get_or_invalid_state(self) -> NtfyResult<V> {
        self.get_or_raise(|message| NtfyError::invalid_state(message))
    }

    /// Run `f` on the value if this is a success, then return `self` unchanged
    pub fn if_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Outcome::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Run `f` on the error if this is an error, then return `self` unchanged
    pub fn if_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Error(error) = &self {
            f(error);
        }
        self
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Error(error) => Outcome::Error(error),
        }
    }

    pub fn map_error<U, F>(self, f: F) -> Outcome<V, U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Error(error) => Outcome::Error(f(error)),
        }
    }

    pub fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Error(error) => Outcome::Error(error),
        }
    }

    pub fn into_result(self) -> Result<V, E> {
        self.into()
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Error(error) => Err(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Error(error),
        }
    }
}
