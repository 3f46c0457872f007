//! Centralized error handling module
//!
//! Typed errors for every failure the client can report, plus the
//! precondition helpers the builders use to reject invalid input.

pub mod precondition;
pub mod types;

pub use precondition::{check_argument, check_state};
pub use types::{NtfyError, NtfyResult};
