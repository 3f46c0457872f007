//! Precondition checks shared by the builders
//!
//! Builders validate their input when `build()` is called and report the
//! first violated precondition as a construction error.

use super::types::{NtfyError, NtfyResult};

/// Fail with [`NtfyError::InvalidArgument`] unless `condition` holds
pub fn check_argument(condition: bool, field: &str, reason: &str) -> NtfyResult<()> {
    if condition {
        Ok(())
    } else {
        Err(NtfyError::invalid_argument(field, reason))
    }
}

/// Fail with [`NtfyError::InvalidState`] unless `condition` holds
pub fn check_state(condition: bool, message: &str) -> NtfyResult<()> {
    if condition {
        Ok(())
    } else {
        Err(NtfyError::invalid_state(message))
    }
}
