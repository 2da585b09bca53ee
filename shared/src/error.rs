//! Domain error types shared across the workspace.

use thiserror::Error;

/// Errors raised by boundary validation of document data.
///
/// Business-level degradation (missing names, blank statuses, absent
/// prices) never errors; only structurally unusable values are rejected
/// before they reach aggregate arithmetic.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} exceeds maximum allowed ({max}), got {value}")]
    ExceedsMaximum {
        field: &'static str,
        max: i64,
        value: i64,
    },
}

/// Validate that an f64 value is finite (not NaN, not Infinity)
#[inline]
pub fn require_finite(value: f64, field: &'static str) -> Result<(), DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NonFinite { field, value });
    }
    Ok(())
}
