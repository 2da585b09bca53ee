//! Unified Error Handling

use shared::error::DomainError;

/// Engine-level error type.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("validation failed: {0}")]
    Validation(#[from] DomainError),
}

/// Engine-level Result type
pub type EngineResult<T> = Result<T, EngineError>;
