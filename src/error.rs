//! Engine error types.
//!
//! Only genuinely fatal conditions are errors. Non-fatal conditions
//! (empty classes, unfillable slots, over-committed settings) are
//! reported as data
//! ([`GenerationStatus`](crate::models::GenerationStatus),
//! [`GenerationWarning`](crate::models::GenerationWarning), or a
//! settings report), not through this enum.

use thiserror::Error;

/// Fatal engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The requested class id is not in the directory.
    #[error("unknown class '{0}'")]
    UnknownClass(String),

    /// A generation pass is already running for this store.
    #[error("a generation pass is already in progress")]
    GenerationInProgress,
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
