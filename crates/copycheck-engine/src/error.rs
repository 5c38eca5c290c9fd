//! Error types for the detection engine
//!
//! The pipeline itself is pure computation over in-memory token sequences
//! and cannot fail; the only caller-visible error is submitting after
//! shutdown has been requested.

use thiserror::Error;

/// Result type alias for EngineError
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The checker's worker has been asked to stop; no new work is accepted.
    #[error("checker is shutting down; submission {id} was not enqueued")]
    ShuttingDown { id: u64 },
}
