//! Error types for the engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by engine operations.
///
/// Nothing here is fatal: every variant degrades to a reportable message
/// with state rollback limited to the operation that failed. Validation
/// and write failures leave the edit session open so the user can retry
/// or cancel.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Required fields are missing from the draft. Local, pre-network.
    #[error("missing required fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Schema or row fetch failed; prior data is retained.
    #[error("remote read failed: {0}")]
    RemoteRead(String),

    /// Create, update or delete failed; the edit session is retained.
    #[error("remote write failed: {0}")]
    RemoteWrite(String),

    /// The guard check failed; the action was not performed.
    #[error("authentication failed")]
    Authentication,
}
