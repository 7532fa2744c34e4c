//! Experiment runner errors.

use thiserror::Error;

/// Errors produced by the experiment runner.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// A grid axis was declared with no values.
    #[error("parameter axis '{0}' has no values")]
    EmptyAxis(String),

    /// A parameter name was referenced but not present.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// Filesystem error during export.
    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error during export.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A sweep worker task panicked or was aborted.
    #[error("sweep task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result type for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;
