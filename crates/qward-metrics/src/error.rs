//! Metric computation errors.

use thiserror::Error;

/// Errors that can occur while deriving metrics.
///
/// These are deterministic computation failures. They indicate a
/// malformed input, never a flaky backend, so callers should fail fast
/// rather than retry.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// The result declares zero shots.
    #[error("cannot derive execution metrics from zero shots")]
    ZeroShots,

    /// The counts do not sum to the declared shot total.
    #[error("count total {actual} does not match declared shots {expected}")]
    CountMismatch {
        /// Shots declared by the execution result.
        expected: u64,
        /// Sum of all recorded counts.
        actual: u64,
    },
}

/// Result type for metric computations.
pub type MetricsResult<T> = Result<T, MetricsError>;
