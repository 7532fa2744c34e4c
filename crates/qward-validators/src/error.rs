//! Validator errors.

use thiserror::Error;

use qward_hal::HalError;
use qward_ir::IrError;
use qward_metrics::MetricsError;

/// Errors produced while configuring or running a validator.
///
/// The variants keep the three failure classes distinguishable at the
/// call site: configuration errors are deterministic and surface
/// before any backend is contacted, backend errors are potentially
/// transient, and metric errors are deterministic computation
/// failures.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// Invalid validator configuration, detected before execution.
    #[error("invalid validator configuration: {0}")]
    Config(String),

    /// Circuit construction failed.
    #[error("circuit construction failed: {0}")]
    Circuit(#[from] IrError),

    /// Backend interaction failed.
    #[error("backend error: {0}")]
    Backend(#[from] HalError),

    /// Metric derivation failed.
    #[error("metrics error: {0}")]
    Metrics(#[from] MetricsError),
}

/// Result type for validator operations.
pub type ValidatorResult<T> = Result<T, ValidatorError>;
