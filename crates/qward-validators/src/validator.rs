//! The validator interface and run orchestration.

use std::time::Duration;

use tracing::debug;

use qward_hal::{Backend, ExecutionResult, HalError};
use qward_ir::Circuit;
use qward_metrics::MetricsRecord;

use crate::error::ValidatorResult;

/// A quantum algorithm validator.
///
/// A validator knows how to build the circuit that exercises an
/// algorithm and how to classify each measured bitstring as success or
/// failure. Implementations are plain strategy objects; anything that
/// can build a circuit and classify outcomes can be swept by the
/// experiment runner.
pub trait Validator: Send + Sync {
    /// Name of the validator, used in reports.
    fn name(&self) -> &str;

    /// Build the validation circuit.
    ///
    /// The circuit is constructed fresh on every call and never
    /// mutated after being handed to a backend.
    fn build_circuit(&self) -> ValidatorResult<Circuit>;

    /// Classify one measured bitstring as success or failure.
    fn classify_outcome(&self, bitstring: &str) -> bool;
}

/// Everything produced by one validator run.
#[derive(Debug, Clone)]
pub struct ValidationRun {
    /// The circuit that was executed.
    pub circuit: Circuit,
    /// The raw execution result.
    pub result: ExecutionResult,
    /// Metrics derived from the circuit and result.
    pub metrics: MetricsRecord,
}

/// Run a validator against a backend: build, submit, wait, collect.
pub async fn run_validator(
    validator: &dyn Validator,
    backend: &dyn Backend,
    shots: u32,
) -> ValidatorResult<ValidationRun> {
    run_validator_with_timeout(validator, backend, shots, None).await
}

/// Run a validator with an optional per-job timeout.
///
/// On expiry the job is cancelled before the timeout error is
/// propagated, so no orphaned job keeps running on the backend.
pub async fn run_validator_with_timeout(
    validator: &dyn Validator,
    backend: &dyn Backend,
    shots: u32,
    timeout: Option<Duration>,
) -> ValidatorResult<ValidationRun> {
    let circuit = validator.build_circuit()?;
    debug!(
        validator = validator.name(),
        backend = backend.name(),
        shots,
        "submitting validation circuit"
    );

    let job_id = backend.submit(&circuit, shots).await?;
    let result = match timeout {
        Some(timeout) => match backend.wait_timeout(&job_id, timeout).await {
            Err(err @ HalError::Timeout(_)) => {
                backend.cancel(&job_id).await.ok();
                return Err(err.into());
            }
            other => other?,
        },
        None => backend.wait(&job_id).await?,
    };

    let metrics = qward_metrics::collect(&circuit, &result, |bitstring| {
        validator.classify_outcome(bitstring)
    })?;

    Ok(ValidationRun {
        circuit,
        result,
        metrics,
    })
}
