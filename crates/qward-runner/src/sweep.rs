//! Concurrent parameter sweeps.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, instrument, warn};

use qward_hal::Backend;
use qward_validators::{run_validator_with_timeout, Validator, ValidatorError};

use crate::error::RunnerResult;
use crate::grid::{ParameterGrid, ParameterSet};
use crate::record::{ExperimentOutcome, ExperimentRecord};

/// Builds a validator for one parameter combination.
///
/// Factories own parameter validation: a combination the validator
/// cannot accept surfaces as a `Config` error, which the sweep records
/// without aborting.
pub trait ValidatorFactory: Send + Sync {
    /// Build a validator from a parameter combination.
    fn build(&self, params: &ParameterSet) -> Result<Box<dyn Validator>, ValidatorError>;
}

impl<F> ValidatorFactory for F
where
    F: Fn(&ParameterSet) -> Result<Box<dyn Validator>, ValidatorError> + Send + Sync,
{
    fn build(&self, params: &ParameterSet) -> Result<Box<dyn Validator>, ValidatorError> {
        self(params)
    }
}

/// Configuration for a sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Shots per combination.
    pub shots: u32,
    /// Maximum combinations in flight at once.
    pub max_concurrency: usize,
    /// Per-job timeout; expired jobs are cancelled and recorded as
    /// failures.
    pub job_timeout: Option<Duration>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            shots: 1024,
            max_concurrency: 4,
            job_timeout: None,
        }
    }
}

/// Run every combination of the grid against the backend.
///
/// Combinations run concurrently up to `max_concurrency`; each one
/// produces exactly one [`ExperimentRecord`], metrics or a recorded
/// failure. A failing combination never aborts the sweep. Records come
/// back sorted by combination index regardless of completion order.
#[instrument(skip(factory, backend, grid, config), fields(combinations = grid.num_combinations()))]
pub async fn run_sweep(
    factory: Arc<dyn ValidatorFactory>,
    backend: Arc<dyn Backend>,
    grid: &ParameterGrid,
    config: SweepConfig,
) -> RunnerResult<Vec<ExperimentRecord>> {
    let combinations = grid.combinations();
    let total = combinations.len();
    debug!("Starting sweep over {} combinations", total);

    let semaphore = Arc::new(Semaphore::new(config.max_concurrency.max(1)));
    let mut tasks = JoinSet::new();

    for (index, params) in combinations.into_iter().enumerate() {
        let semaphore = semaphore.clone();
        let factory = factory.clone();
        let backend = backend.clone();
        let shots = config.shots;
        let job_timeout = config.job_timeout;

        tasks.spawn(async move {
            // Holds a concurrency slot for the whole combination. The
            // semaphore is never closed, so acquisition cannot fail.
            let _permit = semaphore.acquire_owned().await.ok();

            let outcome =
                run_combination(factory.as_ref(), backend.as_ref(), &params, shots, job_timeout)
                    .await;
            if let ExperimentOutcome::Failed { kind, message } = &outcome {
                warn!(index, kind = kind.as_str(), "combination failed: {message}");
            }

            ExperimentRecord {
                index,
                params,
                backend: backend.name().to_string(),
                shots,
                outcome,
            }
        });
    }

    let mut records = Vec::with_capacity(total);
    while let Some(joined) = tasks.join_next().await {
        records.push(joined?);
    }
    records.sort_by_key(|record| record.index);

    debug!(
        "Sweep finished: {} ok, {} failed",
        records.iter().filter(|r| r.outcome.is_success()).count(),
        records.iter().filter(|r| !r.outcome.is_success()).count(),
    );
    Ok(records)
}

/// Run one combination, folding every failure into the outcome.
async fn run_combination(
    factory: &dyn ValidatorFactory,
    backend: &dyn Backend,
    params: &ParameterSet,
    shots: u32,
    job_timeout: Option<Duration>,
) -> ExperimentOutcome {
    let validator = match factory.build(params) {
        Ok(validator) => validator,
        Err(err) => return ExperimentOutcome::from_error(&err),
    };
    match run_validator_with_timeout(validator.as_ref(), backend, shots, job_timeout).await {
        Ok(run) => ExperimentOutcome::Metrics(run.metrics),
        Err(err) => ExperimentOutcome::from_error(&err),
    }
}
