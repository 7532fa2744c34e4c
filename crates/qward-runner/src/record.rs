//! Experiment records linking parameters to outcomes.

use serde::{Deserialize, Serialize};

use qward_metrics::MetricsRecord;
use qward_validators::ValidatorError;

use crate::grid::ParameterSet;

/// Outcome of one sweep combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExperimentOutcome {
    /// The combination ran and produced metrics.
    Metrics(MetricsRecord),
    /// The combination failed; the sweep continued without it.
    Failed {
        /// Failure class: config, circuit, backend or metrics.
        kind: String,
        /// Human-readable error message.
        message: String,
    },
}

impl ExperimentOutcome {
    /// Build a failure outcome from a validator error.
    pub fn from_error(err: &ValidatorError) -> Self {
        let kind = match err {
            ValidatorError::Config(_) => "config",
            ValidatorError::Circuit(_) => "circuit",
            ValidatorError::Backend(_) => "backend",
            ValidatorError::Metrics(_) => "metrics",
        };
        ExperimentOutcome::Failed {
            kind: kind.to_string(),
            message: err.to_string(),
        }
    }

    /// Check if the outcome carries metrics.
    pub fn is_success(&self) -> bool {
        matches!(self, ExperimentOutcome::Metrics(_))
    }

    /// Get the metrics record, if the outcome has one.
    pub fn metrics(&self) -> Option<&MetricsRecord> {
        match self {
            ExperimentOutcome::Metrics(record) => Some(record),
            ExperimentOutcome::Failed { .. } => None,
        }
    }
}

/// One row of a sweep: input parameters and what happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentRecord {
    /// Position of this combination in the expanded grid.
    pub index: usize,
    /// The parameter combination.
    pub params: ParameterSet,
    /// Backend the combination ran on.
    pub backend: String,
    /// Shots requested.
    pub shots: u32,
    /// Metrics or a recorded failure.
    pub outcome: ExperimentOutcome,
}

impl ExperimentRecord {
    /// Success rate of the run, if it produced metrics.
    pub fn success_rate(&self) -> Option<f64> {
        self.outcome.metrics().map(|m| m.execution.success_rate)
    }
}
