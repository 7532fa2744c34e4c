//! Parameter-sweep experiment runner for Qward.
//!
//! Expands a [`ParameterGrid`] into combinations, builds a validator
//! for each via a [`ValidatorFactory`], runs them concurrently against
//! a backend, and exports the resulting records to CSV or JSON.
//!
//! One failing combination never aborts a sweep; its record carries
//! the failure class and message instead of metrics.

pub mod error;
pub mod export;
pub mod grid;
pub mod record;
pub mod summary;
pub mod sweep;

pub use error::{RunnerError, RunnerResult};
pub use export::{csv_string, json_string, write_csv, write_json};
pub use grid::{ParameterGrid, ParameterSet, ParameterValue};
pub use record::{ExperimentOutcome, ExperimentRecord};
pub use summary::SweepSummary;
pub use sweep::{run_sweep, SweepConfig, ValidatorFactory};
