//! Metrics collection for Qward validator runs.
//!
//! Two metric families:
//!
//! - [`StructuralMetrics`]: a pure function of the circuit (depth,
//!   width, size, gate counts).
//! - [`ExecutionMetrics`]: derived from one [`ExecutionResult`] plus a
//!   success predicate (success rate, error rate, timings).
//!
//! [`collect`] builds a [`MetricsRecord`] from both in one step, so the
//! structural and execution halves always describe the same run.

pub mod error;
pub mod execution;
pub mod record;
pub mod structural;

pub use error::{MetricsError, MetricsResult};
pub use execution::ExecutionMetrics;
pub use record::MetricsRecord;
pub use structural::StructuralMetrics;

use qward_hal::ExecutionResult;
use qward_ir::Circuit;

/// Collect a full metrics record for one circuit execution.
///
/// `is_success` classifies each observed bitstring. Fails on zero-shot
/// results and on counts that disagree with the declared shot total.
pub fn collect(
    circuit: &Circuit,
    result: &ExecutionResult,
    is_success: impl Fn(&str) -> bool,
) -> MetricsResult<MetricsRecord> {
    let structural = StructuralMetrics::from_circuit(circuit);
    let execution = ExecutionMetrics::from_result(result, is_success)?;
    Ok(MetricsRecord::new(circuit.name(), structural, execution))
}
