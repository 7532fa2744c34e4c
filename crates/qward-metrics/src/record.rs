//! Combined metrics record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::execution::ExecutionMetrics;
use crate::structural::StructuralMetrics;

/// A read-only snapshot pairing structural and execution metrics.
///
/// Both halves derive from the same circuit and execution result, so a
/// record always describes one coherent run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// Name of the circuit the metrics describe.
    pub circuit_name: String,
    /// Metrics derived from the circuit structure.
    pub structural: StructuralMetrics,
    /// Metrics derived from the execution result.
    pub execution: ExecutionMetrics,
    /// When the record was collected.
    pub collected_at: DateTime<Utc>,
}

impl MetricsRecord {
    /// Assemble a record from its parts, stamped with the current time.
    pub fn new(
        circuit_name: impl Into<String>,
        structural: StructuralMetrics,
        execution: ExecutionMetrics,
    ) -> Self {
        Self {
            circuit_name: circuit_name.into(),
            structural,
            execution,
            collected_at: Utc::now(),
        }
    }
}
