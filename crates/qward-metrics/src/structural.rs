//! Structural metrics derived from a circuit alone.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use qward_ir::{Circuit, InstructionKind};

/// Metrics that depend only on the circuit structure.
///
/// Extraction is a pure function of the circuit, so the same circuit
/// always yields the same metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralMetrics {
    /// Number of qubits.
    pub num_qubits: usize,
    /// Number of classical bits.
    pub num_clbits: usize,
    /// Circuit depth (longest wire path, barriers excluded).
    pub depth: usize,
    /// Total wire count, qubits plus clbits.
    pub width: usize,
    /// Operation count excluding barriers.
    pub size: usize,
    /// Per-gate-name operation counts, in name order.
    pub gate_counts: BTreeMap<String, u64>,
    /// Number of single-qubit gates.
    pub single_qubit_gates: usize,
    /// Number of two-qubit gates.
    pub two_qubit_gates: usize,
    /// Number of gates on three or more qubits.
    pub multi_qubit_gates: usize,
    /// Number of measurement operations.
    pub measurements: usize,
    /// Number of barriers.
    pub barriers: usize,
    /// Number of reset operations.
    pub resets: usize,
    /// Number of classically-conditioned gates.
    pub conditioned_gates: usize,
}

impl StructuralMetrics {
    /// Extract structural metrics from a circuit.
    pub fn from_circuit(circuit: &Circuit) -> Self {
        let mut gate_counts: BTreeMap<String, u64> = BTreeMap::new();
        let mut single_qubit_gates = 0;
        let mut two_qubit_gates = 0;
        let mut multi_qubit_gates = 0;
        let mut measurements = 0;
        let mut barriers = 0;
        let mut resets = 0;
        let mut conditioned_gates = 0;

        for inst in circuit.instructions() {
            match &inst.kind {
                InstructionKind::Gate(gate) => {
                    *gate_counts.entry(gate.name().to_string()).or_insert(0) += 1;
                    match gate.num_qubits() {
                        1 => single_qubit_gates += 1,
                        2 => two_qubit_gates += 1,
                        _ => multi_qubit_gates += 1,
                    }
                    if inst.condition.is_some() {
                        conditioned_gates += 1;
                    }
                }
                InstructionKind::Measure => measurements += 1,
                InstructionKind::Barrier => barriers += 1,
                InstructionKind::Reset => resets += 1,
            }
        }

        Self {
            num_qubits: circuit.num_qubits(),
            num_clbits: circuit.num_clbits(),
            depth: circuit.depth(),
            width: circuit.width(),
            size: circuit.size(),
            gate_counts,
            single_qubit_gates,
            two_qubit_gates,
            multi_qubit_gates,
            measurements,
            barriers,
            resets,
            conditioned_gates,
        }
    }

    /// Total gate count (excluding measures, barriers and resets).
    pub fn total_gates(&self) -> usize {
        self.single_qubit_gates + self.two_qubit_gates + self.multi_qubit_gates
    }
}
