//! High-level circuit builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Condition, Instruction, InstructionKind};
use crate::qubit::{Clbit, ClbitId, Qubit, QubitId};

/// A quantum circuit specification.
///
/// This provides a high-level API for building validator circuits,
/// with convenient methods for common gates and operations. The
/// instruction sequence is ordered; validators construct a circuit
/// once and hand it to a backend unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Qubits in the circuit.
    qubits: Vec<Qubit>,
    /// Classical bits in the circuit.
    clbits: Vec<Clbit>,
    /// Ordered instruction sequence.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            clbits: vec![],
            instructions: vec![],
        }
    }

    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        let mut circuit = Self::new(name);
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        for _ in 0..num_clbits {
            circuit.add_clbit();
        }
        circuit
    }

    /// Get the name of the circuit.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.qubits.len() as u32);
        self.qubits.push(Qubit::new(id));
        id
    }

    /// Add a quantum register with multiple qubits.
    pub fn add_qreg(&mut self, name: impl Into<String>, size: u32) -> Vec<QubitId> {
        let name = name.into();
        let mut ids = vec![];
        for i in 0..size {
            let id = QubitId(self.qubits.len() as u32);
            self.qubits.push(Qubit::with_register(id, &name, i));
            ids.push(id);
        }
        ids
    }

    /// Add a single classical bit to the circuit.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = ClbitId(self.clbits.len() as u32);
        self.clbits.push(Clbit::new(id));
        id
    }

    /// Add a classical register with multiple bits.
    pub fn add_creg(&mut self, name: impl Into<String>, size: u32) -> Vec<ClbitId> {
        let name = name.into();
        let mut ids = vec![];
        for i in 0..size {
            let id = ClbitId(self.clbits.len() as u32);
            self.clbits.push(Clbit::with_register(id, &name, i));
            ids.push(id);
        }
        ids
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::H, &[qubit])
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::X, &[qubit])
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::Y, &[qubit])
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::Z, &[qubit])
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::S, &[qubit])
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::Sdg, &[qubit])
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::T, &[qubit])
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::Tdg, &[qubit])
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::Rx(theta), &[qubit])
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::Ry(theta), &[qubit])
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::Rz(theta), &[qubit])
    }

    /// Apply phase gate.
    pub fn p(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::P(theta), &[qubit])
    }

    // =========================================================================
    // Multi-qubit gates
    // =========================================================================

    /// Apply CNOT gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::CX, &[control, target])
    }

    /// Apply controlled-Y gate.
    pub fn cy(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::CY, &[control, target])
    }

    /// Apply controlled-Z gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::CZ, &[control, target])
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::Swap, &[q1, q2])
    }

    /// Apply Toffoli gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(StandardGate::CCX, &[c1, c2, target])
    }

    // =========================================================================
    // Conditioned gates
    // =========================================================================

    /// Apply Pauli-X conditioned on a classical bit reading 1.
    pub fn x_if(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.apply_conditioned(StandardGate::X, &[qubit], Condition::on_one(clbit))
    }

    /// Apply Pauli-Z conditioned on a classical bit reading 1.
    pub fn z_if(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.apply_conditioned(StandardGate::Z, &[qubit], Condition::on_one(clbit))
    }

    /// Apply a gate conditioned on a classical bit.
    pub fn apply_conditioned(
        &mut self,
        gate: StandardGate,
        qubits: &[QubitId],
        condition: Condition,
    ) -> IrResult<&mut Self> {
        self.check_clbit(condition.clbit, Some(gate.name()))?;
        self.check_gate_operands(gate, qubits)?;
        self.instructions
            .push(Instruction::gate(gate, qubits.iter().copied()).with_condition(condition));
        Ok(self)
    }

    // =========================================================================
    // Non-gate operations
    // =========================================================================

    /// Apply a gate to the given qubits.
    pub fn apply(&mut self, gate: StandardGate, qubits: &[QubitId]) -> IrResult<&mut Self> {
        self.check_gate_operands(gate, qubits)?;
        self.instructions
            .push(Instruction::gate(gate, qubits.iter().copied()));
        Ok(self)
    }

    /// Measure a qubit into a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.check_qubit(qubit, Some("measure"))?;
        self.check_clbit(clbit, Some("measure"))?;
        self.instructions.push(Instruction::measure(qubit, clbit));
        Ok(self)
    }

    /// Measure each qubit into the corresponding classical bit.
    ///
    /// Returns an error if the operand counts do not match.
    pub fn measure_all(&mut self, qubits: &[QubitId], clbits: &[ClbitId]) -> IrResult<&mut Self> {
        if qubits.len() != clbits.len() {
            return Err(IrError::MeasureOperandMismatch {
                qubits: qubits.len(),
                clbits: clbits.len(),
            });
        }
        for (&q, &c) in qubits.iter().zip(clbits) {
            self.measure(q, c)?;
        }
        Ok(self)
    }

    /// Reset a qubit to |0⟩.
    pub fn reset(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.check_qubit(qubit, Some("reset"))?;
        self.instructions.push(Instruction::reset(qubit));
        Ok(self)
    }

    /// Add a barrier across all qubits.
    pub fn barrier(&mut self) -> &mut Self {
        let qubits: Vec<_> = self.qubits.iter().map(|q| q.id).collect();
        self.instructions.push(Instruction::barrier(qubits));
        self
    }

    /// Add a barrier across specific qubits.
    pub fn barrier_on(&mut self, qubits: &[QubitId]) -> IrResult<&mut Self> {
        for &q in qubits {
            self.check_qubit(q, Some("barrier"))?;
        }
        self.instructions
            .push(Instruction::barrier(qubits.iter().copied()));
        Ok(self)
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.clbits.len()
    }

    /// Circuit width: qubits plus classical bits.
    pub fn width(&self) -> usize {
        self.qubits.len() + self.clbits.len()
    }

    /// Total operation count, barriers excluded.
    pub fn size(&self) -> usize {
        self.instructions
            .iter()
            .filter(|inst| !inst.is_barrier())
            .count()
    }

    /// Circuit depth: the longest chain of operations on any wire.
    ///
    /// Barriers contribute nothing. A conditioned gate depends on the
    /// classical wire it reads, so feed-forward corrections serialize
    /// behind the measurement that produced the bit.
    pub fn depth(&self) -> usize {
        let mut qubit_depth = vec![0usize; self.qubits.len()];
        let mut clbit_depth = vec![0usize; self.clbits.len()];
        let mut max_depth = 0usize;

        for inst in &self.instructions {
            if inst.is_barrier() {
                continue;
            }
            let mut d = 0usize;
            for q in &inst.qubits {
                d = d.max(qubit_depth[q.0 as usize]);
            }
            for c in &inst.clbits {
                d = d.max(clbit_depth[c.0 as usize]);
            }
            if let Some(cond) = inst.condition {
                d = d.max(clbit_depth[cond.clbit.0 as usize]);
            }
            let d = d + 1;
            for q in &inst.qubits {
                qubit_depth[q.0 as usize] = d;
            }
            for c in &inst.clbits {
                clbit_depth[c.0 as usize] = d;
            }
            if let Some(cond) = inst.condition {
                clbit_depth[cond.clbit.0 as usize] = d;
            }
            max_depth = max_depth.max(d);
        }

        max_depth
    }

    /// Iterate over the instruction sequence in order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Get the qubits of the circuit.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Get the classical bits of the circuit.
    pub fn clbits(&self) -> &[Clbit] {
        &self.clbits
    }

    /// Check whether the circuit contains any measurement.
    pub fn has_measurements(&self) -> bool {
        self.instructions.iter().any(Instruction::is_measure)
    }

    /// Names of all gates used, for capability checks.
    pub fn gate_names(&self) -> impl Iterator<Item = &str> {
        self.instructions.iter().filter_map(|inst| {
            if let InstructionKind::Gate(g) = &inst.kind {
                Some(g.name())
            } else {
                None
            }
        })
    }

    // =========================================================================
    // Validation helpers
    // =========================================================================

    fn check_qubit(&self, qubit: QubitId, gate_name: Option<&str>) -> IrResult<()> {
        if (qubit.0 as usize) < self.qubits.len() {
            Ok(())
        } else {
            Err(IrError::QubitNotFound {
                qubit,
                gate_name: gate_name.map(str::to_string),
            })
        }
    }

    fn check_clbit(&self, clbit: ClbitId, gate_name: Option<&str>) -> IrResult<()> {
        if (clbit.0 as usize) < self.clbits.len() {
            Ok(())
        } else {
            Err(IrError::ClbitNotFound {
                clbit,
                gate_name: gate_name.map(str::to_string),
            })
        }
    }

    fn check_gate_operands(&self, gate: StandardGate, qubits: &[QubitId]) -> IrResult<()> {
        if qubits.len() as u32 != gate.num_qubits() {
            return Err(IrError::QubitCountMismatch {
                gate_name: gate.name().to_string(),
                expected: gate.num_qubits(),
                got: qubits.len() as u32,
            });
        }
        for (i, &q) in qubits.iter().enumerate() {
            self.check_qubit(q, Some(gate.name()))?;
            if qubits[..i].contains(&q) {
                return Err(IrError::DuplicateQubit {
                    qubit: q,
                    gate_name: Some(gate.name().to_string()),
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Reference circuits
    // =========================================================================

    /// Create a Bell state preparation circuit with measurement.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_size("bell", 2, 2);
        circuit.h(QubitId(0))?;
        circuit.cx(QubitId(0), QubitId(1))?;
        circuit.measure(QubitId(0), ClbitId(0))?;
        circuit.measure(QubitId(1), ClbitId(1))?;
        Ok(circuit)
    }

    /// Create a GHZ state preparation circuit with measurement.
    pub fn ghz(num_qubits: u32) -> IrResult<Self> {
        let mut circuit = Self::with_size("ghz", num_qubits, num_qubits);
        circuit.h(QubitId(0))?;
        for q in 1..num_qubits {
            circuit.cx(QubitId(q - 1), QubitId(q))?;
        }
        for q in 0..num_qubits {
            circuit.measure(QubitId(q), ClbitId(q))?;
        }
        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_circuit() {
        let circuit = Circuit::new("empty");
        assert_eq!(circuit.num_qubits(), 0);
        assert_eq!(circuit.depth(), 0);
        assert_eq!(circuit.size(), 0);
    }

    #[test]
    fn test_bell_metrics() {
        let circuit = Circuit::bell().unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(circuit.width(), 4);
        // h, cx, 2x measure
        assert_eq!(circuit.size(), 4);
        // h -> cx -> measure on the q0 wire
        assert_eq!(circuit.depth(), 3);
    }

    #[test]
    fn test_barrier_does_not_affect_depth_or_size() {
        let mut circuit = Circuit::with_size("barriers", 1, 1);
        circuit.h(QubitId(0)).unwrap();
        circuit.barrier();
        circuit.measure(QubitId(0), ClbitId(0)).unwrap();
        assert_eq!(circuit.size(), 2);
        assert_eq!(circuit.depth(), 2);
    }

    #[test]
    fn test_depth_parallel_wires() {
        let mut circuit = Circuit::with_size("parallel", 2, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.h(QubitId(1)).unwrap();
        // Independent wires: depth stays 1
        assert_eq!(circuit.depth(), 1);
        circuit.cx(QubitId(0), QubitId(1)).unwrap();
        assert_eq!(circuit.depth(), 2);
    }

    #[test]
    fn test_conditioned_gate_serializes_behind_measurement() {
        let mut circuit = Circuit::with_size("feedforward", 2, 1);
        circuit.h(QubitId(0)).unwrap();
        circuit.measure(QubitId(0), ClbitId(0)).unwrap();
        circuit.x_if(QubitId(1), ClbitId(0)).unwrap();
        // h -> measure -> conditioned x
        assert_eq!(circuit.depth(), 3);
    }

    #[test]
    fn test_unknown_qubit_rejected() {
        let mut circuit = Circuit::with_size("bad", 1, 0);
        let err = circuit.h(QubitId(5)).unwrap_err();
        assert!(matches!(err, IrError::QubitNotFound { .. }));
    }

    #[test]
    fn test_duplicate_qubit_rejected() {
        let mut circuit = Circuit::with_size("dup", 2, 0);
        let err = circuit.cx(QubitId(0), QubitId(0)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn test_measure_all_mismatch() {
        let mut circuit = Circuit::with_size("mismatch", 2, 1);
        let err = circuit
            .measure_all(&[QubitId(0), QubitId(1)], &[ClbitId(0)])
            .unwrap_err();
        assert!(matches!(err, IrError::MeasureOperandMismatch { .. }));
    }

    #[test]
    fn test_ghz_structure() {
        let circuit = Circuit::ghz(3).unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.size(), 6); // h + 2 cx + 3 measure
        assert!(circuit.has_measurements());
    }

    #[test]
    fn test_gate_names_iterator() {
        let circuit = Circuit::bell().unwrap();
        let names: Vec<_> = circuit.gate_names().collect();
        assert_eq!(names, vec!["h", "cx"]);
    }
}
