//! Quantum teleportation validator.
//!
//! Teleports a multi-qubit payload and checks that it arrives intact.
//! Each payload qubit gets its own Bell pair:
//!
//! ```text
//!   payload ──[prep]──●──H──M───────────────
//!                     │      │
//!   alice   ──H──●────X──────┼──M───────────
//!                │           │  │
//!   bob     ─────X───────────Z──X──[prep⁻¹]──M
//! ```
//!
//! After the corrections, bob's qubit holds the prepared payload
//! state. Applying the inverse preparation returns it to |0⟩, so a
//! successful teleportation measures every decoded bit as 0.

use serde::{Deserialize, Serialize};

use qward_ir::{Circuit, ClbitId, QubitId, StandardGate};

use crate::error::{ValidatorError, ValidatorResult};
use crate::validator::Validator;

/// Payload gate names accepted by the teleportation validator.
const SUPPORTED_PAYLOAD_GATES: &[&str] = &["i", "x", "y", "z", "h", "s", "sdg", "t", "tdg"];

/// Validates quantum teleportation of a multi-qubit payload.
///
/// Success predicate: every decoded payload bit reads 0, meaning the
/// payload state survived the teleportation and the inverse
/// preparation undid it exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeleportationValidator {
    /// Number of payload qubits.
    payload_size: u32,
    /// Preparation gates applied to each payload qubit, in order.
    payload_gates: Vec<StandardGate>,
    /// Whether to insert barriers between protocol phases.
    use_barriers: bool,
}

impl TeleportationValidator {
    /// Create a teleportation validator.
    ///
    /// `payload_gates` are gate names applied to each payload qubit
    /// before teleportation. Unknown names and a zero payload size are
    /// rejected here, before any circuit is built.
    pub fn new(
        payload_size: u32,
        payload_gates: &[impl AsRef<str>],
        use_barriers: bool,
    ) -> ValidatorResult<Self> {
        if payload_size == 0 {
            return Err(ValidatorError::Config(
                "payload size must be at least 1".into(),
            ));
        }
        let payload_gates = payload_gates
            .iter()
            .map(|name| parse_payload_gate(name.as_ref()))
            .collect::<ValidatorResult<Vec<_>>>()?;
        Ok(Self {
            payload_size,
            payload_gates,
            use_barriers,
        })
    }

    /// Number of payload qubits.
    pub fn payload_size(&self) -> u32 {
        self.payload_size
    }

    /// Qubit indices for payload qubit `i`: (payload, alice, bob).
    fn wires(&self, i: u32) -> (QubitId, QubitId, QubitId) {
        (QubitId(3 * i), QubitId(3 * i + 1), QubitId(3 * i + 2))
    }

    /// Clbit receiving the decoded payload bit `i`.
    ///
    /// Decode bits occupy the lowest clbit indices so they end up as
    /// the rightmost characters of the result bitstring.
    fn decode_clbit(&self, i: u32) -> ClbitId {
        ClbitId(i)
    }

    /// Clbits receiving the two correction measurements for qubit `i`.
    fn correction_clbits(&self, i: u32) -> (ClbitId, ClbitId) {
        (
            ClbitId(self.payload_size + 2 * i),
            ClbitId(self.payload_size + 2 * i + 1),
        )
    }
}

/// Parse a payload gate name into a single-qubit gate.
fn parse_payload_gate(name: &str) -> ValidatorResult<StandardGate> {
    let gate = match name {
        "i" | "id" => StandardGate::I,
        "x" => StandardGate::X,
        "y" => StandardGate::Y,
        "z" => StandardGate::Z,
        "h" => StandardGate::H,
        "s" => StandardGate::S,
        "sdg" => StandardGate::Sdg,
        "t" => StandardGate::T,
        "tdg" => StandardGate::Tdg,
        other => {
            return Err(ValidatorError::Config(format!(
                "unsupported payload gate '{other}' (supported: {})",
                SUPPORTED_PAYLOAD_GATES.join(", ")
            )));
        }
    };
    Ok(gate)
}

impl Validator for TeleportationValidator {
    fn name(&self) -> &str {
        "teleportation"
    }

    fn build_circuit(&self) -> ValidatorResult<Circuit> {
        // 3 qubits per payload qubit, 1 decode clbit + 2 correction
        // clbits per payload qubit.
        let mut circuit = Circuit::with_size(
            "teleportation",
            3 * self.payload_size,
            3 * self.payload_size,
        );

        // Payload preparation.
        for i in 0..self.payload_size {
            let (payload, _, _) = self.wires(i);
            for &gate in &self.payload_gates {
                circuit.apply(gate, &[payload])?;
            }
        }
        if self.use_barriers {
            circuit.barrier();
        }

        // One Bell pair per payload qubit.
        for i in 0..self.payload_size {
            let (_, alice, bob) = self.wires(i);
            circuit.h(alice)?;
            circuit.cx(alice, bob)?;
        }
        if self.use_barriers {
            circuit.barrier();
        }

        // Bell measurement on the sending side.
        for i in 0..self.payload_size {
            let (payload, alice, _) = self.wires(i);
            let (m_payload, m_alice) = self.correction_clbits(i);
            circuit.cx(payload, alice)?;
            circuit.h(payload)?;
            circuit.measure(payload, m_payload)?;
            circuit.measure(alice, m_alice)?;
        }
        if self.use_barriers {
            circuit.barrier();
        }

        // Feed-forward corrections on the receiving side.
        for i in 0..self.payload_size {
            let (_, _, bob) = self.wires(i);
            let (m_payload, m_alice) = self.correction_clbits(i);
            circuit.x_if(bob, m_alice)?;
            circuit.z_if(bob, m_payload)?;
        }
        if self.use_barriers {
            circuit.barrier();
        }

        // Decode: undo the preparation and measure. An intact payload
        // returns to |0⟩.
        for i in 0..self.payload_size {
            let (_, _, bob) = self.wires(i);
            for &gate in self.payload_gates.iter().rev() {
                circuit.apply(gate.inverse(), &[bob])?;
            }
            circuit.measure(bob, self.decode_clbit(i))?;
        }

        Ok(circuit)
    }

    fn classify_outcome(&self, bitstring: &str) -> bool {
        let n = self.payload_size as usize;
        if bitstring.len() < n {
            return false;
        }
        bitstring[bitstring.len() - n..].chars().all(|c| c == '0')
    }
}
