//! Backend capability descriptions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The set of gate names a backend can execute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSet {
    gates: BTreeSet<String>,
}

impl GateSet {
    /// Create an empty gate set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gate set from names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            gates: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a gate name is supported.
    pub fn contains(&self, name: &str) -> bool {
        self.gates.contains(name)
    }

    /// Iterate over supported gate names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.gates.iter().map(String::as_str)
    }

    /// Number of supported gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

/// Capabilities of a backend.
///
/// Cached at backend construction time; [`crate::Backend::capabilities`]
/// returns a reference without performing I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Maximum number of qubits.
    pub num_qubits: u32,
    /// Supported gate names.
    pub gate_set: GateSet,
    /// Whether this backend is a simulator.
    pub is_simulator: bool,
    /// Maximum shots per job.
    pub max_shots: u32,
    /// Whether classically-conditioned gates are supported.
    pub supports_conditional: bool,
}

impl Capabilities {
    /// Capabilities of a local statevector simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            gate_set: GateSet::from_names([
                "id", "x", "y", "z", "h", "s", "sdg", "t", "tdg", "rx", "ry", "rz", "p", "cx",
                "cy", "cz", "swap", "ccx",
            ]),
            is_simulator: true,
            max_shots: 1_000_000,
            supports_conditional: true,
        }
    }
}
