//! Structural invariants of circuit construction.

use proptest::prelude::*;

use qward_ir::{Circuit, ClbitId, QubitId};

proptest! {
    #[test]
    fn depth_never_exceeds_size(num_qubits in 1u32..10) {
        let circuit = Circuit::ghz(num_qubits).unwrap();
        prop_assert!(circuit.depth() <= circuit.size());
    }

    #[test]
    fn width_counts_both_wire_kinds(qubits in 0u32..8, clbits in 0u32..8) {
        let circuit = Circuit::with_size("wires", qubits, clbits);
        prop_assert_eq!(circuit.width(), (qubits + clbits) as usize);
    }

    #[test]
    fn serde_roundtrip_preserves_structure(num_qubits in 2u32..6) {
        let mut circuit = Circuit::ghz(num_qubits).unwrap();
        circuit.x_if(QubitId(0), ClbitId(0)).unwrap();

        let json = serde_json::to_string(&circuit).unwrap();
        let back: Circuit = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(back.num_qubits(), circuit.num_qubits());
        prop_assert_eq!(back.size(), circuit.size());
        prop_assert_eq!(back.depth(), circuit.depth());
        prop_assert_eq!(back.instructions(), circuit.instructions());
    }
}
