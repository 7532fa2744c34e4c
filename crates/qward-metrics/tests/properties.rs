//! Property tests for metric invariants.

use proptest::prelude::*;

use qward_hal::{Counts, ExecutionResult};
use qward_ir::Circuit;
use qward_metrics::{ExecutionMetrics, StructuralMetrics};

proptest! {
    #[test]
    fn success_rate_stays_in_unit_interval(
        zeros in 0u64..10_000,
        ones in 0u64..10_000,
    ) {
        prop_assume!(zeros + ones > 0);
        let counts: Counts = [("0".to_string(), zeros), ("1".to_string(), ones)]
            .into_iter()
            .filter(|(_, c)| *c > 0)
            .collect();
        let result = ExecutionResult::new(counts, (zeros + ones) as u32);

        let metrics = ExecutionMetrics::from_result(&result, |b| b == "1").unwrap();
        prop_assert!((0.0..=1.0).contains(&metrics.success_rate));
        prop_assert!((metrics.success_rate + metrics.error_rate - 1.0).abs() < 1e-9);
        prop_assert_eq!(metrics.successful_shots, ones);
    }

    #[test]
    fn structural_metrics_are_deterministic(num_qubits in 2u32..8) {
        let circuit = Circuit::ghz(num_qubits).unwrap();
        let a = StructuralMetrics::from_circuit(&circuit);
        let b = StructuralMetrics::from_circuit(&circuit);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn depth_never_exceeds_size(num_qubits in 2u32..8) {
        let circuit = Circuit::ghz(num_qubits).unwrap();
        prop_assert!(circuit.depth() <= circuit.size());
    }
}
