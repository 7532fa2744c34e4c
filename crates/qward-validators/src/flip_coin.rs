//! Coin-flip validator.

use serde::{Deserialize, Serialize};

use qward_ir::{Circuit, ClbitId, QubitId};

use crate::error::ValidatorResult;
use crate::validator::Validator;

/// Validates a fair quantum coin flip: H then measure.
///
/// Success is defined as tails, bitstring `"1"`. Over many shots the
/// success rate converges to 0.5.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlipCoinValidator {
    /// Whether to insert a barrier between the flip and the measurement.
    use_barriers: bool,
}

impl FlipCoinValidator {
    /// Create a coin-flip validator.
    pub fn new(use_barriers: bool) -> Self {
        Self { use_barriers }
    }
}

impl Validator for FlipCoinValidator {
    fn name(&self) -> &str {
        "flip_coin"
    }

    fn build_circuit(&self) -> ValidatorResult<Circuit> {
        let mut circuit = Circuit::with_size("flip_coin", 1, 1);
        circuit.h(QubitId(0))?;
        if self.use_barriers {
            circuit.barrier();
        }
        circuit.measure(QubitId(0), ClbitId(0))?;
        Ok(circuit)
    }

    fn classify_outcome(&self, bitstring: &str) -> bool {
        bitstring == "1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qward_adapter_sim::SimulatorBackend;

    use crate::validator::run_validator;

    #[test]
    fn test_circuit_shape() {
        let circuit = FlipCoinValidator::new(false).build_circuit().unwrap();
        assert_eq!(circuit.num_qubits(), 1);
        assert_eq!(circuit.num_clbits(), 1);
        assert_eq!(circuit.size(), 2);
    }

    #[test]
    fn test_classification() {
        let validator = FlipCoinValidator::new(false);
        assert!(validator.classify_outcome("1"));
        assert!(!validator.classify_outcome("0"));
    }

    #[tokio::test]
    async fn test_coin_is_roughly_fair() {
        let validator = FlipCoinValidator::new(true);
        let backend = SimulatorBackend::new();

        let run = run_validator(&validator, &backend, 4000).await.unwrap();
        let rate = run.metrics.execution.success_rate;
        // 4000 shots put the rate well inside [0.4, 0.6]
        assert!((0.4..=0.6).contains(&rate), "rate was {rate}");
    }
}
