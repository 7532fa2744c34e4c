//! Summary statistics over a sweep.

use serde::{Deserialize, Serialize};

use crate::record::ExperimentRecord;

/// Aggregate statistics over the successful records of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSummary {
    /// Total number of combinations.
    pub total: usize,
    /// Combinations that produced metrics.
    pub succeeded: usize,
    /// Combinations that recorded an error.
    pub failed: usize,
    /// Mean success rate over successful combinations.
    pub mean_success_rate: Option<f64>,
    /// Population standard deviation of the success rate.
    pub std_success_rate: Option<f64>,
    /// Lowest observed success rate.
    pub min_success_rate: Option<f64>,
    /// Highest observed success rate.
    pub max_success_rate: Option<f64>,
}

impl SweepSummary {
    /// Compute summary statistics from sweep records.
    pub fn from_records(records: &[ExperimentRecord]) -> Self {
        let rates: Vec<f64> = records
            .iter()
            .filter_map(ExperimentRecord::success_rate)
            .collect();
        let succeeded = rates.len();
        let failed = records.len() - succeeded;

        let (mean, std, min, max) = if rates.is_empty() {
            (None, None, None, None)
        } else {
            let n = rates.len() as f64;
            let mean = rates.iter().sum::<f64>() / n;
            let variance = rates.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
            let min = rates.iter().copied().fold(f64::INFINITY, f64::min);
            let max = rates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (Some(mean), Some(variance.sqrt()), Some(min), Some(max))
        };

        Self {
            total: records.len(),
            succeeded,
            failed,
            mean_success_rate: mean,
            std_success_rate: std,
            min_success_rate: min,
            max_success_rate: max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ParameterSet;
    use crate::record::ExperimentOutcome;

    use qward_hal::{Counts, ExecutionResult};
    use qward_ir::Circuit;

    fn record_with_rate(index: usize, successes: u64, shots: u64) -> ExperimentRecord {
        let circuit = Circuit::bell().unwrap();
        let counts: Counts = [
            ("1".to_string(), successes),
            ("0".to_string(), shots - successes),
        ]
        .into_iter()
        .filter(|(_, c)| *c > 0)
        .collect();
        let result = ExecutionResult::new(counts, shots as u32);
        let metrics = qward_metrics::collect(&circuit, &result, |b| b == "1").unwrap();
        ExperimentRecord {
            index,
            params: ParameterSet::new(),
            backend: "simulator".to_string(),
            shots: shots as u32,
            outcome: ExperimentOutcome::Metrics(metrics),
        }
    }

    #[test]
    fn test_summary_statistics() {
        let records = vec![
            record_with_rate(0, 40, 100),
            record_with_rate(1, 60, 100),
        ];
        let summary = SweepSummary::from_records(&records);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 0);
        assert!((summary.mean_success_rate.unwrap() - 0.5).abs() < 1e-12);
        assert!((summary.std_success_rate.unwrap() - 0.1).abs() < 1e-12);
        assert_eq!(summary.min_success_rate, Some(0.4));
        assert_eq!(summary.max_success_rate, Some(0.6));
    }

    #[test]
    fn test_summary_of_empty_sweep() {
        let summary = SweepSummary::from_records(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.mean_success_rate.is_none());
    }
}
