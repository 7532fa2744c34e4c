//! Execution metrics derived from measurement counts.

use serde::{Deserialize, Serialize};

use qward_hal::ExecutionResult;

use crate::error::{MetricsError, MetricsResult};

/// Metrics derived from one execution result and a success predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionMetrics {
    /// Total number of shots.
    pub total_shots: u64,
    /// Shots whose outcome the predicate classified as success.
    pub successful_shots: u64,
    /// Fraction of successful shots, in [0, 1].
    pub success_rate: f64,
    /// Fraction of failed shots, in [0, 1].
    pub error_rate: f64,
    /// Number of distinct outcomes observed.
    pub num_outcomes: usize,
    /// Wall-clock execution time, if the backend reported it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
    /// Queue time, if the backend reported it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_time_ms: Option<u64>,
}

impl ExecutionMetrics {
    /// Derive metrics from an execution result.
    ///
    /// `is_success` classifies each observed bitstring. Fails with
    /// [`MetricsError::ZeroShots`] on an empty run and
    /// [`MetricsError::CountMismatch`] when the counts disagree with
    /// the declared shot total.
    pub fn from_result(
        result: &ExecutionResult,
        is_success: impl Fn(&str) -> bool,
    ) -> MetricsResult<Self> {
        if result.shots == 0 {
            return Err(MetricsError::ZeroShots);
        }
        let total = result.counts.total();
        if total != u64::from(result.shots) {
            return Err(MetricsError::CountMismatch {
                expected: u64::from(result.shots),
                actual: total,
            });
        }

        let successful_shots: u64 = result
            .counts
            .iter()
            .filter(|(bitstring, _)| is_success(bitstring))
            .map(|(_, count)| count)
            .sum();

        let success_rate = successful_shots as f64 / total as f64;

        Ok(Self {
            total_shots: total,
            successful_shots,
            success_rate,
            error_rate: 1.0 - success_rate,
            num_outcomes: result.counts.num_outcomes(),
            execution_time_ms: result.execution_time_ms,
            queue_time_ms: result.queue_time_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qward_hal::Counts;

    fn result_with(counts: &[(&str, u64)], shots: u32) -> ExecutionResult {
        let counts: Counts = counts
            .iter()
            .map(|(k, v)| ((*k).to_string(), *v))
            .collect();
        ExecutionResult::new(counts, shots)
    }

    #[test]
    fn test_success_rate_mixed() {
        let result = result_with(&[("0", 700), ("1", 300)], 1000);
        let metrics = ExecutionMetrics::from_result(&result, |b| b == "1").unwrap();
        assert_eq!(metrics.successful_shots, 300);
        assert!((metrics.success_rate - 0.3).abs() < 1e-12);
        assert!((metrics.error_rate - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_all_success_is_one() {
        let result = result_with(&[("1", 100)], 100);
        let metrics = ExecutionMetrics::from_result(&result, |b| b == "1").unwrap();
        assert_eq!(metrics.success_rate, 1.0);
        assert_eq!(metrics.error_rate, 0.0);
    }

    #[test]
    fn test_all_failure_is_zero() {
        let result = result_with(&[("0", 100)], 100);
        let metrics = ExecutionMetrics::from_result(&result, |b| b == "1").unwrap();
        assert_eq!(metrics.success_rate, 0.0);
        assert_eq!(metrics.error_rate, 1.0);
    }

    #[test]
    fn test_zero_shots_is_an_error() {
        let result = result_with(&[], 0);
        let err = ExecutionMetrics::from_result(&result, |_| true).unwrap_err();
        assert!(matches!(err, MetricsError::ZeroShots));
    }

    #[test]
    fn test_count_mismatch_is_an_error() {
        let result = result_with(&[("0", 90)], 100);
        let err = ExecutionMetrics::from_result(&result, |_| true).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::CountMismatch {
                expected: 100,
                actual: 90
            }
        ));
    }
}
