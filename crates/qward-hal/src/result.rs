//! Execution results and measurement counts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::job::JobId;

/// Measurement counts: bitstring → number of occurrences.
///
/// Bitstrings follow the convention of the classical register with
/// clbit 0 rightmost, so `"01"` means c1 = 0, c0 = 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    counts: FxHashMap<String, u64>,
}

impl Counts {
    /// Create an empty counts map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add occurrences of a bitstring.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Get the count for a bitstring (0 if absent).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of recorded shots.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct outcomes observed.
    pub fn num_outcomes(&self) -> usize {
        self.counts.len()
    }

    /// Check if no outcome has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The most frequent outcome, if any.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(bitstring, &count)| (bitstring.as_str(), count))
    }

    /// Iterate over (bitstring, count) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Outcomes sorted by bitstring, for deterministic reporting.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(bitstring, _)| *bitstring);
        entries
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        let mut counts = Counts::new();
        for (bitstring, count) in iter {
            counts.insert(bitstring, count);
        }
        counts
    }
}

/// Result of executing a circuit on a backend.
///
/// Produced once per run and owned by the caller; backends hand out
/// clones and never mutate a result after completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Raw measurement counts.
    pub counts: Counts,
    /// Number of shots requested.
    pub shots: u32,
    /// Backend that produced the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    /// Job that produced the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<JobId>,
    /// Wall-clock execution time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
    /// Time spent queued before execution, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            backend: None,
            job_id: None,
            execution_time_ms: None,
            queue_time_ms: None,
        }
    }

    /// Set the backend name.
    pub fn with_backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = Some(backend.into());
        self
    }

    /// Set the job id.
    pub fn with_job_id(mut self, job_id: JobId) -> Self {
        self.job_id = Some(job_id);
        self
    }

    /// Set the execution time.
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }

    /// Set the queue time.
    pub fn with_queue_time(mut self, millis: u64) -> Self {
        self.queue_time_ms = Some(millis);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_insert_accumulates() {
        let mut counts = Counts::new();
        counts.insert("00", 1);
        counts.insert("00", 2);
        counts.insert("11", 5);
        assert_eq!(counts.get("00"), 3);
        assert_eq!(counts.get("11"), 5);
        assert_eq!(counts.get("01"), 0);
        assert_eq!(counts.total(), 8);
        assert_eq!(counts.num_outcomes(), 2);
    }

    #[test]
    fn test_most_frequent() {
        let counts: Counts = [("0".to_string(), 700u64), ("1".to_string(), 300u64)]
            .into_iter()
            .collect();
        assert_eq!(counts.most_frequent(), Some(("0", 700)));
    }

    #[test]
    fn test_most_frequent_tie_is_deterministic() {
        let counts: Counts = [("0".to_string(), 5u64), ("1".to_string(), 5u64)]
            .into_iter()
            .collect();
        // Ties break toward the lexicographically smaller bitstring.
        assert_eq!(counts.most_frequent(), Some(("0", 5)));
    }

    #[test]
    fn test_sorted_order() {
        let counts: Counts = [
            ("10".to_string(), 1u64),
            ("00".to_string(), 2u64),
            ("01".to_string(), 3u64),
        ]
        .into_iter()
        .collect();
        let sorted = counts.sorted();
        let keys: Vec<_> = sorted.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["00", "01", "10"]);
    }

    #[test]
    fn test_execution_result_builder() {
        let mut counts = Counts::new();
        counts.insert("0", 10);
        let result = ExecutionResult::new(counts, 10)
            .with_backend("simulator")
            .with_execution_time(12)
            .with_queue_time(0);
        assert_eq!(result.shots, 10);
        assert_eq!(result.backend.as_deref(), Some("simulator"));
        assert_eq!(result.execution_time_ms, Some(12));
        assert_eq!(result.queue_time_ms, Some(0));
    }
}
