//! CSV and JSON export of sweep results.

use std::fs;
use std::path::Path;

use crate::error::RunnerResult;
use crate::record::{ExperimentOutcome, ExperimentRecord};

/// Fixed metric columns appended after the parameter columns.
const METRIC_COLUMNS: &[&str] = &[
    "backend",
    "shots",
    "num_qubits",
    "num_clbits",
    "depth",
    "width",
    "size",
    "success_rate",
    "error_rate",
    "successful_shots",
    "execution_time_ms",
    "queue_time_ms",
    "error",
];

/// Render sweep records as CSV, one row per record.
///
/// Columns are the parameter names of the first record (axis order)
/// followed by the metric columns. Failed combinations leave the
/// metric cells empty and carry `kind: message` in the error column.
pub fn csv_string(records: &[ExperimentRecord]) -> String {
    let param_names: Vec<&str> = records
        .first()
        .map(|r| r.params.names().collect())
        .unwrap_or_default();

    let mut out = String::new();

    // Header
    let mut header: Vec<&str> = vec!["index"];
    header.extend(&param_names);
    header.extend(METRIC_COLUMNS);
    push_row(&mut out, header.iter().map(|s| (*s).to_string()));

    for record in records {
        let mut row: Vec<String> = vec![record.index.to_string()];
        for name in &param_names {
            row.push(
                record
                    .params
                    .get(name)
                    .map(ToString::to_string)
                    .unwrap_or_default(),
            );
        }
        row.push(record.backend.clone());
        row.push(record.shots.to_string());

        match &record.outcome {
            ExperimentOutcome::Metrics(metrics) => {
                let s = &metrics.structural;
                let e = &metrics.execution;
                row.push(s.num_qubits.to_string());
                row.push(s.num_clbits.to_string());
                row.push(s.depth.to_string());
                row.push(s.width.to_string());
                row.push(s.size.to_string());
                row.push(e.success_rate.to_string());
                row.push(e.error_rate.to_string());
                row.push(e.successful_shots.to_string());
                row.push(optional(e.execution_time_ms));
                row.push(optional(e.queue_time_ms));
                row.push(String::new());
            }
            ExperimentOutcome::Failed { kind, message } => {
                for _ in 0..10 {
                    row.push(String::new());
                }
                row.push(format!("{kind}: {message}"));
            }
        }
        push_row(&mut out, row.into_iter());
    }

    out
}

/// Write sweep records to a CSV file.
pub fn write_csv(records: &[ExperimentRecord], path: impl AsRef<Path>) -> RunnerResult<()> {
    fs::write(path, csv_string(records))?;
    Ok(())
}

/// Render sweep records as pretty-printed JSON.
pub fn json_string(records: &[ExperimentRecord]) -> RunnerResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write sweep records to a JSON file.
pub fn write_json(records: &[ExperimentRecord], path: impl AsRef<Path>) -> RunnerResult<()> {
    fs::write(path, json_string(records)?)?;
    Ok(())
}

fn optional(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn push_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape(&field));
    }
    out.push_str("\r\n");
}

/// Quote a field per RFC 4180 when it contains a delimiter, quote or
/// line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ParameterSet;

    fn failed_record(index: usize) -> ExperimentRecord {
        let mut params = ParameterSet::new();
        params.insert("payload_size", 0i64);
        ExperimentRecord {
            index,
            params,
            backend: "simulator".to_string(),
            shots: 100,
            outcome: ExperimentOutcome::Failed {
                kind: "config".to_string(),
                message: "payload size must be at least 1".to_string(),
            },
        }
    }

    #[test]
    fn test_header_includes_parameters() {
        let csv = csv_string(&[failed_record(0)]);
        let header = csv.lines().next().unwrap();
        assert!(header.starts_with("index,payload_size,backend,shots,"));
        assert!(header.ends_with("error"));
    }

    #[test]
    fn test_failed_row_has_error_marker() {
        let csv = csv_string(&[failed_record(0)]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("config: "));
    }

    #[test]
    fn test_escape_quotes_and_commas() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_empty_records_yield_header_only() {
        let csv = csv_string(&[]);
        assert_eq!(csv.lines().count(), 1);
    }
}
