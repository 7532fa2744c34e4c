//! Sweep command implementation.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use console::style;

use qward_runner::{
    run_sweep, ExperimentOutcome, ParameterGrid, ParameterSet, ParameterValue, RunnerError,
    SweepConfig, SweepSummary,
};
use qward_validators::{FlipCoinValidator, TeleportationValidator, Validator, ValidatorError};

use super::common::{build_backend, parse_gate_list};

/// Execute the sweep command.
#[allow(clippy::too_many_arguments)]
pub async fn execute(
    validator: &str,
    params: &[String],
    shots: u32,
    backend: &str,
    concurrency: usize,
    timeout: Option<u64>,
    payload_gates: &str,
    barriers: bool,
    seed: Option<u64>,
    csv: Option<&str>,
    json: Option<&str>,
) -> Result<()> {
    let validator_name = validator.to_lowercase();
    let allowed_params: &[&str] = match validator_name.as_str() {
        "teleportation" | "teleport" => &["payload_size", "barriers"],
        "flip-coin" | "flip_coin" | "coin" => &["barriers"],
        other => {
            anyhow::bail!("Unknown validator: '{other}'. Available: teleportation, flip-coin");
        }
    };

    let grid = parse_grid(params, allowed_params)?;
    let backend_impl = build_backend(backend, seed)?;

    println!(
        "{} Sweeping {} over {} combinations on {} ({} shots each)",
        style("→").cyan().bold(),
        style(&validator_name).green(),
        grid.num_combinations(),
        style(backend_impl.name()).yellow(),
        shots
    );

    let gates = parse_gate_list(payload_gates);
    let factory = move |params: &ParameterSet| -> Result<Box<dyn Validator>, ValidatorError> {
        let use_barriers = params
            .get("barriers")
            .and_then(ParameterValue::as_bool)
            .unwrap_or(barriers);
        match validator_name.as_str() {
            "teleportation" | "teleport" => {
                let payload_size = match params.get("payload_size") {
                    Some(value) => value.as_int().ok_or_else(|| {
                        ValidatorError::Config("payload_size must be an integer".into())
                    })?,
                    None => 1,
                };
                let payload_size = u32::try_from(payload_size).map_err(|_| {
                    ValidatorError::Config("payload_size must be non-negative".into())
                })?;
                let validator = TeleportationValidator::new(payload_size, &gates, use_barriers)?;
                Ok(Box::new(validator) as Box<dyn Validator>)
            }
            _ => Ok(Box::new(FlipCoinValidator::new(use_barriers)) as Box<dyn Validator>),
        }
    };

    let records = run_sweep(
        Arc::new(factory),
        backend_impl,
        &grid,
        SweepConfig {
            shots,
            max_concurrency: concurrency,
            job_timeout: timeout.map(Duration::from_secs),
        },
    )
    .await?;

    // Per-combination lines
    for record in &records {
        let params: Vec<String> = record
            .params
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        match &record.outcome {
            ExperimentOutcome::Metrics(metrics) => {
                println!(
                    "  {} [{}] success rate {:.2}%",
                    style("●").green(),
                    params.join(", "),
                    metrics.execution.success_rate * 100.0
                );
            }
            ExperimentOutcome::Failed { kind, message } => {
                println!(
                    "  {} [{}] {kind} error: {message}",
                    style("○").red(),
                    params.join(", "),
                );
            }
        }
    }

    let summary = SweepSummary::from_records(&records);
    println!();
    println!(
        "{} {} ok, {} failed",
        style("Summary:").bold(),
        summary.succeeded,
        summary.failed
    );
    if let (Some(mean), Some(std), Some(min), Some(max)) = (
        summary.mean_success_rate,
        summary.std_success_rate,
        summary.min_success_rate,
        summary.max_success_rate,
    ) {
        println!(
            "  Success rate: mean {:.4}, std {:.4}, min {:.4}, max {:.4}",
            mean, std, min, max
        );
    }

    if let Some(path) = csv {
        qward_runner::write_csv(&records, path)?;
        println!("  Wrote {}", style(path).cyan());
    }
    if let Some(path) = json {
        qward_runner::write_json(&records, path)?;
        println!("  Wrote {}", style(path).cyan());
    }

    Ok(())
}

/// Parse `name=v1,v2,...` axis specs into a grid.
fn parse_grid(specs: &[String], allowed: &[&str]) -> Result<ParameterGrid> {
    let mut grid = ParameterGrid::new();
    for spec in specs {
        let (name, values) = spec
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Invalid parameter spec '{spec}' (want name=v1,v2)"))?;
        if !allowed.contains(&name) {
            return Err(RunnerError::UnknownParameter(name.to_string()).into());
        }
        let values: Vec<ParameterValue> = values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(parse_value)
            .collect();
        grid = grid.axis(name, values)?;
    }
    Ok(grid)
}

/// Parse a single value, preferring the narrowest type.
fn parse_value(raw: &str) -> ParameterValue {
    if let Ok(v) = raw.parse::<i64>() {
        return v.into();
    }
    if let Ok(v) = raw.parse::<f64>() {
        return v.into();
    }
    if let Ok(v) = raw.parse::<bool>() {
        return v.into();
    }
    raw.into()
}
