//! Shared helpers for CLI commands.

use std::sync::Arc;

use anyhow::Result;
use console::style;

use qward_adapter_sim::SimulatorBackend;
use qward_hal::Backend;
use qward_validators::{FlipCoinValidator, TeleportationValidator, ValidationRun, Validator};

/// Build a backend by name.
pub fn build_backend(name: &str, seed: Option<u64>) -> Result<Arc<dyn Backend>> {
    match name.to_lowercase().as_str() {
        "simulator" | "sim" => {
            let mut backend = SimulatorBackend::new();
            if let Some(seed) = seed {
                backend = backend.with_seed(seed);
            }
            Ok(Arc::new(backend))
        }
        other => {
            anyhow::bail!("Unknown backend: '{other}'. Available: simulator");
        }
    }
}

/// Build a validator by name.
///
/// Configuration errors surface here, before any backend is touched.
pub fn build_validator(
    name: &str,
    payload_size: u32,
    payload_gates: &str,
    barriers: bool,
) -> Result<Box<dyn Validator>> {
    match name.to_lowercase().as_str() {
        "teleportation" | "teleport" => {
            let gates = parse_gate_list(payload_gates);
            let validator = TeleportationValidator::new(payload_size, &gates, barriers)?;
            Ok(Box::new(validator))
        }
        "flip-coin" | "flip_coin" | "coin" => Ok(Box::new(FlipCoinValidator::new(barriers))),
        other => {
            anyhow::bail!("Unknown validator: '{other}'. Available: teleportation, flip-coin");
        }
    }
}

/// Split a comma-separated gate list, dropping empty entries.
pub fn parse_gate_list(gates: &str) -> Vec<String> {
    gates
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// Print a validation run as a human-readable table.
pub fn print_run(run: &ValidationRun) {
    let metrics = &run.metrics;

    println!();
    println!("{} {}", style("Circuit:").bold(), metrics.circuit_name);
    println!(
        "  {} qubits, {} clbits, depth {}, {} ops",
        metrics.structural.num_qubits,
        metrics.structural.num_clbits,
        metrics.structural.depth,
        metrics.structural.size,
    );

    println!("{}", style("Results:").bold());
    println!(
        "  Success rate: {}",
        style(format!("{:.2}%", metrics.execution.success_rate * 100.0)).green()
    );
    println!(
        "  Shots: {} ({} successful)",
        metrics.execution.total_shots, metrics.execution.successful_shots
    );
    if let Some(ms) = metrics.execution.execution_time_ms {
        println!("  Execution time: {ms} ms");
    }

    println!("{}", style("Counts:").bold());
    for (bitstring, count) in run.result.counts.sorted() {
        println!("  {bitstring}: {count}");
    }
}
