//! Run command implementation.

use anyhow::Result;
use console::style;

use qward_validators::run_validator;

use super::common::{build_backend, build_validator, print_run};

/// Execute the run command.
#[allow(clippy::too_many_arguments)]
pub async fn execute(
    validator: &str,
    shots: u32,
    backend: &str,
    payload_size: u32,
    payload_gates: &str,
    barriers: bool,
    seed: Option<u64>,
    format: &str,
) -> Result<()> {
    // Validator configuration is checked before the backend is built.
    let validator_impl = build_validator(validator, payload_size, payload_gates, barriers)?;
    let backend_impl = build_backend(backend, seed)?;

    println!(
        "{} Running {} on {} ({} shots)",
        style("→").cyan().bold(),
        style(validator_impl.name()).green(),
        style(backend_impl.name()).yellow(),
        shots
    );

    let avail = backend_impl.availability().await?;
    if !avail.is_available {
        anyhow::bail!("Backend '{backend}' is not available");
    }

    let run = run_validator(validator_impl.as_ref(), backend_impl.as_ref(), shots).await?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&run.metrics)?),
        _ => print_run(&run),
    }

    Ok(())
}
