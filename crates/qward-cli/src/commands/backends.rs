//! Backends command implementation.

use anyhow::Result;
use console::style;

use qward_adapter_sim::SimulatorBackend;
use qward_hal::Backend;

/// Execute the backends command.
pub async fn execute() -> Result<()> {
    println!("{} Available backends:\n", style("Qward").cyan().bold());

    let sim = SimulatorBackend::new();
    let caps = sim.capabilities();
    let available = sim.availability().await?.is_available;

    println!(
        "  {} {} {}",
        if available {
            style("●").green()
        } else {
            style("○").red()
        },
        style("simulator").bold(),
        if caps.is_simulator { "(local)" } else { "" }
    );
    println!("    Qubits: {}", caps.num_qubits);
    println!("    Max shots: {}", caps.max_shots);
    println!(
        "    Conditional gates: {}",
        if caps.supports_conditional {
            "yes"
        } else {
            "no"
        }
    );
    println!(
        "    Gates: {}",
        caps.gate_set.iter().collect::<Vec<_>>().join(", ")
    );
    println!();

    Ok(())
}
