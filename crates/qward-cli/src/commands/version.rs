//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    println!(
        "{} {}",
        style("qward").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Quantum algorithm validation and execution metrics");
}
