//! Qward command-line interface.
//!
//! Runs algorithm validators against execution backends, sweeps
//! parameter grids, and exports the resulting metrics.

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{backends, run, sweep, version};

/// Qward - quantum algorithm validation and execution metrics
#[derive(Parser)]
#[command(name = "qward")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single validator on a backend
    Run {
        /// Validator to run (teleportation, flip-coin)
        validator: String,

        /// Number of shots
        #[arg(short, long, default_value = "1024")]
        shots: u32,

        /// Backend to use
        #[arg(short, long, default_value = "simulator")]
        backend: String,

        /// Payload size for the teleportation validator
        #[arg(long, default_value = "1")]
        payload_size: u32,

        /// Payload preparation gates, comma-separated (h,t,...)
        #[arg(long, default_value = "h")]
        payload_gates: String,

        /// Insert barriers between protocol phases
        #[arg(long)]
        barriers: bool,

        /// Fixed RNG seed for reproducible simulator runs
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Sweep a validator over a parameter grid
    Sweep {
        /// Validator to sweep (teleportation, flip-coin)
        validator: String,

        /// Parameter axis as name=v1,v2,... (repeatable)
        #[arg(short, long = "param")]
        params: Vec<String>,

        /// Number of shots per combination
        #[arg(short, long, default_value = "1024")]
        shots: u32,

        /// Backend to use
        #[arg(short, long, default_value = "simulator")]
        backend: String,

        /// Maximum combinations in flight at once
        #[arg(long, default_value = "4")]
        concurrency: usize,

        /// Per-job timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Payload preparation gates, comma-separated (h,t,...)
        #[arg(long, default_value = "h")]
        payload_gates: String,

        /// Insert barriers between protocol phases
        #[arg(long)]
        barriers: bool,

        /// Fixed RNG seed for reproducible simulator runs
        #[arg(long)]
        seed: Option<u64>,

        /// Write records to a CSV file
        #[arg(long)]
        csv: Option<String>,

        /// Write records to a JSON file
        #[arg(long)]
        json: Option<String>,
    },

    /// List available backends
    Backends,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Run {
            validator,
            shots,
            backend,
            payload_size,
            payload_gates,
            barriers,
            seed,
            format,
        } => {
            run::execute(
                &validator,
                shots,
                &backend,
                payload_size,
                &payload_gates,
                barriers,
                seed,
                &format,
            )
            .await
        }

        Commands::Sweep {
            validator,
            params,
            shots,
            backend,
            concurrency,
            timeout,
            payload_gates,
            barriers,
            seed,
            csv,
            json,
        } => {
            sweep::execute(
                &validator,
                &params,
                shots,
                &backend,
                concurrency,
                timeout,
                &payload_gates,
                barriers,
                seed,
                csv.as_deref(),
                json.as_deref(),
            )
            .await
        }

        Commands::Backends => backends::execute().await,

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
