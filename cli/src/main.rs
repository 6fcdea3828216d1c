//! Command-line front end for the bank teller simulator
//!
//! The core engine takes two validated inputs (arrival rate, teller count)
//! and returns a structured report; everything here is presentation:
//! argument parsing, logging setup, and the formatted report.

use anyhow::{Context, Result};
use bank_simulator_core_rs::{Orchestrator, ServiceTimeConfig, SimulationConfig};
use clap::Parser;
use tracing::info;

/// Bank Teller Queue Simulator - discrete minute-by-minute bank day
#[derive(Parser)]
#[command(
    name = "bank-sim",
    version,
    about = "Simulates customer flow through a multi-teller bank over a fixed operating window",
    long_about = "Simulates an 8-hour bank day minute by minute: customers arrive following a \
                 Poisson process, wait in a single FIFO line, and are served by a fixed pool of \
                 tellers. Prints descriptive statistics of the wait-time distribution."
)]
struct Args {
    /// Average customer arrivals per minute (Poisson lambda, > 0)
    #[arg(short, long, value_name = "RATE")]
    lambda: f64,

    /// Number of tellers working (> 0)
    #[arg(short, long, value_name = "COUNT")]
    tellers: usize,

    /// Operating window in minutes
    #[arg(long, value_name = "MINUTES", default_value_t = 480)]
    horizon: usize,

    /// Minimum service time per customer, in minutes
    #[arg(long, value_name = "MINUTES", default_value_t = 2)]
    service_min: usize,

    /// Maximum service time per customer, in minutes
    #[arg(long, value_name = "MINUTES", default_value_t = 3)]
    service_max: usize,

    /// RNG seed for a reproducible run (defaults to wall-clock seeding)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Emit the report as JSON instead of the formatted table
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let service_times = ServiceTimeConfig::new(args.service_min, args.service_max)
        .context("service interval must satisfy 1 <= min <= max")?;

    let config = SimulationConfig {
        lambda: args.lambda,
        num_tellers: args.tellers,
        horizon_ticks: args.horizon,
        service_times,
        rng_seed: args.seed,
    };

    info!(
        lambda = config.lambda,
        tellers = config.num_tellers,
        horizon = config.horizon_ticks,
        "starting simulation"
    );

    let orchestrator = Orchestrator::new(config).context("invalid simulation parameters")?;
    let report = orchestrator.run();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("--- {}-Minute Bank Day Simulation ---", args.horizon);
    println!("    Avg. Arrivals / Min (Lambda): {:.2}", args.lambda);
    println!("    Number of Tellers: {}", args.tellers);
    println!();
    println!("--- Simulation Summary ---");
    println!("Total Customers Arrived: {}", report.total_arrived);
    println!("Total Customers Served:  {}", report.total_served);
    println!("Customers Left in Queue: {}", report.remaining_in_queue);

    match report.summary {
        None => {
            println!();
            println!("No customers were served. No wait-time statistics available.");
        }
        Some(summary) => {
            println!();
            println!("--- Wait Time Analysis (in minutes) ---");
            println!("Mean (Average) Wait: {:.2}", summary.mean);
            println!("Median Wait:         {:.1}", summary.median);
            println!("Mode Wait:           {}", summary.mode);
            println!("Standard Deviation:  {:.2}", summary.std_dev);
            println!("Longest Wait Time:   {}", summary.max_wait);
        }
    }

    Ok(())
}
