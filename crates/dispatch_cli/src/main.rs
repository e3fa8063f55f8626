//! Taxi dispatch simulation CLI
//!
//! Ranks taxis by distance to the hotel and runs `OPERATIONS` scripted steps:
//! every 100th step calls the nearest taxi, other steps either move a random
//! taxi closer (probability `PROBABILITY`) or add the next taxi from the
//! locations file.
//!
//! # Example
//!
//! ```bash
//! # 10 000 steps, 20% updates, reproducible
//! taxi-dispatch 10000 0.2 --seed 42
//!
//! # Machine-readable report from a custom file
//! taxi-dispatch 5000 0.5 --locations data/locations.txt --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use dispatch_core::scenario::{DEFAULT_CALL_INTERVAL, DEFAULT_DECREMENT};
use dispatch_core::{run_simulation, HeapError, LocationReader, RunReport, ScenarioParams, SimError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Taxi dispatch simulator
///
/// Single-threaded; reproducible when the same seed is used.
#[derive(Parser, Debug)]
#[command(name = "taxi-dispatch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Total number of operations (m)
    operations: usize,

    /// Probability of a distance update instead of a taxi addition (p, 0.0-1.0)
    probability: f64,

    /// Locations file: header line, then one "longitude latitude" pair per line
    #[arg(short = 'l', long, env = "TAXI_LOCATIONS", default_value = "locations.txt")]
    locations: PathBuf,

    /// Random seed for reproducible results. When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Call the nearest taxi every N operations
    #[arg(long, default_value_t = DEFAULT_CALL_INTERVAL)]
    call_interval: usize,

    /// Distance a taxi moves closer per update
    #[arg(long, default_value_t = DEFAULT_DECREMENT)]
    decrement: f64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

const EXIT_CONFIG: u8 = 1;
const EXIT_UNDERFLOW: u8 = 3;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,dispatch_core=info,taxi_dispatch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(report) => {
            if args.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        error!(%err, "Failed to serialize report");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{report}");
            }
            ExitCode::SUCCESS
        }
        Err(SimError::Heap(HeapError::Underflow)) => {
            error!("Heap underflow: a taxi was called while none were waiting");
            ExitCode::from(EXIT_UNDERFLOW)
        }
        Err(err) => {
            error!(%err, configuration = err.is_configuration(), "Dispatch run aborted");
            ExitCode::from(EXIT_CONFIG)
        }
    }
}

fn run(args: &Args) -> Result<RunReport, SimError> {
    run_since(args, Instant::now())
}

/// Runs the scenario and reports time elapsed since `started`, which covers
/// opening the locations file as well as the simulation itself.
fn run_since(args: &Args, started: Instant) -> Result<RunReport, SimError> {
    let mut params = ScenarioParams::new(args.operations, args.probability)
        .with_call_interval(args.call_interval)
        .with_decrement(args.decrement);
    if let Some(seed) = args.seed {
        params = params.with_seed(seed);
    }
    params.validate()?;

    info!(path = %args.locations.display(), "Reading taxi locations");
    let locations = LocationReader::open(&args.locations)?;
    let mut report = run_simulation(params, locations)?;
    report.elapsed = started.elapsed();
    Ok(report)
}
