/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use tracing::{error, info};

use sched_sim::config::Workload;
use sched_sim::generator::WorkloadGenerator;
use sched_sim::render::{GanttChart, MetricsTable};
use sched_sim::request::{Algorithm, DEFAULT_QUANTUM};
use sched_sim::{simulate, SimulationRequest};

// ── CLI argument definition ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Gantt chart and metrics table.
    Text,
    /// The full result as YAML.
    Yaml,
}

/// CPU scheduling simulator: FCFS, SJF and Round Robin.
///
/// Example:
///   sched-sim -c workload.yaml
///   sched-sim -r 5 -s 42 -a round_robin -q 3
#[derive(Debug, Parser)]
#[command(
    name = "sched-sim",
    about = "CPU scheduling simulator – Gantt chart and per-process metrics",
    long_about = None,
)]
#[command(group(ArgGroup::new("source").required(true).args(["config", "random"])))]
struct Cli {
    /// Path to a YAML workload file.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Generate this many random processes instead of reading a workload file.
    #[arg(short = 'r', long = "random")]
    random: Option<usize>,

    /// Seed for --random.
    #[arg(short = 's', long = "seed", default_value_t = 0)]
    seed: u64,

    /// Scheduling algorithm (fcfs, sjf, round_robin); overrides the workload file.
    #[arg(short = 'a', long = "algorithm")]
    algorithm: Option<String>,

    /// Round Robin time quantum; overrides the workload file.
    #[arg(short = 'q', long = "quantum", allow_negative_numbers = true)]
    quantum: Option<i64>,

    /// Output format.
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!(
        config    = ?cli.config,
        random    = ?cli.random,
        seed      = cli.seed,
        algorithm = ?cli.algorithm,
        quantum   = ?cli.quantum,
        output    = ?cli.output,
        "Configuration"
    );

    if let Err(e) = run(&cli) {
        error!("Simulation failed: {:#}", e);
        process::exit(1);
    }
}

fn build_request(cli: &Cli) -> Result<SimulationRequest> {
    if let Some(count) = cli.random {
        let algorithm = match &cli.algorithm {
            Some(name) => name.parse::<Algorithm>()?,
            None => Algorithm::default(),
        };
        let quantum = cli.quantum.unwrap_or(DEFAULT_QUANTUM);
        info!(count, seed = cli.seed, "Generating random workload");
        return Ok(WorkloadGenerator::new(cli.seed).generate(count, algorithm, Some(quantum)));
    }

    let path = cli
        .config
        .as_deref()
        .context("either --config or --random is required")?;
    let workload = Workload::load_from_file(path)?;
    Ok(workload.into_request(cli.algorithm.as_deref(), cli.quantum)?)
}

fn run(cli: &Cli) -> Result<()> {
    let request = build_request(cli)?;
    let result = simulate(&request).context("simulation rejected")?;

    match cli.output {
        OutputFormat::Text => {
            println!("{}", GanttChart(&result));
            print!("{}", MetricsTable(&result));
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&result).context("Failed to serialise result")?;
            print!("{yaml}");
        }
    }
    Ok(())
}
