//! Command-line front end for the scheduling simulator.
//!
//! Loads a process set (JSON file, random workload, or the built-in
//! sample), runs the requested policies and prints the results as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter, Metadata, Record};

use sched_sim::config::SimulationConfig;
use sched_sim::models::Algorithm;
use sched_sim::workload::WorkloadGenerator;

/// Policy selection on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum PolicyArg {
    /// First-Come-First-Served
    Fcfs,
    /// Round Robin
    Rr,
    /// Shortest Process Next
    Spn,
    /// Shortest Remaining Time
    Srt,
    /// Highest Response Ratio Next
    Hrrn,
    /// Run every policy for comparison
    All,
}

impl PolicyArg {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            PolicyArg::Fcfs => vec![Algorithm::Fcfs],
            PolicyArg::Rr => vec![Algorithm::RoundRobin],
            PolicyArg::Spn => vec![Algorithm::Spn],
            PolicyArg::Srt => vec![Algorithm::Srt],
            PolicyArg::Hrrn => vec![Algorithm::Hrrn],
            PolicyArg::All => Algorithm::ALL.to_vec(),
        }
    }
}

/// Simulate uniprocessor CPU scheduling policies
#[derive(Parser, Debug)]
#[command(name = "sched-sim")]
#[command(about = "Simulate FCFS, RR, SPN, SRT and HRRN over a process set", long_about = None)]
struct Args {
    /// JSON configuration file (defaults to the built-in sample workload)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Policy to run; overrides the configuration's algorithm list
    #[arg(short, long, value_enum)]
    policy: Option<PolicyArg>,

    /// Round Robin time quantum; overrides the configuration
    #[arg(short, long)]
    quantum: Option<i64>,

    /// Generate this many random processes instead of reading a file
    #[arg(short, long, conflicts_with = "input")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(level))
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}

fn load_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = if let Some(path) = &args.input {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        SimulationConfig::from_json(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?
    } else if let Some(count) = args.random {
        if count == 0 {
            bail!("--random needs at least one process");
        }
        let processes = WorkloadGenerator::new(count).generate_seeded(args.seed);
        SimulationConfig::new(processes)
    } else {
        SimulationConfig::sample()
    };

    if let Some(quantum) = args.quantum {
        config = config.with_quantum(quantum);
    }
    if let Some(policy) = args.policy {
        config = config.with_algorithms(policy.algorithms());
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config = load_config(&args)?;
    info!(
        "running {} algorithm(s) over {} processes (quantum {})",
        config.selected_algorithms().len(),
        config.processes.len(),
        config.quantum
    );

    let comparison = config.run().context("simulation failed")?;
    for result in comparison.iter() {
        info!(
            "{:<4} avg waiting {:.2} | avg turnaround {:.2} | avg response {:.2}",
            result.algorithm.name(),
            result.average_waiting_time,
            result.average_turnaround_time,
            result.average_response_time
        );
    }

    let output = if args.pretty {
        serde_json::to_string_pretty(&comparison)?
    } else {
        serde_json::to_string(&comparison)?
    };
    println!("{output}");
    Ok(())
}
