use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use proc_schedule::generator::WorkloadGenerator;
use proc_schedule::loader::load_workload;
use proc_schedule::models::Ticks;
use proc_schedule::report::{render_json, render_text};
use proc_schedule::scheduler::{Policy, SimulationRequest};

/// Scheduling algorithm.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum Algorithm {
    /// Round Robin
    Rr,
    /// Shortest Remaining Time First
    Srtf,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

/// CPU scheduling simulator
#[derive(Parser, Debug)]
#[command(name = "proc-schedule")]
#[command(about = "Simulate Round Robin and SRTF scheduling over a fixed workload", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "generate"])))]
struct Args {
    /// Scheduling algorithm
    #[arg(short, long, value_enum)]
    algorithm: Algorithm,

    /// Time quantum for Round Robin
    #[arg(short, long, default_value_t = Policy::DEFAULT_QUANTUM, allow_negative_numbers = true)]
    quantum: Ticks,

    /// Input JSON file with process records
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Generate a random workload over this many ticks instead of reading a file
    #[arg(short, long)]
    generate: Option<Ticks>,

    /// Seed for --generate
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let workload = match (&args.input, args.generate) {
        (Some(path), _) => load_workload(path)
            .with_context(|| format!("loading workload from {}", path.display()))?,
        (None, Some(ticks)) => WorkloadGenerator::new(ticks).with_seed(args.seed).generate(),
        (None, None) => anyhow::bail!("either --input or --generate is required"),
    };

    let policy = match args.algorithm {
        Algorithm::Rr => Policy::round_robin(args.quantum),
        Algorithm::Srtf => Policy::srtf(),
    };

    let outcome = SimulationRequest::new(workload, policy)
        .run()
        .context("simulation failed")?;

    match args.format {
        OutputFormat::Text => println!("{}", render_text(&outcome)),
        OutputFormat::Json => println!("{}", render_json(&outcome)?),
    }

    Ok(())
}
