//! Page replacement simulator CLI.
//!
//! This binary feeds a reference stream to the simulation library and prints
//! the results. It provides:
//! 1. **Run:** Step-by-step traces and a fault summary for the selected policies.
//! 2. **Sweep:** Fault counts across frame capacities, flagging Belady's anomaly.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`),
//! e.g. `RUST_LOG=pagesim_core=debug` to see every page fault.

mod input;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use pagesim_core::sim::{anomalies, run_config, sweep};
use pagesim_core::stats::{Summary, TraceStats, TraceTable};
use pagesim_core::{PageId, PolicyKind, SimConfig, SimError, Trace};

use crate::input::parse_reference_stream;

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Page replacement simulator (FIFO, LRU, OPT, Clock)",
    long_about = "Replay a page reference stream against a fixed number of frames and report every step.\n\nExamples:\n  pagesim run --frames 3 --pages \"7,0,1,2,0,3,0,4,2,3,0,3,2\"\n  pagesim run -n 3 -p \"1 2 3 4 1 2 5 1 2 3 4 5\" --policy lru --policy opt\n  pagesim run --config run.json --format json\n  pagesim sweep --max-frames 5 --pages \"1,2,3,4,1,2,5,1,2,3,4,5\" --policy fifo"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate the selected policies and print their traces.
    Run {
        /// JSON configuration file; flags given alongside override its values.
        #[arg(short, long)]
        config: Option<String>,

        /// Number of frames.
        #[arg(short = 'n', long)]
        frames: Option<usize>,

        /// Reference stream, comma- or space-separated.
        #[arg(short, long)]
        pages: Option<String>,

        /// Policy to simulate (repeatable). Defaults to all four.
        #[arg(long = "policy")]
        policies: Vec<PolicyKind>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the fault count for every capacity from 1 to `max-frames`.
    Sweep {
        /// Largest number of frames to try.
        #[arg(short, long)]
        max_frames: usize,

        /// Reference stream, comma- or space-separated.
        #[arg(short, long)]
        pages: String,

        /// Policy to sweep (repeatable). Defaults to all four.
        #[arg(long = "policy")]
        policies: Vec<PolicyKind>,
    },
}

/// How `run` renders its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Frame tables followed by a fault summary.
    Text,
    /// One JSON document holding every trace.
    Json,
}

/// Errors surfaced to the user by the CLI.
#[derive(Debug, Error)]
enum CliError {
    /// Configuration or policy selection failed.
    #[error(transparent)]
    Sim(#[from] SimError),

    /// The JSON report could not be produced.
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing to stdout failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// JSON document emitted by `run --format json`.
#[derive(Serialize)]
struct Report<'a> {
    frames: usize,
    pages: &'a [PageId],
    traces: Vec<&'a Trace>,
    summary: Vec<TraceStats>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            frames,
            pages,
            policies,
            format,
        } => cmd_run(config, frames, pages.as_deref(), policies, format),
        Commands::Sweep {
            max_frames,
            pages,
            policies,
        } => cmd_sweep(max_frames, &pages, policies),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Builds the run configuration from an optional file plus flag overrides,
/// simulates it, and prints traces in the requested format.
fn cmd_run(
    config_path: Option<String>,
    frames: Option<usize>,
    pages: Option<&str>,
    policies: Vec<PolicyKind>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let mut config = match config_path {
        Some(path) => SimConfig::from_path(path)?,
        None => SimConfig::default(),
    };
    if let Some(frames) = frames {
        config.frames = frames;
    }
    if let Some(pages) = pages {
        config.pages = parse_reference_stream(pages);
    }
    if !policies.is_empty() {
        config.policies = policies;
    }
    tracing::info!(
        frames = config.frames,
        references = config.pages.len(),
        policies = ?config.policies,
        "starting simulation"
    );

    let results = run_config(&config)?;
    let summary = Summary::from_traces(&results);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            writeln!(out, "Frames: {}  References: {}", config.frames, config.pages.len())?;
            for (_, trace) in &results {
                write!(out, "{}", TraceTable(trace))?;
            }
            write!(out, "{summary}")?;
        }
        OutputFormat::Json => {
            let report = Report {
                frames: config.frames,
                pages: &config.pages,
                traces: results.iter().map(|(_, trace)| trace).collect(),
                summary: summary.0,
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Prints a capacity/fault table for each policy and reports any capacity at
/// which an extra frame made things worse.
fn cmd_sweep(max_frames: usize, pages: &str, policies: Vec<PolicyKind>) -> Result<(), CliError> {
    let stream = parse_reference_stream(pages);
    let policies = if policies.is_empty() {
        PolicyKind::ALL.to_vec()
    } else {
        policies
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "==========================================================")?;
    writeln!(out, "FAULTS BY FRAME COUNT ({} references)", stream.len())?;
    writeln!(out, "==========================================================")?;
    write!(out, "  {:<8}", "frames")?;
    for policy in &policies {
        write!(out, "{:>8}", policy.name())?;
    }
    writeln!(out)?;

    let curves: Vec<Vec<(usize, usize)>> = policies
        .iter()
        .map(|&policy| sweep(policy, max_frames, &stream))
        .collect();
    for row in 0..max_frames {
        write!(out, "  {:<8}", row + 1)?;
        for curve in &curves {
            write!(out, "{:>8}", curve[row].1)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "----------------------------------------------------------")?;
    for (policy, curve) in policies.iter().zip(&curves) {
        let anomalous = anomalies(curve);
        if !anomalous.is_empty() {
            writeln!(out, "  belady anomaly         {policy} at frames {anomalous:?}")?;
        }
    }
    writeln!(out, "==========================================================")?;
    out.flush()?;
    Ok(())
}
