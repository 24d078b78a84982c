//! bitgen CLI - Command Line Front End for the Legacy Random Engine
//!
//! # Commands
//!
//! - `bitgen raw` - Print raw words or uniform doubles from the bit stream
//! - `bitgen sample [DIST]` - Draw variates from a legacy distribution
//! - `bitgen summary [DIST]` - Report sample moments of a parallel batch
//! - `bitgen jump --times <K>` - Print states derived by jump-ahead
//! - `bitgen check` - Show the effective configuration and self-test the stream
//!
//! # Architecture
//!
//! As the service layer, this crate wires configuration and logging around
//! `bitgen_core` (bit streams) and `bitgen_legacy` (distributions).

use std::io::Write;
use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use bitgen_legacy::LegacyDistribution;
use config::{build_config, parse_seed, CliOverrides, OutputFormat};
pub use error::{CliError, Result};

/// Legacy random engine CLI
#[derive(Parser)]
#[command(name = "bitgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "bitgen.toml")]
    config: String,

    /// Seed (decimal or 0x-prefixed hex), expanded by SplitMix64
    #[arg(short, long, global = true, value_parser = parse_seed_arg)]
    seed: Option<u64>,

    /// Explicit generator state as s0:s1 in hex
    #[arg(long, global = true)]
    state: Option<String>,

    /// Number of values
    #[arg(short = 'n', long, global = true)]
    count: Option<usize>,

    /// Values per stream in parallel fills
    #[arg(long, global = true)]
    chunk_len: Option<usize>,

    /// Output format (text, json)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print raw words from the bit stream
    Raw {
        /// Word kind (u64, u32, double)
        #[arg(short, long, default_value = "u64")]
        kind: commands::raw::WordKind,
    },

    /// Draw variates from a distribution
    Sample {
        /// Distribution spec such as gamma:2,1.5 (defaults to the config file)
        distribution: Option<LegacyDistribution>,

        /// Fill in parallel over jump-derived streams
        #[arg(short, long)]
        parallel: bool,
    },

    /// Report sample moments of a parallel batch
    Summary {
        /// Distribution spec (defaults to the config file)
        distribution: Option<LegacyDistribution>,
    },

    /// Print states derived by jump-ahead
    Jump {
        /// Number of jumps
        #[arg(short, long, default_value = "1")]
        times: usize,
    },

    /// Check configuration and self-test the bit stream
    Check,
}

fn parse_seed_arg(s: &str) -> std::result::Result<u64, String> {
    parse_seed(s).map_err(|e| format!("invalid seed '{}': {}", s, e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; RUST_LOG wins over --verbose
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let overrides = CliOverrides {
        seed: cli.seed,
        state: cli.state.clone(),
        count: cli.count,
        chunk_len: cli.chunk_len,
        format: cli.format,
    };
    let mut config = build_config(Path::new(&cli.config), &overrides)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Raw { kind } => commands::raw::run(&config, kind, &mut out)?,
        Commands::Sample {
            distribution,
            parallel,
        } => {
            if let Some(dist) = distribution {
                dist.validate()?;
                config.distribution = dist;
            }
            commands::sample::run(&config, parallel, &mut out)?
        }
        Commands::Summary { distribution } => {
            if let Some(dist) = distribution {
                dist.validate()?;
                config.distribution = dist;
            }
            commands::summary::run(&config, &mut out)?
        }
        Commands::Jump { times } => commands::jump::run(&config, times, &mut out)?,
        Commands::Check => commands::check::run(&config, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
