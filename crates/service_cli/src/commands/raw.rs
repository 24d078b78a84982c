//! Raw command implementation
//!
//! Prints words straight from the bit stream: 64-bit words, 32-bit words
//! (served half-and-half through the spare-word cache) or uniform doubles.

use std::io::Write;
use std::str::FromStr;

use bitgen_core::UniformExt;
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// What the raw command draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    /// 64-bit words in hexadecimal
    U64,
    /// 32-bit words in hexadecimal
    U32,
    /// Uniform doubles in [0, 1)
    Double,
}

impl FromStr for WordKind {
    type Err = CliError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "u64" => Ok(WordKind::U64),
            "u32" => Ok(WordKind::U32),
            "double" | "f64" => Ok(WordKind::Double),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown word kind: {}. Supported: u64, u32, double",
                other
            ))),
        }
    }
}

/// Run the raw command
pub fn run(config: &CliConfig, kind: WordKind, out: &mut impl Write) -> Result<()> {
    let mut rng = config.generator()?;
    info!("Drawing {} raw {:?} values from {}", config.count, kind, rng.state());

    for _ in 0..config.count {
        match kind {
            WordKind::U64 => writeln!(out, "{:#018x}", rng.next_u64())?,
            WordKind::U32 => writeln!(out, "{:#010x}", rng.next_u32())?,
            WordKind::Double => writeln!(out, "{:.*}", config.precision, rng.next_double())?,
        }
    }
    Ok(())
}
