//! Sample command implementation
//!
//! Draws variates from the configured distribution, either from a single
//! augmented state or in parallel over jump-derived streams.

use std::io::Write;

use bitgen_legacy::{fill_parallel, AugmentedState};
use serde_json::json;
use tracing::info;

use super::format_value;
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Draws `config.count` variates.
///
/// The parallel path depends on `chunk_len` but not on the thread count;
/// with `count <= chunk_len` it reproduces the sequential path exactly.
pub fn draw(config: &CliConfig, parallel: bool) -> Result<Vec<f64>> {
    let rng = config.generator()?;
    let dist = &config.distribution;
    let mut values = vec![0.0; config.count];

    if parallel {
        fill_parallel(&rng, dist, &mut values, config.chunk_len)?;
    } else {
        let mut state = AugmentedState::new(rng);
        dist.fill(&mut state, &mut values)?;
    }
    Ok(values)
}

/// Run the sample command
pub fn run(config: &CliConfig, parallel: bool, out: &mut impl Write) -> Result<()> {
    info!(
        "Sampling {} values from {} ({})",
        config.count,
        config.distribution,
        if parallel { "parallel" } else { "sequential" }
    );
    let values = draw(config, parallel)?;
    let discrete = config.distribution.is_discrete();

    match config.format {
        OutputFormat::Text => {
            for value in &values {
                writeln!(out, "{}", format_value(*value, config.precision, discrete))?;
            }
        }
        OutputFormat::Json => {
            let doc = json!({
                "distribution": config.distribution.to_string(),
                "seed": config.seed,
                "state": config.state,
                "parallel": parallel,
                "chunk_len": config.chunk_len,
                "values": values,
            });
            serde_json::to_writer_pretty(&mut *out, &doc)?;
            writeln!(out)?;
        }
    }

    info!("Sampling complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitgen_legacy::LegacyDistribution;

    fn config(distribution: LegacyDistribution, count: usize, chunk_len: usize) -> CliConfig {
        CliConfig {
            seed: 2024,
            count,
            chunk_len,
            distribution,
            ..CliConfig::default()
        }
    }

    #[test]
    fn test_single_chunk_parallel_matches_sequential() {
        let config = config(LegacyDistribution::Gamma { shape: 0.5, scale: 2.0 }, 100, 100);
        assert_eq!(draw(&config, true).unwrap(), draw(&config, false).unwrap());
    }

    #[test]
    fn test_multi_chunk_parallel_differs_after_first_chunk() {
        let config = config(LegacyDistribution::StandardNormal, 200, 50);
        let parallel = draw(&config, true).unwrap();
        let sequential = draw(&config, false).unwrap();
        assert_eq!(parallel[..50], sequential[..50]);
        assert_ne!(parallel[50..], sequential[50..]);
    }

    #[test]
    fn test_text_output_for_discrete() {
        let config = config(LegacyDistribution::Poisson { lam: 3.0 }, 20, 64);
        let mut buf = Vec::new();
        run(&config, false, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 20);
        assert!(text.lines().all(|line| line.parse::<i64>().is_ok()));
    }

    #[test]
    fn test_json_output() {
        let config = CliConfig {
            format: OutputFormat::Json,
            ..config(LegacyDistribution::Beta { a: 2.0, b: 3.0 }, 5, 64)
        };
        let mut buf = Vec::new();
        run(&config, true, &mut buf).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(doc["distribution"], "beta:2,3");
        assert_eq!(doc["values"].as_array().map(Vec::len), Some(5));
    }
}
