//! Summary command implementation
//!
//! Draws a batch in parallel and reports sample moments and extremes.

use std::io::Write;

use serde::Serialize;
use tracing::info;

use super::sample::draw;
use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Sample statistics of one batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Distribution spec
    pub distribution: String,
    /// Number of values
    pub count: usize,
    /// Sample mean
    pub mean: f64,
    /// Unbiased sample variance
    pub variance: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl Summary {
    /// Computes statistics with Welford's update.
    pub fn from_values(distribution: String, values: &[f64]) -> Result<Self> {
        if values.len() < 2 {
            return Err(CliError::InvalidArgument(format!(
                "summary needs at least 2 values, got {}",
                values.len()
            )));
        }
        let mut mean = 0.0;
        let mut m2 = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (i, &x) in values.iter().enumerate() {
            let delta = x - mean;
            mean += delta / (i + 1) as f64;
            m2 += delta * (x - mean);
            min = min.min(x);
            max = max.max(x);
        }
        Ok(Self {
            distribution,
            count: values.len(),
            mean,
            variance: m2 / (values.len() - 1) as f64,
            min,
            max,
        })
    }
}

/// Run the summary command
pub fn run(config: &CliConfig, out: &mut impl Write) -> Result<()> {
    info!("Summarising {} values from {}", config.count, config.distribution);
    let values = draw(config, true)?;
    let summary = Summary::from_values(config.distribution.to_string(), &values)?;

    match config.format {
        OutputFormat::Text => {
            let p = config.precision.saturating_sub(1);
            writeln!(out, "distribution  {}", summary.distribution)?;
            writeln!(out, "count         {}", summary.count)?;
            writeln!(out, "mean          {:.*e}", p, summary.mean)?;
            writeln!(out, "variance      {:.*e}", p, summary.variance)?;
            writeln!(out, "min           {:.*e}", p, summary.min)?;
            writeln!(out, "max           {:.*e}", p, summary.max)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
