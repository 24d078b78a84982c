//! CLI error types.

use bitgen_core::StateError;
use bitgen_legacy::{DomainError, LegacyError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generator state could not be built.
    #[error(transparent)]
    State(#[from] StateError),

    /// Distribution spec or parallel fill failed.
    #[error(transparent)]
    Legacy(#[from] LegacyError),

    /// Distribution parameter outside its domain.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The bit stream did not reproduce its regression vectors.
    #[error("Bit stream self-test failed: {0}")]
    SelfTest(String),

    /// Output failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
