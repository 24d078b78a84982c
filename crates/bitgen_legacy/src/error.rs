//! Error types for the distribution layer.
//!
//! This module provides:
//! - `DomainError`: a distribution parameter outside its valid domain
//! - `Constraint`: the requirement a parameter failed
//! - `LegacyError`: errors from parsing distribution specs and parallel fills
//!
//! A `DomainError` is always raised before any random draw is consumed, so a
//! rejected call never perturbs the stream.

use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Largest Poisson mean accepted, keeping PTRS candidates inside `i64`.
pub const POISSON_LAM_MAX: f64 = 9.223_372_006_484_771e18;

/// Requirement a distribution parameter must satisfy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Strictly greater than zero.
    Positive,
    /// Greater than or equal to zero.
    NonNegative,
    /// In the interval (0, 1].
    Probability,
    /// Between zero and the given bound, inclusive.
    AtMost(f64),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Positive => write!(f, "> 0"),
            Constraint::NonNegative => write!(f, ">= 0"),
            Constraint::Probability => write!(f, "0 < p <= 1"),
            Constraint::AtMost(max) => write!(f, "0 <= value <= {:e}", max),
        }
    }
}

impl Constraint {
    /// Returns `true` if `value` satisfies the constraint. NaN never does.
    #[inline]
    pub fn admits(&self, value: f64) -> bool {
        match *self {
            Constraint::Positive => value > 0.0,
            Constraint::NonNegative => value >= 0.0,
            Constraint::Probability => value > 0.0 && value <= 1.0,
            Constraint::AtMost(max) => value >= 0.0 && value <= max,
        }
    }
}

/// A distribution parameter outside its valid domain.
///
/// # Examples
/// ```
/// use bitgen_core::Xoroshiro128;
/// use bitgen_legacy::{AugmentedState, Constraint};
///
/// let mut state = AugmentedState::new(Xoroshiro128::from_state(1, 2).unwrap());
/// let err = state.standard_gamma(0.0).unwrap_err();
///
/// assert_eq!(err.parameter, "shape");
/// assert_eq!(err.constraint, Constraint::Positive);
/// assert_eq!(
///     err.to_string(),
///     "standard_gamma: parameter 'shape' = 0 violates > 0"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{distribution}: parameter '{parameter}' = {value} violates {constraint}")]
pub struct DomainError {
    /// Distribution whose parameter was rejected.
    pub distribution: &'static str,
    /// Name of the rejected parameter.
    pub parameter: &'static str,
    /// The rejected value.
    pub value: f64,
    /// The requirement the value failed.
    pub constraint: Constraint,
}

impl DomainError {
    /// Creates a domain error.
    pub fn new(
        distribution: &'static str,
        parameter: &'static str,
        value: f64,
        constraint: Constraint,
    ) -> Self {
        debug!(distribution, parameter, value, %constraint, "rejected distribution parameter");
        Self {
            distribution,
            parameter,
            value,
            constraint,
        }
    }
}

/// Checks one parameter against its constraint.
#[inline]
pub(crate) fn check(
    distribution: &'static str,
    parameter: &'static str,
    value: f64,
    constraint: Constraint,
) -> Result<(), DomainError> {
    if constraint.admits(value) {
        Ok(())
    } else {
        Err(DomainError::new(distribution, parameter, value, constraint))
    }
}

/// Errors from distribution specs and batch operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LegacyError {
    /// A parameter was outside its domain.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The distribution name is not recognised.
    #[error("Unknown distribution '{0}'")]
    UnknownDistribution(String),

    /// The wrong number of parameters was supplied.
    #[error("Distribution '{name}' expects {expected} parameter(s), got {got}")]
    ParameterCount {
        /// Distribution name
        name: &'static str,
        /// Number of parameters the distribution takes
        expected: usize,
        /// Number of parameters supplied
        got: usize,
    },

    /// A parameter was not a number.
    #[error("Invalid parameter '{0}': not a number")]
    InvalidNumber(String),

    /// Parallel chunk length of zero.
    #[error("Invalid chunk length {0}: must be at least 1")]
    InvalidChunkLength(usize),
}
