//! Pareto, Weibull and power samplers.

use bitgen_core::{BitGenerator, UniformExt};

use crate::augmented::AugmentedState;
use crate::error::{check, Constraint, DomainError};

impl<G: BitGenerator> AugmentedState<G> {
    /// Pareto (Lomax) variate `U^(-1/a) - 1`, computed as `expm1(E / a)` with
    /// `E` standard exponential.
    ///
    /// # Errors
    ///
    /// `a` must be `> 0`.
    pub fn pareto(&mut self, a: f64) -> Result<f64, DomainError> {
        check("pareto", "a", a, Constraint::Positive)?;
        Ok((self.standard_exponential() / a).exp_m1())
    }

    /// Weibull variate `E^(1/a)` with `E` standard exponential.
    ///
    /// # Errors
    ///
    /// `a` must be `> 0`.
    pub fn weibull(&mut self, a: f64) -> Result<f64, DomainError> {
        check("weibull", "a", a, Constraint::Positive)?;
        Ok(self.standard_exponential().powf(1.0 / a))
    }

    /// Power-function variate `U^(1/a)` on (0, 1).
    ///
    /// # Errors
    ///
    /// `a` must be `> 0`.
    pub fn power(&mut self, a: f64) -> Result<f64, DomainError> {
        check("power", "a", a, Constraint::Positive)?;
        Ok(self.next_double_open().powf(1.0 / a))
    }
}
