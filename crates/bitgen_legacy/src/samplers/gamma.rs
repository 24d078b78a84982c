//! Exponential, gamma and the samplers composed from them.
//!
//! The standard gamma is the building block for beta, chi-square, F,
//! Student-t and (through [`super::discrete`]) the negative binomial.

use bitgen_core::{BitGenerator, UniformExt};

use crate::augmented::AugmentedState;
use crate::error::{check, Constraint, DomainError, POISSON_LAM_MAX};

/// Marsaglia-Tsang squeeze coefficient.
const SQUEEZE: f64 = 0.0331;

/// Checks noncentral chi-square parameters.
///
/// With `df <= 1` the draw mixes over `Poisson(nonc / 2)`, so `nonc` is also
/// bounded by twice [`POISSON_LAM_MAX`].
pub(crate) fn check_noncentral_chisquare(
    distribution: &'static str,
    df_name: &'static str,
    df: f64,
    nonc: f64,
) -> Result<(), DomainError> {
    check(distribution, df_name, df, Constraint::Positive)?;
    check(distribution, "nonc", nonc, Constraint::NonNegative)?;
    if df <= 1.0 {
        check(distribution, "nonc", nonc, Constraint::AtMost(2.0 * POISSON_LAM_MAX))?;
    }
    Ok(())
}

impl<G: BitGenerator> AugmentedState<G> {
    /// Standard exponential variate `-ln(U)`, `U` uniform on (0, 1).
    #[inline]
    pub fn standard_exponential(&mut self) -> f64 {
        -self.next_double_open().ln()
    }

    /// Exponential variate with the given scale (mean).
    ///
    /// # Errors
    ///
    /// `scale` must be `> 0`.
    pub fn exponential(&mut self, scale: f64) -> Result<f64, DomainError> {
        check("exponential", "scale", scale, Constraint::Positive)?;
        Ok(scale * self.standard_exponential())
    }

    /// Standard gamma variate with unit scale.
    ///
    /// - `shape > 1`: Marsaglia-Tsang transformed-normal rejection.
    /// - `shape == 1`: exactly the standard exponential.
    /// - `shape < 1`: boosting, `gamma(shape + 1) · U^(1/shape)`.
    ///
    /// # Errors
    ///
    /// `shape` must be `> 0`.
    pub fn standard_gamma(&mut self, shape: f64) -> Result<f64, DomainError> {
        check("standard_gamma", "shape", shape, Constraint::Positive)?;
        Ok(self.draw_standard_gamma(shape))
    }

    pub(crate) fn draw_standard_gamma(&mut self, shape: f64) -> f64 {
        if shape == 1.0 {
            return self.standard_exponential();
        }
        if shape < 1.0 {
            let boosted = self.draw_standard_gamma(shape + 1.0);
            let u = self.next_double_open();
            return boosted * u.powf(1.0 / shape);
        }

        let b = shape - 1.0 / 3.0;
        let c = 1.0 / (9.0 * b).sqrt();
        loop {
            let (x, v) = loop {
                let x = self.gauss();
                let v = 1.0 + c * x;
                if v > 0.0 {
                    break (x, v);
                }
            };
            let v = v * v * v;
            let u = self.next_double();
            if u < 1.0 - SQUEEZE * (x * x) * (x * x) {
                return b * v;
            }
            if u.ln() < 0.5 * x * x + b * (1.0 - v + v.ln()) {
                return b * v;
            }
        }
    }

    /// Gamma variate `scale · standard_gamma(shape)`.
    ///
    /// # Errors
    ///
    /// `shape` and `scale` must be `> 0`.
    pub fn gamma(&mut self, shape: f64, scale: f64) -> Result<f64, DomainError> {
        check("gamma", "shape", shape, Constraint::Positive)?;
        check("gamma", "scale", scale, Constraint::Positive)?;
        Ok(self.draw_standard_gamma(shape) * scale)
    }

    /// Beta variate on [0, 1].
    ///
    /// Uses Johnk's rejection when both shapes are below one and the gamma
    /// ratio `G(a) / (G(a) + G(b))` otherwise. Johnk candidates whose powers
    /// underflow are resolved in log space, so tiny shapes still terminate.
    ///
    /// # Errors
    ///
    /// `a` and `b` must be `> 0`.
    pub fn beta(&mut self, a: f64, b: f64) -> Result<f64, DomainError> {
        check("beta", "a", a, Constraint::Positive)?;
        check("beta", "b", b, Constraint::Positive)?;

        if a < 1.0 && b < 1.0 {
            loop {
                let u = self.next_double();
                let v = self.next_double();
                let x = u.powf(1.0 / a);
                let y = v.powf(1.0 / b);
                let sum = x + y;
                if sum <= 1.0 && u + v > 0.0 {
                    if sum > 0.0 {
                        return Ok(x / sum);
                    }
                    // Both powers underflowed; take the ratio in log space.
                    let mut log_x = u.ln() / a;
                    let mut log_y = v.ln() / b;
                    let log_max = log_x.max(log_y);
                    if log_max > f64::NEG_INFINITY {
                        log_x -= log_max;
                        log_y -= log_max;
                        return Ok((log_x - (log_x.exp() + log_y.exp()).ln()).exp());
                    }
                }
            }
        }

        let ga = self.draw_standard_gamma(a);
        let gb = self.draw_standard_gamma(b);
        Ok(ga / (ga + gb))
    }

    /// Chi-square variate `2 · standard_gamma(df / 2)`.
    ///
    /// # Errors
    ///
    /// `df` must be `> 0`.
    pub fn chisquare(&mut self, df: f64) -> Result<f64, DomainError> {
        check("chisquare", "df", df, Constraint::Positive)?;
        Ok(self.draw_chisquare(df))
    }

    #[inline]
    pub(crate) fn draw_chisquare(&mut self, df: f64) -> f64 {
        2.0 * self.draw_standard_gamma(df / 2.0)
    }

    /// Noncentral chi-square variate.
    ///
    /// - `nonc == 0`: the central chi-square.
    /// - `df > 1`: `chisquare(df - 1) + (Z + sqrt(nonc))²`.
    /// - `df <= 1`: Poisson mixture, `chisquare(df + 2K)` with
    ///   `K ~ Poisson(nonc / 2)`.
    ///
    /// # Errors
    ///
    /// `df` must be `> 0` and `nonc` `>= 0`; with `df <= 1`, `nonc / 2` must
    /// not exceed [`POISSON_LAM_MAX`].
    pub fn noncentral_chisquare(&mut self, df: f64, nonc: f64) -> Result<f64, DomainError> {
        check_noncentral_chisquare("noncentral_chisquare", "df", df, nonc)?;
        Ok(self.draw_noncentral_chisquare(df, nonc))
    }

    pub(crate) fn draw_noncentral_chisquare(&mut self, df: f64, nonc: f64) -> f64 {
        if nonc == 0.0 {
            return self.draw_chisquare(df);
        }
        if df > 1.0 {
            let chi2 = self.draw_chisquare(df - 1.0);
            let n = self.gauss() + nonc.sqrt();
            chi2 + n * n
        } else {
            let k = self.draw_poisson(nonc / 2.0);
            self.draw_chisquare(df + 2.0 * k as f64)
        }
    }

    /// F variate `(chisquare(dfnum) / dfnum) / (chisquare(dfden) / dfden)`.
    ///
    /// # Errors
    ///
    /// `dfnum` and `dfden` must be `> 0`.
    pub fn f(&mut self, dfnum: f64, dfden: f64) -> Result<f64, DomainError> {
        check("f", "dfnum", dfnum, Constraint::Positive)?;
        check("f", "dfden", dfden, Constraint::Positive)?;

        let numerator = self.draw_chisquare(dfnum) * dfden;
        let denominator = self.draw_chisquare(dfden) * dfnum;
        Ok(numerator / denominator)
    }

    /// Noncentral F variate with a noncentral numerator.
    ///
    /// # Errors
    ///
    /// `dfnum` and `dfden` must be `> 0` and `nonc` `>= 0`; with `dfnum <= 1`,
    /// `nonc / 2` must not exceed [`POISSON_LAM_MAX`].
    pub fn noncentral_f(&mut self, dfnum: f64, dfden: f64, nonc: f64) -> Result<f64, DomainError> {
        check("noncentral_f", "dfnum", dfnum, Constraint::Positive)?;
        check("noncentral_f", "dfden", dfden, Constraint::Positive)?;
        check_noncentral_chisquare("noncentral_f", "dfnum", dfnum, nonc)?;

        let numerator = self.draw_noncentral_chisquare(dfnum, nonc) * dfden;
        let denominator = self.draw_chisquare(dfden) * dfnum;
        Ok(numerator / denominator)
    }

    /// Student-t variate `Z / sqrt(chisquare(df) / df)`.
    ///
    /// Evaluated as `sqrt(df/2) · Z / sqrt(G(df/2))`, the same quantity with
    /// the chi-square written as twice a standard gamma.
    ///
    /// # Errors
    ///
    /// `df` must be `> 0`.
    pub fn standard_t(&mut self, df: f64) -> Result<f64, DomainError> {
        check("standard_t", "df", df, Constraint::Positive)?;

        let z = self.gauss();
        let g = self.draw_standard_gamma(df / 2.0);
        Ok((df / 2.0).sqrt() * z / g.sqrt())
    }
}
