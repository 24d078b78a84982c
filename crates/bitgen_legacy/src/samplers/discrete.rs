//! Integer-valued samplers: Poisson and the negative binomial mixture.

use bitgen_core::{BitGenerator, UniformExt};

use crate::augmented::AugmentedState;
use crate::error::{check, Constraint, DomainError, POISSON_LAM_MAX};

/// Means at or above this use PTRS; below it, the multiplication method.
const PTRS_THRESHOLD: f64 = 10.0;

/// ln(2π) / 2.
const HALF_LN_2PI: f64 = 0.5 * 1.837_877_066_409_345_3;

/// Stirling series coefficients for ln Γ.
const LOGGAM_COEFFS: [f64; 10] = [
    8.333333333333333e-02,
    -2.777777777777778e-03,
    7.936507936507937e-04,
    -5.952380952380952e-04,
    8.417508417508418e-04,
    -1.917526917526918e-03,
    6.410256410256410e-03,
    -2.955065359477124e-02,
    1.796443723688307e-01,
    -1.39243221690590e+00,
];

/// Checks negative binomial parameters.
///
/// The gamma mixing variate is bounded as `(1-p)/p · (n + 10·sqrt(n))`; that
/// bound must not exceed [`POISSON_LAM_MAX`] or the Poisson stage could
/// overflow.
pub(crate) fn check_negative_binomial(n: f64, p: f64) -> Result<(), DomainError> {
    check("negative_binomial", "n", n, Constraint::Positive)?;
    check("negative_binomial", "p", p, Constraint::Probability)?;
    let mixing_bound = (1.0 - p) / p * (n + 10.0 * n.sqrt());
    check(
        "negative_binomial",
        "mixing_mean",
        mixing_bound,
        Constraint::AtMost(POISSON_LAM_MAX),
    )
}

/// ln Γ(x) for `x >= 1`, shifting small arguments up to 7 before applying
/// the Stirling series.
pub(crate) fn loggam(x: f64) -> f64 {
    if x == 1.0 || x == 2.0 {
        return 0.0;
    }
    let shift = if x < 7.0 { (7.0 - x) as i64 } else { 0 };
    let mut x0 = x + shift as f64;
    let x2 = (1.0 / x0) * (1.0 / x0);

    let mut series = LOGGAM_COEFFS[9];
    for &coeff in LOGGAM_COEFFS[..9].iter().rev() {
        series *= x2;
        series += coeff;
    }
    let mut gl = series / x0 + HALF_LN_2PI + (x0 - 0.5) * x0.ln() - x0;
    for _ in 0..shift {
        gl -= (x0 - 1.0).ln();
        x0 -= 1.0;
    }
    gl
}

impl<G: BitGenerator> AugmentedState<G> {
    /// Poisson variate with mean `lam`.
    ///
    /// # Errors
    ///
    /// `lam` must lie in `[0, POISSON_LAM_MAX]`.
    pub fn poisson(&mut self, lam: f64) -> Result<i64, DomainError> {
        check("poisson", "lam", lam, Constraint::AtMost(POISSON_LAM_MAX))?;
        Ok(self.draw_poisson(lam))
    }

    pub(crate) fn draw_poisson(&mut self, lam: f64) -> i64 {
        if lam >= PTRS_THRESHOLD {
            self.poisson_ptrs(lam)
        } else if lam == 0.0 {
            0
        } else {
            self.poisson_mult(lam)
        }
    }

    /// Counts uniforms multiplied in before the product drops to `e^-lam`.
    fn poisson_mult(&mut self, lam: f64) -> i64 {
        let enlam = (-lam).exp();
        let mut count = 0;
        let mut product = 1.0;
        loop {
            product *= self.next_double();
            if product > enlam {
                count += 1;
            } else {
                return count;
            }
        }
    }

    /// Hörmann's transformed rejection with squeeze (PTRS), for `lam >= 10`.
    fn poisson_ptrs(&mut self, lam: f64) -> i64 {
        let slam = lam.sqrt();
        let loglam = lam.ln();
        let b = 0.931 + 2.53 * slam;
        let a = -0.059 + 0.02483 * b;
        let invalpha = 1.1239 + 1.1328 / (b - 3.4);
        let vr = 0.9277 - 3.6224 / (b - 2.0);

        loop {
            let u = self.next_double() - 0.5;
            let v = self.next_double();
            let us = 0.5 - u.abs();
            let k = ((2.0 * a / us + b) * u + lam + 0.43).floor() as i64;

            if us >= 0.07 && v <= vr {
                return k;
            }
            if k < 0 || (us < 0.013 && v > us) {
                continue;
            }
            // ln(0) = -inf here still compares correctly
            let lhs = v.ln() + invalpha.ln() - (a / (us * us) + b).ln();
            let rhs = -lam + k as f64 * loglam - loggam(k as f64 + 1.0);
            if lhs <= rhs {
                return k;
            }
        }
    }

    /// Negative binomial variate as a gamma-Poisson mixture:
    /// `Y ~ Gamma(n, (1 - p) / p)`, result `Poisson(Y)`.
    ///
    /// # Errors
    ///
    /// `n` must be `> 0` and `p` in `(0, 1]`, with the mixing mean bound
    /// `(1-p)/p · (n + 10·sqrt(n))` at most [`POISSON_LAM_MAX`].
    pub fn negative_binomial(&mut self, n: f64, p: f64) -> Result<i64, DomainError> {
        check_negative_binomial(n, p)?;

        let y = self.draw_standard_gamma(n) * ((1.0 - p) / p);
        Ok(self.draw_poisson(y))
    }
}
