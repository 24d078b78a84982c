//! Gaussian-driven samplers.

use bitgen_core::{BitGenerator, UniformExt};

use crate::augmented::AugmentedState;
use crate::error::{check, Constraint, DomainError};

impl<G: BitGenerator> AugmentedState<G> {
    /// Standard normal variate by the polar (Marsaglia) method.
    ///
    /// Draws `(u, v)` uniform on (-1, 1)² until `r² = u² + v²` lies in (0, 1),
    /// sets `f = sqrt(-2 ln(r²) / r²)`, returns `u·f` and caches `v·f` for the
    /// next call.
    pub fn gauss(&mut self) -> f64 {
        if let Some(z) = self.take_spare_gaussian() {
            return z;
        }
        let (u, v, r2) = loop {
            let u = 2.0 * self.next_double() - 1.0;
            let v = 2.0 * self.next_double() - 1.0;
            let r2 = u * u + v * v;
            if r2 < 1.0 && r2 != 0.0 {
                break (u, v, r2);
            }
        };
        let f = (-2.0 * r2.ln() / r2).sqrt();
        self.store_spare_gaussian(f * v);
        f * u
    }

    /// Normal variate `loc + scale·Z`.
    ///
    /// # Errors
    ///
    /// `scale` must be `>= 0`.
    pub fn normal(&mut self, loc: f64, scale: f64) -> Result<f64, DomainError> {
        check("normal", "scale", scale, Constraint::NonNegative)?;
        Ok(self.draw_normal(loc, scale))
    }

    #[inline]
    pub(crate) fn draw_normal(&mut self, loc: f64, scale: f64) -> f64 {
        loc + scale * self.gauss()
    }

    /// Lognormal variate `exp(mean + sigma·Z)`.
    ///
    /// # Errors
    ///
    /// `sigma` must be `>= 0`.
    pub fn lognormal(&mut self, mean: f64, sigma: f64) -> Result<f64, DomainError> {
        check("lognormal", "sigma", sigma, Constraint::NonNegative)?;
        Ok(self.draw_normal(mean, sigma).exp())
    }

    /// Standard Cauchy variate as the ratio of two standard normals.
    pub fn standard_cauchy(&mut self) -> f64 {
        let numerator = self.gauss();
        numerator / self.gauss()
    }

    /// Wald (inverse Gaussian) variate.
    ///
    /// With `Y = mean·Z²`, the candidate
    /// `X = mean + mean/(2·scale)·(Y - sqrt(4·scale·Y + Y²))` is returned with
    /// probability `mean / (mean + X)`, otherwise `mean² / X` is returned.
    ///
    /// # Errors
    ///
    /// `mean` and `scale` must be `> 0`.
    pub fn wald(&mut self, mean: f64, scale: f64) -> Result<f64, DomainError> {
        check("wald", "mean", mean, Constraint::Positive)?;
        check("wald", "scale", scale, Constraint::Positive)?;

        let mu_2l = mean / (2.0 * scale);
        let z = self.gauss();
        let y = mean * z * z;
        let x = mean + mu_2l * (y - (4.0 * scale * y + y * y).sqrt());
        let u = self.next_double();
        if u <= mean / (mean + x) {
            Ok(x)
        } else {
            Ok(mean * mean / x)
        }
    }
}
