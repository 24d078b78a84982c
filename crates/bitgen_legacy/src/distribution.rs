//! Named distributions with their parameters.
//!
//! [`LegacyDistribution`] is the value form of a sampler call: it can be
//! validated once, stored in configuration, parsed from text such as
//! `gamma:2,1.5`, and sampled repeatedly.

use std::fmt;
use std::str::FromStr;

use bitgen_core::BitGenerator;

use crate::augmented::AugmentedState;
use crate::error::{check, Constraint, DomainError, LegacyError, POISSON_LAM_MAX};
use crate::samplers::{check_negative_binomial, check_noncentral_chisquare};

/// A legacy distribution together with its parameters.
///
/// Integer-valued distributions (`NegativeBinomial`, `Poisson`) are widened
/// to `f64` by [`sample`](Self::sample).
///
/// # Examples
///
/// ```rust
/// use bitgen_core::Xoroshiro128;
/// use bitgen_legacy::{AugmentedState, LegacyDistribution};
///
/// let dist: LegacyDistribution = "beta:2,3".parse().unwrap();
/// assert_eq!(dist, LegacyDistribution::Beta { a: 2.0, b: 3.0 });
///
/// let mut state = AugmentedState::new(Xoroshiro128::from_state(1, 2).unwrap());
/// let x = dist.sample(&mut state).unwrap();
/// assert!((0.0..=1.0).contains(&x));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum LegacyDistribution {
    /// Standard normal.
    StandardNormal,
    /// Normal with location and scale.
    Normal {
        /// Mean
        loc: f64,
        /// Standard deviation
        scale: f64,
    },
    /// Standard exponential.
    StandardExponential,
    /// Exponential with scale (mean).
    Exponential {
        /// Mean
        scale: f64,
    },
    /// Gamma with unit scale.
    StandardGamma {
        /// Shape
        shape: f64,
    },
    /// Gamma with shape and scale.
    Gamma {
        /// Shape
        shape: f64,
        /// Scale
        scale: f64,
    },
    /// Beta.
    Beta {
        /// First shape
        a: f64,
        /// Second shape
        b: f64,
    },
    /// Chi-square.
    ChiSquare {
        /// Degrees of freedom
        df: f64,
    },
    /// Noncentral chi-square.
    NoncentralChiSquare {
        /// Degrees of freedom
        df: f64,
        /// Noncentrality
        nonc: f64,
    },
    /// Snedecor's F.
    F {
        /// Numerator degrees of freedom
        dfnum: f64,
        /// Denominator degrees of freedom
        dfden: f64,
    },
    /// Noncentral F.
    NoncentralF {
        /// Numerator degrees of freedom
        dfnum: f64,
        /// Denominator degrees of freedom
        dfden: f64,
        /// Noncentrality
        nonc: f64,
    },
    /// Wald (inverse Gaussian).
    Wald {
        /// Mean
        mean: f64,
        /// Scale
        scale: f64,
    },
    /// Lognormal.
    Lognormal {
        /// Mean of the underlying normal
        mean: f64,
        /// Standard deviation of the underlying normal
        sigma: f64,
    },
    /// Student's t.
    StandardT {
        /// Degrees of freedom
        df: f64,
    },
    /// Standard Cauchy.
    StandardCauchy,
    /// Negative binomial (failures before the n-th success).
    NegativeBinomial {
        /// Number of successes
        n: f64,
        /// Success probability
        p: f64,
    },
    /// Pareto (Lomax).
    Pareto {
        /// Shape
        a: f64,
    },
    /// Weibull.
    Weibull {
        /// Shape
        a: f64,
    },
    /// Power function.
    Power {
        /// Exponent
        a: f64,
    },
    /// Poisson.
    Poisson {
        /// Mean
        lam: f64,
    },
}

/// Every accepted name, in declaration order.
pub const DISTRIBUTION_NAMES: [&str; 20] = [
    "standard_normal",
    "normal",
    "standard_exponential",
    "exponential",
    "standard_gamma",
    "gamma",
    "beta",
    "chisquare",
    "noncentral_chisquare",
    "f",
    "noncentral_f",
    "wald",
    "lognormal",
    "standard_t",
    "standard_cauchy",
    "negative_binomial",
    "pareto",
    "weibull",
    "power",
    "poisson",
];

impl LegacyDistribution {
    /// Returns the snake_case name used by `FromStr` and `Display`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StandardNormal => "standard_normal",
            Self::Normal { .. } => "normal",
            Self::StandardExponential => "standard_exponential",
            Self::Exponential { .. } => "exponential",
            Self::StandardGamma { .. } => "standard_gamma",
            Self::Gamma { .. } => "gamma",
            Self::Beta { .. } => "beta",
            Self::ChiSquare { .. } => "chisquare",
            Self::NoncentralChiSquare { .. } => "noncentral_chisquare",
            Self::F { .. } => "f",
            Self::NoncentralF { .. } => "noncentral_f",
            Self::Wald { .. } => "wald",
            Self::Lognormal { .. } => "lognormal",
            Self::StandardT { .. } => "standard_t",
            Self::StandardCauchy => "standard_cauchy",
            Self::NegativeBinomial { .. } => "negative_binomial",
            Self::Pareto { .. } => "pareto",
            Self::Weibull { .. } => "weibull",
            Self::Power { .. } => "power",
            Self::Poisson { .. } => "poisson",
        }
    }

    /// Returns the parameters in positional order.
    pub fn params(&self) -> Vec<f64> {
        match *self {
            Self::StandardNormal | Self::StandardExponential | Self::StandardCauchy => vec![],
            Self::Normal { loc, scale } => vec![loc, scale],
            Self::Exponential { scale } => vec![scale],
            Self::StandardGamma { shape } => vec![shape],
            Self::Gamma { shape, scale } => vec![shape, scale],
            Self::Beta { a, b } => vec![a, b],
            Self::ChiSquare { df } | Self::StandardT { df } => vec![df],
            Self::NoncentralChiSquare { df, nonc } => vec![df, nonc],
            Self::F { dfnum, dfden } => vec![dfnum, dfden],
            Self::NoncentralF { dfnum, dfden, nonc } => vec![dfnum, dfden, nonc],
            Self::Wald { mean, scale } => vec![mean, scale],
            Self::Lognormal { mean, sigma } => vec![mean, sigma],
            Self::NegativeBinomial { n, p } => vec![n, p],
            Self::Pareto { a } | Self::Weibull { a } | Self::Power { a } => vec![a],
            Self::Poisson { lam } => vec![lam],
        }
    }

    /// Returns `true` for integer-valued distributions.
    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::NegativeBinomial { .. } | Self::Poisson { .. })
    }

    /// Checks every parameter against its domain without drawing.
    ///
    /// # Errors
    ///
    /// Returns the first [`DomainError`] found, in parameter order.
    pub fn validate(&self) -> Result<(), DomainError> {
        let name = self.name();
        match *self {
            Self::StandardNormal | Self::StandardExponential | Self::StandardCauchy => Ok(()),
            Self::Normal { scale, .. } => check(name, "scale", scale, Constraint::NonNegative),
            Self::Exponential { scale } => check(name, "scale", scale, Constraint::Positive),
            Self::StandardGamma { shape } => check(name, "shape", shape, Constraint::Positive),
            Self::Gamma { shape, scale } => {
                check(name, "shape", shape, Constraint::Positive)?;
                check(name, "scale", scale, Constraint::Positive)
            }
            Self::Beta { a, b } => {
                check(name, "a", a, Constraint::Positive)?;
                check(name, "b", b, Constraint::Positive)
            }
            Self::ChiSquare { df } | Self::StandardT { df } => {
                check(name, "df", df, Constraint::Positive)
            }
            Self::NoncentralChiSquare { df, nonc } => {
                check_noncentral_chisquare(name, "df", df, nonc)
            }
            Self::F { dfnum, dfden } => {
                check(name, "dfnum", dfnum, Constraint::Positive)?;
                check(name, "dfden", dfden, Constraint::Positive)
            }
            Self::NoncentralF { dfnum, dfden, nonc } => {
                check(name, "dfnum", dfnum, Constraint::Positive)?;
                check(name, "dfden", dfden, Constraint::Positive)?;
                check_noncentral_chisquare(name, "dfnum", dfnum, nonc)
            }
            Self::Wald { mean, scale } => {
                check(name, "mean", mean, Constraint::Positive)?;
                check(name, "scale", scale, Constraint::Positive)
            }
            Self::Lognormal { sigma, .. } => check(name, "sigma", sigma, Constraint::NonNegative),
            Self::NegativeBinomial { n, p } => check_negative_binomial(n, p),
            Self::Pareto { a } | Self::Weibull { a } | Self::Power { a } => {
                check(name, "a", a, Constraint::Positive)
            }
            Self::Poisson { lam } => check(name, "lam", lam, Constraint::AtMost(POISSON_LAM_MAX)),
        }
    }

    /// Draws one variate.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] before drawing if a parameter is invalid.
    pub fn sample<G: BitGenerator>(&self, state: &mut AugmentedState<G>) -> Result<f64, DomainError> {
        match *self {
            Self::StandardNormal => Ok(state.gauss()),
            Self::Normal { loc, scale } => state.normal(loc, scale),
            Self::StandardExponential => Ok(state.standard_exponential()),
            Self::Exponential { scale } => state.exponential(scale),
            Self::StandardGamma { shape } => state.standard_gamma(shape),
            Self::Gamma { shape, scale } => state.gamma(shape, scale),
            Self::Beta { a, b } => state.beta(a, b),
            Self::ChiSquare { df } => state.chisquare(df),
            Self::NoncentralChiSquare { df, nonc } => state.noncentral_chisquare(df, nonc),
            Self::F { dfnum, dfden } => state.f(dfnum, dfden),
            Self::NoncentralF { dfnum, dfden, nonc } => state.noncentral_f(dfnum, dfden, nonc),
            Self::Wald { mean, scale } => state.wald(mean, scale),
            Self::Lognormal { mean, sigma } => state.lognormal(mean, sigma),
            Self::StandardT { df } => state.standard_t(df),
            Self::StandardCauchy => Ok(state.standard_cauchy()),
            Self::NegativeBinomial { n, p } => state.negative_binomial(n, p).map(|k| k as f64),
            Self::Pareto { a } => state.pareto(a),
            Self::Weibull { a } => state.weibull(a),
            Self::Power { a } => state.power(a),
            Self::Poisson { lam } => state.poisson(lam).map(|k| k as f64),
        }
    }

    /// Fills `out` with consecutive variates from one state.
    ///
    /// Parameters are validated once; an invalid distribution leaves both
    /// `out` and the state untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if a parameter is invalid.
    pub fn fill<G: BitGenerator>(
        &self,
        state: &mut AugmentedState<G>,
        out: &mut [f64],
    ) -> Result<(), DomainError> {
        self.validate()?;
        for slot in out.iter_mut() {
            *slot = self.sample(state)?;
        }
        Ok(())
    }
}

impl fmt::Display for LegacyDistribution {
    /// Formats as `name` or `name:p1,p2,...`, the form accepted by `FromStr`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        let params = self.params();
        for (i, value) in params.iter().enumerate() {
            let sep = if i == 0 { ':' } else { ',' };
            write!(f, "{}{}", sep, value)?;
        }
        Ok(())
    }
}

/// Converts a parameter list into a fixed-size array for `name`.
fn take<const N: usize>(name: &'static str, params: &[f64]) -> Result<[f64; N], LegacyError> {
    <[f64; N]>::try_from(params).map_err(|_| LegacyError::ParameterCount {
        name,
        expected: N,
        got: params.len(),
    })
}

impl FromStr for LegacyDistribution {
    type Err = LegacyError;

    /// Parses `name` or `name:p1,p2,...`.
    ///
    /// Parameters are positional, in the order of the variant's fields.
    /// Parsing does not check domains; call [`validate`](Self::validate).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, raw) = match s.split_once(':') {
            Some((name, raw)) => (name.trim(), raw.trim()),
            None => (s.trim(), ""),
        };
        let params = if raw.is_empty() {
            Vec::new()
        } else {
            raw.split(',')
                .map(|p| {
                    p.trim()
                        .parse::<f64>()
                        .map_err(|_| LegacyError::InvalidNumber(p.trim().to_string()))
                })
                .collect::<Result<Vec<f64>, _>>()?
        };

        let dist = match name {
            "standard_normal" => {
                take::<0>("standard_normal", &params)?;
                Self::StandardNormal
            }
            "normal" => {
                let [loc, scale] = take("normal", &params)?;
                Self::Normal { loc, scale }
            }
            "standard_exponential" => {
                take::<0>("standard_exponential", &params)?;
                Self::StandardExponential
            }
            "exponential" => {
                let [scale] = take("exponential", &params)?;
                Self::Exponential { scale }
            }
            "standard_gamma" => {
                let [shape] = take("standard_gamma", &params)?;
                Self::StandardGamma { shape }
            }
            "gamma" => {
                let [shape, scale] = take("gamma", &params)?;
                Self::Gamma { shape, scale }
            }
            "beta" => {
                let [a, b] = take("beta", &params)?;
                Self::Beta { a, b }
            }
            "chisquare" => {
                let [df] = take("chisquare", &params)?;
                Self::ChiSquare { df }
            }
            "noncentral_chisquare" => {
                let [df, nonc] = take("noncentral_chisquare", &params)?;
                Self::NoncentralChiSquare { df, nonc }
            }
            "f" => {
                let [dfnum, dfden] = take("f", &params)?;
                Self::F { dfnum, dfden }
            }
            "noncentral_f" => {
                let [dfnum, dfden, nonc] = take("noncentral_f", &params)?;
                Self::NoncentralF { dfnum, dfden, nonc }
            }
            "wald" => {
                let [mean, scale] = take("wald", &params)?;
                Self::Wald { mean, scale }
            }
            "lognormal" => {
                let [mean, sigma] = take("lognormal", &params)?;
                Self::Lognormal { mean, sigma }
            }
            "standard_t" => {
                let [df] = take("standard_t", &params)?;
                Self::StandardT { df }
            }
            "standard_cauchy" => {
                take::<0>("standard_cauchy", &params)?;
                Self::StandardCauchy
            }
            "negative_binomial" => {
                let [n, p] = take("negative_binomial", &params)?;
                Self::NegativeBinomial { n, p }
            }
            "pareto" => {
                let [a] = take("pareto", &params)?;
                Self::Pareto { a }
            }
            "weibull" => {
                let [a] = take("weibull", &params)?;
                Self::Weibull { a }
            }
            "power" => {
                let [a] = take("power", &params)?;
                Self::Power { a }
            }
            "poisson" => {
                let [lam] = take("poisson", &params)?;
                Self::Poisson { lam }
            }
            other => return Err(LegacyError::UnknownDistribution(other.to_string())),
        };
        Ok(dist)
    }
}
