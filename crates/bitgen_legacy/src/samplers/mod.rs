//! Legacy distribution samplers.
//!
//! Every sampler is a method on [`crate::AugmentedState`]. Parameterised
//! samplers validate their arguments first and return a
//! [`DomainError`](crate::DomainError) without consuming any draw; the
//! parameterless ones (`gauss`, `standard_exponential`, `standard_cauchy`)
//! cannot fail.
//!
//! Each public sampler has a crate-private `draw_*` counterpart that skips
//! validation. Composite samplers (chi-square, F, Student-t, negative
//! binomial, ...) call the `draw_*` forms so that a single validation covers
//! the whole composition.
//!
//! ## Module Structure
//!
//! - `normal`: polar Gaussian with cache, normal, lognormal, Cauchy, Wald
//! - `gamma`: exponential, gamma, beta, chi-square (central and noncentral),
//!   F (central and noncentral), Student-t
//! - `discrete`: Poisson (multiplication and PTRS) and negative binomial
//! - `power_law`: Pareto, Weibull, power
//!
//! ## Rejection Loops
//!
//! Rejection samplers redraw fresh uniforms on every rejection and loop
//! until acceptance. The loops terminate with probability one and are not
//! treated as errors.

mod discrete;
mod gamma;
mod normal;
mod power_law;

pub(crate) use discrete::check_negative_binomial;
pub(crate) use gamma::check_noncentral_chisquare;
