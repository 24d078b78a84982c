//! Integration tests for parameter validation.
//!
//! Every rejected call must report the offending parameter and leave the
//! generator exactly where it was.

use bitgen_core::Xoroshiro128;
use bitgen_legacy::{AugmentedState, Constraint, DomainError, POISSON_LAM_MAX};

fn state() -> AugmentedState<Xoroshiro128> {
    AugmentedState::new(Xoroshiro128::from_state(0x9e37_79b9_7f4a_7c15, 0xbf58_476d_1ce4_e5b9).unwrap())
}

/// Runs `call` and checks that it fails on `parameter` without drawing.
fn assert_rejected<T: std::fmt::Debug>(
    parameter: &str,
    call: impl FnOnce(&mut AugmentedState<Xoroshiro128>) -> Result<T, DomainError>,
) -> DomainError {
    let mut s = state();
    let before = s.generator().state();
    let err = call(&mut s).unwrap_err();
    assert_eq!(err.parameter, parameter, "unexpected parameter in {}", err);
    assert_eq!(s.generator().state(), before, "{} consumed draws", err.distribution);
    err
}

#[test]
fn test_gamma_shape_zero() {
    let err = assert_rejected("shape", |s| s.standard_gamma(0.0));
    assert_eq!(err.constraint, Constraint::Positive);
    assert_rejected("shape", |s| s.gamma(0.0, 1.0));
    assert_rejected("scale", |s| s.gamma(1.0, 0.0));
}

#[test]
fn test_beta_negative_b() {
    let err = assert_rejected("b", |s| s.beta(1.0, -1.0));
    assert_eq!(err.distribution, "beta");
    assert_eq!(err.value, -1.0);
    assert_rejected("a", |s| s.beta(0.0, 1.0));
}

#[test]
fn test_negative_binomial_probability() {
    let err = assert_rejected("p", |s| s.negative_binomial(5.0, 0.0));
    assert_eq!(err.constraint, Constraint::Probability);
    assert_rejected("p", |s| s.negative_binomial(5.0, 1.5));
    assert_rejected("n", |s| s.negative_binomial(0.0, 0.5));
}

#[test]
fn test_negative_binomial_certain_success_is_zero() {
    let mut s = state();
    for _ in 0..20 {
        assert_eq!(s.negative_binomial(5.0, 1.0).unwrap(), 0);
    }
}

#[test]
fn test_poisson_bounds() {
    assert_rejected("lam", |s| s.poisson(-1.0));
    assert_rejected("lam", |s| s.poisson(1e19));
    assert_rejected("lam", |s| s.poisson(f64::NAN));

    let mut s = state();
    assert_eq!(s.poisson(0.0).unwrap(), 0);
    assert!(s.poisson(POISSON_LAM_MAX).is_ok());
}

#[test]
fn test_scale_and_shape_domains() {
    assert_rejected("scale", |s| s.normal(0.0, -0.5));
    assert_rejected("scale", |s| s.exponential(0.0));
    assert_rejected("sigma", |s| s.lognormal(0.0, -1.0));
    assert_rejected("mean", |s| s.wald(0.0, 1.0));
    assert_rejected("scale", |s| s.wald(1.0, -1.0));
    assert_rejected("df", |s| s.chisquare(0.0));
    assert_rejected("nonc", |s| s.noncentral_chisquare(2.0, -1.0));
    assert_rejected("dfden", |s| s.f(1.0, 0.0));
    assert_rejected("nonc", |s| s.noncentral_f(1.0, 2.0, -0.1));
    assert_rejected("df", |s| s.standard_t(-3.0));
    assert_rejected("a", |s| s.pareto(0.0));
    assert_rejected("a", |s| s.weibull(0.0));
    assert_rejected("a", |s| s.power(-2.0));
}

#[test]
fn test_nan_parameters_rejected() {
    assert_rejected("shape", |s| s.standard_gamma(f64::NAN));
    assert_rejected("a", |s| s.beta(f64::NAN, 1.0));
    assert_rejected("scale", |s| s.normal(0.0, f64::NAN));
}

#[test]
fn test_degenerate_but_valid_parameters() {
    let mut s = state();
    assert_eq!(s.normal(3.0, 0.0).unwrap(), 3.0);
    assert_eq!(s.lognormal(0.0, 0.0).unwrap(), 1.0);
    let x = s.noncentral_chisquare(2.0, 0.0).unwrap();
    assert!(x >= 0.0);
}
