//! # bitgen_legacy: Legacy Distribution Samplers
//!
//! ## Layer 2 (Distributions) Role
//!
//! bitgen_legacy sits on top of [`bitgen_core`] and provides:
//! - The augmented state carrying the spare Gaussian (`AugmentedState`)
//! - Legacy samplers for twenty continuous and discrete distributions
//! - A value form for named distributions (`LegacyDistribution`)
//! - Deterministic parallel fills over jump-derived streams (`fill_parallel`)
//!
//! ## Reproducibility Contract
//!
//! Each sampler consumes uniforms in a fixed order with fixed rejection
//! tests, so a given generator state and call sequence always reproduces the
//! same variates. Parameter checks run before any draw; a rejected call never
//! advances the stream.
//!
//! ## Usage Examples
//!
//! ```rust
//! use bitgen_core::Xoroshiro128;
//! use bitgen_legacy::AugmentedState;
//!
//! let mut state = AugmentedState::new(Xoroshiro128::from_state(1, 2).unwrap());
//!
//! let z = state.normal(10.0, 2.0).unwrap();
//! let g = state.gamma(2.5, 1.0).unwrap();
//! let k = state.poisson(4.0).unwrap();
//! assert!(z.is_finite() && g > 0.0 && k >= 0);
//!
//! assert!(state.beta(1.0, -1.0).is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation of `AugmentedState` (generator plus cached
//!   Gaussian) and `LegacyDistribution`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod augmented;
pub mod distribution;
pub mod error;
pub mod parallel;
mod samplers;

pub use augmented::AugmentedState;
pub use distribution::{LegacyDistribution, DISTRIBUTION_NAMES};
pub use error::{Constraint, DomainError, LegacyError, POISSON_LAM_MAX};
pub use parallel::fill_parallel;
