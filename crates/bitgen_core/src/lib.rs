//! # bitgen_core: Bit Stream Foundation for the Legacy Random Engine
//!
//! ## Layer 1 (Core) Role
//!
//! bitgen_core is the bottom layer of the engine and provides:
//! - The bit-generator capability contract (`BitGenerator`, `JumpAhead`)
//! - The xoroshiro128+ bit stream with jump-ahead (`Xoroshiro128`)
//! - Uniform floating-point adapters over any bit generator (`UniformExt`)
//! - Independent stream derivation for parallel workers (`StreamSet`)
//! - A bridge for rand-ecosystem generators (`RandCoreBackend`)
//! - State validation errors (`StateError`)
//!
//! ## Reproducibility Contract
//!
//! The same 128-bit state always yields the same sequence of words, on every
//! platform. The recurrence, its rotation/shift constants and the jump
//! polynomial are fixed together and must never be altered independently.
//!
//! ## Usage Examples
//!
//! ```rust
//! use bitgen_core::{UniformExt, Xoroshiro128};
//!
//! let mut rng = Xoroshiro128::from_state(1, 2).unwrap();
//! assert_eq!(rng.next_u64(), 3);
//!
//! // Derive an independent stream for a second worker
//! let mut worker = rng.jumped();
//! let u = worker.next_double();
//! assert!((0.0..1.0).contains(&u));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation of `Xoroshiro128State` and `Xoroshiro128`
//!   snapshots (deserialising an all-zero state fails with `StateError`)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod backend;
pub mod error;
pub mod streams;
pub mod traits;
pub mod uniform;
pub mod xoroshiro;

pub use backend::RandCoreBackend;
pub use error::StateError;
pub use streams::StreamSet;
pub use traits::{BitGenerator, JumpAhead};
pub use uniform::UniformExt;
pub use xoroshiro::{Xoroshiro128, Xoroshiro128State, JUMP};
