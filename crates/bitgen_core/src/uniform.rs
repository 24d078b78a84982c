//! Uniform floating-point adapters over raw bit draws.
//!
//! Every distribution sampler consumes uniforms through [`UniformExt`], which
//! is implemented for all [`BitGenerator`]s.

use crate::traits::BitGenerator;

/// 2^-53, the spacing of doubles built from the top 53 bits of a word.
const DOUBLE_UNIT: f64 = 1.0 / 9_007_199_254_740_992.0;

/// 2^-24, the spacing of floats built from the top 24 bits of a word.
const FLOAT_UNIT: f32 = 1.0 / 16_777_216.0;

/// Extension trait converting raw words into uniform floating-point values.
///
/// # Examples
///
/// ```rust
/// use bitgen_core::{UniformExt, Xoroshiro128};
///
/// let mut rng = Xoroshiro128::from_state(1, 2).unwrap();
/// let u = rng.next_double();
/// assert!((0.0..1.0).contains(&u));
///
/// let v = rng.next_double_open();
/// assert!(v > 0.0 && v < 1.0);
/// ```
pub trait UniformExt: BitGenerator {
    /// Uniform double in [0, 1) from the top 53 bits of one 64-bit word.
    #[inline]
    fn next_double(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * DOUBLE_UNIT
    }

    /// Uniform double in (0, 1).
    ///
    /// Exact zeros are redrawn, so logarithms and divisions downstream never
    /// see a boundary value. [`next_double`](Self::next_double) is already
    /// strictly below 1.
    #[inline]
    fn next_double_open(&mut self) -> f64 {
        loop {
            let u = self.next_double();
            if u > 0.0 {
                return u;
            }
        }
    }

    /// Uniform float in [0, 1) from the top 24 bits of one 32-bit word.
    #[inline]
    fn next_float(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * FLOAT_UNIT
    }

    /// Uniform double in [low, high).
    #[inline]
    fn next_uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_double()
    }
}

impl<G: BitGenerator + ?Sized> UniformExt for G {}
