//! Bridge from rand-ecosystem generators to [`BitGenerator`].

use rand_core::{RngCore, SeedableRng};

use crate::traits::BitGenerator;

/// Wraps any [`RngCore`] so it can drive the distribution layer.
///
/// The wrapped generator's own `next_u32` is used as is; no spare-word cache
/// is added on top of it.
///
/// # Examples
///
/// ```rust
/// use bitgen_core::{RandCoreBackend, UniformExt};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut backend = RandCoreBackend::new(StdRng::seed_from_u64(7));
/// let u = backend.next_double();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandCoreBackend<R> {
    inner: R,
}

impl<R: RngCore> RandCoreBackend<R> {
    /// Wraps a rand generator.
    #[inline]
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns a shared reference to the wrapped generator.
    #[inline]
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Unwraps the generator.
    #[inline]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RngCore + SeedableRng> RandCoreBackend<R> {
    /// Seeds a fresh wrapped generator from a 64-bit seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(R::seed_from_u64(seed))
    }
}

impl<R: RngCore> BitGenerator for RandCoreBackend<R> {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }
}
