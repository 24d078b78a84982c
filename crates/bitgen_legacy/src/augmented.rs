//! Bit generator augmented with the legacy Gaussian cache.
//!
//! The polar method produces two independent standard normals per accepted
//! pair of uniforms. [`AugmentedState`] returns the first and keeps the second
//! for the next Gaussian request. The cached value is part of the same stream
//! as the generator it came from, so every operation that moves or replaces
//! the generator (reseed, jump, swap) discards it.

use bitgen_core::{BitGenerator, JumpAhead};
use rand_core::SeedableRng;
use tracing::debug;

/// A bit generator plus the spare Gaussian of the legacy samplers.
///
/// Owns its generator; wrap `&mut G` to borrow one instead. Raw draws through
/// the [`BitGenerator`] implementation go straight to the generator and never
/// touch the Gaussian cache.
///
/// # Thread Safety
///
/// Not safe for concurrent mutation. Give each worker its own state, built on
/// a generator derived with [`JumpAhead::jump`] (see [`crate::parallel`]).
///
/// # Examples
///
/// ```rust
/// use bitgen_core::Xoroshiro128;
/// use bitgen_legacy::AugmentedState;
///
/// let mut state = AugmentedState::new(Xoroshiro128::from_state(1, 2).unwrap());
///
/// let z = state.gauss();
/// assert!(state.has_spare_gaussian());
/// let _paired = state.gauss();
/// assert!(!state.has_spare_gaussian());
/// assert!(z.is_finite());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AugmentedState<G> {
    generator: G,
    spare_gaussian: Option<f64>,
}

impl<G: BitGenerator> AugmentedState<G> {
    /// Wraps a generator with an empty Gaussian cache.
    #[inline]
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            spare_gaussian: None,
        }
    }

    /// Returns a shared reference to the generator.
    ///
    /// No mutable accessor exists: moving the generator without clearing the
    /// cache would pair a stale Gaussian with a new stream.
    #[inline]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Unwraps the generator, dropping any cached Gaussian.
    #[inline]
    pub fn into_inner(self) -> G {
        self.generator
    }

    /// Returns `true` if the next Gaussian request will be served from cache.
    #[inline]
    pub fn has_spare_gaussian(&self) -> bool {
        self.spare_gaussian.is_some()
    }

    /// Discards the cached Gaussian, if any.
    pub fn clear_cache(&mut self) {
        if self.spare_gaussian.take().is_some() {
            debug!("discarded cached gaussian");
        }
    }

    /// Replaces the generator, returning the old one and clearing the cache.
    pub fn set_generator(&mut self, generator: G) -> G {
        self.clear_cache();
        std::mem::replace(&mut self.generator, generator)
    }

    /// Takes the cached Gaussian, leaving the cache empty.
    #[inline]
    pub(crate) fn take_spare_gaussian(&mut self) -> Option<f64> {
        self.spare_gaussian.take()
    }

    /// Stores the second value of a polar pair.
    #[inline]
    pub(crate) fn store_spare_gaussian(&mut self, value: f64) {
        self.spare_gaussian = Some(value);
    }
}

impl<G: BitGenerator + SeedableRng> AugmentedState<G> {
    /// Reseeds the generator from a 64-bit seed and clears the cache.
    pub fn reseed(&mut self, seed: u64) {
        self.clear_cache();
        self.generator = G::seed_from_u64(seed);
        debug!(seed, "augmented state reseeded");
    }
}

impl<G: BitGenerator + JumpAhead> AugmentedState<G> {
    /// Jumps the generator ahead and clears the cache.
    pub fn jump(&mut self) {
        self.clear_cache();
        self.generator.jump();
    }
}

impl<G: BitGenerator> BitGenerator for AugmentedState<G> {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.generator.next_u64()
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.generator.next_u32()
    }
}

impl<G: BitGenerator> From<G> for AugmentedState<G> {
    fn from(generator: G) -> Self {
        Self::new(generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitgen_core::{UniformExt, Xoroshiro128};

    fn state() -> AugmentedState<Xoroshiro128> {
        AugmentedState::new(Xoroshiro128::from_state(1, 2).unwrap())
    }

    #[test]
    fn test_raw_draws_bypass_gaussian_cache() {
        let mut aug = state();
        aug.gauss();
        assert!(aug.has_spare_gaussian());

        let mut replay = aug.generator().clone();
        assert_eq!(aug.next_u64(), replay.next_u64());
        assert_eq!(aug.next_double(), replay.next_double());
        assert!(aug.has_spare_gaussian());
    }

    #[test]
    fn test_set_generator_clears_cache() {
        let mut aug = state();
        aug.gauss();
        let fresh = Xoroshiro128::from_state(5, 6).unwrap();
        let old = aug.set_generator(fresh.clone());

        assert!(!aug.has_spare_gaussian());
        assert_ne!(old.state(), fresh.state());
        assert_eq!(aug.generator().state(), fresh.state());
    }

    #[test]
    fn test_reseed_clears_cache() {
        let mut aug = state();
        aug.gauss();
        aug.reseed(42);
        assert!(!aug.has_spare_gaussian());
        assert_eq!(aug.generator(), &Xoroshiro128::seed_from_u64(42));
    }

    #[test]
    fn test_jump_clears_cache() {
        let mut aug = state();
        aug.gauss();
        let expected = aug.generator().jumped();
        aug.jump();
        assert!(!aug.has_spare_gaussian());
        assert_eq!(aug.generator().state(), expected.state());
    }

    #[test]
    fn test_borrowed_generator_keeps_advancing_owner() {
        let mut rng = Xoroshiro128::from_state(1, 2).unwrap();
        {
            let mut aug = AugmentedState::new(&mut rng);
            aug.standard_exponential();
        }
        // The first word (3) maps to an exact 0.0 and is redrawn.
        let mut replay = Xoroshiro128::from_state(1, 2).unwrap();
        replay.next_u64();
        replay.next_u64();
        assert_eq!(rng.state(), replay.state());
    }

    #[test]
    fn test_clear_cache_is_idempotent() {
        let mut aug = state();
        aug.clear_cache();
        aug.gauss();
        aug.clear_cache();
        aug.clear_cache();
        assert!(!aug.has_spare_gaussian());
    }
}
