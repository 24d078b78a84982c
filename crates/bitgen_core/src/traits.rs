//! Capability traits every bit-generator backend exposes.
//!
//! Distribution code depends on these traits only, so any backend that can
//! hand out 64-bit and 32-bit words can be substituted without touching the
//! samplers.

/// Source of uniformly distributed fixed-width words.
///
/// Both methods are pure state mutators: they advance the generator and have
/// no other side effects.
///
/// # Examples
///
/// ```rust
/// use bitgen_core::{BitGenerator, Xoroshiro128};
///
/// fn first_word<G: BitGenerator>(rng: &mut G) -> u64 {
///     rng.next_u64()
/// }
///
/// let mut rng = Xoroshiro128::from_state(1, 2).unwrap();
/// assert_eq!(first_word(&mut rng), 3);
/// ```
pub trait BitGenerator {
    /// Returns the next 64 random bits.
    fn next_u64(&mut self) -> u64;

    /// Returns the next 32 random bits.
    fn next_u32(&mut self) -> u32;
}

/// Generators that can advance their state by a fixed, very large number of
/// draws without performing them.
pub trait JumpAhead {
    /// Advances the state as though a fixed large number of draws had been
    /// consumed.
    fn jump(&mut self);
}

impl<G: BitGenerator + ?Sized> BitGenerator for &mut G {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

impl<G: BitGenerator + ?Sized> BitGenerator for Box<G> {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

impl<G: JumpAhead + ?Sized> JumpAhead for &mut G {
    #[inline]
    fn jump(&mut self) {
        (**self).jump()
    }
}

impl<G: JumpAhead + ?Sized> JumpAhead for Box<G> {
    #[inline]
    fn jump(&mut self) {
        (**self).jump()
    }
}
