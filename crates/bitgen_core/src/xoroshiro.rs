//! Xoroshiro128+ bit stream with jump-ahead.
//!
//! This module provides [`Xoroshiro128`], a 128-bit linear generator over
//! GF(2) with period 2^128 - 1, together with its named two-word state
//! [`Xoroshiro128State`].
//!
//! ## Recurrence
//!
//! Each step returns `s0 + s1` computed from the state *before* the update,
//! then applies (the order is significant, `s1` is mixed with the old `s0`):
//!
//! ```text
//! s1' = s1 ^ s0
//! s0' = rotl(s0, 55) ^ s1' ^ (s1' << 14)
//! s1' = rotl(s1', 36)
//! ```
//!
//! ## 32-bit Draws
//!
//! A 32-bit request on an empty cache consumes one 64-bit word, returns its
//! high half and keeps the low half as a spare for the next 32-bit request.
//! Two consecutive 32-bit draws therefore reconstruct exactly the 64-bit word
//! that a single `next_u64` would have produced.

use std::fmt;
use std::str::FromStr;

use rand_core::{impls, le, RngCore, SeedableRng};
use tracing::{debug, trace};

use crate::error::StateError;
use crate::traits::{BitGenerator, JumpAhead};

/// Jump polynomial for the 55/14/36 recurrence, equivalent to 2^64 calls to
/// [`Xoroshiro128::next_u64`].
pub const JUMP: [u64; 2] = [0xbeac_0467_eba5_facb, 0xd86b_048b_86aa_9922];

const ROTATE_A: u32 = 55;
const SHIFT_B: u32 = 14;
const ROTATE_C: u32 = 36;

/// SplitMix64 increment (golden ratio).
const SPLITMIX_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// The complete recoverable state of the bit stream.
///
/// # Examples
///
/// ```rust
/// use bitgen_core::Xoroshiro128State;
///
/// let state: Xoroshiro128State = "0x1:0x2".parse().unwrap();
/// assert_eq!(state, Xoroshiro128State::new(1, 2));
/// assert!(state.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xoroshiro128State {
    /// First state word.
    pub s0: u64,
    /// Second state word.
    pub s1: u64,
}

impl Xoroshiro128State {
    /// Creates a state from its two words without validation.
    #[inline]
    pub const fn new(s0: u64, s1: u64) -> Self {
        Self { s0, s1 }
    }

    /// Returns `true` for the all-zero state.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.s0 == 0 && self.s1 == 0
    }

    /// Checks that the generator can run from this state.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::AllZero`] when both words are zero.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.is_zero() {
            return Err(StateError::AllZero);
        }
        Ok(())
    }

    /// Advances one step and returns the pre-update sum.
    #[inline(always)]
    fn step(&mut self) -> u64 {
        let s0 = self.s0;
        let mut s1 = self.s1;
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.s0 = s0.rotate_left(ROTATE_A) ^ s1 ^ (s1 << SHIFT_B);
        self.s1 = s1.rotate_left(ROTATE_C);

        result
    }
}

impl fmt::Display for Xoroshiro128State {
    /// Formats as `0x<s0>:0x<s1>`, the form accepted by `FromStr`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}:{:#018x}", self.s0, self.s1)
    }
}

impl FromStr for Xoroshiro128State {
    type Err = StateError;

    /// Parses `s0:s1`, each word in hexadecimal with an optional `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (s0, s1) = s
            .split_once(':')
            .ok_or_else(|| StateError::Malformed(format!("missing ':' separator in '{}'", s)))?;
        Ok(Self::new(parse_hex_word(s0)?, parse_hex_word(s1)?))
    }
}

fn parse_hex_word(word: &str) -> Result<u64, StateError> {
    let trimmed = word.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    u64::from_str_radix(digits, 16)
        .map_err(|e| StateError::Malformed(format!("'{}' is not a 64-bit hex word: {}", word, e)))
}

/// Xoroshiro128+ generator with a cached 32-bit spare word.
///
/// # Thread Safety
///
/// The generator is `Send` but must not be shared for concurrent mutation.
/// Give each worker its own instance, derived with [`Xoroshiro128::jump`] or
/// [`crate::StreamSet`].
///
/// # Examples
///
/// ```rust
/// use bitgen_core::Xoroshiro128;
///
/// let mut a = Xoroshiro128::from_state(1, 2).unwrap();
/// let mut b = a.clone();
///
/// let word = a.next_u64();
/// let hi = b.next_u32() as u64;
/// let lo = b.next_u32() as u64;
/// assert_eq!((hi << 32) | lo, word);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Snapshot", into = "Snapshot")
)]
pub struct Xoroshiro128 {
    state: Xoroshiro128State,
    /// Low half of the last 64-bit word split by a 32-bit request.
    spare_word: Option<u32>,
}

impl Xoroshiro128 {
    /// Creates a generator from two state words.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::AllZero`] if both words are zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bitgen_core::Xoroshiro128;
    ///
    /// assert!(Xoroshiro128::from_state(1, 2).is_ok());
    /// assert!(Xoroshiro128::from_state(0, 0).is_err());
    /// ```
    pub fn from_state(s0: u64, s1: u64) -> Result<Self, StateError> {
        Self::try_from(Xoroshiro128State::new(s0, s1))
    }

    /// Returns a copy of the current state words.
    #[inline]
    pub fn state(&self) -> Xoroshiro128State {
        self.state
    }

    /// Returns the cached 32-bit spare word, if any.
    #[inline]
    pub fn spare_word(&self) -> Option<u32> {
        self.spare_word
    }

    /// Returns the next 64 random bits.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state.step()
    }

    /// Returns the next 32 random bits.
    ///
    /// On a cache miss the high half of a fresh 64-bit word is returned and
    /// the low half is cached; on a hit the cached half is returned and the
    /// cache is emptied.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if let Some(word) = self.spare_word.take() {
            return word;
        }
        let next = self.state.step();
        self.spare_word = Some(next as u32);
        (next >> 32) as u32
    }

    /// Advances the state as though [`next_u64`](Self::next_u64) had been
    /// called 2^64 times.
    ///
    /// The spare 32-bit word belongs to the abandoned position in the stream
    /// and is discarded.
    pub fn jump(&mut self) {
        let mut s0 = 0u64;
        let mut s1 = 0u64;
        for &word in JUMP.iter() {
            for bit in 0..64 {
                if word & (1u64 << bit) != 0 {
                    s0 ^= self.state.s0;
                    s1 ^= self.state.s1;
                }
                self.state.step();
            }
        }
        self.state = Xoroshiro128State::new(s0, s1);
        self.spare_word = None;
        trace!(state = %self.state, "xoroshiro128 jumped 2^64 draws");
    }

    /// Returns a copy of this generator advanced by one [`jump`](Self::jump).
    pub fn jumped(&self) -> Self {
        let mut next = self.clone();
        next.jump();
        next
    }
}

impl TryFrom<Xoroshiro128State> for Xoroshiro128 {
    type Error = StateError;

    fn try_from(state: Xoroshiro128State) -> Result<Self, Self::Error> {
        state.validate()?;
        debug!(state = %state, "xoroshiro128 restored from state");
        Ok(Self {
            state,
            spare_word: None,
        })
    }
}

impl BitGenerator for Xoroshiro128 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        Xoroshiro128::next_u64(self)
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        Xoroshiro128::next_u32(self)
    }
}

impl JumpAhead for Xoroshiro128 {
    #[inline]
    fn jump(&mut self) {
        Xoroshiro128::jump(self)
    }
}

impl RngCore for Xoroshiro128 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Xoroshiro128::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Xoroshiro128::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xoroshiro128 {
    type Seed = [u8; 16];

    /// Reads the two state words little-endian from the seed.
    ///
    /// The all-zero seed maps to `seed_from_u64(0)` instead of the fixed
    /// point of the recurrence.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut words = [0u64; 2];
        le::read_u64_into(&seed, &mut words);
        let state = Xoroshiro128State::new(words[0], words[1]);
        if state.is_zero() {
            return Self::seed_from_u64(0);
        }
        Self {
            state,
            spare_word: None,
        }
    }

    /// Expands a 64-bit seed into both state words with SplitMix64.
    fn seed_from_u64(seed: u64) -> Self {
        let mut sm = seed;
        let s0 = splitmix64(&mut sm);
        let s1 = splitmix64(&mut sm);
        debug!(seed, "xoroshiro128 seeded via splitmix64");
        // Consecutive SplitMix64 outputs are distinct, so at most one is zero.
        Self {
            state: Xoroshiro128State::new(s0, s1),
            spare_word: None,
        }
    }
}

#[inline]
fn splitmix64(x: &mut u64) -> u64 {
    *x = x.wrapping_add(SPLITMIX_GAMMA);
    let mut z = *x;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Serialised form of a generator, validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Snapshot {
    state: Xoroshiro128State,
    spare_word: Option<u32>,
}

#[cfg(feature = "serde")]
impl TryFrom<Snapshot> for Xoroshiro128 {
    type Error = StateError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let mut rng = Self::try_from(snapshot.state)?;
        rng.spare_word = snapshot.spare_word;
        Ok(rng)
    }
}

#[cfg(feature = "serde")]
impl From<Xoroshiro128> for Snapshot {
    fn from(rng: Xoroshiro128) -> Self {
        Self {
            state: rng.state,
            spare_word: rng.spare_word,
        }
    }
}
