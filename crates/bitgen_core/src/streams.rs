//! Independent stream derivation for parallel workers.
//!
//! Each worker owns one generator, taken from a shared base by repeated
//! jumps: worker `i` starts `i` jumps (i × 2^64 draws) downstream of the
//! base. No locking or cross-worker coordination is involved.

use tracing::debug;

use crate::traits::JumpAhead;

/// A set of generators derived from one base by successive jumps.
///
/// # Examples
///
/// ```rust
/// use bitgen_core::{StreamSet, Xoroshiro128};
///
/// let base = Xoroshiro128::from_state(1, 2).unwrap();
/// let streams = StreamSet::new(&base, 4);
///
/// assert_eq!(streams.len(), 4);
/// assert_eq!(streams.get(0), Some(&base));
/// assert_eq!(streams.get(1), Some(&base.jumped()));
/// ```
#[derive(Debug, Clone)]
pub struct StreamSet<G> {
    streams: Vec<G>,
}

impl<G: JumpAhead + Clone> StreamSet<G> {
    /// Derives `count` streams; stream `i` is `base` jumped `i` times.
    pub fn new(base: &G, count: usize) -> Self {
        let mut streams = Vec::with_capacity(count);
        let mut cursor = base.clone();
        for index in 0..count {
            if index > 0 {
                cursor.jump();
            }
            streams.push(cursor.clone());
        }
        debug!(count, "derived jump-ahead streams");
        Self { streams }
    }
}

impl<G> StreamSet<G> {
    /// Returns the number of streams.
    #[inline]
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    /// Returns `true` if the set holds no streams.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Returns the stream at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&G> {
        self.streams.get(index)
    }

    /// Returns the stream at `index` for drawing.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut G> {
        self.streams.get_mut(index)
    }

    /// Iterates over the streams in jump order.
    pub fn iter(&self) -> std::slice::Iter<'_, G> {
        self.streams.iter()
    }

    /// Iterates mutably over the streams in jump order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, G> {
        self.streams.iter_mut()
    }

    /// Consumes the set, returning the streams in jump order.
    pub fn into_vec(self) -> Vec<G> {
        self.streams
    }
}

impl<G> IntoIterator for StreamSet<G> {
    type Item = G;
    type IntoIter = std::vec::IntoIter<G>;

    fn into_iter(self) -> Self::IntoIter {
        self.streams.into_iter()
    }
}
