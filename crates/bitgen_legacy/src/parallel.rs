//! Parallel fills over jump-derived streams.
//!
//! The output buffer is cut into fixed-length chunks. Chunk `i` is filled by
//! its own [`AugmentedState`] built on the base generator jumped `i` times, so
//! the result depends only on the base state and the chunk length, never on
//! the number of worker threads or their scheduling.

use bitgen_core::{BitGenerator, JumpAhead, StreamSet};
use rayon::prelude::*;
use tracing::debug;

use crate::augmented::AugmentedState;
use crate::distribution::LegacyDistribution;
use crate::error::LegacyError;

/// Fills `out` with variates from `dist`, one jump-derived stream per chunk.
///
/// `base` is not advanced. The last chunk may be shorter than `chunk_len`.
/// An empty `out` is accepted and derives no streams.
///
/// # Errors
///
/// - [`LegacyError::InvalidChunkLength`] if `chunk_len` is zero
/// - [`LegacyError::Domain`] if a distribution parameter is invalid
///
/// Both are reported before any stream is derived; `out` is left untouched.
///
/// # Examples
///
/// ```rust
/// use bitgen_core::Xoroshiro128;
/// use bitgen_legacy::{fill_parallel, LegacyDistribution};
///
/// let base = Xoroshiro128::from_state(1, 2).unwrap();
/// let mut out = vec![0.0; 1000];
/// fill_parallel(&base, &LegacyDistribution::StandardNormal, &mut out, 128).unwrap();
/// assert!(out.iter().all(|x| x.is_finite()));
/// ```
pub fn fill_parallel<G>(
    base: &G,
    dist: &LegacyDistribution,
    out: &mut [f64],
    chunk_len: usize,
) -> Result<(), LegacyError>
where
    G: BitGenerator + JumpAhead + Clone + Send,
{
    if chunk_len == 0 {
        return Err(LegacyError::InvalidChunkLength(chunk_len));
    }
    dist.validate()?;

    let chunks = out.len().div_ceil(chunk_len);
    let streams = StreamSet::new(base, chunks);
    debug!(
        distribution = dist.name(),
        len = out.len(),
        chunk_len,
        chunks,
        "parallel fill"
    );

    out.par_chunks_mut(chunk_len)
        .zip(streams.into_vec().into_par_iter())
        .try_for_each(|(chunk, generator)| {
            let mut state = AugmentedState::new(generator);
            dist.fill(&mut state, chunk)
        })?;
    Ok(())
}
