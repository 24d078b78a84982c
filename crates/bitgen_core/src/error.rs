//! Error types for generator state handling.
//!
//! Drawing from a generator never fails. The only failure mode of this layer
//! is constructing or restoring a generator from an unusable state.

use thiserror::Error;

/// Generator state errors.
///
/// Raised when a generator is created, restored or deserialised from a
/// state it cannot run from. Never raised while drawing.
///
/// # Examples
/// ```
/// use bitgen_core::{StateError, Xoroshiro128};
///
/// let err = Xoroshiro128::from_state(0, 0).unwrap_err();
/// assert_eq!(err, StateError::AllZero);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Both state words are zero, a fixed point of the recurrence.
    #[error("Invalid generator state: all-zero state is a fixed point of the recurrence")]
    AllZero,

    /// A textual state could not be parsed.
    #[error("Malformed generator state: {0}")]
    Malformed(String),
}
