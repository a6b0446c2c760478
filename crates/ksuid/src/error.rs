/// A result type defaulting to the crate [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `ksuid` can produce.
///
/// Every variant describes a caller or input error detected synchronously.
/// Arithmetic overflow is never an error: the fixed-width integers wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The base-62 input contains a byte outside `0-9A-Za-z`.
    #[error("invalid base62 character {byte:#04x} at index {index}")]
    InvalidCharacter {
        /// The offending byte.
        byte: u8,
        /// Its position in the input.
        index: usize,
    },

    /// The output buffer cannot hold the result without writing out of
    /// bounds.
    ///
    /// When decoding, this also covers text whose value is larger than the
    /// output buffer can represent.
    #[error("output buffer of {len} bytes is too small")]
    BufferTooSmall {
        /// Length of the buffer that was supplied.
        len: usize,
    },

    /// The input length does not match the width the operation expects.
    #[error("expected an input of {expected} bytes, got {len}")]
    WidthMismatch {
        /// The width the operation works on.
        expected: usize,
        /// The length that was supplied.
        len: usize,
    },

    /// A generator lock was poisoned by a panicking thread.
    ///
    /// Only produced by the lock-based generator (`std` feature).
    #[error("generator lock poisoned")]
    LockPoisoned,
}

#[cfg(feature = "std")]
use std::sync::{MutexGuard, PoisonError};
#[cfg(feature = "std")]
// Convert all poisoned lock errors to a simplified `LockPoisoned`
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
