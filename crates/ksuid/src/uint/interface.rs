use crate::{Error, Result};
use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;

/// A trait for exact unsigned integers of a fixed bit width.
///
/// Implementors hold their value in machine-word limbs, but the limb layout is
/// an internal detail: callers see only comparison, wrapping arithmetic, and a
/// big-endian byte form of exactly [`FixedUint::SIZE`] bytes.
///
/// Arithmetic wraps modulo `2^BITS`. There is no overflow signal and no
/// operation ever panics on overflow.
pub trait FixedUint:
    Copy + Clone + Default + fmt::Debug + fmt::Display + Ord + PartialOrd + Eq + PartialEq + Hash
{
    /// Logical width in bits.
    const BITS: u32;
    /// Width of the big-endian byte form.
    const SIZE: usize;

    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    type ByteArray: AsRef<[u8]>
        + AsMut<[u8]>
        + fmt::Debug
        + Default
        + Copy
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Hash;

    /// Compares two values, most significant limb first.
    fn compare(&self, other: &Self) -> Ordering;

    /// `self + rhs` modulo `2^BITS`.
    #[must_use]
    fn wrapping_add(self, rhs: Self) -> Self;

    /// `self - rhs` modulo `2^BITS`.
    #[must_use]
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// `self + 1` modulo `2^BITS`. The maximum value wraps to zero.
    #[must_use]
    fn increment(self) -> Self {
        self.wrapping_add(Self::ONE)
    }

    fn to_be_bytes(self) -> Self::ByteArray;

    fn from_be_bytes(bytes: Self::ByteArray) -> Self;

    /// Builds a value from a big-endian slice that must be exactly
    /// [`Self::SIZE`] bytes long.
    ///
    /// # Errors
    /// Returns [`Error::WidthMismatch`] for any other length.
    fn try_from_be_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(Error::WidthMismatch {
                expected: Self::SIZE,
                len: bytes.len(),
            });
        }
        let mut buf = Self::ByteArray::default();
        buf.as_mut().copy_from_slice(bytes);
        Ok(Self::from_be_bytes(buf))
    }
}
