use super::FixedUint;
use super::limb::{adc32, sbb32};
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// An unsigned 96-bit integer.
///
/// Stored as three 32-bit limbs, least significant first, so no limb ever
/// needs masking. The byte form is big-endian (most significant byte first).
///
/// ```text
///  Bit Index:  95        64 63        32 31         0
///              +-----------+------------+------------+
///  Limb:       |  [2] high |  [1] mid   |  [0] low   |
///              +-----------+------------+------------+
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct U96([u32; 3]);

impl U96 {
    pub const ZERO: Self = Self([0; 3]);
    pub const ONE: Self = Self([1, 0, 0]);
    pub const MAX: Self = Self([u32::MAX; 3]);

    /// Builds a value from its top 32 bits and its bottom 64 bits.
    #[must_use]
    pub const fn from_parts(high: u32, low: u64) -> Self {
        Self([low as u32, (low >> 32) as u32, high])
    }

    /// The top 32 bits.
    #[must_use]
    pub const fn high(self) -> u32 {
        self.0[2]
    }

    /// The bottom 64 bits.
    #[must_use]
    pub const fn low(self) -> u64 {
        ((self.0[1] as u64) << 32) | self.0[0] as u64
    }

    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; 12] {
        let h = self.0[2].to_be_bytes();
        let m = self.0[1].to_be_bytes();
        let l = self.0[0].to_be_bytes();
        [
            h[0], h[1], h[2], h[3], m[0], m[1], m[2], m[3], l[0], l[1], l[2], l[3],
        ]
    }

    #[must_use]
    pub const fn from_be_bytes(b: [u8; 12]) -> Self {
        Self([
            u32::from_be_bytes([b[8], b[9], b[10], b[11]]),
            u32::from_be_bytes([b[4], b[5], b[6], b[7]]),
            u32::from_be_bytes([b[0], b[1], b[2], b[3]]),
        ])
    }

    #[must_use]
    pub const fn compare(&self, other: &Self) -> Ordering {
        let mut i = 3;
        while i > 0 {
            i -= 1;
            if self.0[i] < other.0[i] {
                return Ordering::Less;
            }
            if self.0[i] > other.0[i] {
                return Ordering::Greater;
            }
        }
        Ordering::Equal
    }

    #[must_use]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        let (z0, c) = adc32(self.0[0], rhs.0[0], false);
        let (z1, c) = adc32(self.0[1], rhs.0[1], c);
        let (z2, _) = adc32(self.0[2], rhs.0[2], c);
        Self([z0, z1, z2])
    }

    #[must_use]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        let (z0, b) = sbb32(self.0[0], rhs.0[0], false);
        let (z1, b) = sbb32(self.0[1], rhs.0[1], b);
        let (z2, _) = sbb32(self.0[2], rhs.0[2], b);
        Self([z0, z1, z2])
    }

    #[must_use]
    pub const fn increment(self) -> Self {
        let (z0, c) = adc32(self.0[0], 1, false);
        let (z1, c) = adc32(self.0[1], 0, c);
        let (z2, _) = adc32(self.0[2], 0, c);
        Self([z0, z1, z2])
    }
}

impl FixedUint for U96 {
    const BITS: u32 = 96;
    const SIZE: usize = 12;

    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;
    const MAX: Self = Self::MAX;

    type ByteArray = [u8; 12];

    fn compare(&self, other: &Self) -> Ordering {
        Self::compare(self, other)
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        Self::wrapping_add(self, rhs)
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        Self::wrapping_sub(self, rhs)
    }

    fn increment(self) -> Self {
        Self::increment(self)
    }

    fn to_be_bytes(self) -> Self::ByteArray {
        Self::to_be_bytes(self)
    }

    fn from_be_bytes(bytes: Self::ByteArray) -> Self {
        Self::from_be_bytes(bytes)
    }
}

impl Ord for U96 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for U96 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Wrapping addition.
impl Add for U96 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl AddAssign for U96 {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.wrapping_add(rhs);
    }
}

/// Wrapping subtraction.
impl Sub for U96 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl SubAssign for U96 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.wrapping_sub(rhs);
    }
}

impl From<u32> for U96 {
    fn from(v: u32) -> Self {
        Self([v, 0, 0])
    }
}

impl From<u64> for U96 {
    fn from(v: u64) -> Self {
        Self::from_parts(0, v)
    }
}

impl From<U96> for u128 {
    fn from(v: U96) -> Self {
        (u128::from(v.high()) << 64) | u128::from(v.low())
    }
}

impl fmt::Display for U96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}{:08X}{:08X}", self.0[2], self.0[1], self.0[0])
    }
}

impl fmt::Debug for U96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U96({self})")
    }
}
