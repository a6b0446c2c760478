use super::FixedUint;
use super::limb::{adc64, sbb64};
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// An unsigned 128-bit integer stored as two 64-bit limbs.
///
/// The arithmetic is limb-wise with explicit carry and borrow chains rather
/// than delegated to the native `u128`, so both payload widths share one
/// arithmetic model.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct U128 {
    hi: u64,
    lo: u64,
}

impl U128 {
    pub const ZERO: Self = Self::from_parts(0, 0);
    pub const ONE: Self = Self::from_parts(0, 1);
    pub const MAX: Self = Self::from_parts(u64::MAX, u64::MAX);

    #[must_use]
    pub const fn from_parts(high: u64, low: u64) -> Self {
        Self { hi: high, lo: low }
    }

    #[must_use]
    pub const fn high(self) -> u64 {
        self.hi
    }

    #[must_use]
    pub const fn low(self) -> u64 {
        self.lo
    }

    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; 16] {
        let h = self.hi.to_be_bytes();
        let l = self.lo.to_be_bytes();
        let mut out = [0; 16];
        let mut i = 0;
        while i < 8 {
            out[i] = h[i];
            out[i + 8] = l[i];
            i += 1;
        }
        out
    }

    #[must_use]
    pub const fn from_be_bytes(b: [u8; 16]) -> Self {
        Self {
            hi: u64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]),
            lo: u64::from_be_bytes([b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]]),
        }
    }

    #[must_use]
    pub const fn compare(&self, other: &Self) -> Ordering {
        if self.hi < other.hi {
            return Ordering::Less;
        }
        if self.hi > other.hi {
            return Ordering::Greater;
        }
        if self.lo < other.lo {
            return Ordering::Less;
        }
        if self.lo > other.lo {
            return Ordering::Greater;
        }
        Ordering::Equal
    }

    #[must_use]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        let (lo, c) = adc64(self.lo, rhs.lo, false);
        let (hi, _) = adc64(self.hi, rhs.hi, c);
        Self { hi, lo }
    }

    #[must_use]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        let (lo, b) = sbb64(self.lo, rhs.lo, false);
        let (hi, _) = sbb64(self.hi, rhs.hi, b);
        Self { hi, lo }
    }

    #[must_use]
    pub const fn increment(self) -> Self {
        let (lo, c) = adc64(self.lo, 1, false);
        let (hi, _) = adc64(self.hi, 0, c);
        Self { hi, lo }
    }
}

impl FixedUint for U128 {
    const BITS: u32 = 128;
    const SIZE: usize = 16;

    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;
    const MAX: Self = Self::MAX;

    type ByteArray = [u8; 16];

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

impl Ord for U128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for U128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Wrapping addition.
impl Add for U128 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl AddAssign for U128 {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.wrapping_add(rhs);
    }
}

/// Wrapping subtraction.
impl Sub for U128 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl SubAssign for U128 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.wrapping_sub(rhs);
    }
}

impl From<u64> for U128 {
    fn from(v: u64) -> Self {
        Self::from_parts(0, v)
    }
}

impl From<u128> for U128 {
    fn from(v: u128) -> Self {
        Self::from_parts((v >> 64) as u64, v as u64)
    }
}

impl From<U128> for u128 {
    fn from(v: U128) -> Self {
        (u128::from(v.hi) << 64) | u128::from(v.lo)
    }
}

impl fmt::Display for U128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016X}{:016X}", self.hi, self.lo)
    }
}

impl fmt::Debug for U128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U128({self})")
    }
}
