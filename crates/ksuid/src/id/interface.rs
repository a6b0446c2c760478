use crate::FixedUint;
use core::fmt;
use core::hash::Hash;

/// Width of the big-endian timestamp prefix shared by every KSUID layout.
pub const TIMESTAMP_SIZE: usize = 8;

/// Trait for KSUID-style identifiers: a fixed-width big-endian byte string
/// laid out as `timestamp ‖ payload`.
///
/// Because the layout is big-endian throughout, ordering the raw bytes orders
/// by timestamp first and payload second.
///
/// Implementations must keep [`Self::SIZE`] at most
/// [`MAX_BINARY_LEN`](crate::base62::MAX_BINARY_LEN) and [`Self::ENCODED_LEN`]
/// at least [`encoded_len(Self::SIZE)`](crate::base62::encoded_len).
/// [`define_ksuid!`](crate::define_ksuid) checks both at compile time.
pub trait KsuidId:
    Copy + Clone + Default + fmt::Display + fmt::Debug + PartialOrd + Ord + PartialEq + Eq + Hash
{
    /// Unsigned integer type of the payload field.
    type Payload: FixedUint;

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

    type Base62Array: AsRef<[u8]>
        + AsMut<[u8]>
        + fmt::Debug
        + Copy
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Hash;

    /// Binary width in bytes.
    const SIZE: usize;

    /// Canonical text width in characters.
    const ENCODED_LEN: usize;

    /// The text form of the all-zero ID; also the starting state of an encode
    /// buffer.
    const BASE62_ZERO: Self::Base62Array;

    /// Returns the timestamp field.
    fn timestamp(&self) -> u64;

    /// Returns the payload field.
    fn payload(&self) -> Self::Payload;

    /// Packs a timestamp and payload into the canonical layout.
    #[must_use]
    fn from_components(timestamp: u64, payload: Self::Payload) -> Self;

    fn to_be_bytes(&self) -> Self::ByteArray;

    fn from_be_bytes(bytes: Self::ByteArray) -> Self;

    /// Returns true if the payload can be incremented without wrapping.
    fn has_payload_room(&self) -> bool {
        self.payload() < <Self::Payload as FixedUint>::MAX
    }

    /// Returns the next payload value.
    fn next_payload(&self) -> Self::Payload {
        self.payload().increment()
    }

    /// Returns a new ID with the same timestamp and the payload incremented.
    ///
    /// The payload wraps to zero after its maximum; check
    /// [`Self::has_payload_room`] first when a strictly increasing run matters.
    #[must_use]
    fn increment_payload(&self) -> Self {
        Self::from_components(self.timestamp(), self.next_payload())
    }

    /// Returns a new ID for a newer timestamp with a fresh payload.
    #[must_use]
    fn rollover_to_timestamp(&self, timestamp: u64, payload: Self::Payload) -> Self {
        Self::from_components(timestamp, payload)
    }
}
