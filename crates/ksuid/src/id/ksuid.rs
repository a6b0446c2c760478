/// A macro for defining a KSUID layout: a big-endian byte string made of a
/// 64-bit timestamp followed by a [`FixedUint`](crate::FixedUint) payload.
///
/// ```text
/// define_ksuid!(
///     <TypeName>,
///     payload: <FixedUint type>,
///     bytes: <binary width>,
///     chars: <base-62 text width>
/// );
/// ```
///
/// The widths are checked at compile time: `bytes` must equal the timestamp
/// plus payload width, and `chars` must be wide enough for every binary value
/// so the padded text form is lossless.
///
/// ## Example
/// ```rust
/// use ksuid::{define_ksuid, U96};
///
/// define_ksuid!(
///     /// An ID with an oversized text form.
///     WideKsuid,
///     payload: U96,
///     bytes: 20,
///     chars: 30
/// );
///
/// assert_eq!(WideKsuid::NIL.to_string(), "000000000000000000000000000000");
/// ```
#[macro_export]
macro_rules! define_ksuid {
    (
        $(#[$meta:meta])*
        $name:ident,
        payload: $payload:ty,
        bytes: $size:expr,
        chars: $chars:expr
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name([u8; $size]);

        const _: () = {
            // Compile-time checks: the layout must be exactly timestamp then
            // payload, and the text must have room for every binary value.
            assert!(
                $size == $crate::id::TIMESTAMP_SIZE
                    + <$payload as $crate::uint::FixedUint>::SIZE,
                "Layout must be timestamp followed by payload"
            );
            assert!(
                $size <= $crate::base62::MAX_BINARY_LEN,
                "Binary width exceeds the base62 codec limit"
            );
            assert!(
                $chars >= $crate::base62::encoded_len($size),
                "Text width too small for binary width"
            );
        };

        impl $name {
            pub const SIZE: usize = $size;
            pub const ENCODED_LEN: usize = $chars;
            pub const PAYLOAD_SIZE: usize = $size - $crate::id::TIMESTAMP_SIZE;

            /// The all-zero ID.
            pub const NIL: Self = Self([0; $size]);
            /// The all-ones ID.
            pub const MAX: Self = Self([0xFF; $size]);

            #[must_use]
            pub const fn from_bytes(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }

            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; $size] {
                &self.0
            }

            #[must_use]
            pub const fn to_bytes(self) -> [u8; $size] {
                self.0
            }

            /// Builds an ID from a slice of exactly [`Self::SIZE`] bytes.
            ///
            /// # Errors
            /// Returns [`Error::WidthMismatch`] for any other length.
            ///
            /// [`Error::WidthMismatch`]: $crate::Error::WidthMismatch
            pub fn try_from_slice(bytes: &[u8]) -> $crate::Result<Self> {
                <[u8; $size]>::try_from(bytes)
                    .map(Self)
                    .map_err(|_| $crate::Error::WidthMismatch {
                        expected: $size,
                        len: bytes.len(),
                    })
            }

            /// Packs a timestamp and payload into `timestamp ‖ payload`.
            #[must_use]
            pub fn from_parts(timestamp: u64, payload: $payload) -> Self {
                let mut bytes = [0; $size];
                let (ts, rest) = bytes.split_at_mut($crate::id::TIMESTAMP_SIZE);
                ts.copy_from_slice(&timestamp.to_be_bytes());
                rest.copy_from_slice(
                    <$payload as $crate::uint::FixedUint>::to_be_bytes(payload).as_ref(),
                );
                Self(bytes)
            }

            /// Extracts the timestamp prefix.
            #[must_use]
            pub const fn timestamp(&self) -> u64 {
                let b = &self.0;
                u64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
            }

            /// Extracts the payload suffix.
            #[must_use]
            pub fn payload(&self) -> $payload {
                let mut bytes =
                    <<$payload as $crate::uint::FixedUint>::ByteArray as Default>::default();
                bytes
                    .as_mut()
                    .copy_from_slice(&self.0[$crate::id::TIMESTAMP_SIZE..]);
                <$payload as $crate::uint::FixedUint>::from_be_bytes(bytes)
            }

            #[must_use]
            pub fn is_nil(&self) -> bool {
                *self == Self::NIL
            }

            /// Returns the ID with the same timestamp and the payload plus one.
            ///
            /// A run of `next` calls from a random starting payload yields
            /// strictly increasing IDs without drawing new randomness, until
            /// the payload wraps from its maximum back to zero.
            #[must_use]
            pub fn next(&self) -> Self {
                let payload = <$payload as $crate::uint::FixedUint>::increment(self.payload());
                Self::from_parts(self.timestamp(), payload)
            }

            /// Returns the ID with the same timestamp and the payload minus
            /// one, wrapping below zero.
            #[must_use]
            pub fn prev(&self) -> Self {
                let payload = <$payload as $crate::uint::FixedUint>::wrapping_sub(
                    self.payload(),
                    <$payload as $crate::uint::FixedUint>::ONE,
                );
                Self::from_parts(self.timestamp(), payload)
            }

            /// Generates an ID for `timestamp` with a payload drawn from a
            /// custom [`RandSource`].
            ///
            /// [`RandSource`]: $crate::rand::RandSource
            #[must_use]
            pub fn from_timestamp_and_rand<R>(timestamp: u64, rng: &R) -> Self
            where
                R: $crate::rand::RandSource<$payload>,
            {
                Self::from_parts(timestamp, rng.rand())
            }

            $crate::cfg_std! {
                /// Generates an ID for `timestamp` with a payload from the
                /// built-in [`ThreadRandom`] generator.
                ///
                /// [`ThreadRandom`]: $crate::rand::ThreadRandom
                #[must_use]
                pub fn from_timestamp(timestamp: u64) -> Self {
                    Self::from_timestamp_and_rand(timestamp, &$crate::rand::ThreadRandom)
                }
            }

            $crate::cfg_std! {
                /// Generates an ID stamped with the current wall-clock second
                /// since the Unix epoch and a random payload.
                ///
                /// Stateless: IDs created within the same second are ordered
                /// only by their random payloads. Use a generator such as
                /// [`BasicMonoKsuidGenerator`] for a strictly increasing run.
                ///
                /// [`BasicMonoKsuidGenerator`]: $crate::generator::BasicMonoKsuidGenerator
                #[must_use]
                pub fn now() -> Self {
                    use $crate::time::TimeSource;
                    Self::from_timestamp($crate::time::SystemClock::default().current_timestamp())
                }
            }

            $crate::cfg_std! {
                /// Interprets the timestamp as seconds since
                /// [`std::time::UNIX_EPOCH`], as stamped by [`Self::now`].
                ///
                /// Returns `None` if the result is not representable.
                #[must_use]
                pub fn datetime(&self) -> Option<std::time::SystemTime> {
                    std::time::UNIX_EPOCH
                        .checked_add(std::time::Duration::from_secs(self.timestamp()))
                }
            }

            $crate::cfg_std! {
                /// Generates an ID stamped with `datetime`, truncated to whole
                /// seconds since [`std::time::UNIX_EPOCH`], and a random
                /// payload. Times before the epoch are stamped `0`.
                #[must_use]
                pub fn from_datetime(datetime: std::time::SystemTime) -> Self {
                    let secs = datetime
                        .duration_since(std::time::UNIX_EPOCH)
                        .map_or(0, |d| d.as_secs());
                    Self::from_timestamp(secs)
                }
            }
        }

        impl $crate::id::KsuidId for $name {
            type Payload = $payload;
            type ByteArray = [u8; $size];
            type Base62Array = [u8; $chars];

            const SIZE: usize = $size;
            const ENCODED_LEN: usize = $chars;
            const BASE62_ZERO: [u8; $chars] = [$crate::base62::ZERO_CHAR; $chars];

            fn timestamp(&self) -> u64 {
                self.timestamp()
            }

            fn payload(&self) -> Self::Payload {
                self.payload()
            }

            fn from_components(timestamp: u64, payload: Self::Payload) -> Self {
                Self::from_parts(timestamp, payload)
            }

            fn to_be_bytes(&self) -> Self::ByteArray {
                self.0
            }

            fn from_be_bytes(bytes: Self::ByteArray) -> Self {
                Self(bytes)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                use $crate::base62::Base62KsuidExt;
                f.write_str(self.encode().as_str())
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                use $crate::base62::Base62KsuidExt;
                f.debug_struct(stringify!($name))
                    .field("id", &format_args!("{}", self.encode()))
                    .field("timestamp", &self.timestamp())
                    .field("payload", &self.payload())
                    .finish()
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                use $crate::base62::Base62KsuidExt;
                Self::decode(s)
            }
        }

        impl core::convert::TryFrom<&str> for $name {
            type Error = $crate::Error;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                use $crate::base62::Base62KsuidExt;
                Self::decode(s)
            }
        }

        impl core::convert::TryFrom<&[u8]> for $name {
            type Error = $crate::Error;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                Self::try_from_slice(bytes)
            }
        }

        impl From<[u8; $size]> for $name {
            fn from(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $size] {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        $crate::cfg_alloc! {
            impl From<$name> for $crate::__internal::String {
                fn from(id: $name) -> Self {
                    use $crate::base62::Base62KsuidExt;
                    id.encode().as_string()
                }
            }
        }
    };
}

define_ksuid!(
    /// A 160-bit KSUID: 64-bit timestamp and 96-bit payload.
    ///
    /// ```text
    ///  Byte Index:  0               8                        20
    ///               +---------------+-------------------------+
    ///  Field:       | timestamp (8) |       payload (12)      |
    ///               +---------------+-------------------------+
    ///               |<-- MSB ------- 20 bytes ------- LSB --->|
    /// ```
    ///
    /// Encodes to 27 base-62 characters.
    Ksuid,
    payload: crate::uint::U96,
    bytes: 20,
    chars: 27
);

define_ksuid!(
    /// A 192-bit KSUID: 64-bit timestamp and 128-bit payload.
    ///
    /// ```text
    ///  Byte Index:  0               8                        24
    ///               +---------------+-------------------------+
    ///  Field:       | timestamp (8) |       payload (16)      |
    ///               +---------------+-------------------------+
    ///               |<-- MSB ------- 24 bytes ------- LSB --->|
    /// ```
    ///
    /// Encodes to 33 base-62 characters.
    Ksuid128,
    payload: crate::uint::U128,
    bytes: 24,
    chars: 33
);
