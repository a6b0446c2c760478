use super::codec::{decode_limbs, encode_limbs};
use super::{Base62Formatter, Base62FormatterRef};
use crate::{Error, KsuidId, Result};

/// Extension trait for the canonical base-62 text form of KSUID types.
///
/// The text is always [`KsuidId::ENCODED_LEN`] characters, left-padded with
/// `'0'`, so string order equals binary order equals time order.
pub trait Base62KsuidExt: KsuidId {
    /// Returns a stack-allocated buffer of the exact encoded width, prefilled
    /// with the padding digit.
    ///
    /// See also: [`Base62KsuidExt::encode_to_buf`] for usage.
    #[must_use]
    fn buf() -> Self::Base62Array {
        Self::BASE62_ZERO
    }

    /// Returns a formatter containing the base-62 representation of the ID.
    ///
    /// The formatter is a zero-allocation view over an internal buffer that
    /// implements [`core::fmt::Display`] and [`AsRef<str>`].
    ///
    /// # Example
    /// ```
    /// use ksuid::{Base62KsuidExt, Ksuid, U96};
    ///
    /// let id = Ksuid::from_parts(0, U96::from(1_u64));
    /// assert_eq!(id.encode(), "000000000000000000000000001");
    /// ```
    fn encode(&self) -> Base62Formatter<Self> {
        Base62Formatter::new(self)
    }

    /// Encodes this ID into the provided buffer without heap allocation and
    /// returns a formatter view over it.
    ///
    /// # Example
    /// ```
    /// use ksuid::{Base62KsuidExt, Ksuid};
    ///
    /// let mut buf = Ksuid::buf();
    /// let formatter = Ksuid::MAX.encode_to_buf(&mut buf);
    /// assert_eq!(formatter, "aWgEPTl1tmebfsQzFP4bxwgy80V");
    /// assert_eq!(&buf, b"aWgEPTl1tmebfsQzFP4bxwgy80V");
    /// ```
    fn encode_to_buf<'buf>(
        &self,
        buf: &'buf mut Self::Base62Array,
    ) -> Base62FormatterRef<'buf, Self> {
        Base62FormatterRef::new(self, buf)
    }

    /// Decodes a canonical base-62 string back into an ID.
    ///
    /// # Errors
    /// - [`Error::WidthMismatch`] unless the input is exactly
    ///   [`KsuidId::ENCODED_LEN`] bytes. Shorter, unpadded strings are not
    ///   accepted.
    /// - [`Error::InvalidCharacter`] for bytes outside `0-9A-Za-z`.
    /// - [`Error::BufferTooSmall`] if the string is lexicographically greater
    ///   than the encoding of the largest ID.
    fn decode(s: impl AsRef<str>) -> Result<Self> {
        Self::decode_bytes(s.as_ref().as_bytes())
    }

    /// Like [`Base62KsuidExt::decode`], over raw ASCII bytes.
    ///
    /// # Errors
    /// Same as [`Base62KsuidExt::decode`].
    fn decode_bytes(s: &[u8]) -> Result<Self> {
        if s.len() != Self::ENCODED_LEN {
            return Err(Error::WidthMismatch {
                expected: Self::ENCODED_LEN,
                len: s.len(),
            });
        }
        let mut bytes = Self::ByteArray::default();
        decode_limbs(s, bytes.as_mut())?;
        Ok(Self::from_be_bytes(bytes))
    }
}

impl<ID: KsuidId> Base62KsuidExt for ID {}

/// Fills `buf` with the padded encoding of `id`.
pub(crate) fn encode_id<T: KsuidId>(id: &T, buf: &mut T::Base62Array) {
    encode_limbs(id.to_be_bytes().as_ref(), buf.as_mut());
}
