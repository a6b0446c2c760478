use super::interface::encode_id;
use crate::KsuidId;
use core::fmt;
use core::marker::PhantomData;

/// An encoded ID that owns its base-62 buffer.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base62Formatter<T: KsuidId> {
    _id: PhantomData<T>,
    buf: T::Base62Array,
}

impl<T: KsuidId> Base62Formatter<T> {
    pub fn new(id: &T) -> Self {
        let mut buf = T::BASE62_ZERO;
        encode_id(id, &mut buf);
        Self {
            _id: PhantomData,
            buf,
        }
    }

    /// Returns a `&str` view of the base-62 encoding.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `self.buf` holds only base-62 alphabet bytes, all ASCII
        unsafe { core::str::from_utf8_unchecked(self.buf.as_ref()) }
    }

    /// Returns an allocated `String` of the base-62 encoding.
    #[cfg(feature = "alloc")]
    #[must_use]
    pub fn as_string(&self) -> alloc::string::String {
        alloc::string::String::from(self.as_str())
    }

    /// Consumes the formatter and returns the raw buffer.
    pub const fn into_inner(self) -> T::Base62Array {
        self.buf
    }
}

impl<T: KsuidId> fmt::Display for Base62Formatter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: KsuidId> AsRef<str> for Base62Formatter<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T: KsuidId> PartialEq<str> for Base62Formatter<T> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<T: KsuidId> PartialEq<&str> for Base62Formatter<T> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(feature = "alloc")]
impl<T: KsuidId> PartialEq<alloc::string::String> for Base62Formatter<T> {
    fn eq(&self, other: &alloc::string::String) -> bool {
        self.as_str() == other.as_str()
    }
}

/// An encoded ID that borrows a caller-provided buffer.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base62FormatterRef<'buf, T: KsuidId> {
    _id: PhantomData<T>,
    buf: &'buf T::Base62Array,
}

impl<'buf, T: KsuidId> Base62FormatterRef<'buf, T> {
    pub fn new(id: &T, buf: &'buf mut T::Base62Array) -> Self {
        encode_id(id, buf);
        Self {
            _id: PhantomData,
            buf,
        }
    }

    /// Returns a `&str` view of the base-62 encoding.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `self.buf` holds only base-62 alphabet bytes, all ASCII
        unsafe { core::str::from_utf8_unchecked(self.buf.as_ref()) }
    }
}

impl<T: KsuidId> fmt::Display for Base62FormatterRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: KsuidId> AsRef<str> for Base62FormatterRef<'_, T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T: KsuidId> PartialEq<&str> for Base62FormatterRef<'_, T> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
