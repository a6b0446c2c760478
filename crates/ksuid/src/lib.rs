//! K-Sortable Unique IDentifiers.
//!
//! A KSUID is a fixed-width big-endian byte string, `timestamp ‖ payload`,
//! rendered as fixed-width base-62 text. Byte order, text order and
//! (timestamp, payload) order all agree.
//!
//! ```
//! use ksuid::{Base62KsuidExt, Ksuid, U96};
//!
//! let id = Ksuid::from_parts(1_700_000_000, U96::from_parts(0x0123_4567, 0x89AB_CDEF_FEDC_BA98));
//! assert_eq!(id.encode(), "0000035CaLwwkSXDvssKURDNoAi");
//! assert_eq!(Ksuid::decode("0000035CaLwwkSXDvssKURDNoAi"), Ok(id));
//! assert!(id.next() > id);
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod base62;
mod error;
pub mod generator;
pub mod id;
pub mod rand;
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[cfg(feature = "serde")]
pub mod serde;
pub mod time;
pub mod uint;

pub use crate::base62::{Base62Formatter, Base62FormatterRef, Base62KsuidExt};
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::*;
pub use crate::time::*;
pub use crate::uint::*;

#[doc(hidden)]
pub mod __internal {
    #[cfg(feature = "alloc")]
    pub use alloc::string::String;
}
