//! Fixed-width, order-preserving base-62.
//!
//! Binary buffers are treated as a single big-endian integer and rewritten in
//! base 62 over the alphabet `0-9A-Za-z`. Because that alphabet is sorted by
//! ASCII code and every canonical string is left-padded with `'0'` to the same
//! width, comparing two encodings byte-wise gives the same answer as comparing
//! the binary values.
//!
//! The fast path ([`encode_fixed`], [`decode_fixed`] and friends) works on
//! 32-bit limbs. [`reference`] holds the byte-at-a-time schoolbook conversion
//! that defines the expected output; both must agree on every input.

mod alphabet;
#[cfg(feature = "alloc")]
mod append;
mod codec;
mod formatter;
mod interface;
#[cfg(feature = "alloc")]
pub mod reference;

pub use alphabet::*;
#[cfg(feature = "alloc")]
pub use append::*;
pub use codec::*;
pub use formatter::*;
pub use interface::*;
