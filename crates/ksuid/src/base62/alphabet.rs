/// Digits in ascending value order; also ascending ASCII order.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// The zero digit, used as left padding.
pub const ZERO_CHAR: u8 = b'0';

/// Largest binary input the codec accepts, in bytes.
pub const MAX_BINARY_LEN: usize = 32;

/// Text width for a [`MAX_BINARY_LEN`] input, and the longest text the
/// decoder accepts.
pub const MAX_TEXT_LEN: usize = encoded_len(MAX_BINARY_LEN);

pub(crate) const BASE: u64 = 62;
const NO_VALUE: u8 = 255;

/// Lookup table from ASCII byte to digit value
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 62 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

/// Returns the digit value (0..=61) of an alphabet byte.
#[inline(always)]
#[allow(clippy::inline_always)]
#[must_use]
pub const fn digit_value(byte: u8) -> Option<u8> {
    match LOOKUP[byte as usize] {
        NO_VALUE => None,
        v => Some(v),
    }
}

/// Number of base-62 characters needed for any `bytes`-long binary value:
/// the smallest `m` with `62^m >= 256^bytes`.
///
/// Computed as `ceil(8 * bytes / log2(62))` with `log2(62)` scaled to twelve
/// decimal places, which is exact for every width up to [`MAX_BINARY_LEN`].
#[must_use]
pub const fn encoded_len(bytes: usize) -> usize {
    const SCALE: u128 = 1_000_000_000_000;
    const LOG2_62: u128 = 5_954_196_310_387;
    let bits = bytes as u128 * 8 * SCALE;
    bits.div_ceil(LOG2_62) as usize
}
