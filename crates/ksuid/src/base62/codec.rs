use super::alphabet::{ALPHABET, BASE, MAX_BINARY_LEN, MAX_TEXT_LEN, ZERO_CHAR, digit_value, encoded_len};
use crate::{Error, Result};

const MAX_LIMBS: usize = MAX_BINARY_LEN / 4;
const LIMB_BITS: u32 = 32;
const LIMB_MASK: u64 = 0xFFFF_FFFF;

/// Encodes a fixed-width binary value into its padded base-62 form.
///
/// The output is always exactly `M` characters. Widths are checked at compile
/// time: `N` may not exceed [`MAX_BINARY_LEN`] and `M` must be at least
/// [`encoded_len(N)`](encoded_len).
///
/// # Example
/// ```
/// use ksuid::base62::encode_fixed;
///
/// let mut bin = [0u8; 20];
/// bin[19] = 1;
/// let text: [u8; 27] = encode_fixed(&bin);
/// assert_eq!(&text, b"000000000000000000000000001");
/// ```
#[must_use]
pub fn encode_fixed<const N: usize, const M: usize>(src: &[u8; N]) -> [u8; M] {
    let mut out = [ZERO_CHAR; M];
    encode_fixed_into(src, &mut out);
    out
}

/// Encodes a fixed-width binary value into a caller-owned text buffer.
///
/// Same contract as [`encode_fixed`]; every byte of `dst` is overwritten.
pub fn encode_fixed_into<const N: usize, const M: usize>(src: &[u8; N], dst: &mut [u8; M]) {
    const {
        assert!(N <= MAX_BINARY_LEN, "binary width exceeds MAX_BINARY_LEN");
        assert!(M >= encoded_len(N), "text width too small for binary width");
    }
    encode_limbs(src, dst);
}

/// Decodes a fixed-width base-62 string into an `N`-byte big-endian value.
///
/// # Errors
/// - [`Error::InvalidCharacter`] if any byte is outside the alphabet.
/// - [`Error::BufferTooSmall`] if the value does not fit in `N` bytes (e.g.
///   `"zzz…"` decoded into the narrowest buffer its width allows).
pub fn decode_fixed<const N: usize, const M: usize>(src: &[u8; M]) -> Result<[u8; N]> {
    const {
        assert!(M <= MAX_TEXT_LEN, "text width exceeds MAX_TEXT_LEN");
    }
    let mut out = [0; N];
    decode_limbs(src, &mut out)?;
    Ok(out)
}

/// Encodes `src` into the front of `dst`, padded to
/// [`encoded_len(src.len())`](encoded_len) characters, and returns that
/// length.
///
/// # Errors
/// - [`Error::WidthMismatch`] if `src` is longer than [`MAX_BINARY_LEN`].
/// - [`Error::BufferTooSmall`] if `dst` is shorter than the padded width.
///   Nothing is written in that case.
pub fn encode_to_slice(src: &[u8], dst: &mut [u8]) -> Result<usize> {
    if src.len() > MAX_BINARY_LEN {
        return Err(Error::WidthMismatch {
            expected: MAX_BINARY_LEN,
            len: src.len(),
        });
    }
    let len = encoded_len(src.len());
    let Some(out) = dst.get_mut(..len) else {
        return Err(Error::BufferTooSmall { len: dst.len() });
    };
    encode_limbs(src, out);
    Ok(len)
}

/// Decodes base-62 text into the big-endian buffer `dst`, zero-filling any
/// leading bytes the value does not reach.
///
/// `dst` may be any length; what matters is whether the decoded value fits.
///
/// # Errors
/// - [`Error::WidthMismatch`] if `src` is longer than [`MAX_TEXT_LEN`].
/// - [`Error::InvalidCharacter`] if any byte is outside the alphabet. This is
///   checked before `dst` is touched.
/// - [`Error::BufferTooSmall`] if the value needs more than `dst.len()` bytes.
///   No write ever goes past the end of `dst`, but its contents are
///   unspecified after this error.
pub fn decode_to_slice(src: &[u8], dst: &mut [u8]) -> Result<()> {
    decode_limbs(src, dst)
}

/// Loads a big-endian byte string into 32-bit limbs, most significant first.
/// A length that is not a multiple of four yields a short leading limb.
#[inline(always)]
#[allow(clippy::inline_always)]
fn load_limbs(src: &[u8], limbs: &mut [u32; MAX_LIMBS]) -> usize {
    let head = src.len() % 4;
    let mut len = 0;
    if head != 0 {
        limbs[0] = src[..head]
            .iter()
            .fold(0, |acc, &b| (acc << 8) | u32::from(b));
        len = 1;
    }
    for chunk in src[head..].chunks_exact(4) {
        limbs[len] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        len += 1;
    }
    len
}

/// Writes the digits of `src` right-aligned into `dst` and pads the rest with
/// `'0'`.
///
/// Each pass divides the limb array by 62 in place, emits the remainder as
/// the next least significant digit, and drops leading zero limbs from the
/// quotient. The caller guarantees `src.len() <= MAX_BINARY_LEN` and
/// `dst.len() >= encoded_len(src.len())`.
pub(crate) fn encode_limbs(src: &[u8], dst: &mut [u8]) {
    debug_assert!(src.len() <= MAX_BINARY_LEN);
    debug_assert!(dst.len() >= encoded_len(src.len()));

    let mut limbs = [0_u32; MAX_LIMBS];
    let mut len = load_limbs(src, &mut limbs);

    dst.fill(ZERO_CHAR);
    let mut n = dst.len();

    while len > 0 {
        let mut remainder = 0_u64;
        let mut quotient_len = 0;

        for i in 0..len {
            let acc = u64::from(limbs[i]) | (remainder << LIMB_BITS);
            let digit = acc / BASE;
            remainder = acc % BASE;

            if quotient_len > 0 || digit > 0 {
                // `acc < 62 * 2^32`, so the quotient digit fits a limb.
                limbs[quotient_len] = digit as u32;
                quotient_len += 1;
            }
        }

        n -= 1;
        dst[n] = ALPHABET[remainder as usize];
        len = quotient_len;
    }
}

/// Mirror of [`encode_limbs`]: converts every character to its digit value in
/// a scratch buffer, then repeatedly divides the digit array by `2^32`,
/// emitting one big-endian output limb per pass from the end of `dst`.
pub(crate) fn decode_limbs(src: &[u8], dst: &mut [u8]) -> Result<()> {
    if src.len() > MAX_TEXT_LEN {
        return Err(Error::WidthMismatch {
            expected: MAX_TEXT_LEN,
            len: src.len(),
        });
    }

    let mut digits = [0_u8; MAX_TEXT_LEN];
    for (index, (&byte, digit)) in src.iter().zip(digits.iter_mut()).enumerate() {
        *digit = digit_value(byte).ok_or(Error::InvalidCharacter { byte, index })?;
    }

    let mut len = src.len();
    let mut n = dst.len();

    while len > 0 {
        let mut remainder = 0_u64;
        let mut quotient_len = 0;

        for i in 0..len {
            let acc = u64::from(digits[i]) + remainder * BASE;
            let digit = acc >> LIMB_BITS;
            remainder = acc & LIMB_MASK;

            if quotient_len > 0 || digit > 0 {
                // `remainder < 2^32`, so the quotient digit is below 62.
                digits[quotient_len] = digit as u8;
                quotient_len += 1;
            }
        }

        let limb = (remainder as u32).to_be_bytes();
        if n >= 4 {
            dst[n - 4..n].copy_from_slice(&limb);
            n -= 4;
        } else if quotient_len == 0 && limb[..4 - n].iter().all(|&b| b == 0) {
            dst[..n].copy_from_slice(&limb[4 - n..]);
            n = 0;
        } else {
            return Err(Error::BufferTooSmall { len: dst.len() });
        }

        len = quotient_len;
    }

    dst[..n].fill(0);
    Ok(())
}
