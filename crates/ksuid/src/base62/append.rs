use super::alphabet::{MAX_BINARY_LEN, MAX_TEXT_LEN, ZERO_CHAR, encoded_len};
use super::codec::{decode_limbs, encode_limbs};
use crate::{Error, Result};
use alloc::vec::Vec;

/// Bytes needed for the largest value of [`MAX_TEXT_LEN`] digits; each
/// base-62 digit carries fewer than 6 bits.
const MAX_DECODED_LEN: usize = (MAX_TEXT_LEN * 6).div_ceil(8);

/// Appends the minimum-length base-62 form of `src` to `dst` and returns the
/// number of characters appended.
///
/// Leading zero digits are trimmed, leaving at least one digit for a
/// non-empty input, so the result matches [`reference::encode`]. Capacity for
/// the padded width is reserved before anything is written.
///
/// [`reference::encode`]: super::reference::encode
///
/// # Errors
/// Returns [`Error::WidthMismatch`] if `src` is longer than
/// [`MAX_BINARY_LEN`].
pub fn append_encode(dst: &mut Vec<u8>, src: &[u8]) -> Result<usize> {
    let (scratch, len) = encode_scratch(src)?;
    dst.reserve(len);
    let digits = &scratch[..len];
    let start = digits
        .iter()
        .position(|&c| c != ZERO_CHAR)
        .unwrap_or(len.saturating_sub(1));
    dst.extend_from_slice(&digits[start..]);
    Ok(len - start)
}

/// Appends the padded base-62 form of `src`, always
/// [`encoded_len(src.len())`](encoded_len) characters, and returns that
/// length.
///
/// # Errors
/// Returns [`Error::WidthMismatch`] if `src` is longer than
/// [`MAX_BINARY_LEN`].
pub fn append_encode_fixed(dst: &mut Vec<u8>, src: &[u8]) -> Result<usize> {
    let (scratch, len) = encode_scratch(src)?;
    dst.reserve(len);
    dst.extend_from_slice(&scratch[..len]);
    Ok(len)
}

/// Appends the minimum-length big-endian value of `src` to `dst` and returns
/// the number of bytes appended.
///
/// A zero value appends a single zero byte; empty text appends nothing. The
/// output matches [`reference::decode`].
///
/// [`reference::decode`]: super::reference::decode
///
/// # Errors
/// - [`Error::WidthMismatch`] if `src` is longer than [`MAX_TEXT_LEN`].
/// - [`Error::InvalidCharacter`] for bytes outside the alphabet; `dst` is left
///   unchanged.
pub fn append_decode(dst: &mut Vec<u8>, src: &[u8]) -> Result<usize> {
    if src.is_empty() {
        return Ok(0);
    }
    let mut scratch = [0_u8; MAX_DECODED_LEN];
    decode_limbs(src, &mut scratch)?;
    let start = scratch
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(MAX_DECODED_LEN - 1);
    let bytes = &scratch[start..];
    dst.reserve(bytes.len());
    dst.extend_from_slice(bytes);
    Ok(bytes.len())
}

/// Appends the value of `src` as exactly `width` big-endian bytes.
///
/// # Errors
/// - [`Error::WidthMismatch`] if `src` is longer than [`MAX_TEXT_LEN`].
/// - [`Error::InvalidCharacter`] for bytes outside the alphabet.
/// - [`Error::BufferTooSmall`] if the value needs more than `width` bytes.
///
/// On error `dst` is restored to its original length.
pub fn append_decode_fixed(dst: &mut Vec<u8>, src: &[u8], width: usize) -> Result<()> {
    let start = dst.len();
    dst.reserve(width);
    dst.resize(start + width, 0);
    decode_limbs(src, &mut dst[start..]).inspect_err(|_| dst.truncate(start))
}

fn encode_scratch(src: &[u8]) -> Result<([u8; MAX_TEXT_LEN], usize)> {
    if src.len() > MAX_BINARY_LEN {
        return Err(Error::WidthMismatch {
            expected: MAX_BINARY_LEN,
            len: src.len(),
        });
    }
    let len = encoded_len(src.len());
    let mut scratch = [ZERO_CHAR; MAX_TEXT_LEN];
    encode_limbs(src, &mut scratch[..len]);
    Ok((scratch, len))
}
