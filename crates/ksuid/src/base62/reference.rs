//! Schoolbook base conversion, one byte-sized digit at a time.
//!
//! This is the definition of correct output for the limb-based codec, kept
//! simple on purpose. Results are minimum-length: no padding on encode and no
//! leading zero bytes on decode (a zero value becomes a single zero digit).

use super::alphabet::{ALPHABET, digit_value};
use crate::{Error, Result};
use alloc::vec::Vec;

/// Rewrites the big-endian digit string `src` from `in_base` to `out_base`.
///
/// Both bases must be in `2..=256` and every input digit below `in_base`.
/// The output has no leading zero digits; an empty input gives an empty
/// output.
#[must_use]
pub fn base_to_base(src: &[u8], in_base: u32, out_base: u32) -> Vec<u8> {
    debug_assert!((2..=256).contains(&in_base) && (2..=256).contains(&out_base));

    let mut out = Vec::new();
    let mut digits = src.to_vec();
    let mut quotient = Vec::with_capacity(src.len());

    while !digits.is_empty() {
        quotient.clear();
        let mut remainder = 0_u32;

        for &d in &digits {
            let acc = u32::from(d) + remainder * in_base;
            let q = acc / out_base;
            remainder = acc % out_base;

            if !quotient.is_empty() || q > 0 {
                quotient.push(q as u8);
            }
        }

        // Least significant digit first; reversed below.
        out.push(remainder as u8);
        core::mem::swap(&mut digits, &mut quotient);
    }

    out.reverse();
    out
}

/// Encodes binary to unpadded base-62 text.
#[must_use]
pub fn encode(src: &[u8]) -> Vec<u8> {
    let mut digits = base_to_base(src, 256, 62);
    for d in &mut digits {
        *d = ALPHABET[usize::from(*d)];
    }
    digits
}

/// Decodes base-62 text to minimum-length big-endian binary.
///
/// The input is copied into an owned digit buffer; it is never rewritten in
/// place.
///
/// # Errors
/// Returns [`Error::InvalidCharacter`] for bytes outside the alphabet.
pub fn decode(src: &[u8]) -> Result<Vec<u8>> {
    let digits = src
        .iter()
        .enumerate()
        .map(|(index, &byte)| digit_value(byte).ok_or(Error::InvalidCharacter { byte, index }))
        .collect::<Result<Vec<u8>>>()?;
    Ok(base_to_base(&digits, 62, 256))
}
