//! Hexadecimal encoding and decoding.
//!
//! Encoding always produces lowercase digits, high nibble first, with no
//! prefix and no separators: byte `i` of the input becomes characters `2i`
//! and `2i + 1` of the output. Decoding accepts either case.

use crate::error::HexError;

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Encodes `bytes` as a lowercase hexadecimal string.
///
/// Every byte value has a two-character representation, so this cannot
/// fail. The returned string is exactly `2 * bytes.len()` long.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);

    for &byte in bytes {
        out.push(HEX_CHARS[(byte >> 4) as usize] as char);
        out.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }

    out
}

/// Encodes `bytes` into `out` without allocating.
///
/// Only the first `2 * bytes.len()` bytes of `out` are written; anything
/// past that is left untouched.
///
/// # Errors
/// - `HexError::BufferTooSmall` if `out` cannot hold the encoding.
pub fn encode_to_slice(bytes: &[u8], out: &mut [u8]) -> Result<(), HexError> {
    let needed = bytes.len() * 2;
    if out.len() < needed {
        return Err(HexError::BufferTooSmall {
            needed,
            available: out.len(),
        });
    }

    for (&byte, pair) in bytes.iter().zip(out.chunks_exact_mut(2)) {
        pair[0] = HEX_CHARS[(byte >> 4) as usize];
        pair[1] = HEX_CHARS[(byte & 0x0f) as usize];
    }

    Ok(())
}

/// Decodes a hexadecimal string into bytes.
///
/// # Errors
/// - `HexError::OddLength` if `s` has an odd number of bytes.
/// - `HexError::InvalidCharacter` at the first non-hex character.
pub fn decode(s: &str) -> Result<Vec<u8>, HexError> {
    let mut out = vec![0u8; s.len() / 2];
    decode_to_slice(s, &mut out)?;
    Ok(out)
}

/// Decodes a hexadecimal string into `out`, which must be exactly
/// `s.len() / 2` bytes long.
///
/// # Errors
/// - `HexError::OddLength` if `s` has an odd number of bytes.
/// - `HexError::InvalidLength` if `out` is not exactly half the length of `s`.
/// - `HexError::InvalidCharacter` at the first non-hex character.
pub fn decode_to_slice(s: &str, out: &mut [u8]) -> Result<(), HexError> {
    let src = s.as_bytes();

    if src.len() % 2 != 0 {
        return Err(HexError::OddLength { len: src.len() });
    }

    if src.len() / 2 != out.len() {
        return Err(HexError::InvalidLength {
            expected: out.len(),
            actual: src.len() / 2,
        });
    }

    for (i, (pair, slot)) in src.chunks_exact(2).zip(out.iter_mut()).enumerate() {
        let hi = nibble(s, i * 2, pair[0])?;
        let lo = nibble(s, i * 2 + 1, pair[1])?;
        *slot = (hi << 4) | lo;
    }

    Ok(())
}

/// Converts one ASCII hex digit to its 4-bit value.
fn nibble(s: &str, index: usize, c: u8) -> Result<u8, HexError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(HexError::InvalidCharacter {
            character: s
                .get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            index,
        }),
    }
}
