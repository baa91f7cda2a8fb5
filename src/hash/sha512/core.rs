//! SHA-512 core hashing functions
//!
//! This module implements the core logic of the SHA-512 cryptographic hash
//! function as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 1024-bit blocks
//! - a complete SHA-512 hashing function for arbitrary-length input
//!
//! The hash state is a plain stack value created fresh for each call, so
//! independent calls never observe each other and may run concurrently
//! without coordination.

use crate::error::DigestError;
use crate::hash::sha512::computations::all_rounds;
use crate::hash::sha512::{BLOCK_LEN, DIGEST_LEN, Digest, H512_INIT};

/// Offset of the 128-bit length field inside the final block.
const LENGTH_OFFSET: usize = BLOCK_LEN - 16;

/// Compresses a single 1024-bit message block.
///
/// This function performs the SHA-512 compression step on a single
/// 128-byte block, updating the internal hash state in place.
///
/// # Parameters
/// - `block`: A 1024-bit (128-byte) message block
/// - `state`: The current hash state (8 × 64-bit words)
///
/// # Notes
/// - The message schedule is partially expanded here and fully processed
///   by `all_rounds`.
/// - Input words are interpreted as big-endian, as required by SHA-512.
pub fn compress(block: &[u8; BLOCK_LEN], state: &mut [u64; 8]) {
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.as_chunks::<8>().0) {
        *slot = u64::from_be_bytes(*chunk);
    }

    all_rounds(state, w);
}

/// Returns the message length in bits as it is written into the length
/// field, or `LengthOverflow` if it does not fit in 128 bits.
fn bit_length(len: usize) -> Result<u128, DigestError> {
    u128::try_from(len)
        .ok()
        .and_then(|bytes| bytes.checked_mul(8))
        .ok_or(DigestError::LengthOverflow { len })
}

/// Computes the SHA-512 hash of the given input.
///
/// This function processes the input message in 1024-bit blocks, applies
/// the SHA-512 padding rules, and returns the final 512-bit hash value.
///
/// # Parameters
/// - `input`: Arbitrary-length input message
///
/// # Returns
/// - The final SHA-512 hash as 64 bytes (`[u8; 64]`)
///
/// # Errors
/// - `DigestError::LengthOverflow` if the message length in bits cannot be
///   represented in the 128-bit length field. The check runs before any
///   block is processed, so no partial result is ever produced.
///
/// # Notes
/// - The implementation follows the standard Merkle–Damgård construction.
/// - Message length is encoded as a 128-bit big-endian integer (in bits).
/// - The internal state uses 8 × 64-bit words and is serialized in big-endian.
/// - No heap allocations are performed.
pub fn sha512(input: &[u8]) -> Result<[u8; DIGEST_LEN], DigestError> {
    let bit_len = bit_length(input.len())?;

    let mut state = H512_INIT;

    let (blocks, tail) = input.as_chunks::<BLOCK_LEN>();

    // Process full 1024-bit blocks
    for block in blocks {
        compress(block, &mut state);
    }

    // Prepare final padded block(s)
    let mut block = [0u8; BLOCK_LEN];
    let rem = tail.len();

    // Copy remaining bytes and append the padding bit (0x80)
    block[..rem].copy_from_slice(tail);
    block[rem] = 0x80;

    // If there is not enough space for the 128-bit length field,
    // process this block and use an additional zeroed block.
    if rem >= LENGTH_OFFSET {
        compress(&block, &mut state);
        block = [0; BLOCK_LEN];
    }

    block[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());

    compress(&block, &mut state);

    // Serialize final state into big-endian bytes
    let mut out = [0u8; DIGEST_LEN];
    for (chunk, word) in out.chunks_exact_mut(8).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    Ok(out)
}

/// Computes the SHA-512 hash of `input` as a typed `Digest`.
///
/// Same semantics and failure conditions as [`sha512`].
pub fn sha512_digest(input: &[u8]) -> Result<Digest, DigestError> {
    sha512(input).map(Digest::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_length_of_small_messages() {
        assert_eq!(bit_length(0).unwrap(), 0);
        assert_eq!(bit_length(3).unwrap(), 24);
        assert_eq!(bit_length(128).unwrap(), 1024);
    }

    #[test]
    fn bit_length_of_largest_usize_fits() {
        // usize is at most 64 bits, so len * 8 always fits in 128 bits.
        let bits = bit_length(usize::MAX).unwrap();
        assert_eq!(bits, (usize::MAX as u128) << 3);
    }

    #[test]
    fn compress_is_sensitive_to_the_block() {
        let mut a = H512_INIT;
        let mut b = H512_INIT;

        let mut block = [0u8; BLOCK_LEN];
        compress(&block, &mut a);

        block[BLOCK_LEN - 1] = 1;
        compress(&block, &mut b);

        assert_ne!(a, b);
        assert_ne!(a, H512_INIT);
    }

    #[test]
    fn padding_switches_to_two_blocks_at_112_bytes() {
        // 111 bytes: 0x80 lands at offset 111, the length field still fits.
        // 112 bytes: 0x80 lands inside the length field, a second block is needed.
        let mut single = H512_INIT;
        let mut block = [0u8; BLOCK_LEN];
        block[..111].fill(b'a');
        block[111] = 0x80;
        block[LENGTH_OFFSET..].copy_from_slice(&(111u128 * 8).to_be_bytes());
        compress(&block, &mut single);

        let mut expected = [0u8; DIGEST_LEN];
        for (chunk, word) in expected.chunks_exact_mut(8).zip(single.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        assert_eq!(sha512(&[b'a'; 111]).unwrap(), expected);
    }
}
