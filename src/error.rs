//! # Error Types
//!
//! Structured errors for digest computation, hex decoding, and the
//! stdin-to-stdout pipeline. Uses `thiserror` for the `Display` and `Error`
//! implementations.

use thiserror::Error;

/// Errors from the SHA-512 digest engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// The message length in bits does not fit the 128-bit length field.
    #[error("message of {len} bytes exceeds the SHA-512 length field")]
    LengthOverflow { len: usize },
}

/// Errors from hexadecimal encoding and decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// Hex input must contain an even number of digits.
    #[error("hex input has odd length {len}")]
    OddLength { len: usize },

    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    /// Output buffer cannot hold the encoded form.
    #[error("output buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// Decoded length does not match the destination.
    #[error("invalid decoded length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Errors from the read-hash-write pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Reading the message or writing the digest failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The digest engine rejected the message.
    #[error(transparent)]
    Digest(#[from] DigestError),
}
