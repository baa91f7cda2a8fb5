//! Message → digest → hex pipeline
//!
//! The single operation this crate exposes to its hosts, in two shapes:
//! - `digest_hex`: a synchronous function over a borrowed byte buffer
//! - `hash_stream`: read a whole stream, hash it, write the hex digest
//!
//! Both are thin wrappers around `hash::sha512` and `encoding::hex`.

use std::io::{Read, Write};

use tracing::{debug, trace};

use crate::encoding::hex;
use crate::error::{DigestError, PipelineError};
use crate::hash::sha512;

/// Hashes `message` with SHA-512 and returns the 128-character lowercase
/// hexadecimal digest.
///
/// Pure and deterministic: no I/O, no shared state.
///
/// # Errors
/// - `DigestError::LengthOverflow` if the message is too long for SHA-512.
pub fn digest_hex(message: &[u8]) -> Result<String, DigestError> {
    let digest = sha512(message)?;
    Ok(hex::encode(&digest))
}

/// Reads `input` until end-of-stream, hashes everything read, and writes the
/// hex digest followed by a newline to `output`.
///
/// The whole message is buffered before hashing; the digest is written only
/// once it has been computed, so a failure never leaves a partial digest on
/// `output`.
///
/// # Errors
/// - `PipelineError::Io` if reading, writing, or flushing fails.
/// - `PipelineError::Digest` if the message cannot be hashed.
pub fn hash_stream<R, W>(mut input: R, mut output: W) -> Result<(), PipelineError>
where
    R: Read,
    W: Write,
{
    let mut message = Vec::new();
    let read = input.read_to_end(&mut message)?;
    debug!(bytes = read, "message read");

    let digest = digest_hex(&message)?;

    writeln!(output, "{digest}")?;
    output.flush()?;
    trace!("digest written");

    Ok(())
}
