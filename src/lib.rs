//! SHA-512 hex digests
//!
//! This crate computes the SHA-512 digest of a byte sequence and renders it
//! as a lowercase hexadecimal string. The computation is a from-scratch,
//! dependency-free implementation of FIPS 180-4; everything else is a thin
//! boundary around it.
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-512 digest engine: constants, the compression function,
//!   padding, and the `Digest` value type. Pure computation with no I/O and
//!   no heap allocation.
//!
//! - `encoding`
//!   Lowercase hexadecimal encoding, plus decoding for parsing digests back
//!   into bytes.
//!
//! - `pipeline`
//!   The one operation exposed to hosts: `digest_hex` for in-process
//!   callers, and `hash_stream` for the read-until-EOF, hash, write flow used
//!   by the `sha512-hex` executable.
//!
//! - `error`
//!   Error types for the modules above.
//!
//! On `wasm32` targets the crate also exports `digestHex` to JavaScript.
//!
//! # Design goals
//!
//! - No heap allocations in the digest engine
//! - No shared or global hash state: every call owns its own
//! - Failures are reported, never turned into a partial digest
//!
//! # Example
//!
//! ```
//! let hex = sha512_hex::digest_hex(b"abc").unwrap();
//! assert!(hex.starts_with("ddaf35a193617aba"));
//! assert_eq!(hex.len(), 128);
//! ```

pub mod encoding;
pub mod error;
pub mod hash;
pub mod pipeline;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use error::{DigestError, HexError, PipelineError};
pub use hash::sha512::{Digest, sha512, sha512_digest};
pub use pipeline::{digest_hex, hash_stream};
