//! Byte-to-text encodings.
//!
//! Currently provides lowercase hexadecimal, used to render digests.

pub mod hex;
