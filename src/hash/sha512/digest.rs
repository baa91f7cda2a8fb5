//! SHA-512 digest value
//!
//! This module defines `Digest`, the fixed-size 512-bit output of SHA-512.
//!
//! It is designed as a **simple, explicit value type**: 64 bytes holding the
//! final hash state serialized in big-endian order. It is immutable once
//! produced and carries no link back to the computation that created it.

use std::fmt::{self, Display, Formatter, LowerHex};
use std::str::FromStr;

use crate::encoding::hex;
use crate::error::HexError;
use crate::hash::sha512::DIGEST_LEN;

/// Fixed-size 512-bit SHA-512 digest.
///
/// Formatting with `{}` or `{:x}` renders the 128-character lowercase
/// hexadecimal form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Returns the raw digest bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Returns the lowercase hexadecimal representation.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parses a digest from its hexadecimal representation.
    ///
    /// Upper- and lowercase digits are accepted. The input must decode to
    /// exactly 64 bytes.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let mut out = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut out)?;
        Ok(Digest(out))
    }
}

/// Converts a `Digest` into a 64-byte array.
impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(value: Digest) -> Self {
        value.0
    }
}

/// Wraps a 64-byte array as a `Digest`.
///
/// The bytes are taken as-is; no validation is possible or needed.
impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(value: [u8; DIGEST_LEN]) -> Self {
        Digest(value)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&str> for Digest {
    type Error = HexError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Digest::from_hex(value)
    }
}

impl FromStr for Digest {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::from_hex(s)
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl Display for Digest {
    /// Formats the digest as a bare lowercase hexadecimal string.
    ///
    /// No prefix and no separators, e.g. `cf83e135...`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}
