//! WebAssembly bindings
//!
//! Exposes `digestHex` to JavaScript hosts. `wasm-bindgen` copies the
//! incoming `Uint8Array` into linear memory before the call and hands back
//! an owned JS string afterwards, so the host and the hash never share a
//! buffer.

use wasm_bindgen::prelude::*;

use crate::pipeline;

/// SHA-512 of `message` as a 128-character lowercase hex string.
///
/// Callers encode text themselves (e.g. `new TextEncoder().encode(s)`).
#[wasm_bindgen(js_name = digestHex)]
pub fn digest_hex(message: &[u8]) -> Result<String, JsError> {
    pipeline::digest_hex(message).map_err(JsError::from)
}
