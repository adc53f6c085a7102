// This is extremely safe, it says so right here!
#![forbid(unsafe_code)]

use base64::prelude::*;
use serde::Serialize;

use crate::error::DnblogError;

// A single TXT character-string carries at most 255 octets.
// Base64 adds ±33% (every 3 bytes in turn into 4 bytes out), so a chunk of
// 200 ASCII characters encodes to 267 characters and has to shrink a little.
pub const MAX_TXT_VALUE_LEN: usize = 255;
pub const DEFAULT_CHUNK_SIZE: usize = 200;
pub const CHUNK_SIZE_STEP: usize = 5;
pub const DEFAULT_TTL: u32 = 1200;
pub const DEFAULT_DOMAIN: &str = "blog.tazj.in";
pub const META_RECORD_LABEL: &str = "_meta";
// Post IDs become a single DNS label
pub const MAX_LABEL_LEN: usize = 63;

/// Base64-encode text (standard alphabet, no padding).
#[must_use]
pub fn encode_text(text: &str) -> String {
    BASE64_STANDARD_NO_PAD.encode(text.as_bytes())
}

/// Encode a value as JSON and base64-encode the result.
///
/// # Errors
/// Returns an error if the value cannot be serialised
pub fn encode_json<T: Serialize>(value: &T) -> Result<String, DnblogError> {
    let json = serde_json::to_vec(value)?;
    Ok(BASE64_STANDARD_NO_PAD.encode(json))
}
