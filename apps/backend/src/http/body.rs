//! Request body decoding.
//!
//! The game create endpoint receives its payload as
//! base64( gzip( JSON ) ); every other endpoint takes plain JSON.
//! Each stage reports its own error code so a client can tell which
//! layer of the framing was broken.

use std::io::Read;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Decode a base64(gzip(JSON)) body into `T`.
///
/// ASCII whitespace is stripped before base64 decoding so that bodies
/// with line breaks in the encoded text are accepted.
pub fn decode_encoded_json<T: DeserializeOwned>(raw: &[u8]) -> Result<T, AppError> {
    let cleaned: Vec<u8> = raw
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    let compressed = STANDARD
        .decode(cleaned)
        .map_err(|e| AppError::bad_request("BODY_BASE64", e.to_string()))?;

    let mut decoder = GzDecoder::new(compressed.as_slice());
    let mut json = Vec::new();
    decoder
        .read_to_end(&mut json)
        .map_err(|e| AppError::bad_request("BODY_GZIP", e.to_string()))?;

    serde_json::from_slice(&json).map_err(|e| AppError::bad_request("BODY_JSON", e.to_string()))
}

/// Decode a plain JSON body into `T`.
pub fn decode_json<T: DeserializeOwned>(raw: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(raw).map_err(|e| AppError::bad_request("BODY_JSON", e.to_string()))
}
