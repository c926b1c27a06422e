//! JSON codec for the envelope.
//!
//! Encoding and decoding are stateless. Requests are always encodable; replies
//! are checked once, here, and never again downstream.

use serde_json::Value;

use super::envelope::{Request, Response, WireResponse};
use crate::common::error::{ProxyError, Result};

/// Encodes a request as UTF-8 JSON with field names preserved.
pub fn encode(request: &Request) -> Vec<u8> {
    Value::Object(request.to_record()).to_string().into_bytes()
}

/// Decodes a reply datagram.
///
/// # Errors
///
/// Returns `MalformedResponse` when the bytes are not JSON, are not an object,
/// omit `success`, or carry a non-boolean `success`.
pub fn decode(bytes: &[u8]) -> Result<Response> {
    serde_json::from_slice::<WireResponse>(bytes)
        .map(Response::from)
        .map_err(|e| ProxyError::MalformedResponse {
            detail: format!(
                "cannot decode reply {:?}: {e}",
                String::from_utf8_lossy(bytes)
            ),
            source: Some(e),
        })
}
