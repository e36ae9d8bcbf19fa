//! Canonical envelope serialization and URL-safe base64 segment framing.
//!
//! The signature is computed over the encoded payload segment, so envelope
//! serialization must be byte-stable: field order is fixed by the
//! [`Envelope`] declaration and unset optional fields are omitted entirely,
//! never emitted as null.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::errors::SignedRequestError;
use crate::types::Envelope;
use crate::Result;

/// Serialize an envelope to its canonical JSON bytes.
///
/// # Errors
///
/// Returns [`SignedRequestError::MalformedPayload`] when the payload value
/// cannot be serialized.
pub fn serialize_envelope(envelope: &Envelope) -> Result<Vec<u8>> {
    serde_json::to_vec(envelope).map_err(|source| SignedRequestError::MalformedPayload { source })
}

/// Deserialize canonical JSON bytes back into an envelope.
///
/// # Errors
///
/// Returns [`SignedRequestError::MalformedPayload`] when the bytes are not a
/// valid serialized envelope.
pub fn deserialize_envelope(bytes: &[u8]) -> Result<Envelope> {
    serde_json::from_slice(bytes).map_err(|source| SignedRequestError::MalformedPayload { source })
}

/// Frame raw bytes as a URL-safe, unpadded base64 segment.
#[must_use]
pub fn encode_segment(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Unframe a URL-safe base64 segment back to raw bytes.
///
/// # Errors
///
/// Returns [`SignedRequestError::MalformedSegment`] when the segment is not
/// valid URL-safe base64.
pub fn decode_segment(segment: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|source| SignedRequestError::MalformedSegment { source })
}
