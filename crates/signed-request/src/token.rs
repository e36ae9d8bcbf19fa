//! Token encoding and the decode validation pipeline.
//!
//! Encoding builds a fresh envelope per call, frames it, and signs the
//! encoded payload segment. Decoding runs a fixed sequence of checks -
//! format, segment decode, envelope decode, algorithm support, signature,
//! method binding, expiration - each short-circuiting on failure, so the
//! surfaced error kind is deterministic when several conditions are violated
//! at once.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use serde::Serialize;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::algorithm::Algorithm;
use crate::codec;
use crate::errors::SignedRequestError;
use crate::secret::default_secret;
use crate::types::{DecodeOptions, EncodeOptions, Envelope, IssuedAt};
use crate::Result;

/// Encode `data` into a signed request token.
///
/// # Errors
///
/// Returns [`SignedRequestError::InvalidTimeout`] for a non-positive
/// timeout, [`SignedRequestError::InvalidExpiration`] for an expiration that
/// is not in the future, and [`SignedRequestError::MalformedPayload`] when
/// `data` cannot be serialized.
pub fn encode<T: Serialize>(data: &T, options: &EncodeOptions) -> Result<String> {
    if let Some(seconds) = options.timeout {
        if seconds <= 0 {
            return Err(SignedRequestError::InvalidTimeout { seconds });
        }
    }

    let now = unix_now();
    if let Some(timestamp) = options.expires {
        if timestamp <= now {
            return Err(SignedRequestError::InvalidExpiration { timestamp });
        }
    }

    // The tightest constraint wins when both a timeout and an absolute
    // expiration are given.
    let mut expires = options.timeout.map(|seconds| now + seconds);
    if let Some(explicit) = options.expires {
        expires = Some(expires.map_or(explicit, |derived| derived.min(explicit)));
    }

    let issued_at = options.issued_at.as_ref().map(|marker| match marker {
        IssuedAt::Now => serde_json::Value::from(now),
        IssuedAt::Value(value) => value.clone(),
    });

    let envelope = Envelope {
        data: serde_json::to_value(data)
            .map_err(|source| SignedRequestError::MalformedPayload { source })?,
        algorithm: Some(options.algorithm.as_str().to_owned()),
        issued_at,
        method: options.method.clone(),
        expires,
    };

    let payload_segment = codec::encode_segment(&codec::serialize_envelope(&envelope)?);
    let secret = options.secret.clone().unwrap_or_else(default_secret);
    let signature_segment =
        codec::encode_segment(&options.algorithm.sign(&secret, payload_segment.as_bytes()));

    debug!(
        algorithm = %options.algorithm,
        method = options.method.as_deref(),
        expires = envelope.expires,
        "encoded signed request"
    );
    Ok(format!("{signature_segment}.{payload_segment}"))
}

/// Decode a token and deserialize its data field into `T`.
///
/// # Errors
///
/// Any kind from the validation pipeline (see [`decode_envelope`]), plus
/// [`SignedRequestError::MalformedPayload`] when the data field does not
/// deserialize into `T`.
pub fn decode<T: DeserializeOwned>(token: &str, options: &DecodeOptions) -> Result<T> {
    let envelope = decode_envelope(token, options)?;
    serde_json::from_value(envelope.data)
        .map_err(|source| SignedRequestError::MalformedPayload { source })
}

/// Decode a token and return the whole envelope.
///
/// Useful for inspecting metadata (expiration, issuance marker) and for
/// payloads produced by other implementations of the format.
///
/// # Errors
///
/// One kind per pipeline step: [`SignedRequestError::MalformedToken`],
/// [`SignedRequestError::MalformedSegment`],
/// [`SignedRequestError::MalformedPayload`],
/// [`SignedRequestError::UnsupportedAlgorithm`],
/// [`SignedRequestError::SignatureMismatch`],
/// [`SignedRequestError::MethodRequired`] /
/// [`SignedRequestError::MethodNotRequired`] /
/// [`SignedRequestError::MethodMismatch`], and
/// [`SignedRequestError::TokenExpired`].
pub fn decode_envelope(token: &str, options: &DecodeOptions) -> Result<Envelope> {
    // 1. Format: exactly two non-empty dot-separated segments. Base64-url
    // output never contains a dot, so splitting on the first one is safe.
    let (signature_segment, payload_segment) = token
        .split_once('.')
        .ok_or(SignedRequestError::MalformedToken)?;
    if signature_segment.is_empty() || payload_segment.is_empty() {
        return Err(SignedRequestError::MalformedToken);
    }

    // 2. Segment decode.
    let signature = codec::decode_segment(signature_segment)?;
    let payload = codec::decode_segment(payload_segment)?;

    // 3. Envelope decode.
    let envelope = codec::deserialize_envelope(&payload)?;

    // 4. Algorithm support.
    let algorithm = Algorithm::resolve(envelope.algorithm.as_deref().unwrap_or_default())?;

    // 5. Signature, recomputed over the encoded payload segment bytes.
    let secret = options.secret.clone().unwrap_or_else(default_secret);
    let expected = algorithm.sign(&secret, payload_segment.as_bytes());
    if !bool::from(expected.ct_eq(&signature)) {
        return Err(SignedRequestError::SignatureMismatch);
    }

    // 6. Method binding, symmetric in both directions.
    match (&envelope.method, &options.method) {
        (Some(_), None) => return Err(SignedRequestError::MethodRequired),
        (None, Some(_)) => return Err(SignedRequestError::MethodNotRequired),
        (Some(bound), Some(given)) if bound != given => {
            return Err(SignedRequestError::MethodMismatch);
        }
        _ => {}
    }

    // 7. Expiration.
    if let Some(expired_at) = envelope.expires {
        if expired_at < unix_now() {
            return Err(SignedRequestError::TokenExpired { expired_at });
        }
    }

    debug!(algorithm = %algorithm, "decoded signed request");
    Ok(envelope)
}

/// Wall-clock unix time in integer seconds. A clock before the epoch
/// collapses to zero.
fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
