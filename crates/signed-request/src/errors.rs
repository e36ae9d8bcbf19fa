//! Signed request error types.
//!
//! Every failure mode of the encode/decode pipeline is a distinct variant so
//! callers can branch on cause - an expired token is not a forged one. All
//! errors are terminal for the call that produced them; there are no
//! process-level failure modes.

use thiserror::Error;

/// Errors raised while encoding or decoding signed requests.
#[derive(Debug, Error)]
pub enum SignedRequestError {
    /// Requested or embedded algorithm name is not in the registry.
    #[error("algorithm is not supported: {name:?}")]
    UnsupportedAlgorithm {
        /// The offending algorithm name (empty when the envelope carried none).
        name: String,
    },

    /// Timeout option was not a positive number of seconds.
    #[error("invalid timeout, must be a positive number of seconds: {seconds}")]
    InvalidTimeout {
        /// The rejected timeout value.
        seconds: i64,
    },

    /// Expiration option was not a future unix timestamp.
    #[error("invalid expire time, must be in the future: {timestamp}")]
    InvalidExpiration {
        /// The rejected expiration timestamp.
        timestamp: i64,
    },

    /// Token does not split into exactly two non-empty dot-separated
    /// segments.
    #[error("invalid signed request format")]
    MalformedToken,

    /// A segment is not valid URL-safe base64.
    #[error("segment is not valid url-safe base64")]
    MalformedSegment {
        /// Underlying base64 decode failure.
        #[source]
        source: base64::DecodeError,
    },

    /// Payload bytes do not deserialize to an envelope, or the data field
    /// does not deserialize to the requested type.
    #[error("payload does not deserialize to a signed request envelope")]
    MalformedPayload {
        /// Underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// Recomputed signature differs from the one carried by the token.
    #[error("signature does not match the data")]
    SignatureMismatch,

    /// The envelope carries a method but the caller supplied none.
    #[error("this signed request requires a method")]
    MethodRequired,

    /// The caller supplied a method but the envelope carries none.
    #[error("this signed request does not require a method")]
    MethodNotRequired,

    /// Envelope and caller methods are both present but unequal.
    #[error("this signed request does not match the given method")]
    MethodMismatch,

    /// Current time is past the envelope's expiration.
    #[error("this signed request has expired at {expired_at}")]
    TokenExpired {
        /// The envelope's expiration timestamp.
        expired_at: i64,
    },
}

impl SignedRequestError {
    /// Stable numeric code for logs and wire-level diagnostics.
    ///
    /// Encode-side argument failures are in the 1xx range, decode-side
    /// validation failures in the 2xx range.
    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidTimeout { .. } => 100,
            Self::InvalidExpiration { .. } => 101,
            Self::UnsupportedAlgorithm { .. } => 103,
            Self::MalformedToken => 200,
            Self::MalformedSegment { .. } => 201,
            Self::MalformedPayload { .. } => 202,
            Self::SignatureMismatch => 203,
            Self::MethodRequired => 204,
            Self::MethodNotRequired => 205,
            Self::MethodMismatch => 206,
            Self::TokenExpired { .. } => 207,
        }
    }
}
