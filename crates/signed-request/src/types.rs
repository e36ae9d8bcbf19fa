//! The envelope and per-call option types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::algorithm::Algorithm;

/// The canonical wrapped record that gets signed.
///
/// Constructed fresh on every encode call and never reused. The field
/// declaration order is the canonical serialization order; optional fields
/// are omitted entirely when unset so the payload bytes are stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Opaque application payload.
    pub data: Value,

    /// Wire name of the keyed-hash algorithm used for the signature.
    ///
    /// Always written by the encoder. Optional here so that a payload
    /// missing the field is reported by the validation pipeline as an
    /// unsupported algorithm rather than as a deserialization failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,

    /// Marker recording when the token was issued.
    ///
    /// Documentary only: stored verbatim and never validated on decode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<Value>,

    /// Operation tag the token is bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Absolute unix timestamp after which the token is invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<i64>,
}

/// Issuance-marker modes for [`EncodeOptions`].
#[derive(Debug, Clone, PartialEq)]
pub enum IssuedAt {
    /// Stamp the envelope with the current unix time at encode.
    Now,

    /// Store the given value verbatim.
    Value(Value),
}

/// Options for [`crate::encode`].
///
/// Every recognized option is an explicit field; the defaults match a bare
/// encode call (HMAC-SHA256, no method binding, no expiration, process
/// default secret).
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    /// Signature algorithm.
    pub algorithm: Algorithm,

    /// Operation tag to bind the token to.
    pub method: Option<String>,

    /// Relative lifetime in seconds; must be positive.
    pub timeout: Option<i64>,

    /// Absolute expiration as a unix timestamp; must be in the future at
    /// encode time.
    pub expires: Option<i64>,

    /// Issuance marker.
    pub issued_at: Option<IssuedAt>,

    /// Signing secret; the process default when unset.
    pub secret: Option<Vec<u8>>,
}

impl EncodeOptions {
    /// Options for a bare encode call.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the signature algorithm.
    #[must_use]
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Bind the token to an operation tag.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Expire the token `seconds` after creation.
    #[must_use]
    pub fn timeout(mut self, seconds: i64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Expire the token at an absolute unix timestamp.
    ///
    /// When combined with [`EncodeOptions::timeout`], the earlier of the two
    /// expirations wins.
    #[must_use]
    pub fn expires(mut self, timestamp: i64) -> Self {
        self.expires = Some(timestamp);
        self
    }

    /// Stamp the envelope with the current time at encode.
    #[must_use]
    pub fn issued_now(mut self) -> Self {
        self.issued_at = Some(IssuedAt::Now);
        self
    }

    /// Record an issuance marker verbatim.
    #[must_use]
    pub fn issued_at(mut self, marker: impl Into<Value>) -> Self {
        self.issued_at = Some(IssuedAt::Value(marker.into()));
        self
    }

    /// Sign with an explicit secret instead of the process default.
    #[must_use]
    pub fn secret(mut self, secret: impl Into<Vec<u8>>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

/// Options for [`crate::decode`] and [`crate::decode_envelope`].
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Operation tag the caller expects the token to be bound to.
    pub method: Option<String>,

    /// Verification secret; the process default when unset.
    pub secret: Option<Vec<u8>>,
}

impl DecodeOptions {
    /// Options for a bare decode call.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect the token to be bound to this operation tag.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Verify with an explicit secret instead of the process default.
    #[must_use]
    pub fn secret(mut self, secret: impl Into<Vec<u8>>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_options_default_to_bare_call() {
        let options = EncodeOptions::new();
        assert_eq!(options.algorithm, Algorithm::HmacSha256);
        assert_eq!(options.method, None);
        assert_eq!(options.timeout, None);
        assert_eq!(options.expires, None);
        assert_eq!(options.issued_at, None);
        assert_eq!(options.secret, None);
    }

    #[test]
    fn builders_set_every_field() {
        let options = EncodeOptions::new()
            .algorithm(Algorithm::HmacSha512)
            .method("activate")
            .timeout(300)
            .expires(2_000_000_000)
            .issued_now()
            .secret(b"hunter2".to_vec());
        assert_eq!(options.algorithm, Algorithm::HmacSha512);
        assert_eq!(options.method.as_deref(), Some("activate"));
        assert_eq!(options.timeout, Some(300));
        assert_eq!(options.expires, Some(2_000_000_000));
        assert_eq!(options.issued_at, Some(IssuedAt::Now));
        assert_eq!(options.secret.as_deref(), Some(&b"hunter2"[..]));
    }

    #[test]
    fn issued_at_marker_is_stored_verbatim() {
        let options = EncodeOptions::new().issued_at("2014-05-27 10:11:12");
        assert_eq!(
            options.issued_at,
            Some(IssuedAt::Value(Value::from("2014-05-27 10:11:12")))
        );
    }
}
