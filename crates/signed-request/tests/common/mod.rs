//! Common test utilities for integration tests
//!
//! Shared helpers for forging tokens out-of-band and for working with the
//! wall clock, used across the round-trip, validation, security, and
//! lifecycle suites.

#![allow(dead_code)]

use std::time::{SystemTime, UNIX_EPOCH};

use signed_request::{codec, Algorithm};

/// Payload used by the concrete wire-format scenarios.
pub const TEST_DATA: &str = "Test Data";

/// Current unix timestamp in seconds.
pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_secs() as i64
}

/// Forge a token from raw payload JSON, signed with `HMAC-SHA256`.
///
/// Bypasses the encoder's argument validation, which is exactly what an
/// out-of-band producer (or an attacker) would do.
pub fn forge_token(payload_json: &str, secret: &[u8]) -> String {
    let payload = codec::encode_segment(payload_json.as_bytes());
    let signature =
        codec::encode_segment(&Algorithm::HmacSha256.sign(secret, payload.as_bytes()));
    format!("{signature}.{payload}")
}
