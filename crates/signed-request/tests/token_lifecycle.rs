//! Token lifecycle tests
//!
//! Expiration behavior over real time: tokens are valid strictly before
//! their expiration and rejected after it, whether the expiration came from
//! a relative timeout or an absolute timestamp. Issuance markers never
//! participate in validation.

mod common;

use std::thread;
use std::time::Duration;

use common::{current_timestamp, forge_token, TEST_DATA};
use signed_request::{decode, encode, DecodeOptions, EncodeOptions, SignedRequestError};

const SECRET: &[u8] = b"lifecycle secret";

#[test]
fn token_is_valid_before_its_timeout() {
    let token = encode(
        &TEST_DATA,
        &EncodeOptions::new().secret(SECRET.to_vec()).timeout(5),
    )
    .unwrap();

    let data: String =
        decode(&token, &DecodeOptions::new().secret(SECRET.to_vec())).unwrap();
    assert_eq!(data, TEST_DATA);
}

#[test]
fn token_expires_after_its_timeout() {
    // GIVEN a token that lives for one second
    let token = encode(
        &TEST_DATA,
        &EncodeOptions::new().secret(SECRET.to_vec()).timeout(1),
    )
    .unwrap();

    // WHEN its lifetime has passed
    thread::sleep(Duration::from_secs(2));

    // THEN decoding reports the expiration
    let err =
        decode::<String>(&token, &DecodeOptions::new().secret(SECRET.to_vec())).unwrap_err();
    assert!(matches!(err, SignedRequestError::TokenExpired { .. }));
    assert_eq!(err.code(), 207);
}

#[test]
fn expired_token_error_carries_the_expiration() {
    let expired_at = current_timestamp() - 100;
    let token = forge_token(
        &format!("{{\"data\":\"Test Data\",\"algorithm\":\"HMAC-SHA256\",\"expires\":{expired_at}}}"),
        SECRET,
    );

    let err =
        decode::<String>(&token, &DecodeOptions::new().secret(SECRET.to_vec())).unwrap_err();
    assert!(
        matches!(err, SignedRequestError::TokenExpired { expired_at: at } if at == expired_at),
        "unexpected {err:?}"
    );
}

#[test]
fn far_future_expiration_decodes() {
    let expires = current_timestamp() + 3_600;
    let token = forge_token(
        &format!("{{\"data\":\"Test Data\",\"algorithm\":\"HMAC-SHA256\",\"expires\":{expires}}}"),
        SECRET,
    );

    let data: String =
        decode(&token, &DecodeOptions::new().secret(SECRET.to_vec())).unwrap();
    assert_eq!(data, TEST_DATA);
}

/// Issuance markers are documentary: even nonsense values never fail a
/// decode.
#[test]
fn issued_at_is_never_validated() {
    for marker in ["\"not a timestamp\"", "99999999999", "\"\""] {
        let token = forge_token(
            &format!(
                "{{\"data\":\"Test Data\",\"algorithm\":\"HMAC-SHA256\",\"issued_at\":{marker}}}"
            ),
            SECRET,
        );
        let data: String =
            decode(&token, &DecodeOptions::new().secret(SECRET.to_vec())).unwrap();
        assert_eq!(data, TEST_DATA, "marker {marker} broke the decode");
    }
}
