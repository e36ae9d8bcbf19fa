//! Compact self-verifying signed request tokens.
//!
//! A signed request wraps arbitrary application data in an authenticated
//! envelope: the data is serialized together with its metadata (signature
//! algorithm, optional method binding, optional expiration, optional
//! issuance marker), framed as URL-safe base64, and signed with a keyed
//! hash. Any holder can read the payload; nobody without the secret can
//! forge or alter it, and no shared session store is needed to verify it.
//!
//! ## Token format
//!
//! ```text
//! signature_segment.payload_segment
//! ```
//!
//! Both segments are URL-safe base64 (`-_` alphabet, no padding). The
//! payload segment frames the canonical JSON envelope; the signature segment
//! frames the keyed hash of the payload segment's encoded bytes.
//!
//! ## Usage
//!
//! ```rust
//! use signed_request::{decode, encode, DecodeOptions, EncodeOptions};
//!
//! let token = encode(&"Test Data", &EncodeOptions::new())?;
//! let data: String = decode(&token, &DecodeOptions::new())?;
//! assert_eq!(data, "Test Data");
//! # Ok::<(), signed_request::SignedRequestError>(())
//! ```
//!
//! Method binding scopes a token to a single operation, and a timeout bounds
//! its lifetime:
//!
//! ```rust
//! use signed_request::{decode, encode, DecodeOptions, EncodeOptions};
//!
//! let token = encode(
//!     &42u32,
//!     &EncodeOptions::new().method("activate").timeout(300),
//! )?;
//! let data: u32 = decode(&token, &DecodeOptions::new().method("activate"))?;
//! assert_eq!(data, 42);
//! # Ok::<(), signed_request::SignedRequestError>(())
//! ```
//!
//! ## Architecture
//!
//! - `algorithm` - supported keyed-hash algorithms and signature computation
//! - `codec` - canonical envelope serialization and segment framing
//! - `errors` - the error taxonomy, one kind per validation failure
//! - `secret` - the process-wide default signing secret
//! - `token` - the encoder and the ordered decode validation pipeline
//! - `types` - the envelope and per-call options
//!
//! ## Security notes
//!
//! Payloads are authenticated, not encrypted: anything placed in a token is
//! visible to any holder. Signature comparison is constant-time. Expiration
//! is the only anti-replay mechanism; there is no revocation list and no
//! nonce tracking.

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod codec;
pub mod errors;
pub mod secret;
pub mod token;
pub mod types;

pub use algorithm::Algorithm;
pub use errors::SignedRequestError;
pub use secret::set_default_secret;
pub use token::{decode, decode_envelope, encode};
pub use types::{DecodeOptions, EncodeOptions, Envelope, IssuedAt};

/// Result type for signed request operations.
pub type Result<T> = std::result::Result<T, SignedRequestError>;
