//! Supported keyed-hash algorithms.
//!
//! Algorithm names have the wire form `HMAC-<HASHNAME>` and are derived from
//! the compiled-in SHA-2 primitives. `HMAC-SHA256` is the canonical default.
//! The registry owns signature computation so the rest of the engine never
//! touches a hash primitive directly.

use std::fmt;

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::errors::SignedRequestError;
use crate::Result;

macro_rules! hmac_digest {
    ($hash:ty, $secret:expr, $message:expr) => {{
        // HMAC accepts keys of any length, so Mac construction cannot fail.
        let mut mac = <Hmac<$hash>>::new_from_slice($secret)
            .expect("HMAC accepts keys of any length");
        mac.update($message);
        mac.finalize().into_bytes().to_vec()
    }};
}

/// Keyed-hash algorithms understood by the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// HMAC over SHA-224.
    #[serde(rename = "HMAC-SHA224")]
    HmacSha224,

    /// HMAC over SHA-256. The canonical default.
    #[default]
    #[serde(rename = "HMAC-SHA256")]
    HmacSha256,

    /// HMAC over SHA-384.
    #[serde(rename = "HMAC-SHA384")]
    HmacSha384,

    /// HMAC over SHA-512.
    #[serde(rename = "HMAC-SHA512")]
    HmacSha512,
}

impl Algorithm {
    /// All supported algorithms, in registry order.
    ///
    /// The list is non-empty and deterministic for a given build; every
    /// entry resolves back to itself via [`Algorithm::resolve`].
    #[must_use]
    pub fn all() -> &'static [Algorithm] {
        &[
            Self::HmacSha224,
            Self::HmacSha256,
            Self::HmacSha384,
            Self::HmacSha512,
        ]
    }

    /// Wire name of the algorithm.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HmacSha224 => "HMAC-SHA224",
            Self::HmacSha256 => "HMAC-SHA256",
            Self::HmacSha384 => "HMAC-SHA384",
            Self::HmacSha512 => "HMAC-SHA512",
        }
    }

    /// Resolve a wire name to its algorithm.
    ///
    /// The name splits on the first `-`; the hash identifier is lower-cased
    /// before lookup, so `HMAC-sha256` resolves like `HMAC-SHA256`.
    ///
    /// # Errors
    ///
    /// Returns [`SignedRequestError::UnsupportedAlgorithm`] when the name
    /// does not map to an entry of [`Algorithm::all`].
    pub fn resolve(name: &str) -> Result<Self> {
        let unsupported = || SignedRequestError::UnsupportedAlgorithm {
            name: name.to_owned(),
        };
        let (family, hash) = name.split_once('-').ok_or_else(unsupported)?;
        if family != "HMAC" {
            return Err(unsupported());
        }
        match hash.to_ascii_lowercase().as_str() {
            "sha224" => Ok(Self::HmacSha224),
            "sha256" => Ok(Self::HmacSha256),
            "sha384" => Ok(Self::HmacSha384),
            "sha512" => Ok(Self::HmacSha512),
            _ => Err(unsupported()),
        }
    }

    /// Compute the keyed hash of `message` under `secret`.
    #[must_use]
    pub fn sign(self, secret: &[u8], message: &[u8]) -> Vec<u8> {
        match self {
            Self::HmacSha224 => hmac_digest!(Sha224, secret, message),
            Self::HmacSha256 => hmac_digest!(Sha256, secret, message),
            Self::HmacSha384 => hmac_digest!(Sha384, secret, message),
            Self::HmacSha512 => hmac_digest!(Sha512, secret, message),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
