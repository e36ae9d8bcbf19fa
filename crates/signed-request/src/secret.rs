//! Process-wide default signing secret.
//!
//! Calls that omit an explicit secret read this value. It starts as a
//! built-in compatibility constant and should be replaced at process startup
//! via [`set_default_secret`]. Reads and the administrative write go through
//! a read-write lock, so a reader never observes a partially-updated value.

use parking_lot::RwLock;

// Compatibility default shared by pre-existing deployments of the format.
const BUILTIN_DEFAULT_SECRET: &[u8] = b"sxtytuyuhiyf46576798y8g6ftuvy";

static DEFAULT_SECRET: RwLock<Option<Vec<u8>>> = RwLock::new(None);

/// Replace the process-wide default secret.
///
/// Affects every subsequent encode and decode call that does not supply an
/// explicit secret.
pub fn set_default_secret(secret: impl Into<Vec<u8>>) {
    *DEFAULT_SECRET.write() = Some(secret.into());
}

/// The current default secret.
pub(crate) fn default_secret() -> Vec<u8> {
    match &*DEFAULT_SECRET.read() {
        Some(secret) => secret.clone(),
        None => BUILTIN_DEFAULT_SECRET.to_vec(),
    }
}
