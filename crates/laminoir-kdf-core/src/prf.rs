//! HMAC-SHA256 pseudorandom function core.
//!
//! The keyed-hash primitive both PBKDF2 passes chain on, backed by
//! `ring::hmac`. The key schedule is computed once per [`PrfKey`] and
//! reused for every invocation within a stretch.

use ring::hmac;

use crate::error::KdfError;

/// PRF output length in bytes (SHA-256 digest size).
pub const TAG_LEN: usize = 32;

/// A reusable HMAC-SHA256 key.
///
/// Wraps `ring::hmac::Key` so the padded key schedule is derived once per
/// password rather than once per block. `ring` zeroizes its internal key
/// material on drop.
pub struct PrfKey(hmac::Key);

impl PrfKey {
    /// Build a PRF key from raw key bytes (any length).
    #[must_use]
    pub fn new(key_bytes: &[u8]) -> Self {
        Self(hmac::Key::new(hmac::HMAC_SHA256, key_bytes))
    }
}

/// Compute `HMAC-SHA256(key, message)`, returning the 32-byte tag.
///
/// Deterministic, no side effects.
///
/// # Errors
///
/// Returns `KdfError::CryptoUnavailable` if the primitive yields a tag of
/// unexpected length — a fatal configuration error, never worked around.
pub fn prf(key: &PrfKey, message: &[u8]) -> Result<[u8; TAG_LEN], KdfError> {
    let tag = hmac::sign(&key.0, message);
    tag.as_ref().try_into().map_err(|_| {
        KdfError::CryptoUnavailable("HMAC-SHA256 produced a tag of unexpected length".into())
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
