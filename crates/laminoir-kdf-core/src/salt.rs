//! Salt generation and handling.
//!
//! A [`Salt`] is not secret — it travels in the caller's verification
//! record next to the cost parameters. Freshly generated salts come from
//! the OS CSPRNG and are at least 16 bytes; stored salts are reconstructed
//! verbatim with [`Salt::from_bytes`].

use crate::error::KdfError;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Minimum length for a freshly generated salt, in bytes.
pub const MIN_SALT_LEN: usize = 16;

/// Default salt length in bytes (128 bits).
pub const DEFAULT_SALT_LEN: usize = 16;

/// An immutable salt value.
///
/// The engine never mutates a salt; ownership stays with the caller
/// across derive/verify calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salt(Vec<u8>);

impl Salt {
    /// Generate a fresh salt of `len` bytes from the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns `KdfError::InvalidParams` if `len < 16`, or
    /// `KdfError::SecureMemory` if the CSPRNG fails.
    pub fn generate(len: usize) -> Result<Self, KdfError> {
        if len < MIN_SALT_LEN {
            return Err(KdfError::InvalidParams(format!(
                "salt too short: {len} bytes (minimum {MIN_SALT_LEN})"
            )));
        }
        let mut bytes = vec![0u8; len];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| KdfError::SecureMemory(format!("CSPRNG fill failed: {e}")))?;
        Ok(Self(bytes))
    }

    /// Generate a fresh salt of the default length (16 bytes).
    ///
    /// # Errors
    ///
    /// Returns `KdfError::SecureMemory` if the CSPRNG fails.
    pub fn random() -> Result<Self, KdfError> {
        Self::generate(DEFAULT_SALT_LEN)
    }

    /// Reconstruct a salt from stored bytes.
    ///
    /// No minimum length is re-imposed here — a stored record must remain
    /// verifiable even if it was created under a weaker policy.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// The raw salt bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The salt length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the salt is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
