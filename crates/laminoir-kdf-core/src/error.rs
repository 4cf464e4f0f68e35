//! Error types for `laminoir-kdf-core`.

use thiserror::Error;

/// Errors produced by the key derivation engine.
///
/// A verification mismatch is **not** an error — [`crate::engine::verify`]
/// returns `Ok(false)` for it. Every variant here aborts the whole
/// derivation; no error is ever converted into a partial or default key.
#[derive(Debug, Error)]
pub enum KdfError {
    /// Cost parameter or input validation failed. Raised before any
    /// computation starts; the caller must correct the input and retry.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// The underlying PRF primitive could not be constructed or produced
    /// a malformed tag. Fatal configuration error — never silently
    /// substituted with a weaker primitive.
    #[error("crypto primitive unavailable: {0}")]
    CryptoUnavailable(String),

    /// The requested parameters would exceed the configured memory
    /// ceiling. Raised before any allocation happens.
    #[error("memory limit exceeded: derivation requires {required} bytes, ceiling is {ceiling}")]
    MemoryLimitExceeded {
        /// Bytes the derivation would need (`N * 128 * r * p`).
        required: u64,
        /// The configured ceiling in bytes.
        ceiling: u64,
    },

    /// Secure memory allocation or CSPRNG failure.
    #[error("secure memory error: {0}")]
    SecureMemory(String),
}
