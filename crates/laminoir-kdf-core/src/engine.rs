//! Scrypt derivation engine.
//!
//! This module provides:
//! - [`derive`] / [`derive_with`] — derive a key from a password + salt
//!   under validated [`CostParameters`]
//! - [`verify`] / [`verify_with`] — recompute and compare against a stored
//!   key in constant time
//! - [`EngineConfig`] — memory ceiling and worker cap
//! - [`DerivedKey`] — the masked, zeroized result
//!
//! The pipeline is PBKDF2 expansion → per-block ROMix → PBKDF2
//! compression. The `p` mixing blocks are computationally independent and
//! run on a scoped worker pool; the final concatenation order is the
//! buffer order, indexed by block number, regardless of which worker
//! finishes first.

use std::fmt;
use std::fmt::Write as _;
use std::num::NonZeroUsize;
use std::thread;

use serde::{Deserialize, Serialize};

use crate::error::KdfError;
use crate::memory::SecretBuffer;
use crate::params::CostParameters;
use crate::pbkdf2;
use crate::romix::ro_mix;
use crate::salt::Salt;

/// Default memory ceiling in bytes (1 GiB).
pub const DEFAULT_MEMORY_CEILING: u64 = 1 << 30;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Engine resource configuration.
///
/// The ceiling bounds `N * 128 * r * p` — the peak allocation across all
/// parallel mixing blocks — and is enforced before anything is allocated,
/// so misconfigured or attacker-chosen parameters cannot exhaust memory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Peak memory the derivation may claim, in bytes.
    pub memory_ceiling: u64,
    /// Upper bound on concurrent mixing workers. The effective pool size
    /// is `min(max_workers, p)`; any value yields identical output.
    pub max_workers: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            memory_ceiling: DEFAULT_MEMORY_CEILING,
            max_workers: thread::available_parallelism().map_or(1, NonZeroUsize::get),
        }
    }
}

/// A derived key.
///
/// Backed by a [`SecretBuffer`]: `mlock`'d, masked in `Debug`/`Display`,
/// zeroized on drop. A deterministic pure function of
/// (password, salt, parameters).
pub struct DerivedKey {
    bytes: SecretBuffer,
}

impl DerivedKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self, KdfError> {
        Ok(Self {
            bytes: SecretBuffer::new(bytes)?,
        })
    }

    /// Expose the raw key bytes. Use sparingly.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.bytes.expose()
    }

    /// The key length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the key is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Constant-time comparison against stored key bytes.
    #[must_use]
    pub fn matches(&self, other: &[u8]) -> bool {
        constant_time_eq(self.bytes.expose(), other)
    }

    /// Render the key as lowercase hex for the caller's verification
    /// record. The caller takes over custody of the rendered copy.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(self.len().saturating_mul(2));
        for byte in self.bytes.expose() {
            let _ = write!(out, "{byte:02x}");
        }
        out
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey(***)")
    }
}

impl fmt::Display for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey(***)")
    }
}

/// Constant-time comparison for key material.
///
/// Returns `true` iff both slices have equal length and identical
/// contents. Uses bitwise OR accumulation to avoid short-circuit timing
/// leaks.
///
/// Note: The early return on length mismatch is acceptable because key
/// lengths are public knowledge (they sit next to the cost parameters in
/// the verification record) — the constant-time property protects the
/// *key value*, not its length.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

// ---------------------------------------------------------------------------
// Core engine
// ---------------------------------------------------------------------------

/// Derive a key from a password and salt under the default
/// [`EngineConfig`].
///
/// # Errors
///
/// See [`derive_with`].
pub fn derive(
    password: &[u8],
    salt: &Salt,
    params: &CostParameters,
) -> Result<DerivedKey, KdfError> {
    derive_with(&EngineConfig::default(), password, salt, params)
}

/// Derive a key from a password and salt.
///
/// Holding a [`CostParameters`] value implies the parameter invariants
/// hold; the remaining precondition checked here is the memory ceiling,
/// enforced before the password is touched and before any allocation.
///
/// The password is borrowed; the engine wipes every internal copy
/// (expansion buffer, mixing arrays, compression input) on all exit
/// paths. Wiping the caller's own buffer remains the caller's duty.
///
/// # Errors
///
/// Returns `KdfError::MemoryLimitExceeded` if `N * 128 * r * p` exceeds
/// the configured ceiling, `KdfError::CryptoUnavailable` if the PRF
/// primitive fails, or `KdfError::SecureMemory` if the result buffer
/// cannot be allocated.
pub fn derive_with(
    config: &EngineConfig,
    password: &[u8],
    salt: &Salt,
    params: &CostParameters,
) -> Result<DerivedKey, KdfError> {
    let required = params.memory_requirement();
    if required > config.memory_ceiling {
        return Err(KdfError::MemoryLimitExceeded {
            required,
            ceiling: config.memory_ceiling,
        });
    }

    let block_len = params.block_bytes();
    let blocks = params.parallel_blocks();
    let expanded_len = block_len.saturating_mul(blocks);

    let mut expanded = pbkdf2::stretch(password, salt.as_bytes(), 1, expanded_len)?;
    mix_blocks(&mut expanded, block_len, blocks, params.n(), config.max_workers);
    let key = pbkdf2::stretch(password, &expanded, 1, params.dk_len())?;

    // `expanded` and `key` are Zeroizing — wiped when this frame unwinds,
    // on the error path of `stretch` included.
    DerivedKey::from_bytes(&key)
}

/// Recompute a derivation and compare it to a stored key under the
/// default [`EngineConfig`].
///
/// # Errors
///
/// See [`verify_with`].
pub fn verify(
    password: &[u8],
    salt: &Salt,
    params: &CostParameters,
    expected: &[u8],
) -> Result<bool, KdfError> {
    verify_with(&EngineConfig::default(), password, salt, params, expected)
}

/// Recompute a derivation and compare it to a stored key.
///
/// The comparison is constant-time — it never short-circuits on the first
/// mismatching byte. A mismatch is a normal `Ok(false)`, not an error.
///
/// # Errors
///
/// Same failure modes as [`derive_with`].
pub fn verify_with(
    config: &EngineConfig,
    password: &[u8],
    salt: &Salt,
    params: &CostParameters,
    expected: &[u8],
) -> Result<bool, KdfError> {
    let key = derive_with(config, password, salt, params)?;
    Ok(key.matches(expected))
}

/// Run ROMix over each `block_len`-sized block of `expanded`.
///
/// Each worker owns a disjoint `&mut` group of blocks and its own memory
/// array, so there is no shared mutable state to lock. Group boundaries
/// only affect scheduling — never the per-block result or the index order
/// of the buffer.
fn mix_blocks(expanded: &mut [u8], block_len: usize, blocks: usize, n: u32, max_workers: usize) {
    let workers = max_workers.clamp(1, blocks.max(1));
    if workers == 1 {
        for block in expanded.chunks_exact_mut(block_len) {
            ro_mix(block, n);
        }
        return;
    }

    let group_len = blocks.div_ceil(workers).saturating_mul(block_len);
    thread::scope(|scope| {
        for group in expanded.chunks_mut(group_len) {
            scope.spawn(move || {
                for block in group.chunks_exact_mut(block_len) {
                    ro_mix(block, n);
                }
            });
        }
    });
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
