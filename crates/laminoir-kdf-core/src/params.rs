//! Scrypt cost parameters with tiered presets.
//!
//! This module provides:
//! - [`CostParameters`] — validated, immutable parameter set (stored in the
//!   caller's verification record)
//! - [`CostPreset`] — Fast / Balanced / Maximum preset selector
//!
//! Parameters are validated eagerly at construction — an invalid set never
//! exists as a value, so no partial computation can start on bad input.
//! Deserialization goes through the same constructor.

use crate::error::KdfError;
use serde::{Deserialize, Serialize};

/// Byte size of one block per unit of `r` (`128 * r` bytes per block).
pub const BLOCK_UNIT: usize = 128;

/// Default derived key length in bytes (256 bits).
pub const DEFAULT_KEY_LEN: usize = 32;

/// Upper bound on the derived key length: `(2^32 − 1) * 32` bytes,
/// the PBKDF2-HMAC-SHA256 output limit.
pub const MAX_KEY_LEN: u64 = (u32::MAX as u64) * 32;

/// Upper bound (exclusive) on the product `r * p` (RFC 7914 §2).
const MAX_RP_PRODUCT: u64 = 1 << 30;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Validated scrypt cost parameter set.
///
/// - `n`: CPU/memory cost factor, a power of two greater than 1
/// - `r`: block-size factor (block byte size is `128 * r`)
/// - `p`: parallelization factor (independent mixing blocks)
/// - `dk_len`: derived key length in bytes
///
/// Instances are immutable and can only be produced by [`CostParameters::new`]
/// (deserialization routes through it), so holding a value implies the
/// invariants hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCostParameters", into = "RawCostParameters")]
pub struct CostParameters {
    n: u32,
    r: u32,
    p: u32,
    dk_len: usize,
}

/// Unvalidated mirror of [`CostParameters`] used as the serde boundary.
#[derive(Serialize, Deserialize)]
struct RawCostParameters {
    n: u32,
    r: u32,
    p: u32,
    dk_len: usize,
}

/// Cost preset selector.
///
/// Each preset carries fixed parameters tuned for a target; `Balanced` is
/// the recommended default for interactive password verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostPreset {
    /// Quick access, modest hardware (4 MiB memory).
    Fast,
    /// Recommended daily driver (48 MiB memory across 3 parallel blocks).
    Balanced,
    /// Maximum security / sensitive operations (256 MiB peak memory).
    Maximum,
}

impl CostPreset {
    /// Return the parameters for this preset.
    ///
    /// All presets satisfy the construction invariants, so this cannot fail.
    #[must_use]
    pub fn params(self) -> CostParameters {
        let (n, r, p) = match self {
            Self::Fast => (4_096, 8, 1),
            Self::Balanced => (16_384, 8, 3),
            Self::Maximum => (65_536, 8, 4),
        };
        CostParameters {
            n,
            r,
            p,
            dk_len: DEFAULT_KEY_LEN,
        }
    }
}

// ---------------------------------------------------------------------------
// Construction & validation
// ---------------------------------------------------------------------------

impl CostParameters {
    /// Construct a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns `KdfError::InvalidParams` if:
    /// - `n` is not a power of two, or `n ≤ 1`
    /// - `r` or `p` is zero
    /// - `r * p ≥ 2^30`
    /// - `dk_len` is zero or exceeds `(2^32 − 1) * 32`
    pub fn new(n: u32, r: u32, p: u32, dk_len: usize) -> Result<Self, KdfError> {
        if n <= 1 || !n.is_power_of_two() {
            return Err(KdfError::InvalidParams(format!(
                "cost factor N must be a power of two greater than 1, got {n}"
            )));
        }
        if r == 0 {
            return Err(KdfError::InvalidParams(
                "block-size factor r must be at least 1".into(),
            ));
        }
        if p == 0 {
            return Err(KdfError::InvalidParams(
                "parallelization factor p must be at least 1".into(),
            ));
        }
        if u64::from(r).saturating_mul(u64::from(p)) >= MAX_RP_PRODUCT {
            return Err(KdfError::InvalidParams(format!(
                "r * p must be below 2^30, got {r} * {p}"
            )));
        }
        if dk_len == 0 {
            return Err(KdfError::InvalidParams(
                "derived key length must be at least 1 byte".into(),
            ));
        }
        match u64::try_from(dk_len) {
            Ok(len) if len <= MAX_KEY_LEN => {}
            _ => {
                return Err(KdfError::InvalidParams(format!(
                    "derived key length {dk_len} exceeds (2^32 - 1) * 32 bytes"
                )));
            }
        }

        Ok(Self { n, r, p, dk_len })
    }

    /// The cost factor N.
    #[must_use]
    pub const fn n(&self) -> u32 {
        self.n
    }

    /// The block-size factor r.
    #[must_use]
    pub const fn r(&self) -> u32 {
        self.r
    }

    /// The parallelization factor p.
    #[must_use]
    pub const fn p(&self) -> u32 {
        self.p
    }

    /// The derived key length in bytes.
    #[must_use]
    pub const fn dk_len(&self) -> usize {
        self.dk_len
    }

    /// Byte size of one mixing block: `128 * r`.
    ///
    /// `r < 2^30` is enforced at construction, so the product fits `usize`
    /// on supported (32/64-bit) targets.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn block_bytes(&self) -> usize {
        (self.r as usize).saturating_mul(BLOCK_UNIT)
    }

    /// The parallelization factor as a block count.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn parallel_blocks(&self) -> usize {
        self.p as usize
    }

    /// Total bytes the derivation will hold at peak: `N * 128 * r * p`
    /// (one `N`-entry memory array per parallel block).
    ///
    /// Saturates at `u64::MAX` — a saturated value always exceeds any
    /// configured ceiling, so the comparison stays conservative.
    #[must_use]
    pub const fn memory_requirement(&self) -> u64 {
        (self.n as u64)
            .saturating_mul(BLOCK_UNIT as u64)
            .saturating_mul(self.r as u64)
            .saturating_mul(self.p as u64)
    }
}

impl TryFrom<RawCostParameters> for CostParameters {
    type Error = KdfError;

    fn try_from(raw: RawCostParameters) -> Result<Self, Self::Error> {
        Self::new(raw.n, raw.r, raw.p, raw.dk_len)
    }
}

impl From<CostParameters> for RawCostParameters {
    fn from(params: CostParameters) -> Self {
        Self {
            n: params.n,
            r: params.r,
            p: params.p,
            dk_len: params.dk_len,
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
