//! PBKDF2-HMAC-SHA256 stretcher (RFC 8018).
//!
//! The scrypt engine calls this twice with a single iteration: once to
//! expand the password and salt into the parallel mixing blocks, and once
//! to compress the mixed blocks into the derived key. The construction is
//! standards-exact — per-block big-endian index appended to the salt,
//! XOR-accumulated iteration chain — so output is verifiable against any
//! reference implementation.

use zeroize::{Zeroize, Zeroizing};

use crate::error::KdfError;
use crate::prf::{self, PrfKey};

/// Derive `out_len` bytes from a password and salt.
///
/// Output is the concatenation of 32-byte blocks `T_1, T_2, …`, the final
/// block truncated to the remaining length. Each block `i` (1-based):
///
/// ```text
/// U_1 = PRF(password, salt || BE32(i))
/// U_j = PRF(password, U_{j-1})          j = 2..iterations
/// T_i = U_1 XOR U_2 XOR … XOR U_iterations
/// ```
///
/// The returned buffer and every intermediate are zeroized when dropped.
///
/// # Errors
///
/// Returns `KdfError::InvalidParams` if `iterations` is zero, `out_len` is
/// zero, or `out_len` needs more than `2^32 − 1` blocks. Returns
/// `KdfError::CryptoUnavailable` if the PRF primitive fails.
pub fn stretch(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out_len: usize,
) -> Result<Zeroizing<Vec<u8>>, KdfError> {
    if iterations == 0 {
        return Err(KdfError::InvalidParams(
            "iteration count must be at least 1".into(),
        ));
    }
    if out_len == 0 {
        return Err(KdfError::InvalidParams(
            "output length must be at least 1 byte".into(),
        ));
    }
    if u32::try_from(out_len.div_ceil(prf::TAG_LEN)).is_err() {
        return Err(KdfError::InvalidParams(format!(
            "output length {out_len} exceeds (2^32 - 1) blocks"
        )));
    }

    let key = PrfKey::new(password);
    let mut output = Zeroizing::new(vec![0u8; out_len]);
    // The salt of the compression pass is the mixed block buffer, which is
    // secret — the index message inherits its sensitivity.
    let mut message = Zeroizing::new(Vec::with_capacity(salt.len().saturating_add(4)));
    let mut index: u32 = 0;

    for chunk in output.chunks_mut(prf::TAG_LEN) {
        // Block count fits u32 per the guard above.
        index = index.wrapping_add(1);
        message.clear();
        message.extend_from_slice(salt);
        message.extend_from_slice(&index.to_be_bytes());

        let mut u = prf::prf(&key, &message)?;
        let mut block = u;
        for _ in 1..iterations {
            u = prf::prf(&key, &u)?;
            for (acc, byte) in block.iter_mut().zip(u.iter()) {
                *acc ^= *byte;
            }
        }

        chunk.copy_from_slice(&block[..chunk.len()]);
        u.zeroize();
        block.zeroize();
    }

    Ok(output)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
