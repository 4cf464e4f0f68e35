//! ROMix: the sequential memory-hard mixing step (RFC 7914 §5).
//!
//! ROMix is what makes scrypt expensive in memory, not just CPU: it fills
//! an `N`-entry array with the iterated BlockMix chain of its input, then
//! walks the array `N` more times at pseudo-random indices derived from
//! the evolving state. An attacker who keeps fewer than `N` entries
//! resident must recompute them, which destroys the time/memory tradeoff.

use zeroize::Zeroizing;

use crate::block_mix::{block_mix, SUB_BLOCK_LEN};

/// Mix one `128 * r`-byte block in place with cost factor `n`.
///
/// Allocates the `n`-entry memory array and a one-block XOR scratch for
/// the duration of the call; both are zeroized and released before
/// returning. The block itself is overwritten with the mixed result.
///
/// # Panics
///
/// Panics if `block` is empty or not a multiple of 128 bytes, if `n` is
/// not a power of two greater than 1, or if `n * block.len()` overflows
/// `usize`. [`crate::engine::derive`] validates parameters and enforces
/// the memory ceiling before calling in.
pub fn ro_mix(block: &mut [u8], n: u32) {
    assert!(
        !block.is_empty() && block.len() % (2 * SUB_BLOCK_LEN) == 0,
        "ro_mix operates on a positive multiple of 128 bytes"
    );
    assert!(
        n > 1 && n.is_power_of_two(),
        "cost factor must be a power of two greater than 1"
    );

    let len = block.len();
    let entries = n as usize;
    let Some(array_len) = len.checked_mul(entries) else {
        panic!("memory array size overflows usize");
    };

    let mut array = Zeroizing::new(vec![0u8; array_len]);
    let mut scratch = Zeroizing::new(vec![0u8; len]);

    // V[0] = B; V[i] = BlockMix(V[i-1]); block ends as BlockMix(V[N-1]).
    for entry in array.chunks_exact_mut(len) {
        entry.copy_from_slice(block);
        block_mix(entry, block);
    }

    // N pseudo-randomly indexed passes. n is a power of two, so `& (n-1)`
    // is the `mod n` reduction.
    let mask = u64::from(n.saturating_sub(1));
    for _ in 0..n {
        let index = integerify(block, mask);
        let start = index.saturating_mul(len);
        let entry = &array[start..start.saturating_add(len)];
        for ((dst, state), v) in scratch.iter_mut().zip(block.iter()).zip(entry.iter()) {
            *dst = *state ^ *v;
        }
        block_mix(&scratch, block);
    }
}

/// Interpret the last 64-byte sub-block of `block` as a little-endian
/// integer, reduced by `mask`.
fn integerify(block: &[u8], mask: u64) -> usize {
    let tail = &block[block.len().saturating_sub(SUB_BLOCK_LEN)..];
    let mut word = [0u8; 8];
    word.copy_from_slice(&tail[..8]);
    // The masked value is below N, which fits usize.
    #[allow(clippy::cast_possible_truncation)]
    let index = (u64::from_le_bytes(word) & mask) as usize;
    index
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
