//! Scrypt block mixing: the Salsa20/8 core permutation and the BlockMix
//! interleave (RFC 7914 §3–§4).
//!
//! Both functions are pure and stateless; their correctness is independent
//! of every other component and is anchored to the RFC's published test
//! vectors.

use zeroize::Zeroize;

/// Byte size of one Salsa20/8 sub-block.
pub const SUB_BLOCK_LEN: usize = 64;

/// Minimum BlockMix granularity: two sub-blocks (`128 * r` with `r = 1`).
const MIX_GRANULARITY: usize = 2 * SUB_BLOCK_LEN;

/// The Salsa20/8 core permutation.
///
/// Interprets the input as sixteen little-endian u32 words in a 4×4
/// matrix, applies four double-rounds (a column pass then a row pass of
/// quarter-rounds, eight rounds total), and returns the elementwise
/// wrapping sum of the permuted and original words.
#[must_use]
pub fn salsa20_8_core(input: &[u8; SUB_BLOCK_LEN]) -> [u8; SUB_BLOCK_LEN] {
    let mut words = [0u32; 16];
    for (word, chunk) in words.iter_mut().zip(input.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let mut x = words;
    for _ in 0..4 {
        // Column quarter-rounds.
        quarter_round(0, 4, 8, 12, &mut x);
        quarter_round(5, 9, 13, 1, &mut x);
        quarter_round(10, 14, 2, 6, &mut x);
        quarter_round(15, 3, 7, 11, &mut x);
        // Row quarter-rounds.
        quarter_round(0, 1, 2, 3, &mut x);
        quarter_round(5, 6, 7, 4, &mut x);
        quarter_round(10, 11, 8, 9, &mut x);
        quarter_round(15, 12, 13, 14, &mut x);
    }

    let mut output = [0u8; SUB_BLOCK_LEN];
    for ((chunk, permuted), original) in output.chunks_exact_mut(4).zip(x.iter()).zip(words.iter())
    {
        chunk.copy_from_slice(&permuted.wrapping_add(*original).to_le_bytes());
    }

    words.zeroize();
    x.zeroize();
    output
}

/// One Salsa20 quarter-round over the words at `a`, `b`, `c`, `d`.
#[inline]
fn quarter_round(a: usize, b: usize, c: usize, d: usize, x: &mut [u32; 16]) {
    x[b] ^= x[a].wrapping_add(x[d]).rotate_left(7);
    x[c] ^= x[b].wrapping_add(x[a]).rotate_left(9);
    x[d] ^= x[c].wrapping_add(x[b]).rotate_left(13);
    x[a] ^= x[d].wrapping_add(x[c]).rotate_left(18);
}

/// The scrypt BlockMix operation over `2r` 64-byte sub-blocks.
///
/// A running 64-byte state is seeded from the last sub-block of `input`;
/// each sub-block is XORed into it and passed through [`salsa20_8_core`].
/// Even-indexed results fill the front half of `output` in order,
/// odd-indexed results the back half — the interleave that de-interleaves
/// the two logical streams so the memory-array read pattern downstream
/// stays sequential-friendly.
///
/// # Panics
///
/// Panics if `input` is empty, not a multiple of 128 bytes, or differs in
/// length from `output`.
pub fn block_mix(input: &[u8], output: &mut [u8]) {
    assert_eq!(
        input.len(),
        output.len(),
        "block mix input and output must have equal length"
    );
    assert!(
        !input.is_empty() && input.len() % MIX_GRANULARITY == 0,
        "block mix operates on a positive multiple of 128 bytes"
    );

    let mut x = [0u8; SUB_BLOCK_LEN];
    x.copy_from_slice(&input[input.len().saturating_sub(SUB_BLOCK_LEN)..]);
    let mut t = [0u8; SUB_BLOCK_LEN];

    let (front, back) = output.split_at_mut(input.len() / 2);
    let mut front_slots = front.chunks_exact_mut(SUB_BLOCK_LEN);
    let mut back_slots = back.chunks_exact_mut(SUB_BLOCK_LEN);

    let mut even = true;
    for sub_block in input.chunks_exact(SUB_BLOCK_LEN) {
        for ((dst, state), src) in t.iter_mut().zip(x.iter()).zip(sub_block.iter()) {
            *dst = *state ^ *src;
        }
        x = salsa20_8_core(&t);

        let slot = if even {
            front_slots.next()
        } else {
            back_slots.next()
        };
        if let Some(slot) = slot {
            slot.copy_from_slice(&x);
        }
        even = !even;
    }

    x.zeroize();
    t.zeroize();
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
