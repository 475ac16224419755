use crate::consts::{C, RC};

pub(crate) const BLOCK_SIZE: usize = 64;

/// Byte `t` (0 = most significant) of a state row.
#[inline(always)]
fn byte(row: u64, t: usize) -> usize {
    (row >> (56 - 8 * t)) as u8 as usize
}

/// One round of the W cipher without the key addition: substitution, cyclic
/// column shift and row diffusion, evaluated through the fused tables.
#[inline(always)]
fn rho(a: &[u64; 8]) -> [u64; 8] {
    let mut out = [0u64; 8];
    for (i, row) in out.iter_mut().enumerate() {
        *row = C[0][byte(a[i], 0)]
            ^ C[1][byte(a[(i + 7) % 8], 1)]
            ^ C[2][byte(a[(i + 6) % 8], 2)]
            ^ C[3][byte(a[(i + 5) % 8], 3)]
            ^ C[4][byte(a[(i + 4) % 8], 4)]
            ^ C[5][byte(a[(i + 3) % 8], 5)]
            ^ C[6][byte(a[(i + 2) % 8], 6)]
            ^ C[7][byte(a[(i + 1) % 8], 7)];
    }
    out
}

#[inline(always)]
fn load(block: &[u8]) -> [u64; 8] {
    let mut m = [0u64; 8];
    for (w, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        *w = chunk.iter().fold(0, |acc, &b| (acc << 8) | u64::from(b));
    }
    m
}

/// Processes one 64-byte block: W cipher keyed by the chaining value,
/// followed by the Miyaguchi–Preneel feed-forward.
pub(crate) fn compress_block(state: &mut [u64; 8], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_SIZE);
    let m = load(block);

    let mut key = *state;
    let mut s = m;
    for (s, k) in s.iter_mut().zip(key.iter()) {
        *s ^= k;
    }

    for rc in &RC[1..] {
        key = rho(&key);
        key[0] ^= rc;
        s = rho(&s);
        for (s, k) in s.iter_mut().zip(key.iter()) {
            *s ^= k;
        }
    }

    for ((h, s), m) in state.iter_mut().zip(s.iter()).zip(m.iter()) {
        *h ^= s ^ m;
    }
}

/// Whirlpool compression function.
///
/// Updates the chaining value `state` (eight big-endian rows of the 8x8
/// state matrix) with each block in turn.
#[cfg_attr(not(feature = "compress"), allow(dead_code))]
pub fn compress(state: &mut [u64; 8], blocks: &[[u8; BLOCK_SIZE]]) {
    for block in blocks {
        compress_block(state, block);
    }
}
