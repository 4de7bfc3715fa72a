//! ChaCha20 block function (RFC 8439)
//!
//! Only the keystream block is needed here: the `Csprng` expands a secret
//! key into random bytes by running this function over an incrementing
//! counter. No encryption or authentication is provided.

/// `"expand 32-byte k"` as little-endian words.
const CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(7);
}

/// 20 rounds: ten iterations of four column and four diagonal quarter rounds.
fn rounds(state: &mut [u32; 16]) {
    for _ in 0..10 {
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

#[inline(always)]
fn load_le(word: &[u8]) -> u32 {
    u32::from_le_bytes([word[0], word[1], word[2], word[3]])
}

/// Produces one 64-byte keystream block for `(key, counter, nonce)`.
///
/// Reusing the same tuple yields the same block; the caller owns counter
/// and key management.
pub(crate) fn block(key: &[u8; 32], counter: u32, nonce: &[u8; 12]) -> [u8; 64] {
    let mut state = [0u32; 16];

    state[0..4].copy_from_slice(&CONSTANTS);
    for (s, k) in state[4..12].iter_mut().zip(key.chunks_exact(4)) {
        *s = load_le(k);
    }
    state[12] = counter;
    for (s, n) in state[13..16].iter_mut().zip(nonce.chunks_exact(4)) {
        *s = load_le(n);
    }

    let original = state;
    rounds(&mut state);

    // Feed-forward
    for (s, o) in state.iter_mut().zip(&original) {
        *s = s.wrapping_add(*o);
    }

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(4).zip(&state) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }

    out
}
