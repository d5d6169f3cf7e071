//! Deterministic byte permutation.
//!
//! A seeded MT19937 generator drives a Fisher–Yates shuffle of the index
//! range `[0, len)`; `permute` gathers bytes along the shuffled order and
//! `unpermute` scatters them back.  The same seed and length always
//! produce the same reordering, so the two functions are exact inverses.
//!
//! The vault format applies this twice with a fixed, public seed.  It is
//! structural obfuscation only: a pure reordering leaks lengths and byte
//! frequencies and provides **no cryptographic secrecy**.  The security
//! boundary of a vault is the authenticated cipher and the
//! password-derived key, never this layer.

pub mod twister;

pub use twister::MersenneTwister;

/// Fisher–Yates shuffle of `[0, len)` driven by the seeded generator.
///
/// `j = next_u32() % (i + 1)` for `i` from `len - 1` down to `1` — the
/// exact recurrence the format was written with.
fn shuffled_indices(len: usize, seed: u32) -> Vec<usize> {
    let mut mt = MersenneTwister::new(seed);
    let mut indices: Vec<usize> = (0..len).collect();
    for i in (1..len).rev() {
        let j = (mt.next_u32() as usize) % (i + 1);
        indices.swap(i, j);
    }
    indices
}

/// Reorder `data` by the shuffle for `seed`: `out[k] = data[idx[k]]`.
///
/// Length-preserving; inverted exactly by [`unpermute`] with the same
/// seed.
pub fn permute(data: &[u8], seed: u32) -> Vec<u8> {
    let indices = shuffled_indices(data.len(), seed);
    indices.iter().map(|&i| data[i]).collect()
}

/// Exact inverse of [`permute`]: `out[idx[k]] = data[k]`.
pub fn unpermute(data: &[u8], seed: u32) -> Vec<u8> {
    let indices = shuffled_indices(data.len(), seed);
    let mut out = vec![0u8; data.len()];
    for (k, &idx) in indices.iter().enumerate() {
        out[idx] = data[k];
    }
    out
}

// ── Tests ────────────────────────────────────────────────────────────
