//! Final-chunk padding
//!
//! The last chunk of every message holds the tail of the plaintext, one
//! 0xFF marker, then zeros up to the chunk size. A message whose length is
//! a multiple of the chunk size ends with a chunk of padding alone.

use pek_params::utils::symmetric::{DUAL_LANE_CHUNK_SIZE, PADDING_MARKER};

/// Pad the first `len` bytes of `chunk` out to a full chunk.
///
/// `len` must be below the chunk size; the marker needs a byte.
pub(crate) fn pad(chunk: &mut [u8; DUAL_LANE_CHUNK_SIZE], len: usize) {
    debug_assert!(len < DUAL_LANE_CHUNK_SIZE);
    chunk[len] = PADDING_MARKER;
    chunk[len + 1..].fill(0);
}

/// Length of the plaintext left in a padded chunk.
///
/// Strips trailing zeros, then one marker byte. The marker is not checked:
/// a chunk damaged in transit still yields its bytes rather than an error,
/// and the codec reports the damage afterwards.
pub(crate) fn unpadded_len(chunk: &[u8; DUAL_LANE_CHUNK_SIZE]) -> usize {
    let len = chunk
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |last| last + 1);
    len.saturating_sub(1)
}
