//! Constants for symmetric encryption algorithms

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of AES-256 rounds
pub const AES256_ROUNDS: usize = 14;

/// AES-256 expanded key size in bytes (15 round keys × 16 bytes)
pub const AES256_EXPANDED_KEY_SIZE: usize = (AES256_ROUNDS + 1) * AES_BLOCK_SIZE;

/// Size of one dual-lane unit: two AES blocks side by side
pub const DUAL_LANE_CHUNK_SIZE: usize = 2 * AES_BLOCK_SIZE;

/// Marker byte that starts the padding of the final chunk
pub const PADDING_MARKER: u8 = 0xFF;
