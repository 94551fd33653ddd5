//! Block cipher implementations
//!
//! [`Aes256`] is the only cipher. [`DualLane`] runs any 16-byte block
//! cipher over 32-byte chunks as two independent blocks.

use crate::error::Result;

pub mod aes;
pub mod dual_lane;

pub use aes::Aes256;
pub use dual_lane::{DualLane, DualLaneAes256};

/// Type-level constants describing a block cipher
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;
    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable algorithm name
    fn name() -> &'static str;
}

/// A keyed block cipher operating in place
pub trait BlockCipher {
    /// Constants for this cipher
    type Algorithm: CipherAlgorithm;

    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Algorithm name
    fn name() -> &'static str {
        Self::Algorithm::name()
    }
}
