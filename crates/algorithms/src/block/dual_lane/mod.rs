//! Dual-lane chunk transform
//!
//! A 32-byte chunk is treated as two 16-byte blocks, each pushed through the
//! same keyed cipher on its own. There is no chaining between the lanes;
//! chaining across chunks is the caller's job.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{Aes256, BlockCipher};
use crate::error::{validate, Result};
use pek_common::security::SecretBuffer;
use pek_params::utils::symmetric::{AES256_KEY_SIZE, DUAL_LANE_CHUNK_SIZE};

/// Two side-by-side blocks of a cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DualLane<B: BlockCipher + Zeroize> {
    cipher: B,
}

/// The dual-lane transform over AES-256
pub type DualLaneAes256 = DualLane<Aes256>;

impl<B: BlockCipher + Zeroize> DualLane<B> {
    /// Wrap an already keyed cipher
    pub fn with_cipher(cipher: B) -> Self {
        Self { cipher }
    }

    /// Size of one chunk: two cipher blocks
    pub fn chunk_size() -> usize {
        2 * B::block_size()
    }

    /// Encrypt both lanes of a chunk in place
    pub fn encrypt_chunk(&self, chunk: &mut [u8]) -> Result<()> {
        validate::length("dual-lane chunk", chunk.len(), Self::chunk_size())?;
        let (left, right) = chunk.split_at_mut(B::block_size());
        self.cipher.encrypt_block(left)?;
        self.cipher.encrypt_block(right)
    }

    /// Decrypt both lanes of a chunk in place
    pub fn decrypt_chunk(&self, chunk: &mut [u8]) -> Result<()> {
        validate::length("dual-lane chunk", chunk.len(), Self::chunk_size())?;
        let (left, right) = chunk.split_at_mut(B::block_size());
        self.cipher.decrypt_block(left)?;
        self.cipher.decrypt_block(right)
    }
}

impl DualLane<Aes256> {
    /// Key a fresh AES-256 schedule for both lanes
    pub fn new(key: &SecretBuffer<AES256_KEY_SIZE>) -> Self {
        Self::with_cipher(Aes256::new(key))
    }

    /// Encrypt a fixed-size chunk
    pub fn encrypt(&self, chunk: &mut [u8; DUAL_LANE_CHUNK_SIZE]) -> Result<()> {
        self.encrypt_chunk(chunk)
    }

    /// Decrypt a fixed-size chunk
    pub fn decrypt(&self, chunk: &mut [u8; DUAL_LANE_CHUNK_SIZE]) -> Result<()> {
        self.decrypt_chunk(chunk)
    }
}
