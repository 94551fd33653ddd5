//! AES-256 block cipher as specified in FIPS 197
//!
//! The 16-byte state is read column-major: byte `c * 4 + r` sits in row
//! `r` of column `c`. Substitution uses the standard S-box tables.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use pek_common::security::SecretBuffer;
use pek_params::utils::symmetric::{
    AES256_EXPANDED_KEY_SIZE, AES256_KEY_SIZE, AES256_ROUNDS, AES_BLOCK_SIZE,
};

/// Words in the expanded key (4 per round key)
const SCHEDULE_WORDS: usize = AES256_EXPANDED_KEY_SIZE / 4;

/// Words in the cipher key
const KEY_WORDS: usize = AES256_KEY_SIZE / 4;

/// Round constants for AES key expansion
const RCON: [u32; 8] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000,
    0x40000000,
];

/// Forward S-box
const SBOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

/// Inverse S-box
const INV_SBOX: [u8; 256] = [
    0x52, 0x09, 0x6a, 0xd5, 0x30, 0x36, 0xa5, 0x38, 0xbf, 0x40, 0xa3, 0x9e, 0x81, 0xf3, 0xd7, 0xfb,
    0x7c, 0xe3, 0x39, 0x82, 0x9b, 0x2f, 0xff, 0x87, 0x34, 0x8e, 0x43, 0x44, 0xc4, 0xde, 0xe9, 0xcb,
    0x54, 0x7b, 0x94, 0x32, 0xa6, 0xc2, 0x23, 0x3d, 0xee, 0x4c, 0x95, 0x0b, 0x42, 0xfa, 0xc3, 0x4e,
    0x08, 0x2e, 0xa1, 0x66, 0x28, 0xd9, 0x24, 0xb2, 0x76, 0x5b, 0xa2, 0x49, 0x6d, 0x8b, 0xd1, 0x25,
    0x72, 0xf8, 0xf6, 0x64, 0x86, 0x68, 0x98, 0x16, 0xd4, 0xa4, 0x5c, 0xcc, 0x5d, 0x65, 0xb6, 0x92,
    0x6c, 0x70, 0x48, 0x50, 0xfd, 0xed, 0xb9, 0xda, 0x5e, 0x15, 0x46, 0x57, 0xa7, 0x8d, 0x9d, 0x84,
    0x90, 0xd8, 0xab, 0x00, 0x8c, 0xbc, 0xd3, 0x0a, 0xf7, 0xe4, 0x58, 0x05, 0xb8, 0xb3, 0x45, 0x06,
    0xd0, 0x2c, 0x1e, 0x8f, 0xca, 0x3f, 0x0f, 0x02, 0xc1, 0xaf, 0xbd, 0x03, 0x01, 0x13, 0x8a, 0x6b,
    0x3a, 0x91, 0x11, 0x41, 0x4f, 0x67, 0xdc, 0xea, 0x97, 0xf2, 0xcf, 0xce, 0xf0, 0xb4, 0xe6, 0x73,
    0x96, 0xac, 0x74, 0x22, 0xe7, 0xad, 0x35, 0x85, 0xe2, 0xf9, 0x37, 0xe8, 0x1c, 0x75, 0xdf, 0x6e,
    0x47, 0xf1, 0x1a, 0x71, 0x1d, 0x29, 0xc5, 0x89, 0x6f, 0xb7, 0x62, 0x0e, 0xaa, 0x18, 0xbe, 0x1b,
    0xfc, 0x56, 0x3e, 0x4b, 0xc6, 0xd2, 0x79, 0x20, 0x9a, 0xdb, 0xc0, 0xfe, 0x78, 0xcd, 0x5a, 0xf4,
    0x1f, 0xdd, 0xa8, 0x33, 0x88, 0x07, 0xc7, 0x31, 0xb1, 0x12, 0x10, 0x59, 0x27, 0x80, 0xec, 0x5f,
    0x60, 0x51, 0x7f, 0xa9, 0x19, 0xb5, 0x4a, 0x0d, 0x2d, 0xe5, 0x7a, 0x9f, 0x93, 0xc9, 0x9c, 0xef,
    0xa0, 0xe0, 0x3b, 0x4d, 0xae, 0x2a, 0xf5, 0xb0, 0xc8, 0xeb, 0xbb, 0x3c, 0x83, 0x53, 0x99, 0x61,
    0x17, 0x2b, 0x04, 0x7e, 0xba, 0x77, 0xd6, 0x26, 0xe1, 0x69, 0x14, 0x63, 0x55, 0x21, 0x0c, 0x7d,
];

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
pub(crate) fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a & 0x80;
        a <<= 1;
        a ^= ((hi != 0) as u8) * 0x1B;
        b >>= 1;
    }
    p
}

/// Substitutes each byte in a word using the S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let b = word.to_be_bytes();
    u32::from_be_bytes([
        SBOX[b[0] as usize],
        SBOX[b[1] as usize],
        SBOX[b[2] as usize],
        SBOX[b[3] as usize],
    ])
}

/// Type-level constants for AES-256
pub enum Aes256Algorithm {}

impl CipherAlgorithm for Aes256Algorithm {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

/// AES-256 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: SecretBuffer<AES256_EXPANDED_KEY_SIZE>,
}

impl Aes256 {
    /// Expand a key and build the cipher
    pub fn new(key: &SecretBuffer<AES256_KEY_SIZE>) -> Self {
        Aes256 {
            round_keys: Self::expand_key(key.as_array()),
        }
    }

    /// Build the cipher from a key slice, which must be 32 bytes
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        validate::length("AES-256 key", key.len(), AES256_KEY_SIZE)?;
        let mut bytes = [0u8; AES256_KEY_SIZE];
        bytes.copy_from_slice(key);
        let cipher = Aes256 {
            round_keys: Self::expand_key(&bytes),
        };
        bytes.zeroize();
        Ok(cipher)
    }

    /// The 240-byte expanded key: 15 round keys of 16 bytes
    pub fn round_keys(&self) -> &[u8; AES256_EXPANDED_KEY_SIZE] {
        self.round_keys.as_array()
    }

    /// AES-256 key expansion
    pub fn expand_key(key: &[u8; AES256_KEY_SIZE]) -> SecretBuffer<AES256_EXPANDED_KEY_SIZE> {
        let mut words = [0u32; SCHEDULE_WORDS];
        for (i, chunk) in key.chunks_exact(4).enumerate() {
            words[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for i in KEY_WORDS..SCHEDULE_WORDS {
            let mut temp = words[i - 1];
            if i % KEY_WORDS == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ RCON[i / KEY_WORDS];
            } else if i % KEY_WORDS == 4 {
                temp = sub_word(temp);
            }
            words[i] = words[i - KEY_WORDS] ^ temp;
        }

        let mut bytes = [0u8; AES256_EXPANDED_KEY_SIZE];
        for (i, word) in words.iter().enumerate() {
            bytes[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
        }
        let schedule = SecretBuffer::new(bytes);
        words.zeroize();
        bytes.zeroize();
        schedule
    }

    /// Encrypt one block held in a fixed-size array
    pub fn encrypt_block_array(&self, state: &mut [u8; AES_BLOCK_SIZE]) {
        let keys = self.round_keys.as_array();
        add_round_key(state, round_key(keys, 0));
        for round in 1..AES256_ROUNDS {
            sub_bytes(state);
            shift_rows(state);
            mix_columns(state);
            add_round_key(state, round_key(keys, round));
        }
        sub_bytes(state);
        shift_rows(state);
        add_round_key(state, round_key(keys, AES256_ROUNDS));
    }

    /// Decrypt one block held in a fixed-size array
    pub fn decrypt_block_array(&self, state: &mut [u8; AES_BLOCK_SIZE]) {
        let keys = self.round_keys.as_array();
        add_round_key(state, round_key(keys, AES256_ROUNDS));
        for round in (1..AES256_ROUNDS).rev() {
            inv_shift_rows(state);
            inv_sub_bytes(state);
            add_round_key(state, round_key(keys, round));
            inv_mix_columns(state);
        }
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, round_key(keys, 0));
    }
}

impl BlockCipher for Aes256 {
    type Algorithm = Aes256Algorithm;

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        let mut state = [0u8; AES_BLOCK_SIZE];
        state.copy_from_slice(block);
        self.encrypt_block_array(&mut state);
        block.copy_from_slice(&state);
        state.zeroize();
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        let mut state = [0u8; AES_BLOCK_SIZE];
        state.copy_from_slice(block);
        self.decrypt_block_array(&mut state);
        block.copy_from_slice(&state);
        state.zeroize();
        Ok(())
    }
}

#[inline(always)]
fn round_key(keys: &[u8; AES256_EXPANDED_KEY_SIZE], round: usize) -> &[u8] {
    &keys[round * AES_BLOCK_SIZE..(round + 1) * AES_BLOCK_SIZE]
}

fn add_round_key(state: &mut [u8; AES_BLOCK_SIZE], key: &[u8]) {
    for (s, k) in state.iter_mut().zip(key) {
        *s ^= k;
    }
}

fn sub_bytes(state: &mut [u8; AES_BLOCK_SIZE]) {
    for byte in state.iter_mut() {
        *byte = SBOX[*byte as usize];
    }
}

fn inv_sub_bytes(state: &mut [u8; AES_BLOCK_SIZE]) {
    for byte in state.iter_mut() {
        *byte = INV_SBOX[*byte as usize];
    }
}

/// Row r rotates left by r positions
fn shift_rows(state: &mut [u8; AES_BLOCK_SIZE]) {
    let temp = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[c * 4 + r] = temp[((c + r) % 4) * 4 + r];
        }
    }
}

fn inv_shift_rows(state: &mut [u8; AES_BLOCK_SIZE]) {
    let temp = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[((c + r) % 4) * 4 + r] = temp[c * 4 + r];
        }
    }
}

fn mix_columns(state: &mut [u8; AES_BLOCK_SIZE]) {
    for column in state.chunks_exact_mut(4) {
        let [s0, s1, s2, s3] = [column[0], column[1], column[2], column[3]];
        column[0] = gf_mul(s0, 2) ^ gf_mul(s1, 3) ^ s2 ^ s3;
        column[1] = s0 ^ gf_mul(s1, 2) ^ gf_mul(s2, 3) ^ s3;
        column[2] = s0 ^ s1 ^ gf_mul(s2, 2) ^ gf_mul(s3, 3);
        column[3] = gf_mul(s0, 3) ^ s1 ^ s2 ^ gf_mul(s3, 2);
    }
}

fn inv_mix_columns(state: &mut [u8; AES_BLOCK_SIZE]) {
    for column in state.chunks_exact_mut(4) {
        let [s0, s1, s2, s3] = [column[0], column[1], column[2], column[3]];
        column[0] = gf_mul(s0, 14) ^ gf_mul(s1, 11) ^ gf_mul(s2, 13) ^ gf_mul(s3, 9);
        column[1] = gf_mul(s0, 9) ^ gf_mul(s1, 14) ^ gf_mul(s2, 11) ^ gf_mul(s3, 13);
        column[2] = gf_mul(s0, 13) ^ gf_mul(s1, 9) ^ gf_mul(s2, 14) ^ gf_mul(s3, 11);
        column[3] = gf_mul(s0, 11) ^ gf_mul(s1, 13) ^ gf_mul(s2, 9) ^ gf_mul(s3, 14);
    }
}
