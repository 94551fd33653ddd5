//! secp256k1 scalar values modulo the group order n

use crate::ec::k256::constants::K256_SCALAR_SIZE;
use crate::error::{validate, Result};
use pek_common::security::SecretBuffer;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// secp256k1 scalar value for use in elliptic curve operations
///
/// Always stored reduced modulo n. Zero is a legal value; multiplying any
/// point by it yields the point at infinity.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<K256_SCALAR_SIZE>);

impl Scalar {
    /// Create a new scalar from big-endian bytes, reducing modulo n.
    pub fn new(mut data: [u8; K256_SCALAR_SIZE]) -> Self {
        Self::reduce_scalar_bytes(&mut data);
        let scalar = Scalar(SecretBuffer::new(data));
        data.zeroize();
        scalar
    }

    /// Create a scalar from a slice that must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("K256 scalar", bytes.len(), K256_SCALAR_SIZE)?;
        let mut data = [0u8; K256_SCALAR_SIZE];
        data.copy_from_slice(bytes);
        Ok(Self::new(data))
    }

    /// Create a scalar from a `SecretBuffer`, reducing modulo n.
    pub fn from_secret_buffer(buffer: SecretBuffer<K256_SCALAR_SIZE>) -> Self {
        Self::new(*buffer.as_array())
    }

    /// Get a reference to the underlying `SecretBuffer`.
    pub fn as_secret_buffer(&self) -> &SecretBuffer<K256_SCALAR_SIZE> {
        &self.0
    }

    /// Serialize this scalar to big-endian bytes.
    pub fn serialize(&self) -> [u8; K256_SCALAR_SIZE] {
        *self.0.as_array()
    }

    /// Check if this scalar is zero.
    pub fn is_zero(&self) -> bool {
        self.0.as_ref().iter().all(|&b| b == 0)
    }

    /// Number of significant bits
    pub(crate) fn bit_len(&self) -> usize {
        let bytes = self.0.as_ref();
        for (i, &b) in bytes.iter().enumerate() {
            if b != 0 {
                return (K256_SCALAR_SIZE - i) * 8 - b.leading_zeros() as usize;
            }
        }
        0
    }

    /// Bit `index`, counting from the least significant bit
    pub(crate) fn bit(&self, index: usize) -> bool {
        let byte = self.0.as_ref()[K256_SCALAR_SIZE - 1 - index / 8];
        (byte >> (index % 8)) & 1 == 1
    }

    // n > 2^255, so any 256-bit input is below 2n and needs at most one
    // subtraction.
    fn reduce_scalar_bytes(bytes: &mut [u8; K256_SCALAR_SIZE]) {
        let mut is_ge = true;
        for i in 0..K256_SCALAR_SIZE {
            if bytes[i] > Self::ORDER[i] {
                break;
            }
            if bytes[i] < Self::ORDER[i] {
                is_ge = false;
                break;
            }
        }

        if is_ge {
            let mut borrow = 0i16;
            for i in (0..K256_SCALAR_SIZE).rev() {
                let diff = (bytes[i] as i16) - (Self::ORDER[i] as i16) - borrow;
                if diff < 0 {
                    bytes[i] = (diff + 256) as u8;
                    borrow = 1;
                } else {
                    bytes[i] = diff as u8;
                    borrow = 0;
                }
            }
        }
    }

    /// The group order n, big-endian
    pub(crate) const ORDER: [u8; 32] = [
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
        0x41, 0x41,
    ];
}
