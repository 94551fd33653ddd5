//! Key agreement for pek
//!
//! Elliptic-curve Diffie-Hellman over secp256k1 where every public value,
//! long-term or ephemeral, travels as a bare 32-byte x-coordinate.

pub mod ecdh;
pub mod error;

// Re-exports
pub use ecdh::{
    create_key_pair, decompress_point, derive_shared_secret, is_valid_point, EcdhK256,
    EcdhK256Ciphertext, EcdhK256PublicKey, EcdhK256SecretKey, EcdhK256SharedSecret,
};
pub use error::{Error, Result};
