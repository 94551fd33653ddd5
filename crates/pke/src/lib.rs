//! The pek public-key file encryption scheme
//!
//! A ciphertext is base64 text. Its first 32 decoded bytes are an ephemeral
//! secp256k1 x-coordinate; the rest is a run of 32-byte chunks, each the
//! dual-lane AES-256 encryption of a plaintext chunk XORed with the previous
//! ciphertext chunk (the shared secret stands in for the first one). The
//! last chunk always carries padding.

pub mod config;
pub mod error;
pub mod keys;
pub mod pek;

// Re-export key items
pub use config::PekConfig;
pub use error::{Error, Result};
pub use keys::{
    decode_key, decode_public_key, decode_secret_key, encode_key, encode_public_key,
    encode_secret_key,
};
pub use pek::{decrypt_stream, encrypt_stream, Pek};
