//! Elliptic-curve Diffie-Hellman over secp256k1

pub mod k256;

pub use k256::{
    create_key_pair, decompress_point, derive_shared_secret, is_valid_point, EcdhK256,
    EcdhK256Ciphertext, EcdhK256PublicKey, EcdhK256SecretKey, EcdhK256SharedSecret,
};
