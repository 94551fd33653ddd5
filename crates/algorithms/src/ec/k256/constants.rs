//! Shared constants for secp256k1 operations

use pek_params::traditional::ecdh::{
    ECDH_K256_FIELD_ELEMENT_SIZE, ECDH_K256_PRIVATE_KEY_SIZE, ECDH_K256_PUBLIC_KEY_SIZE,
};

/// Size of a secp256k1 scalar in bytes (32 bytes = 256 bits)
pub const K256_SCALAR_SIZE: usize = ECDH_K256_PRIVATE_KEY_SIZE;

/// Size of a secp256k1 field element in bytes (32 bytes = 256 bits)
pub const K256_FIELD_ELEMENT_SIZE: usize = ECDH_K256_FIELD_ELEMENT_SIZE;

/// Size of a point serialized as its x-coordinate alone
pub const K256_POINT_X_ONLY_SIZE: usize = ECDH_K256_PUBLIC_KEY_SIZE;
