//! Constants for Elliptic Curve Diffie-Hellman over secp256k1

/// Size of a secp256k1 field element in bytes
pub const ECDH_K256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of a secp256k1 scalar (private key) in bytes
pub const ECDH_K256_PRIVATE_KEY_SIZE: usize = 32;

/// Size of a serialized public key: the big-endian x-coordinate only
pub const ECDH_K256_PUBLIC_KEY_SIZE: usize = 32;

/// Size of the derived shared secret (x-coordinate of the shared point)
pub const ECDH_K256_SHARED_SECRET_SIZE: usize = 32;

/// Curve coefficient a of y² = x³ + ax + b
pub const K256_CURVE_A: u64 = 0;

/// Curve coefficient b of y² = x³ + ax + b
pub const K256_CURVE_B: u64 = 7;
