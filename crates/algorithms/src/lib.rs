//! Primitives behind the pek file format
//!
//! This crate holds everything that works on bytes rather than files:
//!
//! - [`ec::k256`]: secp256k1 field, scalar and affine point arithmetic
//! - [`block::aes`]: AES-256 with a 240-byte expanded key schedule
//! - [`block::dual_lane`]: two independent block operations over a 32-byte chunk
//! - [`encoding::base64`]: a streaming base64 reader and writer that tolerate
//!   whitespace and keep going past bad symbols
//!
//! Errors are reported through [`Error`] and convert into [`pek_api::Error`]
//! at crate boundaries.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{Aes256, BlockCipher, DualLane, DualLaneAes256};

// Elliptic curve primitives
pub mod ec;
pub use ec::{K256Point, K256Scalar};

// Text encodings
pub mod encoding;
pub use encoding::base64::{Base64Reader, Base64Writer};
