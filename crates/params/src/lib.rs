//! Constant values for pek cryptographic operations
//!
//! Curve, cipher and text-encoding parameters are fixed; nothing here is
//! negotiated at runtime.

#![no_std]

pub mod traditional;
pub mod utils;
