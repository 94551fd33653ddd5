//! Common implementations and shared functionality for the pek library
//!
//! Key material, shared secrets and chaining masks all pass through the
//! types in this crate so that they are wiped when they go out of scope.

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, SecureZeroingType};
