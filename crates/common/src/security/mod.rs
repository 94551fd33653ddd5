//! Security primitives for handling sensitive material

pub mod secret;

// Re-export core security types
pub use secret::{SecretBuffer, SecureZeroingType};
