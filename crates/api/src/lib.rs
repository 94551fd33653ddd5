//! Public API traits and types for the pek library
//!
//! This crate provides the public API surface shared by the pek crates:
//! the error taxonomy every operation reports through, and the traits the
//! key-agreement and stream-encryption schemes implement.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{Kem, Serialize, SerializeSecret, StreamPke};

// Re-export trait modules for direct access
pub use traits::{kem, pke, serialize};
