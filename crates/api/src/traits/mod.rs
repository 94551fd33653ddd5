//! Traits implemented by the pek schemes

pub mod kem;
pub mod pke;
pub mod serialize;

pub use kem::Kem;
pub use pke::StreamPke;
pub use serialize::{Serialize, SerializeSecret};
