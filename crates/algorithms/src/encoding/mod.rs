//! Text encodings

pub mod base64;

pub use base64::{Base64Reader, Base64Writer};
