//! Constant values shared by the symmetric and encoding layers

pub mod encoding;
pub mod symmetric;
