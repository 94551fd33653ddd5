//! Constants for the elliptic-curve half of the scheme

pub mod ecdh;
