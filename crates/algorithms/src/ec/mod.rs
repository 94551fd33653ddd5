//! Elliptic curve primitives
//!
//! Only secp256k1 is provided. Arithmetic is affine with explicit
//! inversions, which keeps every intermediate point checkable against the
//! curve equation.

pub mod k256;

pub use k256::{Point as K256Point, Scalar as K256Scalar};
