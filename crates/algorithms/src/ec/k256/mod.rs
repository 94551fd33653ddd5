//! Koblitz secp256k1 elliptic curve primitives
//!
//! The curve equation is y² = x³ + 7 over the prime field F_p where:
//! - p = 2^256 - 2^32 - 977
//! - the group order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//!
//! Points are kept in affine coordinates and every group operation goes
//! through a field inversion. Keys travel as bare x-coordinates.

mod constants;
mod field;
mod point;
mod scalar;

pub use constants::{K256_FIELD_ELEMENT_SIZE, K256_POINT_X_ONLY_SIZE, K256_SCALAR_SIZE};
pub use field::FieldElement;
pub use point::Point;
pub use scalar::Scalar;

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use subtle::Choice;
use zeroize::Zeroize;

/// Base point x-coordinate, little-endian limbs
const G_X: FieldElement = FieldElement([
    0x59F2_815B_16F8_1798,
    0x029B_FCDB_2DCE_28D9,
    0x55A0_6295_CE87_0B07,
    0x79BE_667E_F9DC_BBAC,
]);

/// Base point y-coordinate, little-endian limbs
const G_Y: FieldElement = FieldElement([
    0x9C47_D08F_FB10_D4B8,
    0xFD17_B448_A685_5419,
    0x5DA4_FBFC_0E11_08A8,
    0x483A_DA77_26A3_C465,
]);

/// Get the standard base point G of the secp256k1 curve
pub fn base_point_g() -> Point {
    Point {
        is_identity: Choice::from(0),
        x: G_X,
        y: G_Y,
    }
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Result<Point> {
    base_point_g().mul(scalar)
}

/// General scalar multiplication: compute scalar * point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Result<Point> {
    if point.is_identity() {
        return Ok(Point::identity());
    }
    point.mul(scalar)
}

/// Generate a keypair from 32 random bytes.
///
/// Draws again in the vanishingly unlikely case that the bytes reduce to
/// zero, so the public point is never the identity.
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let mut scalar_bytes = [0u8; K256_SCALAR_SIZE];
    loop {
        rng.fill_bytes(&mut scalar_bytes);
        let private_key = Scalar::new(scalar_bytes);
        if private_key.is_zero() {
            continue;
        }
        scalar_bytes.zeroize();
        let public_key = scalar_mult_base_g(&private_key)?;
        return Ok((private_key, public_key));
    }
}
