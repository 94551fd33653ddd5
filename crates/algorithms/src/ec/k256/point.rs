//! secp256k1 elliptic curve point operations in affine coordinates

use crate::ec::k256::{
    constants::{K256_FIELD_ELEMENT_SIZE, K256_POINT_X_ONLY_SIZE},
    field::FieldElement,
    scalar::Scalar,
};
use crate::error::{validate, Error, Result};
use pek_params::traditional::ecdh::{K256_CURVE_A, K256_CURVE_B};
use subtle::Choice;

/// A point on the secp256k1 elliptic curve in affine coordinates
///
/// Every non-identity value satisfies y² = x³ + 7; the constructors check
/// this and the group operations only ever build points through them.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let self_is_identity: bool = self.is_identity.into();
        let other_is_identity: bool = other.is_identity.into();
        if self_is_identity || other_is_identity {
            return self_is_identity == other_is_identity;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Point {
    /// Create a new point from uncompressed coordinates.
    ///
    /// Returns an error if the coordinates don't satisfy the curve equation.
    pub fn new_uncompressed(
        x: &[u8; K256_FIELD_ELEMENT_SIZE],
        y: &[u8; K256_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x_fe = FieldElement::from_bytes(x)?;
        let y_fe = FieldElement::from_bytes(y)?;
        Self::from_affine(x_fe, y_fe)
    }

    /// Create a point from field coordinates, checking the curve equation.
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Result<Self> {
        validate::on_curve(Self::is_on_curve(&x, &y), "K256 point")?;
        Ok(Point {
            is_identity: Choice::from(0),
            x,
            y,
        })
    }

    /// Recover a point from its x-coordinate alone.
    ///
    /// The y-coordinate is the principal square root of x³ + 7. Which of the
    /// two roots that is does not matter to callers that only keep x after
    /// multiplying, since k·(−P) and k·P share an x-coordinate.
    pub fn decompress_x_only(x: &[u8; K256_POINT_X_ONLY_SIZE]) -> Result<Self> {
        let x_fe = FieldElement::from_bytes(x)?;
        let y_fe = Self::curve_rhs(&x_fe).sqrt();
        Self::from_affine(x_fe, y_fe)
            .map_err(|_| Error::curve("K256 x-only point", "x-coordinate is not on the curve"))
    }

    /// Create the identity point (point at infinity).
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Check if this point is valid (on the curve).
    pub fn is_valid(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        Self::is_on_curve(&self.x, &self.y)
    }

    /// Get the x-coordinate of this point as bytes.
    pub fn x_coordinate_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// Get the y-coordinate of this point as bytes.
    pub fn y_coordinate_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// Serialize as the big-endian x-coordinate.
    ///
    /// The point at infinity has no coordinates and cannot be serialized.
    pub fn serialize_x_only(&self) -> Result<[u8; K256_POINT_X_ONLY_SIZE]> {
        if self.is_identity() {
            return Err(Error::curve(
                "K256 x-only point",
                "the point at infinity has no x-coordinate",
            ));
        }
        Ok(self.x.to_bytes())
    }

    /// Point addition
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.is_identity() {
            return Ok(*other);
        }
        if other.is_identity() {
            return Ok(*self);
        }

        if self.x == other.x {
            // Either P + (−P), or a vertical tangent at y = 0.
            if self.y != other.y || self.y.is_zero() {
                return Ok(Self::identity());
            }
            return self.tangent();
        }

        let slope = other.y.sub(&self.y).div(&other.x.sub(&self.x))?;
        self.finish(&slope, &other.x)
    }

    /// Point doubling
    pub fn double(&self) -> Result<Self> {
        if self.is_identity() || self.y.is_zero() {
            return Ok(Self::identity());
        }
        self.tangent()
    }

    /// Reflect across the x-axis
    pub fn negate(&self) -> Self {
        if self.is_identity() {
            return *self;
        }
        Point {
            is_identity: Choice::from(0),
            x: self.x,
            y: self.y.negate(),
        }
    }

    /// Scalar multiplication, least significant bit first
    pub fn mul(&self, scalar: &Scalar) -> Result<Self> {
        let bits = scalar.bit_len();
        let mut result = Self::identity();
        let mut current = *self;
        for i in 0..bits {
            if scalar.bit(i) {
                result = result.add(&current)?;
            }
            if i + 1 < bits {
                current = current.double()?;
            }
        }
        Ok(result)
    }

    // Slope (3x² + a) / 2y.
    fn tangent(&self) -> Result<Self> {
        let numerator = self
            .x
            .square()
            .mul(&FieldElement::from_u64(3))
            .add(&FieldElement::from_u64(K256_CURVE_A));
        let slope = numerator.div(&self.y.double())?;
        self.finish(&slope, &self.x)
    }

    fn finish(&self, slope: &FieldElement, other_x: &FieldElement) -> Result<Self> {
        let x3 = slope.square().sub(&self.x).sub(other_x);
        let y3 = slope.mul(&self.x.sub(&x3)).sub(&self.y);
        Self::from_affine(x3, y3)
    }

    /// x³ + 7
    fn curve_rhs(x: &FieldElement) -> FieldElement {
        x.square().mul(x).add(&FieldElement::from_u64(K256_CURVE_B))
    }

    fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
        y.square() == Self::curve_rhs(x)
    }
}
