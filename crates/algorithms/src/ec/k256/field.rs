//! secp256k1 field arithmetic over F_p, p = 2^256 - 2^32 - 977
//!
//! Elements are four little-endian 64-bit limbs and are always kept fully
//! reduced. Because 2^256 ≡ 2^32 + 977 (mod p), a 512-bit product is folded
//! back into 256 bits by multiplying its high half by that small constant.

use crate::ec::k256::constants::K256_FIELD_ELEMENT_SIZE;
use crate::error::{Error, Result};
use subtle::{Choice, ConditionallySelectable};

const NLIMBS: usize = 4;

/// 2^256 mod p
const FOLD: u64 = 0x1_0000_03D1;

/// An element of the secp256k1 base field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement(pub(crate) [u64; NLIMBS]);

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u64; NLIMBS];
        for (i, limb) in out.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement(out)
    }
}

impl FieldElement {
    /// The field modulus p
    pub(crate) const MOD_LIMBS: [u64; NLIMBS] = [
        0xFFFF_FFFE_FFFF_FC2F,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
    ];

    /// p - 2, the Fermat inversion exponent
    const P_MINUS_TWO: [u64; NLIMBS] = [
        0xFFFF_FFFE_FFFF_FC2D,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
    ];

    /// (p + 1) / 4, the square-root exponent (p ≡ 3 mod 4)
    const P_PLUS_ONE_DIV_FOUR: [u64; NLIMBS] = [
        0xFFFF_FFFF_BFFF_FF0C,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        0x3FFF_FFFF_FFFF_FFFF,
    ];

    /// The additive identity
    pub fn zero() -> Self {
        FieldElement([0; NLIMBS])
    }

    /// The multiplicative identity
    pub fn one() -> Self {
        FieldElement([1, 0, 0, 0])
    }

    /// Embed a small integer
    pub fn from_u64(value: u64) -> Self {
        FieldElement([value, 0, 0, 0])
    }

    /// Parse a big-endian 32-byte value.
    ///
    /// Values greater than or equal to p are rejected rather than reduced.
    pub fn from_bytes(bytes: &[u8; K256_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let mut limbs = [0u64; NLIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let start = K256_FIELD_ELEMENT_SIZE - (i + 1) * 8;
            let mut word = [0u8; 8];
            word.copy_from_slice(&bytes[start..start + 8]);
            *limb = u64::from_be_bytes(word);
        }

        let (_, borrow) = sbb4(&limbs, &Self::MOD_LIMBS);
        if borrow == 0 {
            return Err(Error::param(
                "K256 field element",
                "value is not below the field modulus",
            ));
        }
        Ok(FieldElement(limbs))
    }

    /// Serialize as 32 big-endian bytes
    pub fn to_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        let mut out = [0u8; K256_FIELD_ELEMENT_SIZE];
        for (i, limb) in self.0.iter().enumerate() {
            let start = K256_FIELD_ELEMENT_SIZE - (i + 1) * 8;
            out[start..start + 8].copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// True for the zero element
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// True when the canonical representative is odd
    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    /// Field addition
    pub fn add(&self, other: &Self) -> Self {
        let (sum, carry) = adc4(&self.0, &other.0);
        let (reduced, borrow) = sbb4(&sum, &Self::MOD_LIMBS);
        // Subtract p when the sum overflowed 2^256 or landed in [p, 2^256).
        let use_reduced = Choice::from((carry | (borrow ^ 1)) as u8);
        Self::conditional_select(&FieldElement(sum), &FieldElement(reduced), use_reduced)
    }

    /// Field subtraction
    pub fn sub(&self, other: &Self) -> Self {
        let (diff, borrow) = sbb4(&self.0, &other.0);
        let (corrected, _) = adc4(&diff, &Self::MOD_LIMBS);
        Self::conditional_select(
            &FieldElement(diff),
            &FieldElement(corrected),
            Choice::from(borrow as u8),
        )
    }

    /// Field multiplication
    pub fn mul(&self, other: &Self) -> Self {
        let mut wide = [0u64; 2 * NLIMBS];
        for i in 0..NLIMBS {
            let mut carry: u128 = 0;
            for j in 0..NLIMBS {
                let cur = wide[i + j] as u128 + (self.0[i] as u128) * (other.0[j] as u128) + carry;
                wide[i + j] = cur as u64;
                carry = cur >> 64;
            }
            wide[i + NLIMBS] = carry as u64;
        }
        Self::reduce_wide(&wide)
    }

    /// Field squaring
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// 2·self
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Additive inverse
    pub fn negate(&self) -> Self {
        Self::zero().sub(self)
    }

    /// Raise to a 256-bit exponent given as big-endian bytes
    pub fn pow(&self, exponent: &[u8; K256_FIELD_ELEMENT_SIZE]) -> Self {
        let mut limbs = [0u64; NLIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let start = K256_FIELD_ELEMENT_SIZE - (i + 1) * 8;
            let mut word = [0u8; 8];
            word.copy_from_slice(&exponent[start..start + 8]);
            *limb = u64::from_be_bytes(word);
        }
        self.pow_limbs(&limbs)
    }

    fn pow_limbs(&self, exponent: &[u64; NLIMBS]) -> Self {
        let mut result = Self::one();
        for limb in exponent.iter().rev() {
            for bit in (0..64).rev() {
                result = result.square();
                if (limb >> bit) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }

    /// Multiplicative inverse, a^(p-2)
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero {
                context: "K256 field inversion",
            });
        }
        Ok(self.pow_limbs(&Self::P_MINUS_TWO))
    }

    /// self / other
    pub fn div(&self, other: &Self) -> Result<Self> {
        Ok(self.mul(&other.invert()?))
    }

    /// Principal square root, a^((p+1)/4).
    ///
    /// The result is only a true root when `self` is a quadratic residue;
    /// callers that care must square it and compare.
    pub fn sqrt(&self) -> Self {
        self.pow_limbs(&Self::P_PLUS_ONE_DIV_FOUR)
    }

    /// Square root that checks its own answer
    pub fn checked_sqrt(&self) -> Option<Self> {
        let root = self.sqrt();
        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }

    /// Reduce a 512-bit product modulo p
    fn reduce_wide(wide: &[u64; 2 * NLIMBS]) -> Self {
        // First fold: low + high·FOLD, leaving a carry below 2^34.
        let mut r = [0u64; NLIMBS];
        let mut carry: u128 = 0;
        for i in 0..NLIMBS {
            let cur = wide[i] as u128 + (wide[i + NLIMBS] as u128) * (FOLD as u128) + carry;
            r[i] = cur as u64;
            carry = cur >> 64;
        }

        // Second fold of the small carry.
        let mut cur = r[0] as u128 + carry * (FOLD as u128);
        r[0] = cur as u64;
        let mut c = cur >> 64;
        for limb in r.iter_mut().skip(1) {
            cur = *limb as u128 + c;
            *limb = cur as u64;
            c = cur >> 64;
        }

        // A final overflow wraps to a tiny value; one more fold cannot carry.
        cur = r[0] as u128 + c * (FOLD as u128);
        r[0] = cur as u64;
        c = cur >> 64;
        for limb in r.iter_mut().skip(1) {
            cur = *limb as u128 + c;
            *limb = cur as u64;
            c = cur >> 64;
        }

        let (reduced, borrow) = sbb4(&r, &Self::MOD_LIMBS);
        Self::conditional_select(
            &FieldElement(r),
            &FieldElement(reduced),
            Choice::from((borrow ^ 1) as u8),
        )
    }
}

/// 256-bit add with carry out
#[inline(always)]
fn adc4(a: &[u64; NLIMBS], b: &[u64; NLIMBS]) -> ([u64; NLIMBS], u64) {
    let mut out = [0u64; NLIMBS];
    let mut carry: u128 = 0;
    for i in 0..NLIMBS {
        let cur = a[i] as u128 + b[i] as u128 + carry;
        out[i] = cur as u64;
        carry = cur >> 64;
    }
    (out, carry as u64)
}

/// 256-bit subtract with borrow out (1 when a < b)
#[inline(always)]
fn sbb4(a: &[u64; NLIMBS], b: &[u64; NLIMBS]) -> ([u64; NLIMBS], u64) {
    let mut out = [0u64; NLIMBS];
    let mut borrow: u64 = 0;
    for i in 0..NLIMBS {
        let (d1, b1) = a[i].overflowing_sub(b[i]);
        let (d2, b2) = d1.overflowing_sub(borrow);
        out[i] = d2;
        borrow = (b1 | b2) as u64;
    }
    (out, borrow)
}
