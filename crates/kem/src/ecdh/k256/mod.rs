//! ECDH with secp256k1 and x-only public values
//!
//! A public key is the big-endian x-coordinate of k·G. The receiving side
//! rebuilds a full point by taking the principal square root of x³ + 7 for
//! y. Whichever root that picks, the x-coordinate of any multiple of the
//! point is the same, so both parties agree on the shared secret.
//!
//! Private keys are kept as the 32 raw random bytes they were drawn as and
//! are reduced modulo n only when used as a multiplier.

use pek_algorithms::ec::k256 as ec_k256;
use pek_api::error::{validate, Error as ApiError};
use pek_api::{Kem, Result as ApiResult, Serialize, SerializeSecret};
use pek_common::security::SecretBuffer;
use pek_params::traditional::ecdh::{
    ECDH_K256_PRIVATE_KEY_SIZE, ECDH_K256_PUBLIC_KEY_SIZE, ECDH_K256_SHARED_SECRET_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error as KemError, Result};

/// ECDH KEM with secp256k1 curve
pub struct EcdhK256;

/// Public key: x-coordinate of a curve point
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct EcdhK256PublicKey([u8; ECDH_K256_PUBLIC_KEY_SIZE]);

/// Secret key: 32 raw bytes, reduced modulo n when used
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct EcdhK256SecretKey(SecretBuffer<ECDH_K256_PRIVATE_KEY_SIZE>);

/// Shared secret: x-coordinate of the shared point
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct EcdhK256SharedSecret(SecretBuffer<ECDH_K256_SHARED_SECRET_SIZE>);

/// Ciphertext: the ephemeral public key's x-coordinate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdhK256Ciphertext([u8; ECDH_K256_PUBLIC_KEY_SIZE]);

impl AsRef<[u8]> for EcdhK256PublicKey { fn as_ref(&self) -> &[u8] { &self.0 } }
impl AsRef<[u8]> for EcdhK256SecretKey { fn as_ref(&self) -> &[u8] { self.0.as_ref() } }
impl AsRef<[u8]> for EcdhK256SharedSecret { fn as_ref(&self) -> &[u8] { self.0.as_ref() } }
impl AsRef<[u8]> for EcdhK256Ciphertext { fn as_ref(&self) -> &[u8] { &self.0 } }

impl EcdhK256PublicKey {
    /// Accept an x-coordinate after checking that it lies on the curve
    pub fn from_x_coordinate(x: [u8; ECDH_K256_PUBLIC_KEY_SIZE]) -> ApiResult<Self> {
        if !is_valid_point(&x) {
            return Err(ApiError::from(KemError::InvalidKey {
                key_type: "ECDH-K256 public",
                reason: "x-coordinate is not on the curve",
            }));
        }
        Ok(Self(x))
    }

    /// The raw x-coordinate
    pub fn as_bytes(&self) -> &[u8; ECDH_K256_PUBLIC_KEY_SIZE] {
        &self.0
    }
}

impl EcdhK256SecretKey {
    /// Wrap 32 raw bytes. Any value is accepted.
    pub fn new(bytes: [u8; ECDH_K256_PRIVATE_KEY_SIZE]) -> Self {
        Self(SecretBuffer::new(bytes))
    }

    /// The raw bytes, unreduced
    pub fn as_bytes(&self) -> &[u8; ECDH_K256_PRIVATE_KEY_SIZE] {
        self.0.as_array()
    }

    /// Recompute the matching public key, k·G
    pub fn public_key(&self) -> ApiResult<EcdhK256PublicKey> {
        let point = ec_k256::scalar_mult_base_g(&self.to_scalar())
            .map_err(|e| ApiError::from(KemError::from(e)))?;
        let x = point
            .serialize_x_only()
            .map_err(|e| ApiError::from(KemError::from(e)))?;
        Ok(EcdhK256PublicKey(x))
    }

    fn to_scalar(&self) -> ec_k256::Scalar {
        ec_k256::Scalar::new(*self.0.as_array())
    }
}

impl EcdhK256SharedSecret {
    /// The 32 secret bytes, used directly as the symmetric key
    pub fn as_secret_buffer(&self) -> &SecretBuffer<ECDH_K256_SHARED_SECRET_SIZE> {
        &self.0
    }
}

impl EcdhK256Ciphertext {
    /// Wrap an ephemeral x-coordinate without validating it
    pub fn new(x: [u8; ECDH_K256_PUBLIC_KEY_SIZE]) -> Self {
        Self(x)
    }

    /// The raw x-coordinate
    pub fn as_bytes(&self) -> &[u8; ECDH_K256_PUBLIC_KEY_SIZE] {
        &self.0
    }
}

/// Draw a fresh key pair.
///
/// The private key is 32 bytes from `rng`; the public key is the
/// x-coordinate of k·G. Draws again if the bytes reduce to zero modulo n.
pub fn create_key_pair<R: CryptoRng + RngCore>(
    rng: &mut R,
) -> ApiResult<(EcdhK256PublicKey, EcdhK256SecretKey)> {
    let mut bytes = Zeroizing::new([0u8; ECDH_K256_PRIVATE_KEY_SIZE]);
    loop {
        rng.fill_bytes(&mut bytes[..]);
        let secret_key = EcdhK256SecretKey::new(*bytes);
        if secret_key.to_scalar().is_zero() {
            continue;
        }
        let public_key = secret_key.public_key()?;
        return Ok((public_key, secret_key));
    }
}

/// Rebuild a point from its x-coordinate using the principal root for y
pub fn decompress_point(x: &[u8; ECDH_K256_PUBLIC_KEY_SIZE]) -> ApiResult<ec_k256::Point> {
    ec_k256::Point::decompress_x_only(x).map_err(|e| ApiError::from(KemError::from(e)))
}

/// True when `x` is 32 bytes and decompresses to a curve point
pub fn is_valid_point(x: &[u8]) -> bool {
    let Ok(x) = <&[u8; ECDH_K256_PUBLIC_KEY_SIZE]>::try_from(x) else {
        return false;
    };
    ec_k256::Point::decompress_x_only(x).is_ok()
}

/// x-coordinate of scalar·P, where P is given by its x-coordinate.
///
/// Fails with a curve error when `point_x` is not on the curve or the
/// product is the point at infinity.
pub fn derive_shared_secret(
    point_x: &[u8; ECDH_K256_PUBLIC_KEY_SIZE],
    scalar: &EcdhK256SecretKey,
) -> ApiResult<EcdhK256SharedSecret> {
    shared_x(point_x, scalar).map_err(ApiError::from)
}

fn shared_x(
    point_x: &[u8; ECDH_K256_PUBLIC_KEY_SIZE],
    scalar: &EcdhK256SecretKey,
) -> Result<EcdhK256SharedSecret> {
    let point = ec_k256::Point::decompress_x_only(point_x)?;
    let shared_point = ec_k256::scalar_mult(&scalar.to_scalar(), &point)?;
    let x = shared_point.serialize_x_only()?;
    Ok(EcdhK256SharedSecret(SecretBuffer::new(x)))
}

impl Kem for EcdhK256 {
    type PublicKey = EcdhK256PublicKey;
    type SecretKey = EcdhK256SecretKey;
    type SharedSecret = EcdhK256SharedSecret;
    type Ciphertext = EcdhK256Ciphertext;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str { "ECDH-K256" }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        create_key_pair(rng)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key_recipient: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let (ephemeral_pk, ephemeral_sk) = create_key_pair(rng)?;
        let shared_secret = derive_shared_secret(&public_key_recipient.0, &ephemeral_sk)?;
        Ok((EcdhK256Ciphertext(ephemeral_pk.0), shared_secret))
    }

    fn decapsulate(
        secret_key_recipient: &Self::SecretKey,
        ciphertext_ephemeral_pk: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        if !is_valid_point(&ciphertext_ephemeral_pk.0) {
            return Err(ApiError::from(KemError::InvalidCiphertext {
                algorithm: "ECDH-K256",
                reason: "ephemeral public key is not valid",
            }));
        }
        derive_shared_secret(&ciphertext_ephemeral_pk.0, secret_key_recipient)
    }
}

impl Serialize for EcdhK256PublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length(
            "ECDH-K256 public key",
            bytes.len(),
            ECDH_K256_PUBLIC_KEY_SIZE,
        )?;
        let mut x = [0u8; ECDH_K256_PUBLIC_KEY_SIZE];
        x.copy_from_slice(bytes);
        Self::from_x_coordinate(x)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl Serialize for EcdhK256Ciphertext {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length(
            "ECDH-K256 ciphertext",
            bytes.len(),
            ECDH_K256_PUBLIC_KEY_SIZE,
        )?;
        let mut x = [0u8; ECDH_K256_PUBLIC_KEY_SIZE];
        x.copy_from_slice(bytes);
        Ok(Self(x))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl SerializeSecret for EcdhK256SecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let buffer = SecretBuffer::from_slice(bytes).ok_or(ApiError::InvalidLength {
            context: "ECDH-K256 secret key",
            expected: ECDH_K256_PRIVATE_KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(buffer))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }
}

impl SerializeSecret for EcdhK256SharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let buffer = SecretBuffer::from_slice(bytes).ok_or(ApiError::InvalidLength {
            context: "ECDH-K256 shared secret",
            expected: ECDH_K256_SHARED_SECRET_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(buffer))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }
}
