// File: crates/api/src/traits/kem.rs

//! Trait definition for key agreement used as a Key Encapsulation Mechanism
//!
//! A sender encapsulates against the recipient's public key, producing an
//! ephemeral public value to transmit and a shared secret; the recipient
//! recovers the same secret from the ephemeral value and its private key.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Key Encapsulation Mechanism (KEM) with domain-specific types.
pub trait Kem {
    /// Public key type.
    type PublicKey: Clone + Serialize;

    /// Secret key type, zeroized when dropped.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type, zeroized when dropped.
    ///
    /// Should be turned into application keys immediately after derivation.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Ciphertext type for the encapsulated key.
    type Ciphertext: Clone + Serialize;

    /// Keypair type for storage of related keys.
    type KeyPair: Clone;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// All randomness must come from the provided CSPRNG.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a shared secret using the recipient's public key.
    ///
    /// A fresh ephemeral key must be drawn from `rng` on every call.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret using the private key.
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
