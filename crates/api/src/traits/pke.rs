//! Trait definition for stream-oriented Public Key Encryption schemes.

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use std::io::{Read, Write};
use zeroize::Zeroize;

/// Trait for public key encryption of whole byte streams.
///
/// Encryption consumes a plaintext byte stream and produces the scheme's
/// serialized ciphertext on the output stream; decryption reverses it.
/// Neither side buffers the whole message.
pub trait StreamPke {
    /// Public key type for the scheme.
    type PublicKey: AsRef<[u8]> + Clone;

    /// Secret key type for the scheme.
    type SecretKey: Zeroize + AsRef<[u8]> + Clone;

    /// Tunables that affect the serialized output but not the cryptography.
    type Config: Default;

    /// Returns the algorithm name.
    fn name() -> &'static str;

    /// Generates a new key pair.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts everything readable from `input` to the recipient's public key.
    ///
    /// # Arguments
    /// * `public_key` - The recipient's public key.
    /// * `input` - Plaintext bytes, read until end of stream.
    /// * `output` - Receives the serialized ciphertext.
    /// * `config` - Output layout settings.
    /// * `rng` - A cryptographically secure random number generator.
    fn encrypt<R, I, O>(
        public_key: &Self::PublicKey,
        input: &mut I,
        output: &mut O,
        config: &Self::Config,
        rng: &mut R,
    ) -> Result<()>
    where
        R: RngCore + CryptoRng,
        I: Read,
        O: Write;

    /// Decrypts a serialized ciphertext read from `input` into `output`.
    ///
    /// Plaintext is written as it is recovered, so on error `output` may
    /// already hold a prefix of the message.
    fn decrypt<I, O>(secret_key: &Self::SecretKey, input: &mut I, output: &mut O) -> Result<()>
    where
        I: Read,
        O: Write;
}
