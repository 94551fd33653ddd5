//! # pek
//!
//! Public-key encryption of small files into text that survives being
//! pasted into an email.
//!
//! ## Usage
//!
//! ```rust
//! let (public_key, private_key) = pek::create().unwrap();
//!
//! let mut text = Vec::new();
//! pek::encrypt(&public_key, &mut &b"meet at noon"[..], &mut text).unwrap();
//!
//! let mut plaintext = Vec::new();
//! pek::decrypt(&private_key, &mut text.as_slice(), &mut plaintext).unwrap();
//! assert_eq!(plaintext, b"meet at noon");
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`PekConfig`]
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`pek-api`]: error types and traits
//! - [`pek-common`]: zeroizing secret containers
//! - [`pek-params`]: fixed sizes and constants
//! - [`pek-algorithms`]: secp256k1, AES-256 and the base64 stream codec
//! - [`pek-kem`]: x-only ECDH over secp256k1
//! - [`pek-pke`]: the pek stream scheme

use std::io::{Read, Write};

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

// Core re-exports
pub use pek_algorithms as algorithms;
pub use pek_api as api;
pub use pek_common as common;
pub use pek_kem as kem;
pub use pek_params as params;
pub use pek_pke as pke;

pub use pek_api::{Error, Result};
pub use pek_pke::PekConfig;

/// Common imports for pek users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Kem, Serialize, SerializeSecret, StreamPke};

    // Re-export security types
    pub use crate::common::SecretBuffer;

    // Scheme and key types
    pub use crate::kem::{EcdhK256PublicKey, EcdhK256SecretKey};
    pub use crate::pke::{Pek, PekConfig};
}

/// Create a key pair, returned as (public key, private key) strings of 43
/// base64 symbols each
pub fn create() -> Result<(String, Zeroizing<String>)> {
    create_with_rng(&mut OsRng)
}

/// [`create`] drawing the private key from `rng`
pub fn create_with_rng<R: CryptoRng + RngCore>(
    rng: &mut R,
) -> Result<(String, Zeroizing<String>)> {
    let (public_key, secret_key) = pek_kem::create_key_pair(rng)?;
    let public_text = pke::encode_public_key(&public_key)?;
    let secret_text = Zeroizing::new(pke::encode_secret_key(&secret_key)?);
    debug!("created pek key pair");
    Ok((public_text, secret_text))
}

/// Encrypt `input` to a public key string, writing base64 text to `output`
pub fn encrypt<I: Read, O: Write>(public_key: &str, input: &mut I, output: &mut O) -> Result<()> {
    encrypt_with(public_key, input, output, &PekConfig::default(), &mut OsRng)
}

/// [`encrypt`] with an explicit text layout and randomness source
pub fn encrypt_with<R, I, O>(
    public_key: &str,
    input: &mut I,
    output: &mut O,
    config: &PekConfig,
    rng: &mut R,
) -> Result<()>
where
    R: CryptoRng + RngCore,
    I: Read,
    O: Write,
{
    let public_key = pke::decode_public_key(public_key)?;
    pke::encrypt_stream(&public_key, input, output, config, rng)?;
    Ok(())
}

/// Decrypt base64 text from `input` with a private key string.
///
/// Plaintext is written as it is recovered. On a
/// [`CorruptInput`](Error::CorruptInput) error `output` holds the whole,
/// partly garbled, message.
pub fn decrypt<I: Read, O: Write>(private_key: &str, input: &mut I, output: &mut O) -> Result<()> {
    let secret_key = pke::decode_secret_key(private_key)?;
    pke::decrypt_stream(&secret_key, input, output)?;
    Ok(())
}
