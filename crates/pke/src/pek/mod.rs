//! The pek stream scheme
//!
//! Encryption writes, as base64 text, the ephemeral x-coordinate E followed
//! by one 32-byte chunk per 32 bytes of plaintext plus a final padded chunk.
//! Each chunk is XORed with the previous ciphertext chunk (the shared secret
//! for the first) and then encrypted with dual-lane AES-256 under the shared
//! secret.

mod padding;

use std::io::{self, Read, Write};

use pek_algorithms::block::DualLaneAes256;
use pek_algorithms::encoding::base64::{Base64Reader, Base64Writer};
use pek_api::error::{Error as ApiError, Result as ApiResult};
use pek_api::StreamPke;
use pek_common::{SecretBuffer, SecureZeroingType};
use pek_kem::{
    create_key_pair, derive_shared_secret, is_valid_point, EcdhK256PublicKey, EcdhK256SecretKey,
};
use pek_params::traditional::ecdh::ECDH_K256_PUBLIC_KEY_SIZE;
use pek_params::utils::symmetric::DUAL_LANE_CHUNK_SIZE;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace, warn};
use zeroize::Zeroizing;

use crate::config::PekConfig;
use crate::error::{Error, Result};
use padding::{pad, unpadded_len};

/// The pek scheme: secp256k1 x-only ECDH, chained dual-lane AES-256 and
/// line-wrapped base64 output
pub struct Pek;

impl StreamPke for Pek {
    type PublicKey = EcdhK256PublicKey;
    type SecretKey = EcdhK256SecretKey;
    type Config = PekConfig;

    fn name() -> &'static str {
        "PEK-K256-AES256x2-Base64"
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        create_key_pair(rng)
    }

    fn encrypt<R, I, O>(
        public_key: &Self::PublicKey,
        input: &mut I,
        output: &mut O,
        config: &Self::Config,
        rng: &mut R,
    ) -> ApiResult<()>
    where
        R: RngCore + CryptoRng,
        I: Read,
        O: Write,
    {
        encrypt_stream(public_key, input, output, config, rng).map_err(ApiError::from)
    }

    fn decrypt<I, O>(secret_key: &Self::SecretKey, input: &mut I, output: &mut O) -> ApiResult<()>
    where
        I: Read,
        O: Write,
    {
        decrypt_stream(secret_key, input, output).map_err(ApiError::from)
    }
}

/// Encrypt everything readable from `input` to `public_key`, writing base64
/// text to `output`.
///
/// A fresh ephemeral key pair is drawn from `rng` for every call.
pub fn encrypt_stream<R, I, O>(
    public_key: &EcdhK256PublicKey,
    input: &mut I,
    output: &mut O,
    config: &PekConfig,
    rng: &mut R,
) -> Result<()>
where
    R: RngCore + CryptoRng,
    I: Read,
    O: Write,
{
    config.validate()?;

    let (ephemeral_public, ephemeral_secret) = create_key_pair(rng)?;
    let shared = derive_shared_secret(public_key.as_bytes(), &ephemeral_secret)?;
    let lanes = DualLaneAes256::new(shared.as_secret_buffer());

    let mut writer = Base64Writer::with_line_width(output, config.line_width)?;
    writer.write_all(ephemeral_public.as_bytes())?;

    debug!(line_width = config.line_width, "pek encrypt started");

    let mut mask = shared.as_secret_buffer().secure_clone();
    let mut chunk = Zeroizing::new([0u8; DUAL_LANE_CHUNK_SIZE]);
    let mut chunks = 0usize;
    let mut plaintext_len = 0usize;
    loop {
        let filled = fill_chunk(input, &mut chunk)?;
        plaintext_len += filled;
        let last = filled < DUAL_LANE_CHUNK_SIZE;
        if last {
            pad(&mut chunk, filled);
        }

        mask.xor_into(&mut chunk);
        lanes.encrypt(&mut chunk)?;
        writer.write_all(&chunk[..])?;
        mask = SecretBuffer::new(*chunk);

        chunks += 1;
        trace!(chunk = chunks, "encrypted chunk");
        if last {
            break;
        }
    }
    writer.close()?;

    debug!(chunks, plaintext_len, "pek encrypt finished");
    Ok(())
}

/// Decrypt base64 text from `input` with `secret_key`, writing plaintext
/// to `output` as each chunk is recovered.
///
/// Invalid symbols in the text do not stop decryption; they are decoded as
/// zero bits and reported as [`Error::CorruptInput`] once the whole text
/// has been processed, so `output` still receives every chunk.
pub fn decrypt_stream<I, O>(
    secret_key: &EcdhK256SecretKey,
    input: &mut I,
    output: &mut O,
) -> Result<()>
where
    I: Read,
    O: Write,
{
    let mut reader = Base64Reader::new(input);

    let mut ephemeral = [0u8; ECDH_K256_PUBLIC_KEY_SIZE];
    let filled = reader.read_up_to(&mut ephemeral)?;
    if filled != ECDH_K256_PUBLIC_KEY_SIZE {
        return Err(Error::TruncatedEphemeralKey { actual: filled });
    }
    if !is_valid_point(&ephemeral) {
        return Err(Error::InvalidEphemeralKey);
    }

    let shared = derive_shared_secret(&ephemeral, secret_key)?;
    let lanes = DualLaneAes256::new(shared.as_secret_buffer());

    debug!("pek decrypt started");

    let mut mask = shared.as_secret_buffer().secure_clone();
    let mut chunks = 0usize;
    let mut plaintext_len = 0usize;
    while !reader.is_eof()? {
        let mut chunk = Zeroizing::new([0u8; DUAL_LANE_CHUNK_SIZE]);
        let filled = reader.read_up_to(&mut chunk[..])?;
        if filled != DUAL_LANE_CHUNK_SIZE {
            return Err(Error::TruncatedChunk { actual: filled });
        }

        let ciphertext = *chunk;
        lanes.decrypt(&mut chunk)?;
        mask.xor_into(&mut chunk);

        let len = if reader.is_eof()? {
            unpadded_len(&chunk)
        } else {
            DUAL_LANE_CHUNK_SIZE
        };
        output.write_all(&chunk[..len])?;
        mask = SecretBuffer::new(ciphertext);

        chunks += 1;
        plaintext_len += len;
        trace!(chunk = chunks, "decrypted chunk");
    }
    output.flush()?;

    if reader.has_errors() {
        warn!(
            count = reader.error_count(),
            first = ?reader.first_error_position(),
            "pek decrypt saw invalid base64 characters"
        );
        return Err(Error::CorruptInput {
            message: reader.last_error().unwrap_or_default().to_string(),
            count: reader.error_count(),
        });
    }

    debug!(chunks, plaintext_len, "pek decrypt finished");
    Ok(())
}

/// Read until `chunk` is full or `input` ends
fn fill_chunk<I: Read>(
    input: &mut I,
    chunk: &mut [u8; DUAL_LANE_CHUNK_SIZE],
) -> io::Result<usize> {
    let mut filled = 0;
    while filled < chunk.len() {
        match input.read(&mut chunk[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
