//! Key strings
//!
//! Keys travel as 43 base64 symbols: the 32 key bytes run through the
//! stream codec with the trailing line break removed.

use std::io::Write;

use pek_algorithms::encoding::base64::{Base64Reader, Base64Writer};
use pek_api::error::{validate, ResultExt};
use pek_kem::{EcdhK256PublicKey, EcdhK256SecretKey};
use pek_params::utils::encoding::KEY_STRING_LENGTH;
use pek_params::traditional::ecdh::ECDH_K256_PUBLIC_KEY_SIZE;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Encode 32 key bytes as a 43-symbol string
pub fn encode_key(key: &[u8; ECDH_K256_PUBLIC_KEY_SIZE]) -> Result<String> {
    let mut writer = Base64Writer::new(Vec::with_capacity(KEY_STRING_LENGTH + 1));
    writer.write_all(key)?;
    let text = writer.close()?;
    let encoded: String = text.iter().map(|&b| b as char).collect();
    Ok(encoded.trim_end().to_string())
}

/// Decode a key string back to its 32 bytes.
///
/// Whitespace is skipped and anything after the 32nd byte is ignored.
/// Too little text is a format error; a symbol outside the alphabet is
/// corrupt input.
pub fn decode_key(text: &str) -> Result<Zeroizing<[u8; ECDH_K256_PUBLIC_KEY_SIZE]>> {
    let mut reader = Base64Reader::new(text.as_bytes());
    let mut key = Zeroizing::new([0u8; ECDH_K256_PUBLIC_KEY_SIZE]);
    let filled = reader.read_up_to(&mut key[..])?;
    validate::framed_length("pek key", "key", filled, ECDH_K256_PUBLIC_KEY_SIZE)?;
    if reader.has_errors() {
        return Err(Error::CorruptInput {
            message: reader.last_error().unwrap_or_default().to_string(),
            count: reader.error_count(),
        });
    }
    Ok(key)
}

/// Encode a public key
pub fn encode_public_key(key: &EcdhK256PublicKey) -> Result<String> {
    encode_key(key.as_bytes())
}

/// Decode a public key, rejecting x-coordinates that are not on the curve
pub fn decode_public_key(text: &str) -> Result<EcdhK256PublicKey> {
    let x = decode_key(text)?;
    Ok(EcdhK256PublicKey::from_x_coordinate(*x).with_context("pek public key")?)
}

/// Encode a private key
pub fn encode_secret_key(key: &EcdhK256SecretKey) -> Result<String> {
    encode_key(key.as_bytes())
}

/// Decode a private key
pub fn decode_secret_key(text: &str) -> Result<EcdhK256SecretKey> {
    let bytes = decode_key(text)?;
    Ok(EcdhK256SecretKey::new(*bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pek_api::Error as CoreError;

    const G_X: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    fn g_x() -> [u8; 32] {
        let mut x = [0u8; 32];
        x.copy_from_slice(&hex::decode(G_X).unwrap());
        x
    }

    #[test]
    fn test_encode_generator() {
        let encoded = encode_key(&g_x()).unwrap();
        assert_eq!(encoded, "eb5mfvncu6xVoGKVzocLBwKb/NstzijZWfKBWxb4F5g");
        assert_eq!(encoded.len(), KEY_STRING_LENGTH);
    }

    #[test]
    fn test_encode_zero_key() {
        let encoded = encode_key(&[0u8; 32]).unwrap();
        assert_eq!(encoded, "A".repeat(43));
    }

    #[test]
    fn test_decode_generator() {
        let key = decode_key("eb5mfvncu6xVoGKVzocLBwKb/NstzijZWfKBWxb4F5g").unwrap();
        assert_eq!(*key, g_x());
    }

    #[test]
    fn test_decode_skips_whitespace() {
        let key = decode_key("  eb5mfvncu6xVoGKVzocL\n BwKb/NstzijZWfKBWxb4F5g \r\n").unwrap();
        assert_eq!(*key, g_x());
    }

    #[test]
    fn test_decode_rejects_non_ascii_letter() {
        let err = decode_key("eb5mfvncu6xVoGKVzocLBwKb\u{e9}NstzijZWfKBWxb4F5g").unwrap_err();
        match err {
            Error::CorruptInput { message, count } => {
                assert_eq!(count, 1);
                assert_eq!(message, "invalid base64 character '\u{e9}' at line 1, column 25");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_short_key() {
        let err = decode_key("eb5mfvncu6xVoGKVzocLBwKb").unwrap_err();
        assert_eq!(
            CoreError::from(err),
            CoreError::Format {
                context: "pek key",
                message: "key len=18 (should be 32)".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_bad_symbol() {
        let err = decode_key("eb5mfvncu6xVoGKVzocLBwKb*NstzijZWfKBWxb4F5g").unwrap_err();
        match err {
            Error::CorruptInput { message, count } => {
                assert_eq!(count, 1);
                assert_eq!(message, "invalid base64 character '*' at line 1, column 25");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_typed_keys() {
        let mut one = [0u8; 32];
        one[31] = 1;
        let secret = decode_secret_key(&encode_key(&one).unwrap()).unwrap();
        assert_eq!(secret.as_bytes(), &one);
        assert_eq!(
            encode_secret_key(&secret).unwrap(),
            "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAE"
        );

        let public = secret.public_key().unwrap();
        let text = encode_public_key(&public).unwrap();
        assert_eq!(text, "eb5mfvncu6xVoGKVzocLBwKb/NstzijZWfKBWxb4F5g");
        assert_eq!(decode_public_key(&text).unwrap(), public);
    }

    #[test]
    fn test_decode_public_key_off_curve() {
        // x = 5 has no y on secp256k1
        let mut five = [0u8; 32];
        five[31] = 5;
        let text = encode_key(&five).unwrap();
        let err = decode_public_key(&text).unwrap_err();
        assert_eq!(
            CoreError::from(err),
            CoreError::Curve {
                context: "pek public key",
                message: "x-coordinate is not on the curve".to_string(),
            }
        );
    }
}
