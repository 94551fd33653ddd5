//! End-to-end tests through the string-level pek interface

use pek::prelude::*;
use pek_tests::{expected_symbols, init_tracing, rewrap, symbol_count, FixedRng};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Private key 1: its public key is the generator's x-coordinate
const KEY_ONE_PRIVATE: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAE";
const KEY_ONE_PUBLIC: &str = "eb5mfvncu6xVoGKVzocLBwKb/NstzijZWfKBWxb4F5g";

/// Empty message to KEY_ONE_PUBLIC with ephemeral secret [0x22; 32]
const KEY_ONE_EMPTY: &str = "Rm1/yuVj5csJoNGHC7WANEgEYXh5oUlJzyIoXxuuPyf1eem\n\
                             IwLycxNO4lhxDJo6Ex+iUpvV63is22BnUjrbX6Q\n";

/// Pangram to KEY_ONE_PUBLIC with ephemeral secret [0x44; 32]
const KEY_ONE_PANGRAM: &str = "LAt8+VMkoH0FOYskAXTcDCvkRNlrFZqmx/ex5mhoCZHstXs\n\
                               X3MnRFeeVBsu2bRFi4/DH+tyXP7nqplRkaA0wg0k6b4+epS\n\
                               2ZmivllXwDnaGwj8a67Es0913P7i5FLAYo\n";

const PANGRAM: &[u8] = b"The quick brown fox jumps over the lazy dog.";

fn encrypt_bytes(public_key: &str, plaintext: &[u8], rng: &mut ChaCha20Rng) -> Vec<u8> {
    let mut text = Vec::new();
    pek::encrypt_with(
        public_key,
        &mut &plaintext[..],
        &mut text,
        &PekConfig::default(),
        rng,
    )
    .unwrap();
    text
}

fn decrypt_bytes(private_key: &str, text: &[u8]) -> (Result<()>, Vec<u8>) {
    let mut out = Vec::new();
    let result = pek::decrypt(private_key, &mut &text[..], &mut out);
    (result, out)
}

#[test]
fn test_create_key_strings() {
    init_tracing();
    let (public_key, private_key) = pek::create().unwrap();
    assert_eq!(public_key.len(), 43);
    assert_eq!(private_key.len(), 43);
    assert!(pek::algorithms::encoding::base64::is_base64(public_key.as_bytes()));
    assert!(pek::algorithms::encoding::base64::is_base64(private_key.as_bytes()));

    let secret = pek::pke::decode_secret_key(&private_key).unwrap();
    let public = secret.public_key().unwrap();
    assert_eq!(pek::pke::encode_public_key(&public).unwrap(), public_key);
}

#[test]
fn test_create_is_deterministic_for_a_seed() {
    let a = pek::create_with_rng(&mut ChaCha20Rng::seed_from_u64(3)).unwrap();
    let b = pek::create_with_rng(&mut ChaCha20Rng::seed_from_u64(3)).unwrap();
    assert_eq!(a.0, b.0);
    assert_eq!(*a.1, *b.1);
}

#[test]
fn test_key_one_scenario() {
    init_tracing();
    let mut text = Vec::new();
    let mut rng = FixedRng(0x22);
    pek::encrypt_with(
        KEY_ONE_PUBLIC,
        &mut &b""[..],
        &mut text,
        &PekConfig::default(),
        &mut rng,
    )
    .unwrap();
    assert_eq!(text, KEY_ONE_EMPTY.as_bytes());
    // 64 decoded bytes: the ephemeral key and one padding chunk
    assert_eq!(symbol_count(&text), 86);

    let (result, out) = decrypt_bytes(KEY_ONE_PRIVATE, &text);
    result.unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_known_ciphertext() {
    let (result, out) = decrypt_bytes(KEY_ONE_PRIVATE, KEY_ONE_PANGRAM.as_bytes());
    result.unwrap();
    assert_eq!(out, PANGRAM);

    let mut text = Vec::new();
    let mut rng = FixedRng(0x44);
    pek::encrypt_with(
        KEY_ONE_PUBLIC,
        &mut &PANGRAM[..],
        &mut text,
        &PekConfig::default(),
        &mut rng,
    )
    .unwrap();
    assert_eq!(text, KEY_ONE_PANGRAM.as_bytes());
}

#[test]
fn test_round_trip_lengths() {
    init_tracing();
    let mut rng = ChaCha20Rng::seed_from_u64(0x5EED);
    let (public_key, private_key) = pek::create_with_rng(&mut rng).unwrap();

    for len in [0usize, 1, 16, 31, 32, 33, 63, 64, 1000] {
        let plaintext: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        let text = encrypt_bytes(&public_key, &plaintext, &mut rng);
        assert_eq!(symbol_count(&text), expected_symbols(len), "len {len}");
        assert!(text.ends_with(b"\n"));
        for line in text.split(|&b| b == b'\n') {
            assert!(line.len() <= 47);
        }

        let (result, out) = decrypt_bytes(&private_key, &text);
        result.unwrap();
        assert_eq!(out, plaintext, "len {len}");
    }
}

#[test]
fn test_custom_line_width() {
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let (public_key, private_key) = pek::create_with_rng(&mut rng).unwrap();
    let plaintext = vec![0xA5u8; 300];

    let mut text = Vec::new();
    let config = PekConfig::new().with_line_width(76);
    pek::encrypt_with(&public_key, &mut &plaintext[..], &mut text, &config, &mut rng).unwrap();
    let lines: Vec<&[u8]> = text.split(|&b| b == b'\n').filter(|l| !l.is_empty()).collect();
    assert!(lines[..lines.len() - 1].iter().all(|l| l.len() == 76));

    let (result, out) = decrypt_bytes(&private_key, &text);
    result.unwrap();
    assert_eq!(out, plaintext);
}

#[test]
fn test_whitespace_injection() {
    let mut rng = ChaCha20Rng::seed_from_u64(21);
    let (public_key, private_key) = pek::create_with_rng(&mut rng).unwrap();
    let plaintext = b"whitespace anywhere in the text is ignored".to_vec();
    let text = encrypt_bytes(&public_key, &plaintext, &mut rng);

    for (every, separator) in [(1, " "), (7, "\r\n"), (13, "\t\x0b\x0c"), (1000, "")] {
        let mut mangled = b"\n\n   ".to_vec();
        mangled.extend(rewrap(&text, every, separator));
        mangled.extend_from_slice(b" \r\n\r\n");
        let (result, out) = decrypt_bytes(&private_key, &mangled);
        result.unwrap();
        assert_eq!(out, plaintext);
    }
}

#[test]
fn test_truncated_ciphertext() {
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let (public_key, private_key) = pek::create_with_rng(&mut rng).unwrap();
    let text = encrypt_bytes(&public_key, &[7u8; 80], &mut rng);
    let symbols = rewrap(&text, usize::MAX, "");

    // Inside the ephemeral key
    let (result, out) = decrypt_bytes(&private_key, &symbols[..20]);
    assert!(matches!(result, Err(Error::Format { .. })));
    assert!(out.is_empty());

    // Inside the third chunk: the first two are already written
    let cut = expected_symbols(80) - 10;
    let (result, out) = decrypt_bytes(&private_key, &symbols[..cut]);
    match result {
        Err(Error::Format { message, .. }) => {
            assert!(message.contains("truncated block"), "{message}");
            assert!(message.ends_with("(should be 32)"), "{message}");
        }
        other => panic!("expected a format error, got {other:?}"),
    }
    assert_eq!(out, vec![7u8; 64]);
}

#[test]
fn test_corrupt_character_reported_after_output() {
    init_tracing();
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let (public_key, private_key) = pek::create_with_rng(&mut rng).unwrap();
    let plaintext = vec![0x33u8; 150];
    let mut text = encrypt_bytes(&public_key, &plaintext, &mut rng);

    // The last symbol of the second line falls in the second chunk
    let second_line_end = text
        .iter()
        .enumerate()
        .filter(|(_, &b)| b == b'\n')
        .nth(1)
        .map(|(i, _)| i)
        .unwrap();
    text[second_line_end - 1] = b'!';

    let (result, out) = decrypt_bytes(&private_key, &text);
    assert_eq!(out.len(), plaintext.len());
    assert_eq!(&out[96..], &plaintext[96..]);
    match result {
        Err(Error::CorruptInput { message, count }) => {
            assert_eq!(count, 1);
            assert_eq!(message, "invalid base64 character '!' at line 2, column 47");
        }
        other => panic!("expected corrupt input, got {other:?}"),
    }
}

#[test]
fn test_corrupt_count_accumulates() {
    let mut rng = ChaCha20Rng::seed_from_u64(12);
    let (public_key, private_key) = pek::create_with_rng(&mut rng).unwrap();
    let text = encrypt_bytes(&public_key, &[1u8; 64], &mut rng);
    let mut symbols = rewrap(&text, usize::MAX, "");
    // Past the key; each replaces exactly one symbol
    for i in [50, 60, 70] {
        symbols[i] = b'?';
    }

    let (result, _) = decrypt_bytes(&private_key, &symbols);
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "error decoding base64. invalid base64 character '?' at line 1, column 71. \
         total bad characters: 3"
    );
}

#[test]
fn test_invalid_public_key_string() {
    let mut out = Vec::new();
    // x = 5 is not on the curve
    let off_curve = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAU";
    let result = pek::encrypt(off_curve, &mut &b"x"[..], &mut out);
    assert!(matches!(result, Err(Error::Curve { .. })));
    assert!(out.is_empty());

    let result = pek::encrypt("too short", &mut &b"x"[..], &mut out);
    assert!(matches!(result, Err(Error::Format { .. })));
}

#[test]
fn test_stream_pke_through_prelude() {
    let mut rng = ChaCha20Rng::seed_from_u64(30);
    let (public_key, secret_key) = Pek::keypair(&mut rng).unwrap();

    let mut text = Vec::new();
    Pek::encrypt(
        &public_key,
        &mut &b"prelude"[..],
        &mut text,
        &PekConfig::default(),
        &mut rng,
    )
    .unwrap();

    let mut out = Vec::new();
    Pek::decrypt(&secret_key, &mut text.as_slice(), &mut out).unwrap();
    assert_eq!(out, b"prelude");
}
