//! Property-based tests for the pek scheme

use pek_kem::create_key_pair;
use pek_pke::{decrypt_stream, encrypt_stream, Error, PekConfig};
use pek_tests::{expected_symbols, rewrap, symbol_count};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn pek_roundtrip(
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..300),
        line_width in 1usize..120,
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (public_key, secret_key) = create_key_pair(&mut rng).unwrap();

        let mut text = Vec::new();
        let config = PekConfig::new().with_line_width(line_width);
        encrypt_stream(&public_key, &mut plaintext.as_slice(), &mut text, &config, &mut rng)
            .unwrap();
        prop_assert_eq!(symbol_count(&text), expected_symbols(plaintext.len()));

        let mut out = Vec::new();
        decrypt_stream(&secret_key, &mut text.as_slice(), &mut out).unwrap();
        prop_assert_eq!(out, plaintext);
    }

    #[test]
    fn pek_layout_does_not_matter(
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..100),
        every in 1usize..80,
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (public_key, secret_key) = create_key_pair(&mut rng).unwrap();

        let mut text = Vec::new();
        encrypt_stream(
            &public_key,
            &mut plaintext.as_slice(),
            &mut text,
            &PekConfig::default(),
            &mut rng,
        )
        .unwrap();
        let text = rewrap(&text, every, " \r\n");

        let mut out = Vec::new();
        decrypt_stream(&secret_key, &mut text.as_slice(), &mut out).unwrap();
        prop_assert_eq!(out, plaintext);
    }

    #[test]
    fn pek_truncation_is_detected(
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..100),
        drop in 1usize..40,
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (public_key, secret_key) = create_key_pair(&mut rng).unwrap();

        let mut text = Vec::new();
        encrypt_stream(
            &public_key,
            &mut plaintext.as_slice(),
            &mut text,
            &PekConfig::default(),
            &mut rng,
        )
        .unwrap();
        let symbols = rewrap(&text, usize::MAX, "");
        // Dropping fewer than 43 symbols always leaves a partial chunk
        let kept = &symbols[..symbols.len() - drop];

        let mut out = Vec::new();
        let result = decrypt_stream(&secret_key, &mut &kept[..], &mut out);
        prop_assert!(
            matches!(result, Err(Error::TruncatedChunk { .. })),
            "unexpected result {:?}",
            result
        );
    }
}
