//! Property-based tests for the base64 stream codec

use std::io::{Read, Write};

use pek_algorithms::encoding::base64::{Base64Reader, Base64Writer};
use proptest::prelude::*;

fn encode(data: &[u8], write_sizes: &[usize], line_width: usize) -> Vec<u8> {
    let mut writer = Base64Writer::with_line_width(Vec::new(), line_width).unwrap();
    let mut rest = data;
    let mut sizes = write_sizes.iter().cycle();
    while !rest.is_empty() {
        let n = (*sizes.next().unwrap()).min(rest.len());
        writer.write_all(&rest[..n]).unwrap();
        rest = &rest[n..];
    }
    writer.close().unwrap()
}

proptest! {
    #[test]
    fn codec_roundtrip_any_write_pattern(
        data in prop::collection::vec(any::<u8>(), 0..1000),
        write_sizes in prop::collection::vec(1usize..50, 1..8),
        line_width in 1usize..100,
    ) {
        let text = encode(&data, &write_sizes, line_width);

        let mut reader = Base64Reader::new(text.as_slice());
        let mut decoded = Vec::new();
        reader.read_to_end(&mut decoded).unwrap();

        prop_assert_eq!(decoded, data);
        prop_assert!(!reader.has_errors());
    }

    #[test]
    fn codec_lines_respect_width(
        data in prop::collection::vec(any::<u8>(), 1..1000),
        line_width in 1usize..100,
    ) {
        let text = encode(&data, &[17], line_width);
        prop_assert_eq!(text.last(), Some(&b'\n'));
        for line in text[..text.len() - 1].split(|&b| b == b'\n') {
            prop_assert!(!line.is_empty());
            prop_assert!(line.len() <= line_width);
        }
    }

    #[test]
    fn codec_reads_split_anywhere(
        data in prop::collection::vec(any::<u8>(), 0..1000),
        read_sizes in prop::collection::vec(1usize..40, 1..6),
    ) {
        let text = encode(&data, &[64], 47);
        let mut reader = Base64Reader::new(text.as_slice());
        let mut decoded = Vec::new();
        let mut sizes = read_sizes.iter().cycle();
        loop {
            let chunk = reader.read_chunk(*sizes.next().unwrap()).unwrap();
            if chunk.is_empty() {
                break;
            }
            decoded.extend(chunk);
        }
        prop_assert_eq!(decoded, data);
        prop_assert!(reader.is_eof().unwrap());
    }

    #[test]
    fn codec_ignores_inserted_whitespace(
        data in prop::collection::vec(any::<u8>(), 0..200),
        positions in prop::collection::vec((any::<prop::sample::Index>(), 0usize..9), 0..30),
    ) {
        const WHITESPACE: [char; 9] =
            [' ', '\t', '\n', '\r', '\u{0B}', '\u{0C}', '\u{A0}', '\u{2003}', '\u{3000}'];
        let mut chars: Vec<char> = String::from_utf8(encode(&data, &[32], 47))
            .unwrap()
            .chars()
            .collect();
        for (index, kind) in positions {
            let at = index.index(chars.len() + 1);
            chars.insert(at, WHITESPACE[kind]);
        }
        let text: String = chars.into_iter().collect();

        let mut reader = Base64Reader::new(text.as_bytes());
        let mut decoded = Vec::new();
        reader.read_to_end(&mut decoded).unwrap();
        prop_assert_eq!(decoded, data);
        prop_assert_eq!(reader.error_count(), 0);
    }

    #[test]
    fn codec_counts_non_ascii_characters_once(
        data in prop::collection::vec(any::<u8>(), 8..200),
        bad in prop::collection::vec((any::<prop::sample::Index>(), 0usize..4), 1..5),
    ) {
        const FOREIGN: [char; 4] = ['\u{e9}', '\u{df}', '\u{20ac}', '\u{1f600}'];
        let mut chars: Vec<char> = String::from_utf8(encode(&data, &[32], 1000))
            .unwrap()
            .trim_end()
            .chars()
            .collect();
        let mut replaced = std::collections::BTreeSet::new();
        for (index, kind) in bad {
            let at = index.index(chars.len());
            chars[at] = FOREIGN[kind];
            replaced.insert(at);
        }
        let text: String = chars.into_iter().collect();

        let mut reader = Base64Reader::new(text.as_bytes());
        let mut decoded = Vec::new();
        reader.read_to_end(&mut decoded).unwrap();
        prop_assert_eq!(decoded.len(), data.len());
        prop_assert_eq!(reader.error_count(), replaced.len());
        let first = *replaced.iter().next().unwrap();
        prop_assert_eq!(reader.first_error_position(), Some((1, first + 1)));
    }

    #[test]
    fn codec_counts_every_bad_symbol(
        data in prop::collection::vec(any::<u8>(), 8..200),
        bad in prop::collection::vec(any::<prop::sample::Index>(), 1..5),
    ) {
        let mut text: Vec<u8> = encode(&data, &[32], 1000)
            .into_iter()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        let mut replaced = std::collections::BTreeSet::new();
        for index in bad {
            replaced.insert(index.index(text.len()));
        }
        for &at in &replaced {
            text[at] = b'*';
        }

        let mut reader = Base64Reader::new(text.as_slice());
        let mut decoded = Vec::new();
        reader.read_to_end(&mut decoded).unwrap();
        prop_assert_eq!(decoded.len(), data.len());
        prop_assert_eq!(reader.error_count(), replaced.len());
        let first = *replaced.iter().next().unwrap();
        prop_assert_eq!(reader.first_error_position(), Some((1, first + 1)));
    }
}
