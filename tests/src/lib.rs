//! Testing utilities for the pek workspace

use rand::{CryptoRng, RngCore};

/// Install a `tracing` subscriber honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Number of base64 symbols in `text`, ignoring whitespace
pub fn symbol_count(text: &[u8]) -> usize {
    text.iter().filter(|b| !b.is_ascii_whitespace()).count()
}

/// Symbols a ciphertext of `plaintext_len` bytes carries: the 32-byte key,
/// one chunk per whole 32 bytes and the padded final chunk
pub fn expected_symbols(plaintext_len: usize) -> usize {
    let decoded = 32 + 32 * (plaintext_len / 32 + 1);
    (decoded * 8 + 5) / 6
}

/// Re-wrap base64 text, putting `separator` after every `every` symbols
pub fn rewrap(text: &[u8], every: usize, separator: &str) -> Vec<u8> {
    let symbols: Vec<u8> = text
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let mut out = Vec::with_capacity(symbols.len() * 2);
    for (i, chunk) in symbols.chunks(every.max(1)).enumerate() {
        if i > 0 {
            out.extend_from_slice(separator.as_bytes());
        }
        out.extend_from_slice(chunk);
    }
    out
}

/// Randomness that repeats one byte, so an ephemeral secret is `[fill; 32]`
pub struct FixedRng(pub u8);

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        u32::from_ne_bytes([self.0; 4])
    }

    fn next_u64(&mut self) -> u64 {
        u64::from_ne_bytes([self.0; 8])
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(self.0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FixedRng {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_symbols() {
        assert_eq!(expected_symbols(0), 86);
        assert_eq!(expected_symbols(31), 86);
        assert_eq!(expected_symbols(32), 128);
    }

    #[test]
    fn test_rewrap() {
        assert_eq!(rewrap(b"ABCD\nEF\n", 3, " "), b"ABC DEF");
        assert_eq!(symbol_count(b" A\tB\r\nC "), 3);
    }
}
