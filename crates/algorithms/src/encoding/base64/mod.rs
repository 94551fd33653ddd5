//! Streaming base64 without padding
//!
//! The writer emits symbols as soon as each input byte arrives and breaks
//! lines at a fixed width. The reader works on UTF-8 characters, skips
//! whitespace anywhere, counts bad symbols instead of stopping on them, and
//! can report whether any non-whitespace input remains.
//!
//! Neither side knows the payload length; framing is up to the caller.

mod reader;
mod writer;

pub use reader::Base64Reader;
pub use writer::Base64Writer;

/// The standard base64 alphabet
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Map a symbol to its 6-bit value
#[inline]
pub fn decode_symbol(symbol: u8) -> Option<u8> {
    match symbol {
        b'A'..=b'Z' => Some(symbol - b'A'),
        b'a'..=b'z' => Some(symbol - b'a' + 26),
        b'0'..=b'9' => Some(symbol - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

/// Map a 6-bit value to its symbol
#[inline]
pub fn encode_symbol(value: u8) -> u8 {
    ALPHABET[(value & 0x3F) as usize]
}

/// Map a decoded text character to its 6-bit value
#[inline]
pub fn decode_char(c: char) -> Option<u8> {
    u8::try_from(c).ok().and_then(decode_symbol)
}

/// Any Unicode whitespace, including no-break space
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// True if every byte is a base64 symbol
pub fn is_base64(text: &[u8]) -> bool {
    text.iter().all(|&b| decode_symbol(b).is_some())
}
