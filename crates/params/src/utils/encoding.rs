//! Constants for the streaming base64 text format

/// Symbols emitted per line before a line break is inserted
pub const BASE64_LINE_WIDTH: usize = 47;

/// Length of a base64 key string encoding 32 bytes (no padding)
pub const KEY_STRING_LENGTH: usize = 43;

/// Bits carried by one base64 symbol
pub const BASE64_SYMBOL_BITS: usize = 6;
