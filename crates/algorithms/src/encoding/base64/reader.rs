//! Base64 reader

use std::io::{self, BufRead, BufReader, Read};

use tracing::trace;

use super::{decode_char, is_whitespace};

/// Decodes base64 text back to bytes
///
/// The text is read as UTF-8 characters. Whitespace is ignored wherever it
/// appears. A character outside the alphabet is counted once as an error,
/// decoded as zero, and reading carries on; callers check
/// [`has_errors`](Self::has_errors) once they are done. A malformed UTF-8
/// sequence counts as one invalid character.
///
/// Positions are 1-based lines and columns counted in characters.
#[derive(Debug)]
pub struct Base64Reader<R: Read> {
    inner: BufReader<R>,
    lookahead: Option<char>,
    bit_offset: u8,
    current: u8,
    error_count: usize,
    last_error: Option<String>,
    first_error_at: Option<(usize, usize)>,
    line: usize,
    column: usize,
}

impl<R: Read> Base64Reader<R> {
    /// Wrap a text source
    pub fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
            lookahead: None,
            bit_offset: 0,
            current: 0,
            error_count: 0,
            last_error: None,
            first_error_at: None,
            line: 1,
            column: 0,
        }
    }

    /// Number of invalid symbols seen so far
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Description of the most recent invalid symbol
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Line and column (both 1-based) of the first invalid symbol
    pub fn first_error_position(&self) -> Option<(usize, usize)> {
        self.first_error_at
    }

    /// True once any invalid symbol has been seen
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// True when nothing but whitespace is left.
    ///
    /// Consumes the whitespace it skips and keeps the first other character
    /// for the next read.
    pub fn is_eof(&mut self) -> io::Result<bool> {
        if self.lookahead.is_some() {
            return Ok(false);
        }
        loop {
            match self.next_char()? {
                None => return Ok(true),
                Some(c) if is_whitespace(c) => continue,
                Some(c) => {
                    self.lookahead = Some(c);
                    return Ok(false);
                }
            }
        }
    }

    /// Fill `buf` with decoded bytes.
    ///
    /// Returns fewer than `buf.len()` bytes only when the text runs out.
    /// Bits left over from a partial symbol carry into the next call.
    pub fn read_up_to(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            let Some(c) = self.next_char()? else {
                break;
            };
            if is_whitespace(c) {
                continue;
            }
            let value = self.decode(c);
            if let Some(decoded) = self.push_bits(value) {
                buf[filled] = decoded;
                filled += 1;
            }
        }
        Ok(filled)
    }

    /// Read up to `n` bytes into a new vector
    pub fn read_chunk(&mut self, n: usize) -> io::Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        let filled = self.read_up_to(&mut buf)?;
        buf.truncate(filled);
        Ok(buf)
    }

    fn decode(&mut self, c: char) -> u8 {
        match decode_char(c) {
            Some(value) => value,
            None => {
                self.error_count += 1;
                self.last_error = Some(format!(
                    "invalid base64 character '{}' at line {}, column {}",
                    c.escape_debug(),
                    self.line,
                    self.column
                ));
                if self.first_error_at.is_none() {
                    self.first_error_at = Some((self.line, self.column));
                }
                trace!(
                    line = self.line,
                    column = self.column,
                    count = self.error_count,
                    "invalid base64 character"
                );
                0
            }
        }
    }

    /// Append six bits, returning a byte whenever one is completed
    fn push_bits(&mut self, value: u8) -> Option<u8> {
        let out = match self.bit_offset {
            0 => {
                self.current = value << 2;
                None
            }
            6 => {
                let byte = self.current | (value >> 4);
                self.current = (value & 0x0F) << 4;
                Some(byte)
            }
            4 => {
                let byte = self.current | (value >> 2);
                self.current = (value & 0x03) << 6;
                Some(byte)
            }
            _ => {
                let byte = self.current | value;
                self.current = 0;
                Some(byte)
            }
        };
        self.bit_offset = (self.bit_offset + 6) % 8;
        out
    }

    /// Next character with the line and column advanced past it
    fn next_char(&mut self) -> io::Result<Option<char>> {
        if let Some(c) = self.lookahead.take() {
            return Ok(Some(c));
        }
        let Some(lead) = self.peek_byte()? else {
            return Ok(None);
        };
        self.inner.consume(1);

        let c = match utf8_width(lead) {
            1 => char::from(lead),
            0 => char::REPLACEMENT_CHARACTER,
            width => {
                let mut seq = [lead, 0, 0, 0];
                let mut len = 1;
                while len < width {
                    match self.peek_byte()? {
                        Some(byte) if byte & 0xC0 == 0x80 => {
                            self.inner.consume(1);
                            seq[len] = byte;
                            len += 1;
                        }
                        _ => break,
                    }
                }
                std::str::from_utf8(&seq[..len])
                    .ok()
                    .and_then(|s| s.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER)
            }
        };

        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Ok(Some(c))
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Length of the UTF-8 sequence a lead byte opens, 0 if it cannot open one
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

impl<R: Read> Read for Base64Reader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_up_to(buf)
    }
}
