//! Base64 writer

use std::io::{self, Write};

use super::encode_symbol;
use crate::error::{validate, Result};
use pek_params::utils::encoding::BASE64_LINE_WIDTH;

/// Encodes bytes to base64 text on the fly
///
/// Each byte is turned into symbols as soon as it is written; up to four
/// leftover bits wait for the next byte. Dropping the writer without calling
/// [`close`](Self::close) loses that final partial symbol.
#[derive(Debug)]
pub struct Base64Writer<W: Write> {
    inner: W,
    pending: u8,
    pending_bits: u8,
    column: usize,
    line_width: usize,
    symbols: u64,
}

impl<W: Write> Base64Writer<W> {
    /// Writer with the standard 47-symbol lines
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            pending: 0,
            pending_bits: 0,
            column: 0,
            line_width: BASE64_LINE_WIDTH,
            symbols: 0,
        }
    }

    /// Writer with a custom line width, which must be positive
    pub fn with_line_width(inner: W, line_width: usize) -> Result<Self> {
        validate::parameter(line_width > 0, "line_width", "must be at least one symbol")?;
        let mut writer = Self::new(inner);
        writer.line_width = line_width;
        Ok(writer)
    }

    /// Symbols emitted so far, not counting line breaks
    pub fn symbols_written(&self) -> u64 {
        self.symbols
    }

    /// Flush the partial symbol and a final line break, then hand back the
    /// underlying writer.
    ///
    /// The output always ends in exactly one line break. When the last line
    /// is already full, the break emitted by wrapping is that final break and
    /// no empty line follows it. Empty input closes as a lone line break.
    pub fn close(mut self) -> io::Result<W> {
        let mut out = Vec::with_capacity(3);
        if self.pending_bits > 0 {
            self.push_symbol(&mut out, self.pending);
            self.pending = 0;
            self.pending_bits = 0;
        }
        if self.column > 0 || self.symbols == 0 {
            out.push(b'\n');
        }
        self.inner.write_all(&out)?;
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn encode_byte(&mut self, out: &mut Vec<u8>, byte: u8) {
        match self.pending_bits {
            0 => {
                self.push_symbol(out, byte >> 2);
                self.pending = (byte & 0x03) << 4;
                self.pending_bits = 2;
            }
            2 => {
                self.push_symbol(out, self.pending | (byte >> 4));
                self.pending = (byte & 0x0F) << 2;
                self.pending_bits = 4;
            }
            _ => {
                self.push_symbol(out, self.pending | (byte >> 6));
                self.push_symbol(out, byte & 0x3F);
                self.pending = 0;
                self.pending_bits = 0;
            }
        }
    }

    fn push_symbol(&mut self, out: &mut Vec<u8>, value: u8) {
        out.push(encode_symbol(value));
        self.symbols += 1;
        self.column += 1;
        if self.column == self.line_width {
            out.push(b'\n');
            self.column = 0;
        }
    }
}

impl<W: Write> Write for Base64Writer<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut out = Vec::with_capacity(buf.len() * 4 / 3 + 4);
        for &byte in buf {
            self.encode_byte(&mut out, byte);
        }
        self.inner.write_all(&out)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
