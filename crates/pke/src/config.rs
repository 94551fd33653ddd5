//! Output layout settings

use pek_api::error::{validate, Result};
use pek_params::utils::encoding::BASE64_LINE_WIDTH;

/// Settings for the ciphertext text layout
///
/// None of these affect the decoded bytes; any reader accepts text written
/// with any width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PekConfig {
    /// Symbols per line before a line break
    pub line_width: usize,
}

impl Default for PekConfig {
    fn default() -> Self {
        Self {
            line_width: BASE64_LINE_WIDTH,
        }
    }
}

impl PekConfig {
    /// Standard layout, 47 symbols per line
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different line width
    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    /// Reject settings the writer cannot honour
    pub fn validate(&self) -> Result<()> {
        validate::parameter(
            self.line_width > 0,
            "PekConfig",
            "line_width must be at least one symbol",
        )
    }
}
