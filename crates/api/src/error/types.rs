//! Error type definitions for pek operations

use thiserror::Error as ThisError;

/// Primary error type for pek operations
///
/// Every fatal condition aborts the current encrypt or decrypt call and is
/// reported through one of these variants. `CorruptInput` is the only one
/// raised after output has already been produced.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A point failed the curve equation, or an x-coordinate could not be
    /// decompressed
    #[error("curve error in {context}: {message}")]
    Curve {
        context: &'static str,
        message: String,
    },

    /// Truncated or otherwise malformed ciphertext framing
    #[error("format error in {context}: {message}")]
    Format {
        context: &'static str,
        message: String,
    },

    /// Invalid base64 symbols were seen while decoding
    #[error("error decoding base64. {message}. total bad characters: {count}")]
    CorruptInput { message: String, count: usize },

    /// Field division by the zero element
    #[error("division by zero in {context}")]
    DivisionByZero { context: &'static str },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Reading or writing one of the caller's streams failed
    #[error("{context}: {message}")]
    Io {
        context: &'static str,
        message: String,
    },
}

/// Result type for pek operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Curve { message, .. } => Self::Curve { context, message },
            Self::Format { message, .. } => Self::Format { context, message },
            Self::CorruptInput { message, count } => Self::CorruptInput { message, count },
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Io { message, .. } => Self::Io { context, message },
        }
    }

    /// True for the two conditions that mean the ciphertext itself is bad
    pub fn is_ciphertext_error(&self) -> bool {
        matches!(self, Self::Format { .. } | Self::CorruptInput { .. })
    }
}
