//! Error handling for the pek scheme

use pek_algorithms::error::Error as PrimitiveError;
use pek_api::error::Error as CoreError;
use thiserror::Error as ThisError;

/// Error type for pek encryption and decryption
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Error from a primitive
    #[error("pek primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// Error from a lower pek layer
    #[error("{0}")]
    Api(#[from] CoreError),

    /// The text ended before a whole ephemeral key was decoded
    #[error("decoding error. ephemeral public key len={actual} != 32")]
    TruncatedEphemeralKey {
        /// Bytes decoded before the text ran out
        actual: usize,
    },

    /// The ephemeral x-coordinate is not on the curve
    #[error("decoding error: ephemeral public key is not valid")]
    InvalidEphemeralKey,

    /// A ciphertext chunk was cut short
    #[error("decoding error: truncated block. len={actual} (should be 32)")]
    TruncatedChunk {
        /// Bytes decoded before the text ran out
        actual: usize,
    },

    /// Invalid base64 symbols were replaced while decoding
    #[error("error decoding base64. {message}. total bad characters: {count}")]
    CorruptInput {
        /// Description of the last bad symbol
        message: String,
        /// Number of bad symbols
        count: usize,
    },

    /// Reading plaintext or writing output failed
    #[error("{context}: {message}")]
    Io {
        /// Which stream failed
        context: &'static str,
        /// The underlying error
        message: String,
    },
}

/// Result type for pek operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            context: "pek stream",
            message: err.to_string(),
        }
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::TruncatedEphemeralKey { .. }
            | Error::InvalidEphemeralKey
            | Error::TruncatedChunk { .. } => CoreError::Format {
                context: "pek decrypt",
                message: err.to_string(),
            },
            Error::CorruptInput { message, count } => CoreError::CorruptInput { message, count },
            Error::Io { context, message } => CoreError::Io { context, message },
        }
    }
}
