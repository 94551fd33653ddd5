//! Error handling for key agreement

use core::fmt;

use pek_algorithms::error::Error as PrimitiveError;
use pek_api::error::Error as CoreError;

/// Error type for key agreement operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Primitive error
    Primitive(PrimitiveError),

    /// Invalid key format
    InvalidKey {
        /// Which key was rejected
        key_type: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Invalid ciphertext (ephemeral public value)
    InvalidCiphertext {
        /// Algorithm that rejected it
        algorithm: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// Result type for key agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::InvalidCiphertext { algorithm, reason } => {
                write!(f, "Invalid {} ciphertext: {}", algorithm, reason)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidKey { key_type, reason } => CoreError::Curve {
                context: key_type,
                message: reason.to_string(),
            },
            Error::InvalidCiphertext { algorithm, reason } => CoreError::Curve {
                context: algorithm,
                message: reason.to_string(),
            },
        }
    }
}
