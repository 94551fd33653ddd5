//! Error handling for pek primitives

use std::borrow::Cow;
use std::fmt;

use pek_api::Error as CoreError;

pub mod validate;

/// The error type for primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A coordinate pair is not on the curve, or a point cannot be encoded
    Curve {
        /// Operation that produced the bad point
        context: &'static str,
        /// What went wrong
        reason: &'static str,
    },

    /// Inversion of the zero field element
    DivisionByZero {
        /// Operation that attempted the division
        context: &'static str,
    },

    /// Processing error during an operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Curve error
    pub fn curve(context: &'static str, reason: &'static str) -> Self {
        Error::Curve { context, reason }
    }
}

/// Result type for primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Curve { context, reason } => {
                write!(f, "Curve error in {}: {}", context, reason)
            }
            Error::DivisionByZero { context } => {
                write!(f, "Division by zero in {}", context)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "primitive parameter",
                },
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Curve { context, reason } => CoreError::Curve {
                context,
                message: reason.to_string(),
            },
            Error::DivisionByZero { context } => CoreError::DivisionByZero { context },
            Error::Processing { operation, details } => CoreError::Format {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}
