//! Validation helpers that produce API errors directly

use super::types::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            message: message.to_string(),
        });
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a framed unit read from a stream is complete
///
/// Unlike [`length`] this reports a [`Error::Format`], since a short unit
/// means the ciphertext was truncated rather than misused by the caller.
#[inline(always)]
pub fn framed_length(
    context: &'static str,
    what: &'static str,
    actual: usize,
    expected: usize,
) -> Result<()> {
    if actual != expected {
        return Err(Error::Format {
            context,
            message: format!("{} len={} (should be {})", what, actual, expected),
        });
    }
    Ok(())
}
