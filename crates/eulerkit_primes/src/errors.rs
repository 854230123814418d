//! Error taxonomy for the prime core.
//!
//! Bound validation is the only failure mode: once a [`Limit`](crate::Limit) exists, every
//! generator is infallible.

use miette::Diagnostic;
use thiserror::Error;

/// Why a value was rejected as a sieve bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Integer below zero.
    Negative,
    /// Float with a non-zero fractional part.
    Fractional,
    /// `NaN` or an infinity.
    NotFinite,
    /// Whole number above [`Limit::MAX`](crate::Limit::MAX).
    TooLarge,
    /// Text that is not a number at all.
    NotNumeric,
}

impl InvalidReason {
    /// Return the user-facing description for this reason.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            InvalidReason::Negative => "must not be negative",
            InvalidReason::Fractional => "has a fractional part",
            InvalidReason::NotFinite => "is not a finite number",
            InvalidReason::TooLarge => "does not fit in the addressable range",
            InvalidReason::NotNumeric => "is not a number",
        }
    }
}

/// Errors raised by the prime core.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum PrimeError {
    #[error("InvalidArgument: limit '{value}' {}", .reason.as_str())]
    #[diagnostic(
        code(eulerkit::invalid_argument),
        help("pass a non-negative integer, or a float with no fractional part (e.g. `100` or `100.0`)")
    )]
    InvalidArgument { value: String, reason: InvalidReason },
}

impl PrimeError {
    /// Build an `InvalidArgument` error for a rejected input.
    pub fn invalid(value: impl ToString, reason: InvalidReason) -> Self {
        PrimeError::InvalidArgument {
            value: value.to_string(),
            reason,
        }
    }

    /// Return the rejection reason.
    pub fn reason(&self) -> InvalidReason {
        match self {
            PrimeError::InvalidArgument { reason, .. } => *reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_is_prefixed() {
        let err = PrimeError::invalid(10.5, InvalidReason::Fractional);
        assert_eq!(err.to_string(), "InvalidArgument: limit '10.5' has a fractional part");
    }

    #[test]
    fn diagnostic_code_is_stable() {
        let err = PrimeError::invalid("abc", InvalidReason::NotNumeric);
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("eulerkit::invalid_argument"));
        assert!(err.help().is_some());
    }
}
