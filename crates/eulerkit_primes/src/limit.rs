//! Validated sieve bounds.
//!
//! A [`Limit`] is an inclusive upper bound that has already passed validation. Callers hand over
//! whatever numeric shape they have (a Rust integer, a float, CLI text, or a dynamic [`Numeric`])
//! and [`IntoLimit`] decides whether it is a lossless non-negative integer.
//!
//! ## Rules
//!
//! - Integers are accepted directly; negative integers are rejected.
//! - Floats are accepted only when finite and whole (`100.0` → `100`, `10.5` is rejected).
//! - Text is accepted when it parses as one of the above.
//! - Bounds above [`Limit::MAX`] are rejected: their odd-only mask would exceed `isize::MAX`
//!   entries.
//! - Everything is checked before any allocation happens.

use std::fmt;
use std::str::FromStr;

use crate::errors::{InvalidReason, PrimeError};

/// An inclusive, non-negative upper bound for prime generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Limit(usize);

impl Limit {
    /// Largest accepted bound. `mask_len(MAX) == isize::MAX as usize`.
    pub const MAX: Limit = Limit(usize::MAX - 1);

    /// Wrap a `usize` bound, saturating at [`Limit::MAX`].
    ///
    /// `usize::MAX` is divisible by 3 on every target, so saturating never drops a prime.
    #[inline]
    pub const fn new(value: usize) -> Self {
        if value > Self::MAX.0 {
            Self::MAX
        } else {
            Limit(value)
        }
    }

    /// Return the bound as a `usize`.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Limit> for usize {
    fn from(limit: Limit) -> usize {
        limit.0
    }
}

impl FromStr for Limit {
    type Err = PrimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        limit_from_str(s)
    }
}

/// A dynamically typed numeric input, for callers that receive untyped values.
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Int(value)
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Numeric::Text(value.to_string())
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for &str {}
    impl Sealed for String {}
    impl Sealed for &super::Numeric {}
    impl Sealed for super::Numeric {}
    impl Sealed for super::Limit {}
}

/// Conversion into a validated [`Limit`].
///
/// Sealed: the accepted input shapes are fixed by this crate.
pub trait IntoLimit: sealed::Sealed {
    /// Validate `self` as a sieve bound.
    ///
    /// ## Errors
    /// - `PrimeError::InvalidArgument` if the value is not a lossless non-negative integer.
    fn into_limit(self) -> Result<Limit, PrimeError>;
}

impl IntoLimit for Limit {
    #[inline]
    fn into_limit(self) -> Result<Limit, PrimeError> {
        Ok(self)
    }
}

impl IntoLimit for usize {
    #[inline]
    fn into_limit(self) -> Result<Limit, PrimeError> {
        limit_from_usize(self, &self)
    }
}

impl IntoLimit for u32 {
    #[inline]
    fn into_limit(self) -> Result<Limit, PrimeError> {
        usize::try_from(self)
            .map_err(|_| PrimeError::invalid(self, InvalidReason::TooLarge))
            .and_then(|n| limit_from_usize(n, &self))
    }
}

impl IntoLimit for u64 {
    #[inline]
    fn into_limit(self) -> Result<Limit, PrimeError> {
        usize::try_from(self)
            .map_err(|_| PrimeError::invalid(self, InvalidReason::TooLarge))
            .and_then(|n| limit_from_usize(n, &self))
    }
}

impl IntoLimit for i32 {
    #[inline]
    fn into_limit(self) -> Result<Limit, PrimeError> {
        i64::from(self).into_limit()
    }
}

impl IntoLimit for i64 {
    fn into_limit(self) -> Result<Limit, PrimeError> {
        if self < 0 {
            return Err(PrimeError::invalid(self, InvalidReason::Negative));
        }
        usize::try_from(self)
            .map_err(|_| PrimeError::invalid(self, InvalidReason::TooLarge))
            .and_then(|n| limit_from_usize(n, &self))
    }
}

impl IntoLimit for f32 {
    #[inline]
    fn into_limit(self) -> Result<Limit, PrimeError> {
        limit_from_f64(f64::from(self), &self)
    }
}

impl IntoLimit for f64 {
    #[inline]
    fn into_limit(self) -> Result<Limit, PrimeError> {
        limit_from_f64(self, &self)
    }
}

impl IntoLimit for &str {
    #[inline]
    fn into_limit(self) -> Result<Limit, PrimeError> {
        limit_from_str(self)
    }
}

impl IntoLimit for String {
    #[inline]
    fn into_limit(self) -> Result<Limit, PrimeError> {
        limit_from_str(&self)
    }
}

impl IntoLimit for &Numeric {
    fn into_limit(self) -> Result<Limit, PrimeError> {
        match self {
            Numeric::Int(n) => (*n).into_limit(),
            Numeric::Float(x) => (*x).into_limit(),
            Numeric::Text(s) => limit_from_str(s),
        }
    }
}

impl IntoLimit for Numeric {
    #[inline]
    fn into_limit(self) -> Result<Limit, PrimeError> {
        (&self).into_limit()
    }
}

/// Convert a float bound, reporting errors with the caller's own spelling.
fn limit_from_f64(value: f64, raw: &dyn fmt::Display) -> Result<Limit, PrimeError> {
    if !value.is_finite() {
        return Err(PrimeError::invalid(raw, InvalidReason::NotFinite));
    }
    if value.fract() != 0.0 {
        return Err(PrimeError::invalid(raw, InvalidReason::Fractional));
    }
    if value < 0.0 {
        return Err(PrimeError::invalid(raw, InvalidReason::Negative));
    }
    // `usize::MAX as f64` rounds up to 2^BITS, which is itself out of range.
    if value >= usize::MAX as f64 {
        return Err(PrimeError::invalid(raw, InvalidReason::TooLarge));
    }
    limit_from_usize(value as usize, raw)
}

fn limit_from_usize(value: usize, raw: &dyn fmt::Display) -> Result<Limit, PrimeError> {
    if value > Limit::MAX.0 {
        return Err(PrimeError::invalid(raw, InvalidReason::TooLarge));
    }
    Ok(Limit(value))
}

fn limit_from_str(input: &str) -> Result<Limit, PrimeError> {
    let text = input.trim();
    if let Ok(n) = text.parse::<usize>() {
        return limit_from_usize(n, &input);
    }
    if let Ok(n) = text.parse::<i64>() {
        // Parses as i64 but not usize: negative, or a signed zero.
        return n.into_limit().map_err(|e| PrimeError::invalid(input, e.reason()));
    }
    match text.parse::<f64>() {
        Ok(x) => limit_from_f64(x, &input),
        Err(_) => Err(PrimeError::invalid(input, InvalidReason::NotNumeric)),
    }
}
