//! Bounded prime generation for the eulerkit solvers.
//!
//! This crate is intentionally small and dependency-light. Given an inclusive bound `N` it produces
//! the ordered list of every prime `<= N`, using one of two competing strategies:
//! - [`trial_division`]: the baseline; each odd candidate is tested against the primes found so far.
//! - [`eratosthenes`]: a sieve whose elimination mask covers odd numbers only.
//!
//! [`PrimeSeq`] offers the same sequence lazily.
//!
//! ## Notes
//!
//! - Pure functions: **no IO**, no global state, no caching between calls.
//! - Bounds below 2 are valid and produce an empty sequence, in every strategy.
//! - The `usize` kernels are infallible. The validated entry points ([`prime_sieve`],
//!   [`eratosthenes_sieve`], [`primes_upto`]) accept anything implementing [`IntoLimit`] and fail
//!   with [`PrimeError::InvalidArgument`] before doing any work.

pub mod errors;
pub mod limit;
pub mod seq;
pub mod sieve;
pub mod trial;

pub use errors::{InvalidReason, PrimeError};
pub use limit::{IntoLimit, Limit, Numeric};
pub use seq::{PrimeSeq, Primes};
pub use sieve::eratosthenes;
pub use trial::trial_division;

/// Prime generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Odd-only sieve of Eratosthenes.
    #[default]
    Sieve,
    /// Trial division against previously found primes.
    TrialDivision,
    /// Lazy trial division, collected.
    Lazy,
}

impl Strategy {
    /// Every strategy, in a stable order.
    pub const ALL: [Strategy; 3] = [Strategy::Sieve, Strategy::TrialDivision, Strategy::Lazy];

    /// Short name used in reports and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Sieve => "sieve",
            Strategy::TrialDivision => "trial",
            Strategy::Lazy => "lazy",
        }
    }

    /// Run this strategy on an already validated bound.
    pub fn primes(self, limit: Limit) -> Vec<usize> {
        match self {
            Strategy::Sieve => eratosthenes(limit.get()),
            Strategy::TrialDivision => trial_division(limit.get()),
            Strategy::Lazy => PrimeSeq::new(limit).iter().collect(),
        }
    }
}

/// Collect every prime `<= limit` with the odd-only sieve.
///
/// ## Errors
/// - [`PrimeError::InvalidArgument`] if `limit` is negative, fractional, non-finite, or not numeric.
///
/// ## Examples
/// ```rust
/// use eulerkit_primes::eratosthenes_sieve;
/// assert_eq!(eratosthenes_sieve(10).unwrap(), vec![2, 3, 5, 7]);
/// assert_eq!(eratosthenes_sieve(10.0).unwrap(), vec![2, 3, 5, 7]);
/// assert!(eratosthenes_sieve(10.5).is_err());
/// ```
pub fn eratosthenes_sieve(limit: impl IntoLimit) -> Result<Vec<usize>, PrimeError> {
    let limit = limit.into_limit()?;
    Ok(eratosthenes(limit.get()))
}

/// The public sieve entry point; same contract as [`eratosthenes_sieve`].
#[inline]
pub fn prime_sieve(limit: impl IntoLimit) -> Result<Vec<usize>, PrimeError> {
    eratosthenes_sieve(limit)
}

/// Collect every prime `<= limit` by trial division.
///
/// ## Errors
/// - [`PrimeError::InvalidArgument`], under the same rules as [`eratosthenes_sieve`].
pub fn primes_upto(limit: impl IntoLimit) -> Result<Vec<usize>, PrimeError> {
    let limit = limit.into_limit()?;
    Ok(trial_division(limit.get()))
}
