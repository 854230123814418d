//! Numeric puzzle solvers.
//!
//! Each solver offers two or three competing strategies that must agree on every input:
//! - `even_fibonacci` - sum of the even Fibonacci numbers below a bound
//! - `multiples` - sum of the numbers up to a bound divisible by any of a set of divisors
//! - `smallest_multiple` - smallest number divisible by every integer in `1..=k`
//!
//! All solvers are pure. Configuration (divisor lists, step sizes) is passed explicitly.

pub mod even_fibonacci;
pub mod multiples;
pub mod smallest_multiple;

use eulerkit_primes::PrimeError;
use thiserror::Error;

/// Errors shared by the solvers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("ZeroDivisionError: {context} must be non-zero")]
    ZeroDivisor { context: &'static str },

    #[error("OverflowError: result of {context} does not fit in 64 bits")]
    Overflow { context: &'static str },

    #[error(transparent)]
    Prime(#[from] PrimeError),
}

pub type SolverResult<T> = Result<T, SolverError>;

/// Greatest common divisor (Euclid).
#[inline]
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, `None` on overflow. `lcm(0, x) == 0`.
#[inline]
pub fn checked_lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
    }

    #[test]
    fn lcm_basics() {
        assert_eq!(checked_lcm(4, 6), Some(12));
        assert_eq!(checked_lcm(3, 5), Some(15));
        assert_eq!(checked_lcm(0, 5), Some(0));
        assert_eq!(checked_lcm(u64::MAX, u64::MAX - 1), None);
    }

    #[test]
    fn errors_render_with_kind_prefix() {
        let err = SolverError::Overflow { context: "prime powers" };
        assert_eq!(err.to_string(), "OverflowError: result of prime powers does not fit in 64 bits");
    }
}
