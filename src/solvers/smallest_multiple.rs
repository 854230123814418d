//! Smallest positive number evenly divisible by every integer in `1..=max_divisor`.
//!
//! [`by_prime_powers`] factorises the answer directly: for each prime `p <= k` the answer contains
//! the largest power `p^a <= k`. For `k = 4`: `2^2 * 3 = 12`. The primes come from the sieve.

use eulerkit_primes::eratosthenes_sieve;

use super::{SolverError, SolverResult};

/// Exclusive ceiling for the stepping search.
pub const SEARCH_CEILING: u64 = 100_000_000_000_000;

/// Largest `k` for which the answer fits in a `u64`; `lcm(1..=47)` already overflows.
pub const LARGEST_FITTING_DIVISOR: u64 = 46;

/// Divisors covered by the default stepping step.
const DEFAULT_STEP_PREFIX: u64 = 10;

const CONTEXT: &str = "smallest multiple";

/// Try every multiple of `step` below [`SEARCH_CEILING`] until one is divisible by all of
/// `1..=max_divisor`.
///
/// `step` should be chosen well; any known common multiple of a prefix of the divisors works
/// (e.g. 2520 for divisors up to 20, see [`default_step`]). Returns `Ok(None)` if nothing below
/// the ceiling qualifies.
pub fn by_stepping(max_divisor: u64, step: u64) -> SolverResult<Option<u64>> {
    if step == 0 {
        return Err(SolverError::ZeroDivisor { context: "step" });
    }
    if max_divisor > LARGEST_FITTING_DIVISOR {
        return Err(SolverError::Overflow { context: CONTEXT });
    }
    if max_divisor <= 1 {
        return Ok(Some(1));
    }
    let mut number = step;
    while number < SEARCH_CEILING {
        if (1..=max_divisor).all(|d| number % d == 0) {
            return Ok(Some(number));
        }
        number = match number.checked_add(step) {
            Some(n) => n,
            None => break,
        };
    }
    Ok(None)
}

/// A step that always divides the answer: `lcm(1..=min(max_divisor, 10))`.
pub fn default_step(max_divisor: u64) -> SolverResult<u64> {
    by_prime_powers(max_divisor.min(DEFAULT_STEP_PREFIX))
}

/// Multiply together the largest power of every prime that does not exceed `max_divisor`.
#[tracing::instrument(skip_all, fields(max_divisor = max_divisor))]
pub fn by_prime_powers(max_divisor: u64) -> SolverResult<u64> {
    // Checked before sieving so a huge bound never sizes a mask.
    if max_divisor > LARGEST_FITTING_DIVISOR {
        return Err(SolverError::Overflow { context: CONTEXT });
    }
    let primes = eratosthenes_sieve(max_divisor)?;
    let mut solution: u64 = 1;
    for p in primes {
        let p = p as u64;
        let mut power = p;
        while let Some(next) = power.checked_mul(p).filter(|&n| n <= max_divisor) {
            power = next;
        }
        solution = solution
            .checked_mul(power)
            .ok_or(SolverError::Overflow { context: CONTEXT })?;
    }
    tracing::debug!(solution, "smallest multiple found");
    Ok(solution)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn project_euler_five() {
        assert_eq!(by_prime_powers(20), Ok(232_792_560));
        assert_eq!(by_stepping(20, 2520), Ok(Some(232_792_560)));
    }

    #[test]
    fn up_to_ten() {
        assert_eq!(by_prime_powers(10), Ok(2520));
        assert_eq!(by_stepping(10, 1), Ok(Some(2520)));
    }

    #[test]
    fn trivial_divisor_ranges() {
        assert_eq!(by_prime_powers(0), Ok(1));
        assert_eq!(by_prime_powers(1), Ok(1));
        assert_eq!(by_prime_powers(2), Ok(2));
        assert_eq!(by_prime_powers(4), Ok(12));
    }

    #[test]
    fn small_ranges_agree() {
        for k in 1..=16 {
            assert_eq!(by_stepping(k, 1).map(|x| x.unwrap_or(0)), by_prime_powers(k), "k = {k}");
        }
    }

    #[test]
    fn default_step_agrees_with_prime_powers() {
        for k in 0..=20 {
            let step = default_step(k).unwrap();
            assert_eq!(by_stepping(k, step), by_prime_powers(k).map(Some), "k = {k}");
        }
        assert_eq!(default_step(20), Ok(2520));
        assert_eq!(default_step(5), Ok(60));
    }

    #[test]
    fn trivial_ranges_ignore_the_step() {
        assert_eq!(by_stepping(0, 2520), Ok(Some(1)));
        assert_eq!(by_stepping(1, 7), Ok(Some(1)));
    }

    #[test]
    fn largest_fitting_divisor_is_exact() {
        assert_eq!(by_prime_powers(LARGEST_FITTING_DIVISOR), Ok(9_419_588_158_802_421_600));
        assert_eq!(
            by_prime_powers(LARGEST_FITTING_DIVISOR + 1),
            Err(SolverError::Overflow { context: CONTEXT })
        );
    }

    #[test]
    fn huge_divisor_overflows_without_sieving() {
        let err = SolverError::Overflow { context: CONTEXT };
        assert_eq!(by_prime_powers(u64::MAX), Err(err.clone()));
        assert_eq!(by_prime_powers(1_000_000_000_000), Err(err.clone()));
        assert_eq!(by_stepping(u64::MAX, 2520), Err(err));
    }

    #[test]
    fn zero_step_is_rejected() {
        assert_eq!(by_stepping(10, 0), Err(SolverError::ZeroDivisor { context: "step" }));
    }

    #[test]
    fn odd_step_near_ceiling_gives_none() {
        // The only candidate below the ceiling is the odd step itself.
        assert_eq!(by_stepping(2, SEARCH_CEILING / 2 + 1), Ok(None));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(by_prime_powers(100), Err(SolverError::Overflow { context: CONTEXT }));
    }
}
