//! Sum of the numbers in `0..=upto` divisible by at least one divisor.
//!
//! The two scanning strategies test every number; [`inclusion_exclusion`] uses Gauss's formula
//! `d * m * (m + 1) / 2` (with `m = upto / d`) for the multiples of `d` and corrects for numbers
//! counted more than once by alternately subtracting and adding the sums for the least common
//! multiple of every subset of divisors.

use super::{SolverError, SolverResult, checked_lcm};

const CONTEXT: &str = "multiples sum";

fn ensure_non_zero(divisors: &[u64]) -> SolverResult<()> {
    if divisors.contains(&0) {
        return Err(SolverError::ZeroDivisor { context: "divisor" });
    }
    Ok(())
}

fn scan(upto: u64, divisors: &[u64], divides: impl Fn(u64, u64) -> bool) -> SolverResult<u64> {
    ensure_non_zero(divisors)?;
    let mut total = 0_u64;
    for number in 0..=upto {
        if divisors.iter().any(|&d| divides(number, d)) {
            total = total
                .checked_add(number)
                .ok_or(SolverError::Overflow { context: CONTEXT })?;
        }
    }
    Ok(total)
}

/// Test divisibility by truncating division: `(n / d) * d == n`.
pub fn by_division(upto: u64, divisors: &[u64]) -> SolverResult<u64> {
    scan(upto, divisors, |n, d| (n / d) * d == n)
}

/// Test divisibility with the remainder: `n % d == 0`.
pub fn by_remainder(upto: u64, divisors: &[u64]) -> SolverResult<u64> {
    scan(upto, divisors, |n, d| n % d == 0)
}

/// Sum of the multiples of `step` in `0..=upto`.
fn gauss_sum(step: u64, upto: u64) -> SolverResult<u128> {
    let m = u128::from(upto / step);
    u128::from(step)
        .checked_mul(m)
        .and_then(|x| x.checked_mul(m + 1))
        .map(|x| x / 2)
        .ok_or(SolverError::Overflow { context: CONTEXT })
}

/// Closed-form sum via inclusion-exclusion over every non-empty subset of `divisors`.
///
/// Subsets whose least common multiple exceeds `upto` contribute nothing, and neither do their
/// supersets, so those branches are pruned.
#[tracing::instrument(skip_all, fields(upto = upto, divisors = divisors.len()))]
pub fn inclusion_exclusion(upto: u64, divisors: &[u64]) -> SolverResult<u64> {
    ensure_non_zero(divisors)?;
    let mut total: i128 = 0;
    accumulate(upto, divisors, 1, true, &mut total)?;
    u64::try_from(total).map_err(|_| SolverError::Overflow { context: CONTEXT })
}

/// Add (`add == true`) or subtract the sum for every subset extending `lcm` by one divisor, then
/// recurse with the opposite sign.
fn accumulate(upto: u64, divisors: &[u64], lcm: u64, add: bool, total: &mut i128) -> SolverResult<()> {
    for (i, &d) in divisors.iter().enumerate() {
        let Some(next) = checked_lcm(lcm, d).filter(|&l| l <= upto) else {
            continue;
        };
        let sum = i128::try_from(gauss_sum(next, upto)?).map_err(|_| SolverError::Overflow { context: CONTEXT })?;
        let updated = if add {
            total.checked_add(sum)
        } else {
            total.checked_sub(sum)
        };
        *total = updated.ok_or(SolverError::Overflow { context: CONTEXT })?;
        accumulate(upto, &divisors[i + 1..], next, !add, total)?;
    }
    Ok(())
}
