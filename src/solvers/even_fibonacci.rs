//! Sum of the even Fibonacci numbers strictly below a bound.
//!
//! Every third Fibonacci number is even (odd + odd), and the even terms satisfy
//! `E(n) = 4 * E(n-1) + E(n-2)` starting from 2, 8. The three strategies walk the sequence in
//! different ways and must agree.
//!
//! A term that would overflow `u64` is necessarily above any `u64` bound, so generation simply
//! stops there; only the running total can overflow.

use super::{SolverError, SolverResult};

const CONTEXT: &str = "even Fibonacci sum";

fn add(total: u64, term: u64) -> SolverResult<u64> {
    total
        .checked_add(term)
        .ok_or(SolverError::Overflow { context: CONTEXT })
}

/// Walk every Fibonacci number `1, 1, 2, 3, 5, ...` and add the even ones.
pub fn brute_force(upto: u64) -> SolverResult<u64> {
    let (mut current, mut next) = (1_u64, 1_u64);
    let mut total = 0;
    while current < upto {
        if current % 2 == 0 {
            total = add(total, current)?;
        }
        let Some(after) = current.checked_add(next) else {
            // `next` is the last representable term; it still has to be considered.
            if next < upto && next % 2 == 0 {
                total = add(total, next)?;
            }
            break;
        };
        (current, next) = (next, after);
    }
    Ok(total)
}

/// Jump straight from one even term to the next with `E(n) = 4 * E(n-1) + E(n-2)`.
pub fn every_third(upto: u64) -> SolverResult<u64> {
    let (mut previous, mut current) = (0_u64, 2_u64);
    let mut total = 0;
    while current < upto {
        total = add(total, current)?;
        let Some(after) = current.checked_mul(4).and_then(|x| x.checked_add(previous)) else {
            break;
        };
        (previous, current) = (current, after);
    }
    Ok(total)
}

/// Lazy iterator over the even Fibonacci numbers strictly below a bound.
#[derive(Debug, Clone)]
pub struct EvenFibonacci {
    previous: u64,
    current: Option<u64>,
    upto: u64,
}

impl EvenFibonacci {
    /// Even Fibonacci numbers `< upto`.
    pub fn below(upto: u64) -> Self {
        EvenFibonacci {
            previous: 0,
            current: Some(2),
            upto,
        }
    }
}

impl Iterator for EvenFibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let term = self.current.filter(|&t| t < self.upto)?;
        self.current = term.checked_mul(4).and_then(|x| x.checked_add(self.previous));
        self.previous = term;
        Some(term)
    }
}

impl std::iter::FusedIterator for EvenFibonacci {}

/// Sum [`EvenFibonacci::below`] without materialising the terms.
pub fn lazy_sum(upto: u64) -> SolverResult<u64> {
    EvenFibonacci::below(upto).try_fold(0, add)
}
