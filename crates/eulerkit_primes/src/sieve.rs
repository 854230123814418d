//! Odd-only sieve of Eratosthenes.
//!
//! The elimination mask covers odd numbers only: position `k` stands for `2k + 1`. That halves the
//! allocation compared to a `0..=limit` mask; 2 is the one even prime and is prepended when the
//! survivors are read off.
//!
//! ## Layout
//!
//! ```text
//! k:      0  1  2  3  4  5  6  7 ...
//! 2k+1:   1  3  5  7  9 11 13 15 ...
//! ```
//!
//! For an odd prime `i`, its odd multiples `i*i, i*i + 2i, i*i + 4i, ...` sit at indices
//! `(i*i) / 2, (i*i) / 2 + i, ...`, so marking steps by `i` in index space.

use crate::Limit;

/// Number of mask entries needed to cover every odd number `<= limit`.
#[inline]
pub(crate) fn mask_len(limit: usize) -> usize {
    limit / 2 + limit % 2
}

/// Collect every prime `<= limit` with the odd-only sieve.
///
/// Returns an empty vector for `limit < 2`. The mask is local to the call and freed on return.
/// Bounds above [`Limit::MAX`] are treated as `Limit::MAX`, which yields the same primes.
///
/// ## Examples
/// ```rust
/// use eulerkit_primes::eratosthenes;
/// assert_eq!(eratosthenes(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// assert_eq!(eratosthenes(2), vec![2]);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(limit = limit))]
pub fn eratosthenes(limit: usize) -> Vec<usize> {
    if limit < 2 {
        return Vec::new();
    }

    let limit = limit.min(Limit::MAX.get());
    let len = mask_len(limit);
    let mut is_prime = vec![true; len];
    // Exact integer square root: no prime factor <= sqrt(limit) is skipped.
    let root = limit.isqrt();

    for i in (3..=root).step_by(2) {
        if is_prime[i / 2] {
            for slot in is_prime[(i * i) / 2..].iter_mut().step_by(i) {
                *slot = false;
            }
        }
    }

    let mut primes = Vec::with_capacity(approx_prime_count(limit));
    primes.push(2);
    primes.extend(
        is_prime
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(k, &alive)| alive.then_some(2 * k + 1)),
    );

    tracing::debug!(count = primes.len(), mask_len = len, "sieve finished");
    primes
}

/// Upper estimate of π(n) used to size the output (`1.26 n / ln n`, valid for n > 1).
fn approx_prime_count(limit: usize) -> usize {
    let n = limit as f64;
    (1.26 * n / n.ln()).ceil() as usize + 1
}
