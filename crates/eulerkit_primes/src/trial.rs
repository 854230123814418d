//! Trial-division prime generation.
//!
//! The baseline strategy: each odd candidate is tested against the primes found so far, in
//! ascending order, stopping once `p * p > candidate`.

/// Return whether `candidate` has a divisor among `primes` (ascending, starting at 2) not
/// exceeding its square root.
///
/// `primes` must contain every prime up to `isqrt(candidate)`.
#[inline]
pub(crate) fn has_small_factor(candidate: usize, primes: &[usize]) -> bool {
    primes
        .iter()
        .take_while(|&&p| p * p <= candidate)
        .any(|&p| candidate % p == 0)
}

/// Collect every prime `<= limit` by trial division.
///
/// Returns an empty vector for `limit < 2`.
///
/// ## Examples
/// ```rust
/// use eulerkit_primes::trial_division;
/// assert_eq!(trial_division(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
/// assert!(trial_division(1).is_empty());
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(limit = limit))]
pub fn trial_division(limit: usize) -> Vec<usize> {
    if limit < 2 {
        return Vec::new();
    }

    let mut primes = vec![2];
    for candidate in (3..=limit).step_by(2) {
        if !has_small_factor(candidate, &primes) {
            primes.push(candidate);
        }
    }

    tracing::debug!(count = primes.len(), "trial division finished");
    primes
}
