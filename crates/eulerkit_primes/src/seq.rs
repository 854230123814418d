//! Lazy, restartable prime sequence.
//!
//! [`PrimeSeq`] describes "the primes up to N" without computing them. Each call to
//! [`PrimeSeq::iter`] starts a fresh [`Primes`] iterator at 2, so the sequence can be walked any
//! number of times with identical results.

use crate::limit::Limit;
use crate::trial::has_small_factor;

/// A finite lazy sequence of the primes `<= limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeSeq {
    limit: Limit,
}

impl PrimeSeq {
    /// Describe the primes up to `limit` (inclusive).
    #[inline]
    pub const fn new(limit: Limit) -> Self {
        PrimeSeq { limit }
    }

    /// The inclusive bound of this sequence.
    #[inline]
    pub const fn limit(&self) -> Limit {
        self.limit
    }

    /// Start a fresh walk from 2.
    #[inline]
    pub fn iter(&self) -> Primes {
        Primes::upto(self.limit.get())
    }
}

impl IntoIterator for &PrimeSeq {
    type Item = usize;
    type IntoIter = Primes;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for PrimeSeq {
    type Item = usize;
    type IntoIter = Primes;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the primes `<= limit`, found by trial division against the primes it has
/// already yielded.
#[derive(Debug, Clone)]
pub struct Primes {
    found: Vec<usize>,
    next: Option<usize>,
    limit: usize,
}

impl Primes {
    /// Iterate over the primes `<= limit`.
    pub fn upto(limit: usize) -> Self {
        Primes {
            found: Vec::new(),
            next: Some(2),
            limit,
        }
    }
}

impl Iterator for Primes {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let limit = self.limit;
        while let Some(candidate) = self.next.filter(|&c| c <= limit) {
            // 2, then odd numbers only.
            self.next = if candidate == 2 { Some(3) } else { candidate.checked_add(2) };
            if !has_small_factor(candidate, &self.found) {
                self.found.push(candidate);
                return Some(candidate);
            }
        }
        self.next = None;
        None
    }
}

impl std::iter::FusedIterator for Primes {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_primes_in_order() {
        let xs: Vec<usize> = Primes::upto(20).collect();
        assert_eq!(xs, vec![2, 3, 5, 7, 11, 13, 17, 19]);
    }

    #[test]
    fn empty_below_two() {
        assert_eq!(Primes::upto(0).next(), None);
        assert_eq!(Primes::upto(1).next(), None);
        assert_eq!(Primes::upto(2).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn sequence_is_restartable() {
        let seq = PrimeSeq::new(Limit::new(50));
        let first: Vec<usize> = seq.iter().collect();
        let second: Vec<usize> = (&seq).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 15);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let mut it = Primes::upto(3);
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn partial_walks_are_independent() {
        let seq = PrimeSeq::new(Limit::new(100));
        let head: Vec<usize> = seq.iter().take(3).collect();
        let all: Vec<usize> = seq.iter().collect();
        assert_eq!(head, vec![2, 3, 5]);
        assert_eq!(&all[..3], head.as_slice());
    }
}
