//! A sieve of Eratosthenes, used as the reference oracle for the trial-division strategies.

use bitvec::prelude::*;

/// Primality of every integer in `0..=limit`, computed up front
pub struct Sieve {
    limit: usize,
    /// Bit `n` is set if `n` is known not to be prime
    composite: BitVec,
}

impl Sieve {
    pub fn new(limit: usize) -> Self {
        log::debug!(target: "primality", "sieving primes up to {limit}");

        let mut composite = bitvec![1; limit.saturating_add(1)];
        if limit >= 2 {
            composite[2..].fill(false);
        }
        for n in 2..=limit.isqrt() {
            if composite[n] {
                continue;
            }
            for multiple in (n * n..=limit).step_by(n) {
                composite.set(multiple, true);
            }
        }

        Self { limit, composite }
    }

    /// The largest integer this sieve has an answer for
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Look up the primality of `n`.
    ///
    /// Returns `None` if `n` is beyond [Self::limit]. Integers below 2 are never prime.
    pub fn get(&self, n: i64) -> Option<bool> {
        if n < 2 {
            return Some(false);
        }
        let n = usize::try_from(n).ok().filter(|n| *n <= self.limit)?;
        Some(!self.composite[n])
    }

    /// Iterate over every prime up to and including [Self::limit]
    pub fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.composite.iter_zeros()
    }

    /// The number of primes up to and including [Self::limit]
    pub fn count(&self) -> usize {
        self.composite.count_zeros()
    }
}
