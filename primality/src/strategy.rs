use alloc::string::ToString;
use core::{fmt, ops::RangeInclusive, str::FromStr};

use crate::{UnknownStrategy, trial};

/// The divisor schedule used to test a candidate.
///
/// All strategies give identical answers; they differ only in how many divisors they try.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Strategy {
    /// Try every divisor from 2 through `isqrt(n)`
    #[default]
    Trial,
    /// Settle even numbers and multiples of 5 up front, then try odd divisors only
    Odd,
    /// Settle multiples of 2 and 3 up front, then try divisors of the form `6k ± 1`
    Wheel,
}

impl Strategy {
    pub const ALL: [Self; 3] = [Self::Trial, Self::Odd, Self::Wheel];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Trial => "trial",
            Self::Odd => "odd",
            Self::Wheel => "wheel",
        }
    }

    /// Returns true if `n` is prime
    pub fn is_prime(self, n: i64) -> bool {
        match self {
            Self::Trial => trial::is_prime(n),
            Self::Odd => is_prime_odd(n),
            Self::Wheel => is_prime_wheel(n),
        }
    }

    /// Iterate over the primes in `range`, in ascending order
    pub fn primes_in(self, range: RangeInclusive<i64>) -> impl Iterator<Item = i64> {
        range.filter(move |n| self.is_prime(*n))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

fn is_prime_odd(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    if n & 1 == 0 {
        return n == 2;
    }
    // Every multiple of 5 other than 5 itself ends in a 5
    if n > 5 && n % 5 == 0 {
        return false;
    }
    (3..=n.isqrt()).step_by(2).all(|divisor| n % divisor != 0)
}

fn is_prime_wheel(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let bound = n.isqrt();
    let mut i = 5;
    while i <= bound {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
