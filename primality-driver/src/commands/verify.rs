use std::{collections::BTreeSet, io::Write, path::Path};

use miette::{Diagnostic, IntoDiagnostic, Report, WrapErr};
use primality::{Sieve, Strategy};

use crate::InvalidCandidate;

/// The lowest integer checked against the sieve, so that the rejection of negatives is covered
const SIEVE_FLOOR: i64 = -100;

/// The most integers a single verification will classify.
///
/// A sieve over `0..=limit` classifies `limit + 1` integers, so limits must stay below this.
pub(crate) const MAX_VERIFY_SPAN: u64 = 100_000_000;

#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("cannot verify {span} integers, at most {} are supported", MAX_VERIFY_SPAN)]
#[diagnostic(help("verify a smaller range, or split the reference into several files"))]
struct SpanTooLarge {
    span: u128,
}

impl SpanTooLarge {
    /// Ensure `low..=high` is small enough to verify
    fn check(low: i64, high: i64) -> Result<(), Self> {
        let span = (high as i128 - low as i128 + 1).max(0) as u128;
        if span > MAX_VERIFY_SPAN as u128 {
            return Err(Self { span });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{strategy} disagrees with the reference at {n}")]
#[diagnostic(help("the reference says {n} is {expected}, the {strategy} strategy says otherwise"))]
struct Mismatch {
    strategy: Strategy,
    n: i64,
    expected: &'static str,
}

impl Mismatch {
    fn check(strategy: Strategy, n: i64, expected: bool) -> Result<(), Self> {
        if strategy.is_prime(n) == expected {
            return Ok(());
        }
        log::error!(target: "driver:verify", "{strategy} is wrong about {n}");
        Err(Self {
            strategy,
            n,
            expected: if expected { "prime" } else { "not prime" },
        })
    }
}

pub(crate) fn verify_sieve<W: Write>(
    strategy: Strategy,
    limit: u64,
    out: &mut W,
) -> Result<bool, Report> {
    let high = i64::try_from(limit).unwrap_or(i64::MAX);
    SpanTooLarge::check(0, high)?;
    let sieve = Sieve::new(usize::try_from(limit).into_diagnostic()?);
    log::info!(target: "driver:verify", "sieved {} primes up to {limit}", sieve.count());

    for n in SIEVE_FLOOR..=high {
        let expected = sieve.get(n).unwrap_or(false);
        Mismatch::check(strategy, n, expected)?;
    }

    writeln!(out, "{strategy}: verified {SIEVE_FLOOR}..={limit} against the sieve")
        .into_diagnostic()?;
    Ok(true)
}

pub(crate) fn verify_file<W: Write>(
    strategy: Strategy,
    path: &Path,
    out: &mut W,
) -> Result<bool, Report> {
    let contents = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read primes from '{}'", path.display()))?;
    let primes = parse_primes(&contents)
        .wrap_err_with(|| format!("malformed primes file '{}'", path.display()))?;

    let (Some(&lowest), Some(&highest)) = (primes.first(), primes.last()) else {
        return Err(miette::miette!("'{}' does not list any primes", path.display()));
    };
    log::debug!(target: "driver:verify", "read {} primes from {}", primes.len(), path.display());

    // Everything up to the highest listed prime must be classified the same way
    let lowest = lowest.min(2);
    SpanTooLarge::check(lowest, highest)?;
    for n in lowest..=highest {
        Mismatch::check(strategy, n, primes.contains(&n))?;
    }

    writeln!(
        out,
        "{strategy}: verified {} primes up to {highest} from {}",
        primes.len(),
        path.display()
    )
    .into_diagnostic()?;
    Ok(true)
}

fn parse_primes(contents: &str) -> Result<BTreeSet<i64>, Report> {
    contents
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| InvalidCandidate::parse(token).map_err(Report::from))
        .collect()
}
