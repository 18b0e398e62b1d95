//! The implementations of each `primes` subcommand.
//!
//! Every command writes its normal output to `out` and returns whether it succeeded; failures
//! that should abort the run are returned as reports.

mod bench;
mod verify;

use std::io::Write;

use miette::{Diagnostic, IntoDiagnostic, Report};
use primality::{Strategy, mersenne_numbers};

pub(crate) use self::{
    bench::bench,
    verify::{MAX_VERIFY_SPAN, verify_file, verify_sieve},
};
use crate::InvalidCandidate;

#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("empty range: {start} is greater than {end}")]
#[diagnostic(help("ranges are inclusive and must be given in ascending order"))]
struct EmptyRange {
    start: i64,
    end: i64,
}

pub(crate) fn check<W: Write>(
    strategy: Strategy,
    inputs: &[String],
    quiet: bool,
    out: &mut W,
) -> Result<bool, Report> {
    // Validate everything before printing anything
    let candidates = inputs
        .iter()
        .map(|input| InvalidCandidate::parse(input))
        .collect::<Result<Vec<_>, _>>()?;

    let mut all_prime = true;
    for n in candidates {
        let prime = strategy.is_prime(n);
        log::debug!(target: "driver:check", "{n}: {prime}");
        all_prime &= prime;
        if !quiet {
            let verdict = if prime { "is prime" } else { "is not prime" };
            writeln!(out, "{n} {verdict}").into_diagnostic()?;
        }
    }

    Ok(!quiet || all_prime)
}

pub(crate) fn range<W: Write>(
    strategy: Strategy,
    start: i64,
    end: i64,
    count: bool,
    out: &mut W,
) -> Result<bool, Report> {
    if start > end {
        return Err(EmptyRange { start, end }.into());
    }
    log::debug!(target: "driver:range", "scanning {start}..={end}");

    let primes = strategy.primes_in(start..=end);
    if count {
        writeln!(out, "{}", primes.count()).into_diagnostic()?;
    } else {
        for prime in primes {
            writeln!(out, "{prime}").into_diagnostic()?;
        }
    }
    Ok(true)
}

pub(crate) fn mersenne<W: Write>(
    strategy: Strategy,
    max_exponent: u32,
    out: &mut W,
) -> Result<bool, Report> {
    for (exponent, number) in mersenne_numbers(max_exponent) {
        let verdict = if strategy.is_prime(number) {
            "prime"
        } else {
            "not prime"
        };
        writeln!(out, "M{exponent} = {number} ({verdict})").into_diagnostic()?;
    }
    Ok(true)
}
