use std::{io::Write, time::Instant};

use miette::{IntoDiagnostic, Report};
use primality::Strategy;

pub(crate) fn bench<W: Write>(
    strategy: Strategy,
    limit: i64,
    repeat: usize,
    out: &mut W,
) -> Result<bool, Report> {
    for run in 1..=repeat {
        let start = Instant::now();
        let primes = strategy.primes_in(0..=limit.saturating_sub(1)).count();
        let elapsed = start.elapsed();
        log::info!(target: "driver:bench", "run {run}/{repeat} finished in {elapsed:?}");
        writeln!(out, "{strategy}: {primes} primes below {limit} in {elapsed:.2?}").into_diagnostic()?;
    }
    Ok(true)
}
