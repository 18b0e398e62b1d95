extern crate alloc;

mod commands;
mod primes;

use miette::Diagnostic;
use primality::InvalidArgument;

pub use self::primes::{Command, Primes};

/// A command-line parsing failure, surfaced as a diagnostic
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error(transparent)]
#[diagnostic()]
pub struct ClapDiagnostic {
    #[from]
    err: clap::Error,
}

/// A number given on the command line, or in a file, was not a valid candidate
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("invalid candidate '{input}'")]
#[diagnostic(help("candidates must be 64-bit signed integers, e.g. `97`, `-5` or `10_000_019`"))]
pub struct InvalidCandidate {
    pub input: String,
    #[source]
    pub reason: InvalidArgument,
}

impl InvalidCandidate {
    pub(crate) fn parse(input: &str) -> Result<i64, Self> {
        primality::parse_candidate(input).map_err(|reason| Self {
            input: input.trim().to_string(),
            reason,
        })
    }
}
