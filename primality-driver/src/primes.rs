use std::{ffi::OsString, io::Write, path::PathBuf, process::ExitCode};

use clap::{ArgAction, ColorChoice, Parser, Subcommand, error::ErrorKind};
use log::LevelFilter;
use miette::{IntoDiagnostic, Report};
use primality::Strategy;
use primality_log::WriteStyle;

use crate::{ClapDiagnostic, commands};

/// This struct provides the command-line interface used by `primes`
#[derive(Debug, Parser)]
#[command(name = "primes")]
#[command(author, version, about = "Primality testing by trial division", long_about = None)]
pub struct Primes {
    /// The divisor schedule used to test candidates
    #[arg(
        long,
        short = 's',
        value_enum,
        env = "PRIMES_STRATEGY",
        default_value_t = Strategy::Trial,
        global = true
    )]
    pub strategy: Strategy,
    /// Whether, and how, to color log output
    #[arg(
        long,
        value_enum,
        env = "PRIMES_COLOR",
        default_value_t = ColorChoice::Auto,
        global = true
    )]
    pub color: ColorChoice,
    /// Raise the log level: `-v` for info, `-vv` for debug, `-vvv` for trace
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Test whether each NUMBER is prime
    Check {
        /// The numbers to test
        #[arg(value_name = "NUMBER", required = true, allow_negative_numbers = true)]
        numbers: Vec<String>,
        /// Print nothing; exit successfully only if every number is prime
        #[arg(long, short = 'q')]
        quiet: bool,
    },
    /// List the primes between START and END, inclusive
    Range {
        #[arg(value_name = "START", allow_negative_numbers = true, value_parser = parse_bound)]
        start: i64,
        #[arg(value_name = "END", allow_negative_numbers = true, value_parser = parse_bound)]
        end: i64,
        /// Print how many primes there are, rather than the primes themselves
        #[arg(long, short = 'c')]
        count: bool,
    },
    /// Test the Mersenne numbers 2^p - 1 for p up to a maximum exponent
    Mersenne {
        #[arg(
            long,
            short = 'e',
            value_name = "P",
            default_value_t = 60,
            value_parser = clap::value_parser!(u32).range(1..=63)
        )]
        max_exponent: u32,
    },
    /// Cross-check the selected strategy against a sieve, or against a list of known primes
    Verify {
        /// Check every integer from -100 up to LIMIT against a sieve
        #[arg(
            long,
            short = 'l',
            value_name = "LIMIT",
            default_value_t = 10_000,
            value_parser = clap::value_parser!(u64).range(..commands::MAX_VERIFY_SPAN)
        )]
        limit: u64,
        /// A comma or whitespace separated list of every prime up to some bound
        #[arg(long, value_name = "PATH", conflicts_with = "limit")]
        primes_file: Option<PathBuf>,
    },
    /// Time the selected strategy over every integer below LIMIT
    Bench {
        #[arg(long, short = 'l', value_name = "LIMIT", default_value_t = 1_000_000)]
        limit: i64,
        /// Number of timed runs
        #[arg(long, short = 'n', value_name = "COUNT", default_value_t = 1)]
        repeat: usize,
    },
}

fn parse_bound(input: &str) -> Result<i64, primality::InvalidArgument> {
    primality::parse_candidate(input)
}

impl Primes {
    /// Parse `args`, install the logger, and run the requested command, writing to `out`.
    ///
    /// `--help` and `--version` are written to `out` and reported as success.
    pub fn run<A, W>(
        args: A,
        mut logger: primality_log::Builder,
        out: &mut W,
    ) -> Result<ExitCode, Report>
    where
        A: IntoIterator<Item = OsString>,
        W: Write,
    {
        let primes = match Self::try_parse_from(args) {
            Ok(primes) => primes,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                write!(out, "{err}").into_diagnostic()?;
                return Ok(ExitCode::SUCCESS);
            }
            Err(err) => return Err(ClapDiagnostic::from(err).into()),
        };

        if let Some(level) = primes.log_level() {
            logger.filter_level(level);
        }
        logger.write_style(match primes.color {
            ColorChoice::Auto => WriteStyle::Auto,
            ColorChoice::Always => WriteStyle::Always,
            ColorChoice::Never => WriteStyle::Never,
        });
        if logger.try_init().is_err() {
            log::debug!(target: "driver", "logger already installed, keeping it");
        }

        let succeeded = primes.execute(out)?;
        Ok(if succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }

    /// Run the parsed command, returning whether it succeeded
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<bool, Report> {
        log::debug!(target: "driver", "running {:?} with the {} strategy", self.command, self.strategy);
        let strategy = self.strategy;
        match &self.command {
            Command::Check { numbers, quiet } => commands::check(strategy, numbers, *quiet, out),
            Command::Range { start, end, count } => {
                commands::range(strategy, *start, *end, *count, out)
            }
            Command::Mersenne { max_exponent } => commands::mersenne(strategy, *max_exponent, out),
            Command::Verify { limit, primes_file } => match primes_file {
                Some(path) => commands::verify_file(strategy, path, out),
                None => commands::verify_sieve(strategy, *limit, out),
            },
            Command::Bench { limit, repeat } => commands::bench(strategy, *limit, *repeat, out),
        }
    }

    fn log_level(&self) -> Option<LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}
