//! Common benchmarking framework for the primality strategies
//!
//! This module provides utilities for timing primality checks, either over a range of
//! candidates or by repeatedly testing a single one, and for loading suites of such runs from
//! TOML files.

use std::{
    hint::black_box,
    ops::RangeInclusive,
    path::Path,
    time::{Duration, Instant},
};

use anyhow::{Context, Result, bail};
use primality::Strategy;
use serde::Deserialize;

/// Measures the time since it was started, and logs it when dropped
pub struct Timer {
    label: String,
    start: Instant,
}

impl Timer {
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        log::info!(target: "bench", "{} finished in {:?}", self.label, self.elapsed());
    }
}

/// Run `f` under a [`Timer`] labelled `label`, returning its output and how long it took
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let timer = Timer::start(label);
    let output = f();
    (output, timer.elapsed())
}

/// Execution statistics for a single benchmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionStats {
    /// Number of primality checks performed
    pub calls: u64,
    /// How many of those checks found a prime
    pub primes: u64,
    /// Wall-clock time spent checking
    pub elapsed: Duration,
}

impl ExecutionStats {
    /// Average time per check
    pub fn per_call(&self) -> Duration {
        match u32::try_from(self.calls) {
            Ok(0) => Duration::ZERO,
            Ok(calls) => self.elapsed / calls,
            Err(_) => Duration::from_secs_f64(self.elapsed.as_secs_f64() / self.calls as f64),
        }
    }

    /// Print formatted execution statistics
    pub fn print(&self, benchmark_name: &str) {
        println!("===============================================================================");
        println!("Benchmark results for: {benchmark_name}");
        println!("-------------------------------------------------------------------------------");
        println!("Calls: {}", self.calls);
        println!("Primes found: {}", self.primes);
        println!("Total time: {:?}", self.elapsed);
        println!("Time per call: {:?}", self.per_call());
        println!("===============================================================================");
    }
}

/// A suite of benchmarks, as loaded from a TOML file:
///
/// ```toml
/// [[case]]
/// name = "first million"
/// strategy = "wheel"
/// start = 0
/// end = 999_999
///
/// [[repeat]]
/// name = "a large prime"
/// input = 1_000_000_007
/// iterations = 100
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchmarkSuite {
    #[serde(default, rename = "case")]
    pub cases: Vec<RangeCase>,
    #[serde(default, rename = "repeat")]
    pub repeats: Vec<RepeatCase>,
}

/// Check every candidate in `start..=end`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeCase {
    pub name: String,
    #[serde(default)]
    pub strategy: Strategy,
    pub start: i64,
    pub end: i64,
}

/// Check `input` over and over
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepeatCase {
    pub name: String,
    #[serde(default)]
    pub strategy: Strategy,
    pub input: i64,
    pub iterations: u64,
}

impl BenchmarkSuite {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read benchmark suite: {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Invalid benchmark suite: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty() && self.repeats.is_empty()
    }
}

/// A benchmark runner for the primality strategies
#[derive(Debug, Default)]
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Create a new benchmark runner
    pub fn new() -> Self {
        Self
    }

    /// Test every candidate in `range` with `strategy`
    pub fn run_range(
        &self,
        strategy: Strategy,
        range: RangeInclusive<i64>,
    ) -> Result<ExecutionStats> {
        if range.is_empty() {
            bail!("Empty benchmark range: {} > {}", range.start(), range.end());
        }
        let calls = range.end().abs_diff(*range.start()) + 1;
        let label = format!("{strategy} over {}..={}", range.start(), range.end());
        let (primes, elapsed) = timed(&label, || {
            range.filter(|n| strategy.is_prime(black_box(*n))).count() as u64
        });

        Ok(ExecutionStats {
            calls,
            primes,
            elapsed,
        })
    }

    /// Test `n` with `strategy`, `iterations` times
    pub fn run_repeated(&self, strategy: Strategy, n: i64, iterations: u64) -> ExecutionStats {
        let label = format!("{strategy} on {n} x{iterations}");
        let (primes, elapsed) = timed(&label, || {
            (0..iterations).filter(|_| strategy.is_prime(black_box(n))).count() as u64
        });

        ExecutionStats {
            calls: iterations,
            primes,
            elapsed,
        }
    }

    /// Run every benchmark in `suite`, ranges first, returning the statistics for each by name
    pub fn run_suite(&self, suite: &BenchmarkSuite) -> Result<Vec<(String, ExecutionStats)>> {
        let mut results = Vec::with_capacity(suite.cases.len() + suite.repeats.len());
        for case in &suite.cases {
            log::debug!(target: "bench", "running range case '{}'", case.name);
            let stats = self
                .run_range(case.strategy, case.start..=case.end)
                .with_context(|| format!("Benchmark '{}' failed", case.name))?;
            results.push((case.name.clone(), stats));
        }
        for repeat in &suite.repeats {
            log::debug!(target: "bench", "running repeated case '{}'", repeat.name);
            let stats = self.run_repeated(repeat.strategy, repeat.input, repeat.iterations);
            results.push((repeat.name.clone(), stats));
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{LazyLock, Mutex};

    use log::{LevelFilter, Log, Metadata, Record};
    use pretty_assertions::assert_eq;

    use super::*;

    /// Keeps every `bench` record at info level or above, as filtered by the real logger
    struct Captured {
        logger: primality_log::Logger,
        lines: Mutex<Vec<String>>,
    }

    impl Log for Captured {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            self.logger.enabled(metadata)
        }

        fn log(&self, record: &Record<'_>) {
            if self.logger.matches(record) {
                let line = format!("{} {}", record.target(), record.args());
                self.lines.lock().unwrap().push(line);
            }
        }

        fn flush(&self) {}
    }

    static CAPTURED: LazyLock<Captured> = LazyLock::new(|| Captured {
        logger: primality_log::Builder::new()
            .filter_component("bench", LevelFilter::Info)
            .build(),
        lines: Mutex::new(Vec::new()),
    });

    fn captured_lines(label: &str) -> Vec<String> {
        if log::set_logger(&*CAPTURED).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
        CAPTURED
            .lines
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.contains(label))
            .cloned()
            .collect()
    }

    #[test]
    fn timer_logs_when_dropped() {
        let label = "drop-logged countdown";
        assert!(captured_lines(label).is_empty());

        let timer = Timer::start(label);
        let _ = (0..1000).rev().sum::<u64>();
        assert!(captured_lines(label).is_empty());
        drop(timer);

        let lines = captured_lines(label);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("bench drop-logged countdown finished in "));

        let ((), _) = timed("timed closure marker", || ());
        assert_eq!(captured_lines("timed closure marker").len(), 1);
    }

    #[test]
    fn timed_returns_closure_output() {
        let (output, elapsed) = timed("sum", || (1..=10).sum::<i32>());
        assert_eq!(output, 55);
        assert!(elapsed < Duration::from_secs(60));
    }

    #[test]
    fn run_range_counts_primes() {
        let runner = BenchmarkRunner::new();
        for strategy in Strategy::ALL {
            let stats = runner.run_range(strategy, 1..=10_000).unwrap();
            assert_eq!(stats.calls, 10_000);
            assert_eq!(stats.primes, 1229);
        }
        let stats = runner.run_range(Strategy::Trial, -10..=-1).unwrap();
        assert_eq!((stats.calls, stats.primes), (10, 0));
    }

    #[test]
    fn run_range_rejects_empty_ranges() {
        let err = BenchmarkRunner::new().run_range(Strategy::Odd, 5..=4).unwrap_err();
        assert_eq!(err.to_string(), "Empty benchmark range: 5 > 4");
    }

    #[test]
    fn run_repeated_counts_every_call() {
        let runner = BenchmarkRunner::new();
        let stats = runner.run_repeated(Strategy::Wheel, 97, 1000);
        assert_eq!((stats.calls, stats.primes), (1000, 1000));
        let stats = runner.run_repeated(Strategy::Trial, 91, 10);
        assert_eq!((stats.calls, stats.primes), (10, 0));
        assert_eq!(runner.run_repeated(Strategy::Trial, 7, 0).per_call(), Duration::ZERO);
    }

    #[test]
    fn per_call_divides_elapsed_time() {
        let stats = ExecutionStats {
            calls: 4,
            primes: 0,
            elapsed: Duration::from_millis(10),
        };
        assert_eq!(stats.per_call(), Duration::from_micros(2500));
    }

    #[test]
    fn suite_parses_from_toml() {
        let suite = BenchmarkSuite::parse(
            r#"
            [[case]]
            name = "small"
            start = 0
            end = 100

            [[case]]
            name = "small, wheel"
            strategy = "wheel"
            start = 0
            end = 100

            [[repeat]]
            name = "large prime"
            strategy = "odd"
            input = 1_000_000_007
            iterations = 3
            "#,
        )
        .unwrap();
        assert_eq!(suite.cases.len(), 2);
        assert_eq!(suite.cases[0].strategy, Strategy::Trial);
        assert_eq!(suite.cases[1].strategy, Strategy::Wheel);
        assert_eq!(
            suite.repeats,
            vec![RepeatCase {
                name: "large prime".to_string(),
                strategy: Strategy::Odd,
                input: 1_000_000_007,
                iterations: 3,
            }]
        );

        let results = BenchmarkRunner::new().run_suite(&suite).unwrap();
        let summary = results
            .iter()
            .map(|(name, stats)| (name.as_str(), stats.calls, stats.primes))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![("small", 101, 25), ("small, wheel", 101, 25), ("large prime", 3, 3)]
        );
    }

    #[test]
    fn suite_rejects_unknown_keys_and_strategies() {
        assert!(BenchmarkSuite::parse("[[case]]\nname = \"x\"\nstart = 0\nend = 1\nstep = 2").is_err());
        assert!(
            BenchmarkSuite::parse("[[repeat]]\nname = \"x\"\nstrategy = \"sieve\"\ninput = 7\niterations = 1")
                .is_err()
        );
        assert!(BenchmarkSuite::parse("").unwrap().is_empty());
    }

    #[test]
    fn suite_loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suite.toml");
        std::fs::write(&path, "[[case]]\nname = \"bad\"\nstart = 10\nend = 0\n").unwrap();
        let suite = BenchmarkSuite::load(&path).unwrap();
        let err = BenchmarkRunner::new().run_suite(&suite).unwrap_err();
        assert_eq!(err.to_string(), "Benchmark 'bad' failed");

        let err = BenchmarkSuite::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read benchmark suite"));
    }
}
