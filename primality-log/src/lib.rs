//! A logger for the primality tools, configured directly or through environment variables.
//!
//! Designed for use with [`log`](https://docs.rs/log). Records are written to `stderr` as
//! `[timestamp LEVEL target] message`.
//!
//! ## Enabling logging
//!
//! **By default all logging is disabled except for the `error` level.**
//!
//! The `PRIMES_TRACE` environment variable holds a comma-separated list of directives, optionally
//! followed by `/` and a pattern that formatted messages must match:
//!
//! ```console
//! PRIMES_TRACE=[-][target][=level][,...][/pattern]
//! ```
//!
//! A target is one of:
//!
//! - a component, e.g. `driver`, matching targets `driver` and `driver:<anything>`
//! - a component and topic pattern, e.g. `driver:check` or `bench:.*range`
//! - a module path, e.g. `primality_driver::commands`, matching by prefix
//!
//! Some examples:
//!
//! - `PRIMES_TRACE=debug` turns on debug logging everywhere
//! - `PRIMES_TRACE=warn,driver=trace` turns on warnings, and everything from the driver
//! - `PRIMES_TRACE=trace,-primality` turns on everything except the core library
//! - `PRIMES_TRACE=trace,-bench=debug` turns on everything, but only info and above for `bench`
//! - `PRIMES_TRACE=info/finished in` only shows info logs whose message contains `finished in`
//!
//! Styling follows `PRIMES_TRACE_STYLE` (`auto`, `always`, `never`).
//!
//! ## Example
//!
//! ```
//! use log::{debug, error};
//!
//! primality_log::builder().format_timestamp(None).try_init().ok();
//!
//! debug!(target: "driver", "this is a debug {}", "message");
//! error!("this is printed by default");
//! ```
//!
//! ## Capturing logs in tests
//!
//! Use [`Builder::is_test`] so that records are captured by the test harness:
//!
//! ```
//! let _ = primality_log::builder().is_test(true).try_init();
//! ```
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

pub mod filter;
pub mod fmt;
mod logger;

pub use self::{
    fmt::{TimestampPrecision, WriteStyle},
    logger::*,
};
