//! Rendering of log records.
//!
//! The default format is `[timestamp LEVEL target] message`, where each part of the header can be
//! switched off through the [`crate::Builder`].

use std::fmt::Write as _;

use log::{Level, Record};

/// Whether, and how, to style output
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum WriteStyle {
    /// Style when the output stream supports it
    #[default]
    Auto,
    /// Always emit styling escapes
    Always,
    /// Never emit styling escapes
    Never,
}

impl WriteStyle {
    /// Parse a write style as found in an environment variable, e.g. `always`
    pub fn parse(spec: &str) -> Option<Self> {
        match spec.trim() {
            s if s.eq_ignore_ascii_case("auto") => Some(Self::Auto),
            s if s.eq_ignore_ascii_case("always") => Some(Self::Always),
            s if s.eq_ignore_ascii_case("never") => Some(Self::Never),
            _ => None,
        }
    }
}

/// The precision of timestamps in the record header
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum TimestampPrecision {
    #[default]
    Seconds,
    Millis,
    Micros,
    Nanos,
}

impl TimestampPrecision {
    #[cfg(feature = "humantime")]
    fn digits(self) -> usize {
        match self {
            Self::Seconds => 0,
            Self::Millis => 3,
            Self::Micros => 6,
            Self::Nanos => 9,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Format {
    pub timestamp: Option<TimestampPrecision>,
    pub level: bool,
    pub target: bool,
    pub styled: bool,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            timestamp: Some(TimestampPrecision::Seconds),
            level: true,
            target: true,
            styled: true,
        }
    }
}

impl Format {
    pub fn render(&self, record: &Record<'_>) -> String {
        let mut header = Vec::with_capacity(3);
        if let Some(timestamp) = self.timestamp.and_then(render_timestamp) {
            header.push(timestamp);
        }
        if self.level {
            header.push(self.render_level(record.level()));
        }
        if self.target && !record.target().is_empty() {
            header.push(record.target().to_string());
        }

        let mut buf = String::new();
        if !header.is_empty() {
            let _ = write!(buf, "[{}] ", header.join(" "));
        }
        let _ = writeln!(buf, "{}", record.args());
        buf
    }

    #[cfg(feature = "color")]
    fn render_level(&self, level: Level) -> String {
        use anstyle::AnsiColor;

        if !self.styled {
            return format!("{level:<5}");
        }
        let style = match level {
            Level::Error => AnsiColor::Red.on_default().bold(),
            Level::Warn => AnsiColor::Yellow.on_default(),
            Level::Info => AnsiColor::Green.on_default(),
            Level::Debug => AnsiColor::Blue.on_default(),
            Level::Trace => AnsiColor::Cyan.on_default(),
        };
        format!("{style}{level:<5}{style:#}")
    }

    #[cfg(not(feature = "color"))]
    fn render_level(&self, level: Level) -> String {
        format!("{level:<5}")
    }
}

#[cfg(feature = "humantime")]
fn render_timestamp(precision: TimestampPrecision) -> Option<String> {
    let now = jiff::Timestamp::now();
    Some(format!("{now:.digits$}", digits = precision.digits()))
}

#[cfg(not(feature = "humantime"))]
fn render_timestamp(_precision: TimestampPrecision) -> Option<String> {
    None
}
