use std::{env, io::Write};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::{
    filter::{self, Filter},
    fmt::{Format, TimestampPrecision, WriteStyle},
};

/// The environment variable consulted for filter directives by [`init`] and [`try_init`]
pub const DEFAULT_FILTER_ENV: &str = "PRIMES_TRACE";

/// `Builder` acts as a builder for initializing a [`Logger`].
///
/// It can be used to customize the log format, change the environment variable used to provide
/// the logging directives, and also set the default log level filter.
#[derive(Default)]
pub struct Builder {
    filter: filter::Builder,
    format: Format,
    write_style: WriteStyle,
    is_test: bool,
}

impl Builder {
    /// Initializes the log builder with defaults.
    ///
    /// **NOTE:** This method won't read from any environment variables; use [`Builder::from_env`]
    /// for that.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes the log builder from the environment.
    ///
    /// Filter directives are read from `var`, and the write style from `{var}_STYLE`.
    pub fn from_env(var: &str) -> Self {
        let mut builder = Self {
            filter: filter::Builder::from_env(var),
            ..Self::default()
        };
        let style = env::var(format!("{var}_STYLE")).ok();
        if let Some(style) = style.as_deref().and_then(WriteStyle::parse) {
            builder.write_style = style;
        }
        builder
    }

    /// Same as [`Builder::from_env`], but falls back to `default_spec` when `var` is unset.
    pub fn from_env_or(var: &str, default_spec: &str) -> Self {
        let mut builder = Self::from_env(var);
        if env::var_os(var).is_none() {
            builder.parse_filters(default_spec);
        }
        builder
    }

    /// Adds filters to the logger, as found in a directive string such as `warn,driver=debug`.
    pub fn parse_filters(&mut self, spec: &str) -> &mut Self {
        self.filter.parse(spec);
        self
    }

    /// Adds a directive to the filter for all targets.
    pub fn filter_level(&mut self, level: LevelFilter) -> &mut Self {
        self.filter.filter_level(level);
        self
    }

    /// Adds a directive to the filter for targets starting with a module path.
    pub fn filter_module(&mut self, module: &str, level: LevelFilter) -> &mut Self {
        self.filter.filter_module(module, level);
        self
    }

    /// Adds a directive to the filter for a component such as `driver`.
    pub fn filter_component(&mut self, component: &str, level: LevelFilter) -> &mut Self {
        self.filter.filter_component(component, level);
        self
    }

    /// Configures the timestamp in the record header, or removes it with `None`.
    pub fn format_timestamp(&mut self, precision: Option<TimestampPrecision>) -> &mut Self {
        self.format.timestamp = precision;
        self
    }

    /// Whether or not to write the level in the record header.
    pub fn format_level(&mut self, write: bool) -> &mut Self {
        self.format.level = write;
        self
    }

    /// Whether or not to write the target in the record header.
    pub fn format_target(&mut self, write: bool) -> &mut Self {
        self.format.target = write;
        self
    }

    /// Sets whether output is styled.
    pub fn write_style(&mut self, write_style: WriteStyle) -> &mut Self {
        self.write_style = write_style;
        self
    }

    /// Route output through the test harness' captured stderr, unstyled.
    pub fn is_test(&mut self, is_test: bool) -> &mut Self {
        self.is_test = is_test;
        self
    }

    /// Build a [`Logger`] without installing it.
    pub fn build(&mut self) -> Logger {
        let mut format = self.format.clone();
        format.styled = !self.is_test && self.write_style != WriteStyle::Never;
        Logger {
            filter: self.filter.build(),
            format,
            write_style: self.write_style,
            is_test: self.is_test,
        }
    }

    /// Install the configured logger as the global logger.
    ///
    /// Fails if a global logger has already been installed.
    pub fn try_init(&mut self) -> Result<(), SetLoggerError> {
        let logger = self.build();
        let max_level = logger.filter();
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(max_level);
        Ok(())
    }

    /// Install the configured logger as the global logger.
    ///
    /// # Panics
    ///
    /// Panics if a global logger has already been installed.
    pub fn init(&mut self) {
        self.try_init()
            .expect("Builder::init should not be called after logger initialized");
    }
}

/// The logger installed by [`Builder::init`]
pub struct Logger {
    filter: Filter,
    format: Format,
    write_style: WriteStyle,
    is_test: bool,
}

impl Logger {
    /// The most verbose level this logger emits at
    pub fn filter(&self) -> LevelFilter {
        self.filter.max_level()
    }

    /// Checks if this record would be emitted
    pub fn matches(&self, record: &Record<'_>) -> bool {
        self.filter.matches(record)
    }

    fn write(&self, line: &str) {
        #![allow(clippy::print_stderr)]

        if self.is_test {
            eprint!("{line}");
            return;
        }

        #[cfg(feature = "color")]
        let mut stream = anstream::AutoStream::new(std::io::stderr(), self.write_style.into());
        #[cfg(not(feature = "color"))]
        let mut stream = std::io::stderr();

        let _ = stream.write_all(line.as_bytes());
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.filter.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if self.matches(record) {
            self.write(&self.format.render(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(feature = "color")]
impl From<WriteStyle> for anstream::ColorChoice {
    fn from(style: WriteStyle) -> Self {
        match style {
            WriteStyle::Auto => Self::Auto,
            WriteStyle::Always => Self::Always,
            WriteStyle::Never => Self::Never,
        }
    }
}

/// Create a new builder with the default environment variable.
pub fn builder() -> Builder {
    Builder::from_env(DEFAULT_FILTER_ENV)
}

/// Install a logger configured from [`DEFAULT_FILTER_ENV`].
///
/// # Panics
///
/// Panics if a global logger has already been installed.
pub fn init() {
    builder().init()
}

/// Install a logger configured from [`DEFAULT_FILTER_ENV`], failing if one is already installed.
pub fn try_init() -> Result<(), SetLoggerError> {
    builder().try_init()
}
