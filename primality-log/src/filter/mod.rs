//! Filtering for log records.
//!
//! A [`Filter`] is built from directive strings with a [`Builder`], and can be reused by other
//! [`log::Log`] implementations via [`Filter::enabled`] and [`Filter::matches`].

mod directive;
mod parser;
mod pattern;

use std::env;

use log::{LevelFilter, Metadata, Record};

use self::{
    directive::{Directive, Matcher, enabled},
    parser::parse_spec,
    pattern::Pattern,
};
pub use self::parser::ParseError;

/// A builder for a log [`Filter`].
///
/// ```
/// use primality_log::filter::Builder;
///
/// let filter = Builder::new().parse("warn,driver=debug").build();
/// assert_eq!(filter.max_level(), log::LevelFilter::Debug);
/// ```
#[derive(Default)]
pub struct Builder {
    directives: Vec<Directive>,
    message: Option<Pattern>,
}

impl Builder {
    /// Initializes the filter builder with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes the filter builder from the directives in environment variable `var`, if set.
    pub fn from_env(var: &str) -> Self {
        let mut builder = Self::new();
        if let Ok(spec) = env::var(var) {
            builder.parse(&spec);
        }
        builder
    }

    /// Insert a directive, replacing the level of an existing one for the same matcher
    fn insert_directive(&mut self, directive: Directive) {
        let existing = self
            .directives
            .iter_mut()
            .find(|d| d.negated == directive.negated && d.matcher == directive.matcher);
        match existing {
            Some(existing) => existing.level = directive.level,
            None => self.directives.push(directive),
        }
    }

    /// Adds a directive to the filter for all targets.
    pub fn filter_level(&mut self, level: LevelFilter) -> &mut Self {
        self.insert_directive(Directive {
            matcher: Matcher::Any,
            level,
            negated: false,
        });
        self
    }

    /// Adds a directive to the filter for targets starting with a module path.
    pub fn filter_module(&mut self, module: &str, level: LevelFilter) -> &mut Self {
        self.insert_directive(Directive {
            matcher: Matcher::Path(module.to_string()),
            level,
            negated: false,
        });
        self
    }

    /// Adds a directive to the filter for a component, e.g. `driver`.
    pub fn filter_component(&mut self, component: &str, level: LevelFilter) -> &mut Self {
        self.insert_directive(Directive {
            matcher: Matcher::Component(component.to_string()),
            level,
            negated: false,
        });
        self
    }

    /// Parses a directive string, warning about and skipping invalid directives.
    pub fn parse(&mut self, spec: &str) -> &mut Self {
        #![allow(clippy::print_stderr)]

        let result = parse_spec(spec);
        for error in result.errors {
            eprintln!("warning: {error}, ignoring it");
        }
        self.apply(result.directives, result.message)
    }

    /// Parses a directive string, returning an error if any directive is invalid.
    pub fn try_parse(&mut self, spec: &str) -> Result<&mut Self, ParseError> {
        let (directives, message) = parse_spec(spec).ok()?;
        Ok(self.apply(directives, message))
    }

    fn apply(&mut self, directives: Vec<Directive>, message: Option<Pattern>) -> &mut Self {
        if message.is_some() {
            self.message = message;
        }
        for directive in directives {
            self.insert_directive(directive);
        }
        self
    }

    /// Build the [`Filter`].
    ///
    /// With no directives at all, only errors are enabled.
    pub fn build(&mut self) -> Filter {
        let mut directives = core::mem::take(&mut self.directives);
        if directives.is_empty() {
            directives.push(Directive {
                matcher: Matcher::Any,
                level: LevelFilter::Error,
                negated: false,
            });
        }
        directives.sort_by_key(|d| d.matcher.specificity());

        Filter {
            directives,
            message: self.message.take(),
        }
    }
}

/// A log filter, deciding which records are emitted
#[derive(Debug)]
pub struct Filter {
    directives: Vec<Directive>,
    message: Option<Pattern>,
}

impl Filter {
    /// The most verbose level any target can emit at
    pub fn max_level(&self) -> LevelFilter {
        self.directives
            .iter()
            .filter(|d| !d.negated)
            .map(|d| d.level)
            .max()
            .unwrap_or(LevelFilter::Off)
    }

    /// Checks if a record with this metadata would be emitted, ignoring the message filter
    pub fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        enabled(&self.directives, metadata.level(), metadata.target())
    }

    /// Checks if this record should be emitted
    pub fn matches(&self, record: &Record<'_>) -> bool {
        if !self.enabled(record.metadata()) {
            return false;
        }
        match self.message.as_ref() {
            Some(pattern) => pattern.is_match(&record.args().to_string()),
            None => true,
        }
    }
}
