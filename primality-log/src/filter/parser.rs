use std::{error::Error, fmt};

use log::LevelFilter;

use super::{Directive, Matcher, Pattern};

#[derive(Default, Debug)]
pub(crate) struct ParseResult {
    pub(crate) directives: Vec<Directive>,
    pub(crate) message: Option<Pattern>,
    pub(crate) errors: Vec<String>,
}

impl ParseResult {
    pub(crate) fn ok(self) -> Result<(Vec<Directive>, Option<Pattern>), ParseError> {
        match self.errors.into_iter().next() {
            Some(details) => Err(ParseError { details }),
            None => Ok((self.directives, self.message)),
        }
    }
}

/// Error during logger directive parsing process.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseError {
    details: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error parsing logger filter: {}", self.details)
    }
}

impl Error for ParseError {}

/// Parse a filter specification such as `warn,driver=debug,-primality/sieving` into directives
/// and an optional message pattern.
///
/// Invalid directives are reported in [ParseResult::errors] and skipped; valid ones are kept.
pub(crate) fn parse_spec(spec: &str) -> ParseResult {
    let mut result = ParseResult::default();

    let (directives, message) = spec.split_once('/').unwrap_or((spec, ""));
    if message.contains('/') {
        result.errors.push(format!("invalid logging spec '{spec}': too many '/'"));
        return result;
    }

    for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        match parse_directive(directive) {
            Ok(parsed) => result.directives.push(parsed),
            Err(err) => result.errors.push(format!("invalid logging spec '{directive}': {err}")),
        }
    }

    if !message.is_empty() {
        match Pattern::new(message) {
            Ok(pattern) => result.message = Some(pattern),
            Err(err) => result.errors.push(format!("invalid message filter: {err}")),
        }
    }

    result
}

fn parse_directive(directive: &str) -> Result<Directive, String> {
    let (body, negated) = match directive.strip_prefix('-') {
        Some(body) => (body.trim(), true),
        None => (directive, false),
    };
    // A bare negation suppresses every level
    let unspecified = if negated {
        LevelFilter::Error
    } else {
        LevelFilter::max()
    };

    let (target, level) = match body.split_once('=') {
        Some((target, level)) => {
            if level.contains('=') {
                return Err("'=' is not allowed in targets".to_string());
            }
            let level = match level.trim() {
                "" => unspecified,
                level => level.parse::<LevelFilter>().map_err(|err| err.to_string())?,
            };
            (Some(target.trim()), level)
        }
        None => match body.parse::<LevelFilter>() {
            Ok(level) => (None, level),
            Err(_) => (Some(body), unspecified),
        },
    };

    let matcher = match target {
        None | Some("" | "*") => Matcher::Any,
        Some(target) => parse_matcher(target)?,
    };

    Ok(Directive {
        matcher,
        level,
        negated,
    })
}

fn parse_matcher(target: &str) -> Result<Matcher, String> {
    if target.contains("::") {
        return Ok(Matcher::Path(target.to_string()));
    }
    match target.split_once(':') {
        None | Some((_, "" | "*")) => {
            let component = target.split(':').next().unwrap_or(target);
            Ok(Matcher::Component(component.to_string()))
        }
        Some((component, topic)) => Ok(Matcher::Topic {
            component: component.to_string(),
            topic: Pattern::new(topic)?,
        }),
    }
}
