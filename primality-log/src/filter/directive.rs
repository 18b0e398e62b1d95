use log::{Level, LevelFilter};

use super::Pattern;

/// A single parsed filter directive, e.g. `driver:check=debug` or `-bench`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Directive {
    pub matcher: Matcher,
    pub level: LevelFilter,
    /// A negated directive suppresses records at `level` or more verbose
    pub negated: bool,
}

/// What part of a log target a directive applies to.
///
/// Targets are either module paths (`primality_driver::check`) or structured scopes of the form
/// `component(:topic)*` (`driver:check`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Matcher {
    /// Every target
    Any,
    /// Targets starting with the given module path
    Path(String),
    /// Targets whose first segment equals the given component
    Component(String),
    /// Targets in the given component whose remaining scope matches the pattern
    Topic { component: String, topic: Pattern },
}

impl Matcher {
    pub fn matches(&self, target: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Path(path) => target.starts_with(path.as_str()),
            Self::Component(component) => split_scope(target).0 == component,
            Self::Topic { component, topic } => {
                let (target_component, target_topic) = split_scope(target);
                target_component == component && topic.is_match(target_topic)
            }
        }
    }

    /// Directives are consulted from most to least specific
    pub fn specificity(&self) -> (u8, usize) {
        match self {
            Self::Any => (0, 0),
            Self::Component(component) => (1, component.len()),
            Self::Path(path) => (2, path.len()),
            Self::Topic { component, topic } => (3, component.len() + topic.as_str().len()),
        }
    }
}

/// Split `target` into its component and the rest of its scope
fn split_scope(target: &str) -> (&str, &str) {
    match target.split_once(':') {
        Some((component, rest)) => (component, rest.trim_start_matches(':')),
        None => (target, ""),
    }
}

/// Check whether a record at `level` for `target` passes `directives`.
///
/// `directives` must be sorted by ascending specificity. Any matching negated directive vetoes
/// the record; otherwise the most specific matching directive decides.
pub(crate) fn enabled(directives: &[Directive], level: Level, target: &str) -> bool {
    let vetoed = directives
        .iter()
        .any(|d| d.negated && level >= d.level && d.matcher.matches(target));
    if vetoed {
        return false;
    }
    directives
        .iter()
        .rev()
        .filter(|d| !d.negated)
        .find(|d| d.matcher.matches(target))
        .is_some_and(|d| level <= d.level)
}
