use std::fmt;

/// A pattern matched against topics and formatted messages.
///
/// With the `regex` feature this is a regular expression, otherwise a plain substring.
#[derive(Debug, Clone)]
pub(crate) struct Pattern {
    #[cfg(feature = "regex")]
    inner: regex::Regex,
    #[cfg(not(feature = "regex"))]
    inner: String,
}

impl Pattern {
    #[cfg(feature = "regex")]
    pub(crate) fn new(spec: &str) -> Result<Self, String> {
        regex::Regex::new(spec)
            .map(|inner| Self { inner })
            .map_err(|err| err.to_string())
    }

    #[cfg(not(feature = "regex"))]
    pub(crate) fn new(spec: &str) -> Result<Self, String> {
        Ok(Self {
            inner: spec.to_string(),
        })
    }

    #[cfg(feature = "regex")]
    pub(crate) fn is_match(&self, s: &str) -> bool {
        self.inner.is_match(s)
    }

    #[cfg(not(feature = "regex"))]
    pub(crate) fn is_match(&self, s: &str) -> bool {
        s.contains(self.inner.as_str())
    }

    pub(crate) fn as_str(&self) -> &str {
        self.inner.as_str()
    }
}

impl Eq for Pattern {}
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
