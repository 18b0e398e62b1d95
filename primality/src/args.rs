use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
use core::num::IntErrorKind;

use crate::{InvalidArgument, is_prime};

/// A dynamically-typed argument, as marshalled from a host interpreter.
///
/// Integers are carried at 128 bits so that host integers wider than the 64-bit contract can be
/// represented, and rejected, rather than silently truncated.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(i128),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
}

impl Value {
    /// The name of this value's type, as a host would spell it in an error message
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::None => "NoneType",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Bytes(_) => "bytes",
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value as i128)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Int(value as i128)
    }
}

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Invoke the primality predicate with a host-style positional argument list.
///
/// Exactly one argument must be given, and it must be an integer in the 64-bit signed range.
/// Booleans are rejected even though some hosts treat them as integers.
pub fn call(args: &[Value]) -> Result<bool, InvalidArgument> {
    let [arg] = args else {
        let err = InvalidArgument::Arity { given: args.len() };
        log::trace!(target: "primality", "rejecting call: {err}");
        return Err(err);
    };
    candidate(arg).map(is_prime).inspect_err(|err| {
        log::trace!(target: "primality", "rejecting call: {err}");
    })
}

/// Convert a single host value into a primality candidate
pub fn candidate(value: &Value) -> Result<i64, InvalidArgument> {
    match value {
        Value::Int(value) => i64::try_from(*value).map_err(|_| InvalidArgument::OutOfRange {
            value: value.to_string(),
        }),
        other => Err(InvalidArgument::NotAnInteger {
            found: other.type_name().to_string(),
        }),
    }
}

/// Parse a primality candidate from text, e.g. a command-line argument.
///
/// Surrounding whitespace is ignored, and `_` may be used to separate digits, e.g. `10_000_019`.
pub fn parse_candidate(input: &str) -> Result<i64, InvalidArgument> {
    let trimmed = input.trim();
    let not_an_integer = || InvalidArgument::NotAnInteger {
        found: format!("'{trimmed}'"),
    };

    if trimmed.starts_with('_') || trimmed.ends_with('_') {
        return Err(not_an_integer());
    }
    let digits = trimmed.chars().filter(|c| *c != '_').collect::<String>();
    digits.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InvalidArgument::OutOfRange {
            value: trimmed.to_string(),
        },
        _ => not_an_integer(),
    })
}
