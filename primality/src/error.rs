use alloc::string::String;

/// The argument handed to the primality predicate could not be used.
///
/// This is the only way a call can fail: either the call produces a boolean, or it produces this
/// error and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    /// The predicate takes exactly one positional argument
    #[error("is_prime() takes exactly one argument ({given} given)")]
    Arity { given: usize },
    /// The argument was not an integer
    #[error("expected an integer argument, found {found}")]
    NotAnInteger { found: String },
    /// The argument was an integer, but does not fit in 64 signed bits
    #[error("integer {value} does not fit in a 64-bit signed integer")]
    OutOfRange { value: String },
}

/// A strategy name did not match any known [crate::Strategy]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown primality strategy '{0}', expected one of: trial, odd, wheel")]
pub struct UnknownStrategy(pub String);
