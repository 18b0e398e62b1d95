//! Primality testing by trial division.
//!
//! The canonical entrypoint is [`is_prime`], which accepts any 64-bit signed integer and answers
//! whether it is prime by testing every divisor from 2 through the integer square root of the
//! input.
//!
//! Hosts that marshal dynamically-typed arguments (an interpreter binding, a command line) go
//! through [`call`] or [`parse_candidate`] instead, which enforce the same contract and reject
//! anything that is not a 64-bit signed integer with [`InvalidArgument`]:
//!
//! ```
//! use primality::{InvalidArgument, Value, call, is_prime};
//!
//! assert!(is_prime(97));
//! assert_eq!(call(&[Value::Int(25)]), Ok(false));
//! assert_eq!(call(&[]), Err(InvalidArgument::Arity { given: 0 }));
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

mod args;
mod error;
pub mod mersenne;
pub mod sieve;
mod strategy;
mod trial;

pub use self::{
    args::{Value, call, candidate, parse_candidate},
    error::{InvalidArgument, UnknownStrategy},
    mersenne::{mersenne_number, mersenne_numbers},
    sieve::Sieve,
    strategy::Strategy,
    trial::is_prime,
};
