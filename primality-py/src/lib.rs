//! The `primes` Python extension module.
//!
//! ```python
//! >>> import primes
//! >>> primes.is_prime(97)
//! True
//! >>> primes.is_prime("97")
//! Traceback (most recent call last):
//!   ...
//! primes.InvalidArgument: expected an integer argument, found str
//! ```
use primality::Value;
use pyo3::{
    create_exception,
    exceptions::PyTypeError,
    prelude::*,
    types::{PyBool, PyBytes, PyFloat, PyInt, PyString, PyTuple},
};

create_exception!(
    primes,
    InvalidArgument,
    PyTypeError,
    "Raised when is_prime is not called with exactly one integer that fits in 64 bits."
);

fn raise(err: primality::InvalidArgument) -> PyErr {
    InvalidArgument::new_err(err.to_string())
}

/// Return True if the integer n is prime, testing divisors from 2 up to its square root.
#[pyfunction]
#[pyo3(signature = (*args), text_signature = "(n)")]
fn is_prime(py: Python<'_>, args: &Bound<'_, PyTuple>) -> PyResult<bool> {
    let args = args.iter().map(|arg| to_value(&arg)).collect::<PyResult<Vec<_>>>()?;
    py.allow_threads(|| primality::call(&args)).map_err(raise)
}

fn to_value(obj: &Bound<'_, PyAny>) -> PyResult<Value> {
    // bool is a subclass of int, so it must be checked first
    if let Ok(flag) = obj.downcast::<PyBool>() {
        return Ok(Value::Bool(flag.is_true()));
    }
    if obj.is_instance_of::<PyInt>() {
        return match obj.extract::<i128>() {
            Ok(value) => Ok(Value::Int(value)),
            Err(_) => Err(raise(primality::InvalidArgument::OutOfRange {
                value: obj.str()?.to_string(),
            })),
        };
    }
    if let Ok(value) = obj.downcast::<PyFloat>() {
        return Ok(Value::Float(value.value()));
    }
    if let Ok(text) = obj.downcast::<PyString>() {
        return Ok(Value::Str(text.to_cow()?.into_owned()));
    }
    if let Ok(bytes) = obj.downcast::<PyBytes>() {
        return Ok(Value::Bytes(bytes.as_bytes().to_vec()));
    }
    if obj.is_none() {
        return Ok(Value::None);
    }
    Err(raise(primality::InvalidArgument::NotAnInteger {
        found: obj.get_type().name()?.to_string(),
    }))
}

#[pymodule]
fn primes(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(is_prime, m)?)?;
    m.add("InvalidArgument", m.py().get_type::<InvalidArgument>())?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
