/// Returns true if `n` is prime.
///
/// Every candidate divisor from 2 through `isqrt(n)` is tested, stopping at the first one that
/// divides `n`. Inputs below 2 (including all negative numbers) are never prime.
///
/// The bound is an exact integer square root, so the whole `i64` range is supported without
/// rounding error or overflow.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    (2..=n.isqrt()).all(|divisor| n % divisor != 0)
}
