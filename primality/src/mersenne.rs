//! Mersenne numbers, `2^p - 1`, a convenient source of large candidates.

/// Returns `2^exponent - 1`, or `None` if it does not fit in an `i64`
pub fn mersenne_number(exponent: u32) -> Option<i64> {
    let power = 1u64.checked_shl(exponent)?;
    i64::try_from(power - 1).ok()
}

/// Iterate over `(p, 2^p - 1)` for `p` in `1..=max_exponent`.
///
/// The sequence ends early at `p = 63`, the largest exponent representable as an `i64`.
pub fn mersenne_numbers(max_exponent: u32) -> impl Iterator<Item = (u32, i64)> {
    (1..=max_exponent)
        .map_while(|exponent| mersenne_number(exponent).map(|number| (exponent, number)))
}
