// \file src/self_number.rs
//! Colombian (self) number classification

use crate::*;
use crate::digits::{digit_sum_in, log_magnitude, radix_as};


/// Test whether `value` is a self number in the given radix
///
/// A self number (Colombian number) has no generator: no `n >= 0`
/// satisfies `n + digit_sum(n) == value`.
///
/// Instead of scanning from zero, a lower bound is derived from the
/// integer log: a candidate's digit sum is at most the value's leading
/// digit plus `(radix - 1)` per remaining digit, so anything below
/// `value - that` cannot generate `value` and is skipped.
///
/// Values below 1 have no smaller candidates at all and classify as
/// self.
///
/// ```
/// use intkit::is_self_number;
///
/// assert!(is_self_number(&20, &10).unwrap());
/// assert!(!is_self_number(&21, &10).unwrap());   // 15 + (1+5) == 21
/// ```
pub fn is_self_number<N, R>(value: &N, radix: &R) -> Result<bool, ArithmeticError>
where
    N: ToolkitInteger,
    R: ToolkitInteger,
{
    let radix = radix_as::<N, R>(radix)?;
    if !value.is_positive() {
        return Ok(true);
    }

    let (floor_log, _) = log_magnitude(value, &radix);
    let exponent = floor_log.to_u64().ok_or(ArithmeticError::Overflow)?;
    let leading_digit = value.clone() / checked_pow(&radix, exponent)?;

    let max_digit = radix.clone() - N::one();
    let max_digit_sum = max_digit
        .checked_mul(&floor_log)
        .and_then(|s| s.checked_add(&leading_digit))
        .ok_or(ArithmeticError::Overflow)?;

    let mut candidate = if max_digit_sum < *value {
        value.clone() - max_digit_sum
    } else {
        N::zero()
    };

    while candidate < *value {
        let generated = candidate.clone() + digit_sum_in(&candidate, &radix);
        if generated == *value {
            return Ok(false);
        }
        candidate = candidate + N::one();
    }

    Ok(true)
}
