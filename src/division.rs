// \file src/division.rs
//! Integer division with explicit remainder-sign conventions
//!
//! All three variants start from truncated division (the convention of
//! the `/` and `%` operators) and adjust the pair. The divisor must be
//! nonzero; that is the only precondition.

use crate::*;
use num_integer::Integer;


/// Division rounding the quotient away from zero ("enveloped")
///
/// The remainder is the truncated-division remainder, unchanged; when
/// it is nonzero the quotient is pushed one step further from zero.
/// Note the pair does not satisfy `q * divisor + r == dividend` unless
/// the division is exact.
///
/// ```
/// use intkit::div_rem_enveloped;
///
/// assert_eq!(div_rem_enveloped(&7, &2).unwrap(), (4, 1));
/// assert_eq!(div_rem_enveloped(&-7, &2).unwrap(), (-4, -1));
/// assert_eq!(div_rem_enveloped(&6, &2).unwrap(), (3, 0));
/// ```
pub fn div_rem_enveloped<T: ToolkitInteger>(
    dividend: &T,
    divisor: &T,
) -> Result<(T, T), ArithmeticError> {
    if divisor.is_zero() {
        return Err(ArithmeticError::DivideByZero);
    }

    let (quotient, remainder) = dividend.div_rem(divisor);
    if remainder.is_zero() {
        return Ok((quotient, remainder));
    }

    // the quotient's sign is fixed by the operand signs, even when
    // truncation produced zero
    if dividend.is_negative() == divisor.is_negative() {
        Ok((quotient + T::one(), remainder))
    } else {
        Ok((quotient - T::one(), remainder))
    }
}

/// Division with a non-negative remainder
///
/// The remainder always satisfies `0 <= r < |divisor|`.
///
pub fn div_rem_euclidean<T: ToolkitInteger>(
    dividend: &T,
    divisor: &T,
) -> Result<(T, T), ArithmeticError> {
    if divisor.is_zero() {
        return Err(ArithmeticError::DivideByZero);
    }

    let (quotient, remainder) = dividend.div_rem(divisor);
    if !remainder.is_negative() {
        return Ok((quotient, remainder));
    }

    if divisor.is_negative() {
        Ok((quotient + T::one(), remainder - divisor.clone()))
    } else {
        Ok((quotient - T::one(), remainder + divisor.clone()))
    }
}

/// Division with the remainder taking the divisor's sign
///
/// Matches `Integer::div_mod_floor`; the quotient rounds toward
/// negative infinity.
///
pub fn div_rem_floor<T: ToolkitInteger>(
    dividend: &T,
    divisor: &T,
) -> Result<(T, T), ArithmeticError> {
    if divisor.is_zero() {
        return Err(ArithmeticError::DivideByZero);
    }

    let (quotient, remainder) = dividend.div_rem(divisor);
    if remainder.is_zero() || remainder.is_negative() == divisor.is_negative() {
        return Ok((quotient, remainder));
    }

    Ok((quotient - T::one(), remainder + divisor.clone()))
}
