// \file src/factorial.rs
//! Iterative and divide-and-conquer factorials
//!
//! Both algorithms extend factorial to negative input by the library's
//! convention `factorial(-n) == -factorial(n)`. That is not standard
//! mathematics (factorial is conventionally undefined below zero); it
//! is preserved deliberately as observable behavior.

use crate::*;


/// Return `value!` by sequential multiplication
///
/// `0!` and `1!` are 1. Products are checked, so fixed-width host
/// types report [`ArithmeticError::Overflow`] instead of wrapping.
///
/// ```
/// use intkit::factorial;
///
/// assert_eq!(factorial(&5i64).unwrap(), 120);
/// assert_eq!(factorial(&-5i64).unwrap(), -120);
/// ```
pub fn factorial<T: ToolkitInteger>(value: &T) -> Result<T, ArithmeticError> {
    let n = value.abs();

    let mut product = T::one();
    let mut i = two::<T>();
    while i <= n {
        product = product.checked_mul(&i).ok_or(ArithmeticError::Overflow)?;
        i = i + T::one();
    }

    Ok(apply_sign(product, value))
}

/// Return `value!` by the split (divide-and-conquer) algorithm
///
/// Writes `n!` as `2^shift * r` where `r` multiplies only odd numbers:
/// each pass over the bits of `n` extends the odd range, and the range
/// product recurses on halves so the operands' bit-lengths stay
/// balanced. Asymptotically faster than the sequential product for
/// large `n`; agrees with [`factorial`] everywhere.
pub fn split_factorial<T: ToolkitInteger>(value: &T) -> Result<T, ArithmeticError> {
    // control flow runs on a narrowed copy; a count that cannot narrow
    // to u64 has a factorial no host type could hold anyway
    let n = value.abs().to_u64().ok_or(ArithmeticError::Overflow)?;
    let magnitude = split_factorial_magnitude::<T>(n)?;
    Ok(apply_sign(magnitude, value))
}

fn split_factorial_magnitude<T: ToolkitInteger>(n: u64) -> Result<T, ArithmeticError> {
    if n < 2 {
        return Ok(T::one());
    }

    let mut range_product = T::one();
    let mut result = T::one();
    let mut last_odd = T::one();

    let mut bound: u64 = 0;
    let mut shift: u64 = 0;
    let mut high: u64 = 1;
    let mut log2n = 63 - n.leading_zeros() as i64;

    while bound != n {
        shift += bound;
        bound = n >> log2n;
        log2n -= 1;

        let previous_high = high;
        high = (bound - 1) | 1;
        let len = (high - previous_high) / 2;

        if len > 0 {
            range_product = range_product
                .checked_mul(&odd_range_product(len, &mut last_odd)?)
                .ok_or(ArithmeticError::Overflow)?;
            result = result
                .checked_mul(&range_product)
                .ok_or(ArithmeticError::Overflow)?;
        }
    }

    result
        .checked_mul(&checked_pow(&two::<T>(), shift)?)
        .ok_or(ArithmeticError::Overflow)
}

/// Product of the next `len` odd numbers above `last_odd`
///
/// Recurses on halves so both operands of every multiplication cover
/// ranges of similar size.
fn odd_range_product<T: ToolkitInteger>(len: u64, last_odd: &mut T) -> Result<T, ArithmeticError> {
    let half = len / 2;
    if half == 0 {
        *last_odd = last_odd.clone() + two::<T>();
        return Ok(last_odd.clone());
    }
    if len == 2 {
        *last_odd = last_odd.clone() + two::<T>();
        let first = last_odd.clone();
        *last_odd = last_odd.clone() + two::<T>();
        return first.checked_mul(last_odd).ok_or(ArithmeticError::Overflow);
    }

    let left = odd_range_product(len - half, last_odd)?;
    let right = odd_range_product(half, last_odd)?;
    left.checked_mul(&right).ok_or(ArithmeticError::Overflow)
}

fn apply_sign<T: ToolkitInteger>(magnitude: T, value: &T) -> T {
    if value.is_negative() {
        -magnitude
    } else {
        magnitude
    }
}
