// \file src/sqrt.rs
//! Integer square root via Newton's method

use crate::*;


/// Return the floor of the square root of a non-negative value
///
/// Newton's method over integers: the starting estimate is
/// `2^(ceil(bit_length / 2) + 1)`, a power of two guaranteed to exceed
/// the true root, and each step `x1 = (x0 + value/x0) / 2` decreases
/// monotonically until it stops at the floor square root.
///
/// ```
/// use intkit::{integer_sqrt, ArithmeticError};
///
/// assert_eq!(integer_sqrt(&99i64).unwrap(), 9);
/// assert_eq!(integer_sqrt(&100i64).unwrap(), 10);
/// assert_eq!(integer_sqrt(&-1i64), Err(ArithmeticError::NegativeValue));
/// ```
pub fn integer_sqrt<T: ToolkitInteger>(value: &T) -> Result<T, ArithmeticError> {
    if value.is_negative() {
        return Err(ArithmeticError::NegativeValue);
    }
    // 0 and 1 are their own roots, and the iteration needs value/x0 > 0
    if *value <= T::one() {
        return Ok(value.clone());
    }

    let seed_exponent = (value.bit_length() + 1) / 2 + 1;
    let mut x0 = checked_pow(&two::<T>(), seed_exponent)?;
    loop {
        let x1 = (x0.clone() + value.clone() / x0.clone()) / two::<T>();
        if x1 >= x0 {
            return Ok(x0);
        }
        x0 = x1;
    }
}

/// Test whether `root` is the integer square root of `value`
///
/// True exactly when `root^2 <= value < (root + 1)^2`. Squarings are
/// checked, so a `root` too large for the host type is simply not the
/// root.
pub fn is_integer_sqrt<T: ToolkitInteger>(value: &T, root: &T) -> Result<bool, ArithmeticError> {
    if value.is_negative() {
        return Err(ArithmeticError::NegativeValue);
    }
    if root.is_negative() {
        return Ok(false);
    }

    match root.checked_mul(root) {
        Some(lower) if lower <= *value => {}
        // root^2 either exceeds value or the type entirely
        _ => return Ok(false),
    }

    let next = root.clone() + T::one();
    match next.checked_mul(&next) {
        Some(upper) => Ok(*value < upper),
        // (root + 1)^2 exceeds the host type, so it exceeds value
        None => Ok(true),
    }
}

/// Test whether `value` is a perfect square
///
/// Compares against `root * root` (which cannot overflow, being at
/// most `value`) rather than re-deriving anything from the root.
///
/// ```
/// use intkit::is_perfect_square;
///
/// assert!(is_perfect_square(&144i64).unwrap());
/// assert!(!is_perfect_square(&145i64).unwrap());
/// ```
pub fn is_perfect_square<T: ToolkitInteger>(value: &T) -> Result<bool, ArithmeticError> {
    let root = integer_sqrt(value)?;
    Ok(root.clone() * root == *value)
}
