// \file src/gcd.rs
//! Greatest common divisor and least common multiple

use crate::*;
use num_integer::Integer;


/// Return the greatest common divisor of two values
///
/// Iterative Euclidean algorithm on the absolute values; the result is
/// never negative, and `gcd(0, x) == |x|`.
///
/// ```
/// use intkit::gcd;
///
/// assert_eq!(gcd(&48, &18), 6);
/// assert_eq!(gcd(&0, &-5), 5);
/// ```
pub fn gcd<T: ToolkitInteger>(a: &T, b: &T) -> T {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let (_, r) = a.div_rem(&b);
        a = b;
        b = r;
    }
    a
}

/// Return the least common multiple of `first` and every value in `rest`
///
/// Left-fold of `lcm(a, b) = a / gcd(a, b) * b`, dividing before
/// multiplying to keep intermediates small; the final multiplication is
/// checked. The result is never negative, and any zero operand makes
/// the whole result zero.
///
/// At least one extra argument is required; an empty `rest` fails with
/// [`ArithmeticError::EmptyArgumentList`].
///
/// ```
/// use intkit::lcm;
///
/// assert_eq!(lcm(&4, &[6]).unwrap(), 12);
/// assert_eq!(lcm(&4, &[6, 10]).unwrap(), 60);
/// ```
pub fn lcm<T: ToolkitInteger>(first: &T, rest: &[T]) -> Result<T, ArithmeticError> {
    if rest.is_empty() {
        return Err(ArithmeticError::EmptyArgumentList);
    }

    let mut acc = first.abs();
    for value in rest {
        let g = gcd(&acc, value);
        if g.is_zero() {
            // both operands zero; lcm stays zero
            continue;
        }
        acc = (acc / g)
            .checked_mul(&value.abs())
            .ok_or(ArithmeticError::Overflow)?;
    }

    Ok(acc)
}
