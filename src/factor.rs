// \file src/factor.rs
//! Divisor listing and prime factorization
//!
//! Deterministic trial division only — suitable for moderate
//! magnitudes. No probabilistic primality testing lives here.

use crate::*;
use crate::stdlib::Vec;
use num_integer::Integer;


/// Wheel increments for candidates coprime to 2, 3, and 5
///
/// Starting from 7 and adding these in a cycle visits exactly the
/// residues mod 30 that can be prime, so roughly 1 in 4 integers is
/// trial-divided instead of every one. Kept next to the 2/3/5
/// pre-strip in [`prime_factors`] that the cycle depends on.
const WHEEL_INCREMENTS: [u8; 8] = [4, 2, 4, 2, 4, 6, 2, 6];


/// Return every divisor of a positive value
///
/// Trial-divides from 1 up to the integer square root, pairing each
/// divisor found with its cofactor; a perfect square contributes its
/// root once. `proper` removes `value` itself from the result.
///
/// The order interleaves small divisors with large cofactors; callers
/// wanting sorted output should sort.
///
/// ```
/// use intkit::factors;
///
/// assert_eq!(factors(&12, false).unwrap(), vec![1, 12, 2, 6, 3, 4]);
/// assert_eq!(factors(&12, true).unwrap(), vec![1, 2, 6, 3, 4]);
/// ```
pub fn factors<T: ToolkitInteger>(value: &T, proper: bool) -> Result<Vec<T>, ArithmeticError> {
    if !value.is_positive() {
        return Err(ArithmeticError::NonPositiveValue);
    }

    let root = integer_sqrt(value)?;
    let mut found = Vec::new();

    let mut divisor = T::one();
    while divisor <= root {
        let (cofactor, remainder) = value.div_rem(&divisor);
        if remainder.is_zero() {
            found.push(divisor.clone());
            if cofactor != divisor {
                found.push(cofactor);
            }
        }
        divisor = divisor + T::one();
    }

    if proper {
        found.retain(|f| f != value);
    }

    Ok(found)
}

/// Return the prime factorization of a positive value
///
/// Factors of 2, 3, and 5 are stripped directly; remaining candidates
/// advance from 7 by [`WHEEL_INCREMENTS`] and are tested only while
/// `candidate^2 <= remaining` (checked squaring, so fixed-width types
/// terminate instead of wrapping). Whatever remains above 1 is itself
/// prime. The product of the result is `value`; multiplicity reflects
/// repeated divisors. `value == 1` factors to the empty list.
///
/// ```
/// use intkit::prime_factors;
///
/// assert_eq!(prime_factors(&360).unwrap(), vec![2, 2, 2, 3, 3, 5]);
/// assert_eq!(prime_factors(&97).unwrap(), vec![97]);
/// ```
pub fn prime_factors<T: ToolkitInteger>(value: &T) -> Result<Vec<T>, ArithmeticError> {
    if !value.is_positive() {
        return Err(ArithmeticError::NonPositiveValue);
    }

    let mut remaining = value.clone();
    let mut primes = Vec::new();

    for small in [2u8, 3, 5] {
        let small = small_const::<T>(small);
        loop {
            let (q, r) = remaining.div_rem(&small);
            if !r.is_zero() {
                break;
            }
            primes.push(small.clone());
            remaining = q;
        }
    }

    let mut candidate = small_const::<T>(7);
    let mut increments = WHEEL_INCREMENTS.iter().cycle();
    loop {
        match candidate.checked_mul(&candidate) {
            Some(square) if square <= remaining => {}
            // candidate^2 exceeds remaining (or the type); done dividing
            _ => break,
        }

        let (q, r) = remaining.div_rem(&candidate);
        if r.is_zero() {
            primes.push(candidate.clone());
            remaining = q;
        } else {
            let step = increments.next().expect("cycle is infinite");
            candidate = candidate + small_const::<T>(*step);
        }
    }

    if remaining > T::one() {
        primes.push(remaining);
    }

    Ok(primes)
}
