// Copyright 2024-2026 Andrew Kubera
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integer algorithm toolkit
//!
//! A collection of pure, stateless algorithms over any integer type
//! providing a minimal arithmetic capability set: division/remainder
//! sign conventions, gcd/lcm, digit decomposition, integer square
//! roots and logarithms, factorials, binomial coefficients, wheel
//! factorization, self-number classification, and lexicographic
//! combination unranking.
//!
//! Every function is generic over [`ToolkitInteger`], which is
//! implemented for the signed primitives and for [`num_bigint::BigInt`],
//! so the same algorithm runs bounded (with explicit
//! [`Overflow`][ArithmeticError::Overflow] errors) or unbounded.
//!
//! # Example
//!
//! ```
//! use intkit::{binomial_coefficient, integer_sqrt, prime_factors};
//!
//! assert_eq!(prime_factors(&360).unwrap(), vec![2, 2, 2, 3, 3, 5]);
//! assert_eq!(integer_sqrt(&360i64).unwrap(), 18);
//! assert_eq!(binomial_coefficient(&5, &2).unwrap(), 10);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub};
pub use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};


// const MAX_RADIX: u8 = ${RUST_INTKIT_MAX_RADIX} or 36;
include!(concat!(env!("OUT_DIR"), "/max_radix.rs"));

#[cfg(test)]
extern crate paste;

// division & remainder sign conventions
pub mod division;
// euclidean gcd, variadic lcm
pub mod gcd;
// radix validation, digit decomposition, integer logarithms
pub mod digits;
// newton integer square root
pub mod sqrt;
// iterative & divide-and-conquer factorials
pub mod factorial;
// binomial coefficients
pub mod binomial;
// divisor listing & wheel factorization
pub mod factor;
// colombian (self) number classification
pub mod self_number;
// lexicographic combination unranking
pub mod combination;

pub use binomial::binomial_coefficient;
pub use combination::combination_at_rank;
pub use digits::{
    check_radix, digit_place_values, digit_sum, digits, digits_reversed,
    integer_log_away_from_zero, integer_log_toward_zero,
};
pub use division::{div_rem_enveloped, div_rem_euclidean, div_rem_floor};
pub use factor::{factors, prime_factors};
pub use factorial::{factorial, split_factorial};
pub use gcd::{gcd, lcm};
pub use self_number::is_self_number;
pub use sqrt::{integer_sqrt, is_integer_sqrt, is_perfect_square};


/// Bit count of a value's magnitude
///
/// Zero has a bit-length of zero.
///
pub trait BitLength {
    /// Number of bits required to represent the absolute value
    fn bit_length(&self) -> u64;
}

macro_rules! impl_bit_length_for_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl BitLength for $t {
                #[inline]
                fn bit_length(&self) -> u64 {
                    (<$t>::BITS - self.unsigned_abs().leading_zeros()) as u64
                }
            }
        )*
    };
}

impl_bit_length_for_primitive!(i8, i16, i32, i64, i128, isize);

impl BitLength for BigInt {
    #[inline]
    fn bit_length(&self) -> u64 {
        self.bits()
    }
}


/// Capability set required of the integers these algorithms run on
///
/// Ordering, additive/multiplicative identities, truncated division
/// with remainder, absolute value and sign, bit-length, checked
/// conversion through the fixed-width primitives, and checked
/// arithmetic for surfacing overflow on fixed-width types.
///
/// Implemented (via blanket impl) for the signed primitives and for
/// [`num_bigint::BigInt`].
///
pub trait ToolkitInteger:
    Integer
    + Signed
    + Clone
    + BitLength
    + FromPrimitive
    + ToPrimitive
    + CheckedAdd
    + CheckedSub
    + CheckedMul
{
}

impl<T> ToolkitInteger for T where
    T: Integer
        + Signed
        + Clone
        + BitLength
        + FromPrimitive
        + ToPrimitive
        + CheckedAdd
        + CheckedSub
        + CheckedMul
{
}


/// Errors from the integer algorithms
///
/// All violations are detected before any computation begins; no
/// function returns a partial result.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Radix outside the supported `[2, MAX_RADIX]` range
    RadixOutOfRange,
    /// Division or modulus with a zero divisor
    DivideByZero,
    /// Negative value where the operation requires non-negative input
    NegativeValue,
    /// Zero or negative value where the operation requires positive input
    NonPositiveValue,
    /// Variadic operation called with an empty argument list
    EmptyArgumentList,
    /// Combination length outside `[1, n]`
    LengthOutOfRange,
    /// Lexicographic rank outside `[1, C(n, k)]`
    RankOutOfRange,
    /// Checked arithmetic overflowed the host integer type
    Overflow,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ArithmeticError::*;

        match *self {
            RadixOutOfRange => "radix out of supported range".fmt(f),
            DivideByZero => "division by zero".fmt(f),
            NegativeValue => "value must not be negative".fmt(f),
            NonPositiveValue => "value must be positive".fmt(f),
            EmptyArgumentList => "expected at least one argument".fmt(f),
            LengthOutOfRange => "combination length out of range".fmt(f),
            RankOutOfRange => "combination rank out of range".fmt(f),
            Overflow => "arithmetic overflow".fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArithmeticError {}


/// Return 2 as the generic integer type
#[inline]
pub(crate) fn two<T: ToolkitInteger>() -> T {
    T::one() + T::one()
}

/// Build a small constant of the generic integer type
///
/// Valid for every integer type at least one byte wide.
///
#[inline]
pub(crate) fn small_const<T: ToolkitInteger>(n: u8) -> T {
    T::from_u8(n).expect("constant out of range for integer type")
}

/// Return base^exp by squaring, surfacing overflow of the host type
pub(crate) fn checked_pow<T: ToolkitInteger>(base: &T, exp: u64) -> Result<T, ArithmeticError> {
    let mut result = T::one();
    if exp == 0 {
        return Ok(result);
    }

    let mut base = base.clone();
    let mut exp = exp;
    loop {
        if exp & 1 == 1 {
            result = result.checked_mul(&base).ok_or(ArithmeticError::Overflow)?;
        }
        exp >>= 1;
        if exp == 0 {
            break;
        }
        base = base.checked_mul(&base).ok_or(ArithmeticError::Overflow)?;
    }

    Ok(result)
}



#[cfg(test)]
mod test_checked_pow {
    use super::*;

    #[test]
    fn two_to_the_ten() {
        assert_eq!(checked_pow(&2i64, 10), Ok(1024));
    }

    #[test]
    fn anything_to_the_zero() {
        assert_eq!(checked_pow(&7i32, 0), Ok(1));
        assert_eq!(checked_pow(&0i32, 0), Ok(1));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(checked_pow(&2i8, 7), Err(ArithmeticError::Overflow));
        assert_eq!(checked_pow(&10i64, 19), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn bigint_never_overflows() {
        let expected = BigInt::from(1u64 << 50) * BigInt::from(1u64 << 50);
        assert_eq!(checked_pow(&BigInt::from(2), 100), Ok(expected));
    }
}
