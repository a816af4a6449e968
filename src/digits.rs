// \file src/digits.rs
//! Digit decomposition and integer logarithms
//!
//! A value's digits in a given radix are always non-negative; the sign
//! is the caller's to track. Radixes are validated up front against the
//! supported `[2, MAX_RADIX]` range and never silently clamped.
//!
//! The integer logarithms are computed by repeated division, never by
//! floating-point `log`, which rounds unreliably at exact powers.

use crate::*;
use crate::stdlib::Vec;
use num_integer::Integer;


/// Validate a radix against the supported range
///
/// ```
/// use intkit::{check_radix, ArithmeticError};
///
/// assert!(check_radix(&16).is_ok());
/// assert_eq!(check_radix(&1), Err(ArithmeticError::RadixOutOfRange));
/// ```
pub fn check_radix<R: ToolkitInteger>(radix: &R) -> Result<(), ArithmeticError> {
    validated_radix(radix).map(|_| ())
}

/// Validate radix and narrow it to u8
pub(crate) fn validated_radix<R: ToolkitInteger>(radix: &R) -> Result<u8, ArithmeticError> {
    match radix.to_u8() {
        Some(r) if (2..=MAX_RADIX).contains(&r) => Ok(r),
        _ => Err(ArithmeticError::RadixOutOfRange),
    }
}

/// Validate radix and convert it into the value type
pub(crate) fn radix_as<N, R>(radix: &R) -> Result<N, ArithmeticError>
where
    N: ToolkitInteger,
    R: ToolkitInteger,
{
    let r = validated_radix(radix)?;
    N::from_u8(r).ok_or(ArithmeticError::RadixOutOfRange)
}


/// Return the digits of `value` in base `radix`, most significant first
///
/// Zero decomposes to `[0]`; the sign of `value` is ignored.
///
/// ```
/// use intkit::digits;
///
/// assert_eq!(digits(&1234, &10).unwrap(), vec![1, 2, 3, 4]);
/// assert_eq!(digits(&255, &16).unwrap(), vec![15, 15]);
/// ```
pub fn digits<N, R>(value: &N, radix: &R) -> Result<Vec<N>, ArithmeticError>
where
    N: ToolkitInteger,
    R: ToolkitInteger,
{
    let mut digits = digits_reversed(value, radix)?;
    digits.reverse();
    Ok(digits)
}

/// Return the digits of `value` in base `radix`, least significant first
///
/// The reversed order is what the division loop produces naturally, so
/// this variant never pays for front-insertion.
pub fn digits_reversed<N, R>(value: &N, radix: &R) -> Result<Vec<N>, ArithmeticError>
where
    N: ToolkitInteger,
    R: ToolkitInteger,
{
    let radix = radix_as::<N, R>(radix)?;
    Ok(digits_reversed_in(value, &radix))
}

/// Digit collection loop; radix is already validated
pub(crate) fn digits_reversed_in<N: ToolkitInteger>(value: &N, radix: &N) -> Vec<N> {
    let mut n = value.abs();
    if n.is_zero() {
        return vec![N::zero()];
    }

    let mut digits = Vec::new();
    while !n.is_zero() {
        let (q, r) = n.div_rem(radix);
        digits.push(r);
        n = q;
    }
    digits
}

/// Return each digit scaled by its place value, least significant first
///
/// Entry `i` is `digit[i] * radix^i`; the entries sum to `|value|`. The
/// radix power accumulates across the loop, one multiplication per
/// digit.
///
/// ```
/// use intkit::digit_place_values;
///
/// assert_eq!(digit_place_values(&1234, &10).unwrap(), vec![4, 30, 200, 1000]);
/// ```
pub fn digit_place_values<N, R>(value: &N, radix: &R) -> Result<Vec<N>, ArithmeticError>
where
    N: ToolkitInteger,
    R: ToolkitInteger,
{
    let radix = radix_as::<N, R>(radix)?;
    let digits = digits_reversed_in(value, &radix);

    let mut place_values = Vec::with_capacity(digits.len());
    let mut power = N::one();
    for (i, digit) in digits.into_iter().enumerate() {
        if i > 0 {
            // bounded by |value|, so this cannot overflow
            power = power * radix.clone();
        }
        place_values.push(digit * power.clone());
    }
    Ok(place_values)
}

/// Return the sum of the digits of `value` in base `radix`
///
/// Runs the same division loop as [`digits`] without materializing the
/// digit list.
pub fn digit_sum<N, R>(value: &N, radix: &R) -> Result<N, ArithmeticError>
where
    N: ToolkitInteger,
    R: ToolkitInteger,
{
    let radix = radix_as::<N, R>(radix)?;
    Ok(digit_sum_in(value, &radix))
}

/// Digit-sum loop; radix is already validated
pub(crate) fn digit_sum_in<N: ToolkitInteger>(value: &N, radix: &N) -> N {
    let mut n = value.abs();
    let mut sum = N::zero();
    while !n.is_zero() {
        let (q, r) = n.div_rem(radix);
        sum = sum + r;
        n = q;
    }
    sum
}


/// Floor of `log_radix(|value|)`, with the sign of `value`
///
/// `log(0) == 0`. Counts division steps instead of calling a float
/// logarithm.
///
/// ```
/// use intkit::integer_log_toward_zero;
///
/// assert_eq!(integer_log_toward_zero(&999, &10).unwrap(), 2);
/// assert_eq!(integer_log_toward_zero(&1000, &10).unwrap(), 3);
/// assert_eq!(integer_log_toward_zero(&-1000, &10).unwrap(), -3);
/// ```
pub fn integer_log_toward_zero<N, R>(value: &N, radix: &R) -> Result<N, ArithmeticError>
where
    N: ToolkitInteger,
    R: ToolkitInteger,
{
    let radix = radix_as::<N, R>(radix)?;
    let (log, _) = log_magnitude(value, &radix);
    Ok(apply_sign(log, value))
}

/// Ceiling of `log_radix(|value|)`, with the sign of `value`
///
/// Equal to the floor log when `|value|` is an exact power of the
/// radix, one more otherwise; `log(0) == 0`.
pub fn integer_log_away_from_zero<N, R>(value: &N, radix: &R) -> Result<N, ArithmeticError>
where
    N: ToolkitInteger,
    R: ToolkitInteger,
{
    let radix = radix_as::<N, R>(radix)?;
    if value.is_zero() {
        return Ok(N::zero());
    }

    let (log, exact) = log_magnitude(value, &radix);
    let log = if exact { log } else { log + N::one() };
    Ok(apply_sign(log, value))
}

/// Floor log of `|value|` and whether `|value|` is an exact radix power
///
/// Zero maps to `(0, false)`.
pub(crate) fn log_magnitude<N: ToolkitInteger>(value: &N, radix: &N) -> (N, bool) {
    let mut n = value.abs();
    let mut count = N::zero();
    if n.is_zero() {
        return (count, false);
    }

    let mut divided_evenly = true;
    while n >= *radix {
        let (q, r) = n.div_rem(radix);
        if !r.is_zero() {
            divided_evenly = false;
        }
        n = q;
        count = count + N::one();
    }
    (count, divided_evenly && n.is_one())
}

fn apply_sign<N: ToolkitInteger>(magnitude: N, value: &N) -> N {
    if value.is_negative() {
        -magnitude
    } else {
        magnitude
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::BigInt;

    mod radix_validation {
        use super::*;

        macro_rules! impl_case {
            (valid $name:ident: $radix:literal) => {
                #[test]
                fn $name() {
                    assert_eq!(check_radix(&$radix), Ok(()));
                }
            };
            (invalid $name:ident: $radix:literal) => {
                #[test]
                fn $name() {
                    assert_eq!(check_radix(&$radix), Err(ArithmeticError::RadixOutOfRange));
                }
            };
        }

        impl_case!(valid case_2: 2);
        impl_case!(valid case_10: 10);
        impl_case!(valid case_36: 36);
        impl_case!(invalid case_0: 0);
        impl_case!(invalid case_1: 1);
        impl_case!(invalid case_37: 37);
        impl_case!(invalid case_neg10: -10);

        #[test]
        fn bigint_radix() {
            assert!(check_radix(&BigInt::from(10)).is_ok());
            assert!(check_radix(&BigInt::from(1000)).is_err());
        }
    }

    mod digits {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: ( $value:literal, $radix:literal ) => $expected:expr) => {
                #[test]
                fn $name() {
                    assert_eq!(digits(&$value, &$radix), Ok($expected.to_vec()));
                }
            };
        }

        impl_case!(case_1234_b10: (1234, 10) => [1, 2, 3, 4]);
        impl_case!(case_255_b16: (255, 16) => [15, 15]);
        impl_case!(case_255_b2: (255, 2) => [1, 1, 1, 1, 1, 1, 1, 1]);
        impl_case!(case_0_b10: (0, 10) => [0]);
        impl_case!(case_9_b10: (9, 10) => [9]);
        impl_case!(case_neg1234_b10: (-1234, 10) => [1, 2, 3, 4]);

        #[test]
        fn reversed_is_reverse_of_forward() {
            let forward = digits(&8675309i64, &10).unwrap();
            let mut reversed = digits_reversed(&8675309i64, &10).unwrap();
            reversed.reverse();
            assert_eq!(forward, reversed);
        }

        #[test]
        fn invalid_radix() {
            assert_eq!(digits(&100, &1), Err(ArithmeticError::RadixOutOfRange));
            assert_eq!(digits_reversed(&100, &40), Err(ArithmeticError::RadixOutOfRange));
        }

        #[test]
        fn bigint_digits() {
            let n = BigInt::from(9_000_000_000_000_000_001u64);
            let ds = digits(&n, &10).unwrap();
            assert_eq!(ds.first().unwrap(), &BigInt::from(9));
            assert_eq!(ds.last().unwrap(), &BigInt::from(1));
            assert_eq!(ds.len(), 19);
        }
    }

    mod digit_place_values {
        use super::*;

        #[test]
        fn case_1234_b10() {
            assert_eq!(digit_place_values(&1234, &10), Ok(vec![4, 30, 200, 1000]));
        }

        #[test]
        fn case_0_b10() {
            assert_eq!(digit_place_values(&0, &10), Ok(vec![0]));
        }

        #[test]
        fn entries_sum_to_magnitude() {
            for value in [0i64, 1, 9, 10, 1234, 65535, -65535, 999999937] {
                for radix in [2i64, 3, 10, 16] {
                    let sum: i64 = digit_place_values(&value, &radix).unwrap().iter().sum();
                    assert_eq!(sum, value.abs(), "value={} radix={}", value, radix);
                }
            }
        }
    }

    mod digit_sum {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: ( $value:literal, $radix:literal ) => $expected:literal) => {
                #[test]
                fn $name() {
                    assert_eq!(digit_sum(&$value, &$radix), Ok($expected));
                }
            };
        }

        impl_case!(case_1234_b10: (1234, 10) => 10);
        impl_case!(case_0_b10: (0, 10) => 0);
        impl_case!(case_neg1234_b10: (-1234, 10) => 10);
        impl_case!(case_255_b16: (255, 16) => 30);
        impl_case!(case_7_b2: (7, 2) => 3);
    }

    mod integer_log {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $f:ident ( $value:literal, $radix:literal ) => $expected:literal) => {
                #[test]
                fn $name() {
                    assert_eq!($f(&$value, &$radix), Ok($expected));
                }
            };
        }

        impl_case!(case_toward_0: integer_log_toward_zero(0, 10) => 0);
        impl_case!(case_toward_1: integer_log_toward_zero(1, 10) => 0);
        impl_case!(case_toward_5: integer_log_toward_zero(5, 10) => 0);
        impl_case!(case_toward_10: integer_log_toward_zero(10, 10) => 1);
        impl_case!(case_toward_99: integer_log_toward_zero(99, 10) => 1);
        impl_case!(case_toward_100: integer_log_toward_zero(100, 10) => 2);
        impl_case!(case_toward_neg100: integer_log_toward_zero(-100, 10) => -2);
        impl_case!(case_toward_1024_b2: integer_log_toward_zero(1024, 2) => 10);

        impl_case!(case_away_0: integer_log_away_from_zero(0, 10) => 0);
        impl_case!(case_away_1: integer_log_away_from_zero(1, 10) => 0);
        impl_case!(case_away_5: integer_log_away_from_zero(5, 10) => 1);
        impl_case!(case_away_10: integer_log_away_from_zero(10, 10) => 1);
        impl_case!(case_away_99: integer_log_away_from_zero(99, 10) => 2);
        impl_case!(case_away_100: integer_log_away_from_zero(100, 10) => 2);
        impl_case!(case_away_101: integer_log_away_from_zero(101, 10) => 3);
        impl_case!(case_away_neg101: integer_log_away_from_zero(-101, 10) => -3);

        #[test]
        fn exact_powers_agree_in_both_directions() {
            let mut power = 1i64;
            for _ in 0..12 {
                power *= 10;
                let down = integer_log_toward_zero(&power, &10).unwrap();
                let up = integer_log_away_from_zero(&power, &10).unwrap();
                assert_eq!(down, up, "power={}", power);
            }
        }

        #[test]
        fn bigint_log() {
            let n = checked_pow(&BigInt::from(10), 40).unwrap();
            assert_eq!(integer_log_toward_zero(&n, &10), Ok(BigInt::from(40)));
            assert_eq!(integer_log_away_from_zero(&n, &10), Ok(BigInt::from(40)));
        }
    }

    #[cfg(property_tests)]
    mod prop {
        use super::*;
        use paste::paste;
        use proptest::*;

        macro_rules! impl_test {
            ($t:ty) => {
                paste! { proptest! {
                    #[test]
                    fn [< place_values_roundtrip_ $t >](value: $t, radix in 2..=16u8) {
                        prop_assume!(value != <$t>::MIN);

                        let radix = radix as $t;
                        let entries = digit_place_values(&value, &radix).unwrap();
                        let sum = entries.iter().fold(0 as $t, |acc, v| acc + v);
                        prop_assert_eq!(sum, value.abs());
                    }

                    #[test]
                    fn [< digits_bounded_by_radix_ $t >](value: $t, radix in 2..=16u8) {
                        prop_assume!(value != <$t>::MIN);

                        let radix = radix as $t;
                        for d in digits(&value, &radix).unwrap() {
                            prop_assert!(0 <= d && d < radix);
                        }
                    }
                } }
            };
        }

        impl_test!(i32);
        impl_test!(i64);
    }
}
