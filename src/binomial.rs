// \file src/binomial.rs
//! Binomial coefficients

use crate::*;


/// Return "n choose k", the number of k-element subsets of an n-set
///
/// Zero when `k < 0` or `k > n`; one when `k == 0` or `k == n`.
/// Otherwise the multiplicative recurrence `c = c * (n - k + i) / i`
/// over `i in 1..=min(k, n - k)` — each intermediate product is
/// exactly divisible by `i`, so no rounding ever occurs. The
/// multiplication is checked; overflow of a fixed-width host type is
/// reported, never masked.
///
/// ```
/// use intkit::binomial_coefficient;
///
/// assert_eq!(binomial_coefficient(&5, &2).unwrap(), 10);
/// assert_eq!(binomial_coefficient(&5, &6).unwrap(), 0);
/// ```
pub fn binomial_coefficient<T: ToolkitInteger>(n: &T, k: &T) -> Result<T, ArithmeticError> {
    if k.is_negative() || k > n {
        return Ok(T::zero());
    }
    if k.is_zero() || k == n {
        return Ok(T::one());
    }

    // C(n, k) == C(n, n - k); iterate over the smaller of the two
    let n_minus_k = n.clone() - k.clone();
    let k = if *k > n_minus_k { n_minus_k } else { k.clone() };
    let base = n.clone() - k.clone();

    let mut c = T::one();
    let mut i = T::one();
    while i <= k {
        let factor = base.clone() + i.clone();
        c = c.checked_mul(&factor).ok_or(ArithmeticError::Overflow)? / i.clone();
        i = i + T::one();
    }

    Ok(c)
}
