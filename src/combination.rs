// \file src/combination.rs
//! Lexicographic combination unranking
//!
//! Maps a 1-based lexicographic rank to the k-combination occupying
//! that position, without generating any of the preceding
//! combinations. The procedure is Buckles & Lybanon's Algorithm 515
//! (ACM TOMS, 1977), re-expressed over the generic integer type with
//! zero-based output values.

use crate::*;
use crate::stdlib::Vec;


/// Return the combination at the given lexicographic rank
///
/// Produces the strictly increasing `k`-element sequence of values in
/// `[0, n)` holding 1-based position `rank` in the lexicographic
/// ordering of all `k`-subsets. The mapping is a bijection from
/// `[1, C(n, k)]`.
///
/// For each output position a candidate advances while ranks covered
/// by the subtree rooted at it — counted by `C(n - x, k - position)` —
/// still fall short of `rank`; the last element comes directly from
/// the residual rank.
///
/// `k` outside `[1, n]` fails with
/// [`LengthOutOfRange`][ArithmeticError::LengthOutOfRange], `rank`
/// outside `[1, C(n, k)]` with
/// [`RankOutOfRange`][ArithmeticError::RankOutOfRange].
///
/// ```
/// use intkit::combination_at_rank;
///
/// assert_eq!(combination_at_rank(&5, &3, &1).unwrap(), vec![0, 1, 2]);
/// assert_eq!(combination_at_rank(&5, &3, &10).unwrap(), vec![2, 3, 4]);
/// ```
pub fn combination_at_rank<T: ToolkitInteger>(
    n: &T,
    k: &T,
    rank: &T,
) -> Result<Vec<T>, ArithmeticError> {
    if !k.is_positive() || k > n {
        return Err(ArithmeticError::LengthOutOfRange);
    }
    let total = binomial_coefficient(n, k)?;
    if !rank.is_positive() || *rank > total {
        return Err(ArithmeticError::RankOutOfRange);
    }

    let len = k.to_usize().ok_or(ArithmeticError::Overflow)?;
    let mut combination = Vec::with_capacity(len);

    // candidates run 1-based as in the original listing; outputs
    // subtract one
    let mut covered = T::zero();
    let mut candidate = T::zero();
    let mut position = T::one();

    while position < *k {
        loop {
            candidate = candidate.clone() + T::one();
            let subtree = binomial_coefficient(
                &(n.clone() - candidate.clone()),
                &(k.clone() - position.clone()),
            )?;
            covered = covered
                .checked_add(&subtree)
                .ok_or(ArithmeticError::Overflow)?;
            if covered >= *rank {
                covered = covered - subtree;
                break;
            }
        }
        combination.push(candidate.clone() - T::one());
        position = position + T::one();
    }

    let last = candidate + rank.clone() - covered;
    combination.push(last - T::one());

    Ok(combination)
}
