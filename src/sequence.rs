//! Uniform selection and permutation over generic slices.

use crate::error::RandomError;
use crate::number::number_in_range;

/// Returns a reference to one uniformly selected element of `items`.
///
/// Fails with [`RandomError::EmptySequence`] when the slice is empty. The
/// slice is never mutated and successive picks are independent.
pub fn pick<T>(items: &[T]) -> Result<&T, RandomError> {
    if items.is_empty() {
        return Err(RandomError::EmptySequence);
    }
    let index = number_in_range(0, items.len() as i64 - 1)?;
    Ok(&items[index as usize])
}

/// Permutes `items` in place so that every ordering is equally likely.
///
/// Walks the slice from its last element down to the second, swapping each
/// position with a uniformly drawn position at or below it. The iteration
/// bound matters: stopping one element early or drawing over the whole slice
/// at every step would silently skew the permutation distribution.
///
/// Slices of length 0 or 1 are left untouched without consuming entropy.
/// When the entropy source fails mid-way the slice is left partially
/// permuted in an unspecified order, but no element is lost or duplicated
/// because the walk only swaps.
pub fn shuffle<T>(items: &mut [T]) -> Result<(), RandomError> {
    for i in (1..items.len()).rev() {
        let j = number_in_range(0, i as i64)?;
        items.swap(i, j as usize);
    }
    Ok(())
}
