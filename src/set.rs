//! Set-based Jaccard index and distance.
//!
//! Both inputs are reduced to the sets they induce, so element order and
//! duplicates have no effect:
//!
//! ```text
//! J(A, B) = |A ∩ B| / |A ∪ B|
//! ```
//!
//! Two empty collections are identical by vacuity (`J = 1`); an empty and a
//! non-empty collection share nothing (`J = 0`). Scores are rounded to
//! [`DECIMAL_PLACES`](crate::DECIMAL_PLACES) decimals.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::Result;
use crate::round::{complement, round_score};
use crate::sequence::{check_input, Sequence};

/// Jaccard index of two collections, in `[0, 1]`.
///
/// Symmetric in its arguments and invariant to permutations of either input.
///
/// # Complexity
///
/// O(|a| + |b|) expected, using hash-set membership.
///
/// # Errors
///
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if either input is absent.
///
/// # Example
///
/// ```rust
/// use jaccard_calculator::jaccard_index;
///
/// // intersection {0, 2, 5}, union of 9 elements
/// let j = jaccard_index(&[0, 1, 2, 5, 6], &[0, 2, 3, 4, 5, 7, 9]).unwrap();
/// assert_eq!(j, 0.33);
///
/// // order does not matter
/// assert_eq!(jaccard_index(&[1, 2, 3], &[3, 2, 1]).unwrap(), 1.0);
/// ```
pub fn jaccard_index<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: Eq + Hash,
{
    let (a, b) = check_input(a, b)?;
    Ok(index_of(a, b))
}

/// Jaccard distance, `1 - jaccard_index(a, b)`, in `[0, 1]`.
///
/// # Errors
///
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if either input is absent.
///
/// # Example
///
/// ```rust
/// use jaccard_calculator::jaccard_distance;
///
/// let d = jaccard_distance(&[0, 1, 2, 5, 6], &[0, 2, 3, 4, 5, 7, 9]).unwrap();
/// assert_eq!(d, 0.67);
/// ```
pub fn jaccard_distance<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: Eq + Hash,
{
    jaccard_index(a, b).map(complement)
}

/// Jaccard index for elements that only support equality.
///
/// Produces the same scores as [`jaccard_index`], but deduplicates and
/// intersects by pairwise comparison, so it works for types such as `f64`.
/// Values that are not equal to themselves (NaN) never match anything.
///
/// # Complexity
///
/// O(|a| * |b|).
///
/// # Errors
///
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if either input is absent.
///
/// # Example
///
/// ```rust
/// use jaccard_calculator::jaccard_index_pairwise;
///
/// let j = jaccard_index_pairwise(&[0.5, 1.5], &[1.5, 2.5]).unwrap();
/// assert_eq!(j, 0.33);
/// ```
pub fn jaccard_index_pairwise<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: PartialEq,
{
    let (a, b) = check_input(a, b)?;

    let a = distinct(a);
    let b = distinct(b);
    let shared = a.iter().filter(|x| b.contains(*x)).count();

    Ok(score(shared, a.len(), b.len()))
}

/// Hash-based index of two present collections.
pub(crate) fn index_of<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let a: HashSet<&T> = a.iter().collect();
    let b: HashSet<&T> = b.iter().collect();
    let shared = a.intersection(&b).count();

    score(shared, a.len(), b.len())
}

/// Rounded score from the shared count and the two distinct-element counts.
#[inline]
pub(crate) fn score(shared: usize, distinct_a: usize, distinct_b: usize) -> f64 {
    match (distinct_a, distinct_b) {
        (0, 0) => 1.0,
        (0, _) | (_, 0) => 0.0,
        _ => {
            let union = distinct_a + distinct_b - shared;
            round_score(shared as f64 / union as f64)
        }
    }
}

fn distinct<T: PartialEq>(values: &[T]) -> Vec<&T> {
    let mut seen: Vec<&T> = Vec::with_capacity(values.len());
    for v in values {
        if !seen.contains(&v) {
            seen.push(v);
        }
    }
    seen
}
