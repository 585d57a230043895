//! Order-sensitive mean Jaccard index over sequence prefixes.
//!
//! For two sequences `a` and `b` with `n = max(|a|, |b|)`, the mean Jaccard
//! index averages the Jaccard index of every prefix pair:
//!
//! ```text
//! MJ(a, b) = (1 / n) * Σ_{k=1..n} J(a[..k], b[..k])
//! ```
//!
//! A prefix longer than its sequence is the whole sequence. A disagreement at
//! position `i` lowers every prefix score from `i + 1` onward until it is
//! resolved, so early disagreements cost more than late ones. This makes the
//! metric useful for comparing rankings, e.g. the results of two search
//! algorithms where the top positions matter most.
//!
//! # Algorithm
//!
//! The naive definition recomputes a Jaccard index per prefix, O(n²) with hash
//! sets. Here the two prefix sets grow by one element per step and the shared
//! count is maintained incrementally, so the whole mean is O(n) expected. Each
//! prefix score is rounded exactly as [`jaccard_index`](crate::jaccard_index)
//! rounds it, then the average is rounded again.

use std::collections::HashSet;
use std::hash::Hash;

use log::trace;

use crate::error::Result;
use crate::round::{complement, round_score};
use crate::sequence::{check_input, Sequence};
use crate::set::score;

/// Mean Jaccard index over all prefixes of `a` and `b`, in `[0, 1]`.
///
/// Symmetric in its arguments but, unlike [`jaccard_index`](crate::jaccard_index),
/// sensitive to the order of elements. Two empty sequences score `1.0`.
///
/// # Errors
///
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if either input is absent.
///
/// # Example
///
/// ```rust
/// use jaccard_calculator::mean_jaccard_index;
///
/// assert_eq!(mean_jaccard_index(&[1, 2, 3], &[1, 2, 3]).unwrap(), 1.0);
/// assert_eq!(mean_jaccard_index(&[1, 2, 3], &[1, 2, 3, 4]).unwrap(), 0.94);
///
/// // swapping the first two positions costs more than swapping the last two
/// let early = mean_jaccard_index(&[1, 2, 3, 4], &[2, 1, 3, 4]).unwrap();
/// let late = mean_jaccard_index(&[1, 2, 3, 4], &[1, 2, 4, 3]).unwrap();
/// assert!(early < late);
/// ```
pub fn mean_jaccard_index<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: Eq + Hash,
{
    let (a, b) = check_input(a, b)?;
    Ok(mean_index_of(a, b))
}

/// Mean Jaccard distance, `1 - mean_jaccard_index(a, b)`, in `[0, 1]`.
///
/// # Errors
///
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if either input is absent.
///
/// # Example
///
/// ```rust
/// use jaccard_calculator::mean_jaccard_distance;
///
/// assert_eq!(mean_jaccard_distance(&[1, 2, 3], &[1, 2, 3, 4]).unwrap(), 0.06);
/// ```
pub fn mean_jaccard_distance<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: Eq + Hash,
{
    mean_jaccard_index(a, b).map(complement)
}

pub(crate) fn mean_index_of<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let n = a.len().max(b.len());
    if n == 0 {
        return 1.0;
    }

    let mut prefix_a: HashSet<&T> = HashSet::with_capacity(a.len());
    let mut prefix_b: HashSet<&T> = HashSet::with_capacity(b.len());
    let mut shared = 0usize;
    let mut total = 0.0;

    for i in 0..n {
        // Insert into `a` first: if a[i] == b[i], the second insert sees it.
        if let Some(x) = a.get(i) {
            if prefix_a.insert(x) && prefix_b.contains(x) {
                shared += 1;
            }
        }
        if let Some(y) = b.get(i) {
            if prefix_b.insert(y) && prefix_a.contains(y) {
                shared += 1;
            }
        }

        let prefix_score = score(shared, prefix_a.len(), prefix_b.len());
        trace!("prefix {}: shared={} score={}", i + 1, shared, prefix_score);
        total += prefix_score;
    }

    round_score(total / n as f64)
}
