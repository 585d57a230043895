//! Trait surface for set similarity metrics.
//!
//! The free functions validate possibly-absent inputs and return `Result`.
//! The types here operate on plain slices, which are always present, so they
//! are infallible and can be passed around as values (e.g. to pick a metric
//! at runtime).

use std::hash::Hash;

use crate::mean::mean_index_of;
use crate::round::complement;
use crate::set::index_of;

/// A similarity score between two collections, in `[0, 1]`.
pub trait SetSimilarity<T> {
    /// Similarity of `a` and `b`: 1 means identical, 0 means nothing shared.
    fn similarity(&self, a: &[T], b: &[T]) -> f64;

    /// Dissimilarity, `1 - similarity`, rounded like the similarity.
    fn distance(&self, a: &[T], b: &[T]) -> f64 {
        complement(self.similarity(a, b))
    }

    /// Whether reordering an input can change the score.
    fn is_order_sensitive(&self) -> bool;
}

/// Plain Jaccard index. See [`jaccard_index`](crate::jaccard_index).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaccard;

impl<T: Eq + Hash> SetSimilarity<T> for Jaccard {
    fn similarity(&self, a: &[T], b: &[T]) -> f64 {
        index_of(a, b)
    }

    fn is_order_sensitive(&self) -> bool {
        false
    }
}

/// Prefix-averaged Jaccard index. See [`mean_jaccard_index`](crate::mean_jaccard_index).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanJaccard;

impl<T: Eq + Hash> SetSimilarity<T> for MeanJaccard {
    fn similarity(&self, a: &[T], b: &[T]) -> f64 {
        mean_index_of(a, b)
    }

    fn is_order_sensitive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jaccard_metric() {
        let a: &[i32] = &[0, 1, 2, 5, 6];
        let b: &[i32] = &[0, 2, 3, 4, 5, 7, 9];
        assert_eq!(Jaccard.similarity(a, b), 0.33);
        assert_eq!(Jaccard.distance(a, b), 0.67);
        assert!(!SetSimilarity::<i32>::is_order_sensitive(&Jaccard));
    }

    #[test]
    fn test_mean_jaccard_metric() {
        let a: &[i32] = &[1, 2, 3];
        let b: &[i32] = &[1, 2, 3, 4];
        assert_eq!(MeanJaccard.similarity(a, b), 0.94);
        assert_eq!(MeanJaccard.distance(a, b), 0.06);
        assert!(SetSimilarity::<i32>::is_order_sensitive(&MeanJaccard));
    }

    #[test]
    fn test_dyn_dispatch() {
        let metrics: [&dyn SetSimilarity<char>; 2] = [&Jaccard, &MeanJaccard];
        let a = ['x', 'y'];
        let b = ['y', 'x'];
        let scores: Vec<f64> = metrics.iter().map(|m| m.similarity(&a, &b)).collect();
        // prefixes: {x} vs {y} -> 0, then {x, y} vs {y, x} -> 1
        assert_eq!(scores, vec![1.0, 0.5]);
    }
}
