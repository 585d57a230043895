//! Jaccard similarity for ordered collections.
//!
//! `jaccard_calculator` compares two collections of hashable elements:
//!
//! - **Set-based**: [`jaccard_index`], [`jaccard_distance`] treat each input as
//!   the set it induces. Order and duplicates are ignored.
//! - **Order-sensitive**: [`mean_jaccard_index`], [`mean_jaccard_distance`]
//!   average the Jaccard index over every prefix, so disagreements near the
//!   front weigh more than disagreements near the end.
//!
//! All scores lie in `[0, 1]` and are rounded to [`DECIMAL_PLACES`] decimals
//! (ties to even). Distances are the rounded complement of the matching index.
//!
//! # Absent Inputs
//!
//! Inputs are anything implementing [`Sequence`]: slices, arrays, `Vec`, and
//! `Option` of those. A `None` input is rejected with
//! [`Error::InvalidArgument`] naming the missing side.
//!
//! # Example
//!
//! ```rust
//! use jaccard_calculator::{jaccard_index, mean_jaccard_index, Error};
//!
//! let a = [1, 2, 3];
//! let b = [3, 2, 1];
//!
//! // Same elements: identical as sets
//! assert_eq!(jaccard_index(&a, &b)?, 1.0);
//!
//! // ...but the rankings diverge at the top
//! assert!(mean_jaccard_index(&a, &b)? < 1.0);
//!
//! let missing: Option<Vec<i32>> = None;
//! assert_eq!(
//!     jaccard_index(&a, &missing),
//!     Err(Error::InvalidArgument { name: "b" })
//! );
//! # Ok::<(), Error>(())
//! ```
//!
//! # Complexity
//!
//! | Function | Time (expected) | Element bound |
//! |----------|-----------------|---------------|
//! | [`jaccard_index`] | O(n + m) | `Eq + Hash` |
//! | [`jaccard_index_pairwise`] | O(n * m) | `PartialEq` |
//! | [`mean_jaccard_index`] | O(max(n, m)) | `Eq + Hash` |
//!
//! # References
//!
//! - Jaccard, P. (1912). "The distribution of the flora in the alpine zone"

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod mean;
pub mod metric;
mod round;
mod sequence;
mod set;

pub use error::{Error, Result};
pub use mean::{mean_jaccard_distance, mean_jaccard_index};
pub use metric::{Jaccard, MeanJaccard, SetSimilarity};
pub use sequence::Sequence;
pub use set::{jaccard_distance, jaccard_index, jaccard_index_pairwise};

/// Number of decimal places every score is rounded to.
pub const DECIMAL_PLACES: i32 = 2;
