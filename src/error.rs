//! Error type for the Jaccard operations.

use thiserror::Error;

/// Errors returned by the Jaccard operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An input collection was absent.
    ///
    /// `name` is the parameter that was missing (`"a"` or `"b"`). When both
    /// are absent, `a` is reported.
    #[error("invalid argument: `{name}` is absent")]
    InvalidArgument {
        /// Name of the absent parameter.
        name: &'static str,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
