//! Errors returned by `minic45`.
use std::path::PathBuf;

use polars::prelude::PolarsError;


/// Errors from reading samples and growing trees.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Returned when a tree is grown from zero rows.
    /// There is no model to return in that case.
    #[error("training sample has zero rows")]
    EmptySample,

    /// Returned when the target attribute is also listed
    /// as a splitting attribute.
    #[error("target attribute `{target}` must not be a splitting attribute")]
    TargetInAttributes {
        /// The offending target name.
        target: String,
    },

    /// Returned when `max_depth` is zero.
    #[error("max_depth must be at least 1, got {max_depth}")]
    InvalidMaxDepth {
        /// The invalid max_depth value provided.
        max_depth: usize,
    },

    /// Returned when a sample file cannot be opened or read.
    #[error("failed to read sample from {}", .path.display())]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a CSV row has a different number of fields
    /// than the header (or the first row).
    #[error("line {line} has {got} fields, expected {expected}")]
    RowLength {
        /// One-based line number in the file.
        line: usize,
        /// The expected number of fields.
        expected: usize,
        /// The actual number of fields.
        got: usize,
    },

    /// Returned when a `DataFrame` cannot be converted into a `Sample`.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
