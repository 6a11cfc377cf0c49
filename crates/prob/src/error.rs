//! Error types for probability operations.

use thiserror::Error;

/// Errors that can occur when building distributions or tables.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProbError {
    /// Distribution doesn't sum to 1.
    #[error("distribution not normalized: sum = {sum} (expected 1.0)")]
    NotNormalized { sum: f64 },

    /// Negative probability or weight encountered.
    #[error("negative probability encountered")]
    NegativeProbability,

    /// A probability is NaN or infinite.
    #[error("non-finite probability encountered")]
    NonFiniteProbability,

    /// All weights are zero, so there is nothing to normalize.
    #[error("cannot normalize: all weights are zero")]
    ZeroWeights,

    /// Empty distribution.
    #[error("distribution cannot be empty")]
    EmptyDistribution,

    /// Empty table (no rows, or rows with no columns).
    #[error("table cannot be empty")]
    EmptyTable,

    /// Rows have different lengths.
    #[error("table has ragged rows (rows have different lengths)")]
    RaggedRows,

    /// A row doesn't sum to 1.
    #[error("row {row} not normalized: sum = {sum} (expected 1.0)")]
    RowNotNormalized { row: usize, sum: f64 },

    /// A row of weights sums to zero and cannot be normalized.
    #[error("row {row} has all-zero weights and cannot be normalized")]
    ZeroRow { row: usize },

    /// A weight is NaN or infinite.
    #[error("row {row} contains a non-finite weight")]
    NonFiniteWeight { row: usize },

    /// Index out of bounds.
    #[error("index {index} out of bounds for size {size}")]
    IndexOutOfBounds { index: usize, size: usize },
}
