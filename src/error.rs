//! Error types for bench-rank operations.

use thiserror::Error;

/// Result type alias for bench-rank operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during classification and ranking.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A statistic was requested over an empty input.
    #[error("empty input: {what} requires at least one value")]
    EmptyInput {
        /// Name of the operation that rejected the input.
        what: &'static str,
    },

    /// Paired series have different lengths.
    #[error("length mismatch: x has {x_len} values, y has {y_len}")]
    LengthMismatch {
        /// Length of the x series.
        x_len: usize,
        /// Length of the y series.
        y_len: usize,
    },

    /// An axis cannot be max-normalized because its maximum is zero.
    #[error("cannot normalize {axis} axis: maximum is zero")]
    ZeroAxisMax {
        /// Axis identifier ("x" or "y").
        axis: &'static str,
    },

    /// An optimization direction string outside the wire vocabulary.
    #[error(
        "unknown optimization direction: {0:?} (expected top-left, top-right, bottom-left or bottom-right)"
    )]
    UnknownDirection(String),

    /// A polarity string outside the wire vocabulary.
    #[error("unknown polarity: {0:?} (expected minimum or maximum)")]
    UnknownPolarity(String),

    /// The dataset payload is malformed or inconsistent.
    #[error("dataset error: {0}")]
    Dataset(String),

    /// Error importing CSV data.
    #[error("CSV import error at line {line}: {reason}")]
    CsvImport {
        /// Line number where the error occurred.
        line: usize,
        /// Reason for the failure.
        reason: String,
    },

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
