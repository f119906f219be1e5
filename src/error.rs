//! Error types for swd.

use thiserror::Error;

/// Swd error types.
#[derive(Error, Debug)]
pub enum SwdError {
    /// Empty sample where observations were required
    #[error("Empty sample: {0}")]
    EmptySample(String),

    /// Invalid sample dimensions in a pairwise call
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A matrix sample whose dimension differs from the rest
    #[error("Sample '{name}' is {got}-dimensional, but '{reference}' is {expected}-dimensional")]
    MixedDimensions {
        name: String,
        reference: String,
        expected: usize,
        got: usize,
    },

    /// Ragged row while constructing a multivariate sample
    #[error("Ragged sample: row {row} has {got} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Not enough samples to assemble a distance matrix
    #[error("A distance matrix needs at least 2 samples, got {0}")]
    TooFewSamples(usize),

    /// Quantile grid too coarse to interpolate
    #[error("Quantile resolution must be at least 2, got {0}")]
    InvalidResolution(usize),

    /// Zero projection trials would leave the estimate undefined
    #[error("Projection count must be at least 1, got {0}")]
    InvalidProjections(usize),

    /// A requested column is absent from a CSV header
    #[error("Column '{column}' not found in {file}")]
    MissingColumn { column: String, file: String },

    /// No usable numeric column in a CSV file
    #[error("No numeric columns in {0}; specify columns explicitly")]
    NoNumericColumns(String),

    /// I/O failure while reading or writing files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for swd operations.
pub type Result<T> = std::result::Result<T, SwdError>;
