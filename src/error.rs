//! Error taxonomy for the matching pipeline.
//!
//! The first four variants are caller precondition failures: they are never
//! transient and no partial result accompanies them.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    /// Vehicle or cargo list is absent or empty.
    #[error("vehicle and cargo data must both be loaded")]
    DataNotLoaded,

    /// More cargo than vehicles; the problem is undefined in that direction.
    #[error("cargo list ({cargo}) has to be no larger than the vehicle list ({vehicles})")]
    InvalidDataSize { cargo: usize, vehicles: usize },

    /// Cost matrix is not square.
    #[error("cost matrix is not square: row {row} has {found} entries, expected {expected}")]
    ShapeError {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Negative or non-finite cost entry.
    #[error("invalid cost {value} at ({row}, {col})")]
    InvalidCost { row: usize, col: usize, value: f64 },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, MatchError>;
