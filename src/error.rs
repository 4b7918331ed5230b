//! Error types for grid construction and configuration.
//!
//! Stepping a well-formed grid never fails; every variant here is raised
//! before the first generation exists.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LifeError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LifeError {
    #[error("grid must be at least 1x1, got {rows}x{columns}")]
    EmptyGrid { rows: usize, columns: usize },

    #[error("grid of {rows}x{columns} cells does not fit in memory")]
    GridTooLarge { rows: usize, columns: usize },

    #[error("alive probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("cell ({row}, {col}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },
}
