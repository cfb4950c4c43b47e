use thiserror::Error;

/// Shared error type for all matrix and estimator operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatrixError {
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("Index out of bounds: ({row}, {col}) for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Singular matrix: no inverse exists")]
    Singular,

    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type MatrixResult<T> = Result<T, MatrixError>;
