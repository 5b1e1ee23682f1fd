use thiserror::Error;

/// Core error type for all matrix operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatrixError {
    #[error("Shape mismatch: expected {expected} elements, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("Index out of bounds: ({row}, {col}) for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Matrix dimensions must be at least 1x1, got {rows}x{cols}")]
    EmptyMatrix { rows: usize, cols: usize },

    #[error("Singular matrix: pivot {pivot} vanished during elimination")]
    SingularMatrix { pivot: usize },

    #[error("Non-finite value produced by {0}")]
    NonFinite(&'static str),

    #[error("Model not fitted")]
    NotFitted,
}

pub type MatrixResult<T> = Result<T, MatrixError>;
