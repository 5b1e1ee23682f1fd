use std::path::PathBuf;

use estimate_core::MatrixError;
use thiserror::Error;

/// Errors raised while reading datasets or reading/writing model artifacts.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing header field `{field}`")]
    MissingHeader { field: &'static str },

    #[error("invalid {field} `{token}` on line {line}")]
    InvalidCount {
        field: &'static str,
        token: String,
        line: usize,
    },

    #[error("invalid number `{token}` on line {line}")]
    InvalidNumber { token: String, line: usize },

    #[error("expected {expected} values after the header, found {found}")]
    UnexpectedEof { expected: usize, found: usize },

    #[error("dataset declares no rows")]
    EmptyDataset,

    #[error("attribute count mismatch: training set has {training}, query set has {query}")]
    AttributeMismatch { training: usize, query: usize },

    #[error("saved model is inconsistent: {0}")]
    InvalidModel(String),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type DatasetResult<T> = Result<T, DatasetError>;
