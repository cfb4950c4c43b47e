use ferrum_ml_core::MatrixError;
use thiserror::Error;

/// Errors surfaced at the engine boundary.
///
/// Session-state conditions are deliberately distinct variants from the
/// numerical/shape errors wrapped in `Matrix`, so the hosting shell can tell
/// "train something first" apart from "your input is malformed".
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("no model has been trained yet")]
    NotTrained,

    #[error("stored model state is inconsistent")]
    InvalidModelState,

    #[error("expected {expected} features but got {got}")]
    FeatureCountMismatch { expected: usize, got: usize },

    #[error("dataset of {rows} rows leaves an empty train or test split")]
    DatasetTooSmall { rows: usize },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

pub type EngineResult<T> = Result<T, EngineError>;
