pub mod classification;
pub mod regression;
pub mod report;

pub use classification::{accuracy, evaluate_classification};
pub use regression::{evaluate_regression, mae, mse};
pub use report::Metrics;

use ferrum_ml_core::error::MatrixResult;
use ferrum_ml_core::MatrixError;

/// Shared guard: both sequences non-empty and the same length.
pub(crate) fn paired_len(y_true: &[f64], y_pred: &[f64]) -> MatrixResult<usize> {
    if y_true.len() != y_pred.len() {
        return Err(MatrixError::DimensionMismatch(format!(
            "true and predicted sequences differ in length: {} vs {}",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(MatrixError::EmptyInput("cannot score an empty split"));
    }
    Ok(y_true.len())
}
