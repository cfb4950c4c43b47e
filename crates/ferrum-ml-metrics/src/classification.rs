use ferrum_ml_core::error::MatrixResult;

use crate::paired_len;
use crate::report::Metrics;

/// Fraction of exact matches between predicted and true labels.
///
/// Labels are numeric codes and are compared with exact equality; predictors
/// in this engine emit labels verbatim from the training set, so no rounding
/// tolerance is wanted here.
pub fn accuracy(y_true: &[f64], y_pred: &[f64]) -> MatrixResult<f64> {
    let n = paired_len(y_true, y_pred)?;
    let correct = y_true.iter().zip(y_pred).filter(|(t, p)| t == p).count();
    Ok(correct as f64 / n as f64)
}

/// Score a classification split as a tagged report.
pub fn evaluate_classification(y_true: &[f64], y_pred: &[f64]) -> MatrixResult<Metrics> {
    Ok(Metrics::Classification {
        accuracy: accuracy(y_true, y_pred)?,
    })
}
