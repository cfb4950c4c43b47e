use ferrum_ml_core::error::MatrixResult;

use crate::paired_len;
use crate::report::Metrics;

/// Mean Squared Error.
pub fn mse(y_true: &[f64], y_pred: &[f64]) -> MatrixResult<f64> {
    let n = paired_len(y_true, y_pred)?;
    let sum: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p) * (t - p))
        .sum();
    Ok(sum / n as f64)
}

/// Mean Absolute Error.
pub fn mae(y_true: &[f64], y_pred: &[f64]) -> MatrixResult<f64> {
    let n = paired_len(y_true, y_pred)?;
    let sum: f64 = y_true.iter().zip(y_pred).map(|(t, p)| (t - p).abs()).sum();
    Ok(sum / n as f64)
}

/// Score a regression split: MSE and MAE in one tagged report.
pub fn evaluate_regression(y_true: &[f64], y_pred: &[f64]) -> MatrixResult<Metrics> {
    Ok(Metrics::Regression {
        mse: mse(y_true, y_pred)?,
        mae: mae(y_true, y_pred)?,
    })
}
