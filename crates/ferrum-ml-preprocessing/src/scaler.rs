use ferrum_ml_core::error::MatrixResult;
use ferrum_ml_core::{Matrix, MatrixError};
use serde::{Deserialize, Serialize};

/// Keeps a constant column from producing a zero denominator.
const RANGE_EPSILON: f64 = 1e-8;

/// Scale features toward [0, 1] using per-column minima and maxima.
///
/// Fitted exactly once, on training data; the same fitted scaler is reused
/// verbatim for test rows and later single-point predictions. Inputs outside
/// the fitted range extrapolate to values outside [0, 1], which is expected
/// at prediction time and not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    min: Vec<f64>,
    max: Vec<f64>,
}

impl MinMaxScaler {
    /// Compute per-column min and max from the given rows.
    pub fn fit(x: &Matrix) -> MatrixResult<Self> {
        if x.rows() == 0 {
            return Err(MatrixError::EmptyInput("cannot fit a scaler on zero rows"));
        }
        let cols = x.cols();
        let mut min = vec![f64::INFINITY; cols];
        let mut max = vec![f64::NEG_INFINITY; cols];
        for i in 0..x.rows() {
            for j in 0..cols {
                let v = x.data()[i * cols + j];
                if v < min[j] {
                    min[j] = v;
                }
                if v > max[j] {
                    max[j] = v;
                }
            }
        }
        Ok(MinMaxScaler { min, max })
    }

    pub fn feature_count(&self) -> usize {
        self.min.len()
    }

    /// Apply `(v - min) / (max - min + 1e-8)` to every element.
    pub fn transform(&self, x: &Matrix) -> MatrixResult<Matrix> {
        if x.cols() != self.feature_count() {
            return Err(MatrixError::ShapeMismatch {
                expected: (x.rows(), self.feature_count()),
                got: (x.rows(), x.cols()),
            });
        }
        let cols = x.cols();
        let data: Vec<f64> = x
            .data()
            .iter()
            .enumerate()
            .map(|(idx, &v)| self.scale_value(v, idx % cols))
            .collect();
        Matrix::new(data, x.rows(), cols)
    }

    /// Scale a single feature vector, e.g. a prediction input.
    pub fn transform_row(&self, row: &[f64]) -> MatrixResult<Vec<f64>> {
        if row.len() != self.feature_count() {
            return Err(MatrixError::DimensionMismatch(format!(
                "scaler fitted on {} features but row has {}",
                self.feature_count(),
                row.len()
            )));
        }
        Ok(row
            .iter()
            .enumerate()
            .map(|(j, &v)| self.scale_value(v, j))
            .collect())
    }

    fn scale_value(&self, v: f64, j: usize) -> f64 {
        (v - self.min[j]) / (self.max[j] - self.min[j] + RANGE_EPSILON)
    }
}
