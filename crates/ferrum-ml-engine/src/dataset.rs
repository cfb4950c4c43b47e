use ferrum_ml_core::error::MatrixResult;
use ferrum_ml_core::{Matrix, MatrixError};
use serde::{Deserialize, Serialize};

/// A feature matrix paired with its target vector.
///
/// Feature cells may carry NaN as the missing-value marker; targets may not.
/// Row order is meaningful: the train/test split is positional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    features: Matrix,
    targets: Vec<f64>,
}

impl Dataset {
    pub fn new(features: Matrix, targets: Vec<f64>) -> MatrixResult<Self> {
        if features.rows() != targets.len() {
            return Err(MatrixError::DimensionMismatch(format!(
                "feature matrix has {} rows but target vector has {}",
                features.rows(),
                targets.len()
            )));
        }
        Ok(Dataset { features, targets })
    }

    /// Convenience constructor from nested rows.
    pub fn from_rows(rows: &[Vec<f64>], targets: Vec<f64>) -> MatrixResult<Self> {
        Dataset::new(Matrix::from_rows(rows)?, targets)
    }

    pub fn features(&self) -> &Matrix {
        &self.features
    }

    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
