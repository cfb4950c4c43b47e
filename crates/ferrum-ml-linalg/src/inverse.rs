use ferrum_ml_core::error::MatrixResult;
use ferrum_ml_core::{Matrix, MatrixError};

/// Pivots with a smaller magnitude than this are treated as zero.
const PIVOT_TOLERANCE: f64 = 1e-10;

/// Matrix inverse via Gauss-Jordan elimination with partial pivoting.
///
/// Works on the augmented matrix `[M | I]`: at each pivot column the
/// remaining row with the largest absolute entry is swapped into place, the
/// pivot row is normalized, and the pivot column is eliminated from every
/// other row. The right half of the augmented matrix is the inverse.
///
/// A pivot magnitude below `1e-10` means the matrix is singular (or too close
/// to singular to invert reliably) and yields `MatrixError::Singular` rather
/// than dividing by a near-zero value.
pub fn inverse(m: &Matrix) -> MatrixResult<Matrix> {
    let n = m.rows();
    if n != m.cols() {
        return Err(MatrixError::DimensionMismatch(format!(
            "inverse: matrix must be square, got {}x{}",
            m.rows(),
            m.cols()
        )));
    }

    // Augmented [M | I], flat with width 2n.
    let width = 2 * n;
    let mut aug = vec![0.0; n * width];
    for i in 0..n {
        let src = m.row(i)?;
        aug[i * width..i * width + n].copy_from_slice(src);
        aug[i * width + n + i] = 1.0;
    }

    for col in 0..n {
        // Partial pivoting: pick the remaining row with the largest
        // absolute value in this column.
        let mut max_row = col;
        for row in (col + 1)..n {
            if aug[row * width + col].abs() > aug[max_row * width + col].abs() {
                max_row = row;
            }
        }
        if max_row != col {
            for j in 0..width {
                aug.swap(col * width + j, max_row * width + j);
            }
        }

        let pivot = aug[col * width + col];
        if pivot.abs() < PIVOT_TOLERANCE {
            return Err(MatrixError::Singular);
        }

        for j in 0..width {
            aug[col * width + j] /= pivot;
        }

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = aug[row * width + col];
            for j in 0..width {
                aug[row * width + j] -= factor * aug[col * width + j];
            }
        }
    }

    let mut data = Vec::with_capacity(n * n);
    for i in 0..n {
        data.extend_from_slice(&aug[i * width + n..(i + 1) * width]);
    }
    Matrix::new(data, n, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_2x2() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let inv = inverse(&m).unwrap();
        // inv = [[-2, 1], [1.5, -0.5]]
        assert!((inv.get(0, 0).unwrap() - (-2.0)).abs() < 1e-10);
        assert!((inv.get(0, 1).unwrap() - 1.0).abs() < 1e-10);
        assert!((inv.get(1, 0).unwrap() - 1.5).abs() < 1e-10);
        assert!((inv.get(1, 1).unwrap() - (-0.5)).abs() < 1e-10);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let m = Matrix::from_rows(&[
            vec![2.0, 1.0, 1.0],
            vec![4.0, 3.0, 3.0],
            vec![8.0, 7.0, 9.0],
        ])
        .unwrap();
        let inv = inverse(&m).unwrap();
        let product = m.matmul(&inv).unwrap();
        let id = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                let diff = (product.get(i, j).unwrap() - id.get(i, j).unwrap()).abs();
                assert!(diff < 1e-10, "M*M⁻¹ not identity at ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_pivoting_handles_zero_leading_entry() {
        // Leading zero forces a row swap before the first elimination step.
        let m = Matrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let inv = inverse(&m).unwrap();
        assert!((inv.get(0, 1).unwrap() - 1.0).abs() < 1e-10);
        assert!((inv.get(1, 0).unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_singular_is_reported() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        assert_eq!(inverse(&m), Err(MatrixError::Singular));
    }

    #[test]
    fn test_non_square_is_rejected() {
        let m = Matrix::zeros(2, 3);
        assert!(matches!(
            inverse(&m),
            Err(MatrixError::DimensionMismatch(_))
        ));
    }
}
