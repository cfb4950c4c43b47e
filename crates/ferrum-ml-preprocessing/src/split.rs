use ferrum_ml_core::error::MatrixResult;
use ferrum_ml_core::{Matrix, MatrixError};

/// Split data into training and test sets by row position.
///
/// The first `floor(train_fraction * rows)` rows become the training set and
/// the remainder the test set, in their given order. There is deliberately no
/// shuffling: the split must be reproducible run to run, so row order is the
/// caller's contract.
///
/// Returns `(x_train, x_test, y_train, y_test)`.
pub fn sequential_split(
    x: &Matrix,
    y: &[f64],
    train_fraction: f64,
) -> MatrixResult<(Matrix, Matrix, Vec<f64>, Vec<f64>)> {
    let n = x.rows();
    if n != y.len() {
        return Err(MatrixError::DimensionMismatch(format!(
            "feature matrix has {} rows but target vector has {}",
            n,
            y.len()
        )));
    }
    if !(0.0..=1.0).contains(&train_fraction) {
        return Err(MatrixError::InvalidOperation(format!(
            "train_fraction must be within [0, 1], got {}",
            train_fraction
        )));
    }

    let split = (train_fraction * n as f64).floor() as usize;
    Ok((
        x.slice_rows(0, split)?,
        x.slice_rows(split, n)?,
        y[..split].to_vec(),
        y[split..].to_vec(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_split() {
        let x = Matrix::from_rows(&[
            vec![1.0],
            vec![2.0],
            vec![3.0],
            vec![4.0],
            vec![5.0],
        ])
        .unwrap();
        let y = [10.0, 20.0, 30.0, 40.0, 50.0];

        let (x_train, x_test, y_train, y_test) = sequential_split(&x, &y, 0.8).unwrap();
        assert_eq!(x_train.rows(), 4);
        assert_eq!(x_test.rows(), 1);
        assert_eq!(y_train, vec![10.0, 20.0, 30.0, 40.0]);
        assert_eq!(y_test, vec![50.0]);
        // Order preserved, head rows train.
        assert_eq!(x_train.get(0, 0).unwrap(), 1.0);
        assert_eq!(x_test.get(0, 0).unwrap(), 5.0);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let x = Matrix::from_rows(&[vec![1.0], vec![2.0]]).unwrap();
        assert!(sequential_split(&x, &[1.0], 0.8).is_err());
    }

    #[test]
    fn test_fraction_out_of_range_is_rejected() {
        let x = Matrix::from_rows(&[vec![1.0]]).unwrap();
        assert!(sequential_split(&x, &[1.0], 1.5).is_err());
    }
}
