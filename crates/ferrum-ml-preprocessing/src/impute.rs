use ferrum_ml_core::Matrix;

/// Replace every NaN cell with its column's mean over the non-NaN entries.
///
/// NaN is the missing-value marker: the ingestion layer stores it for blank
/// or unparsable source cells. Each column is treated independently; a column
/// with no valid entries at all fills with 0.0. Pure function, returns a new
/// matrix.
pub fn mean_impute(x: &Matrix) -> Matrix {
    let (rows, cols) = (x.rows(), x.cols());

    let mut fill = vec![0.0; cols];
    for j in 0..cols {
        let mut sum = 0.0;
        let mut count = 0usize;
        for i in 0..rows {
            let v = x.data()[i * cols + j];
            if !v.is_nan() {
                sum += v;
                count += 1;
            }
        }
        if count > 0 {
            fill[j] = sum / count as f64;
        }
    }

    let data: Vec<f64> = x
        .data()
        .iter()
        .enumerate()
        .map(|(idx, &v)| if v.is_nan() { fill[idx % cols] } else { v })
        .collect();
    Matrix::new(data, rows, cols).expect("same shape as input")
}
