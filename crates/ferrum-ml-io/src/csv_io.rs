use std::fs::File;
use std::io::Read;
use std::path::Path;

use ferrum_ml_core::{Matrix, MatrixError};
use ferrum_ml_engine::Dataset;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("target column {0:?} not found in header")]
    TargetColumnNotFound(String),

    #[error("target value in data row {row} is not numeric")]
    TargetNotNumeric { row: usize },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Read a CSV file into a matrix plus its column headers.
///
/// Every cell is parsed as `f64`; blank or unparsable cells become NaN, the
/// missing-value marker that `mean_impute` repairs downstream. Rows are
/// never dropped here.
pub fn read_csv<R: Read>(reader: R) -> Result<(Matrix, Vec<String>), IngestError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();

    let mut data = Vec::new();
    let mut n_rows = 0usize;
    for result in rdr.records() {
        let record = result?;
        for field in record.iter() {
            data.push(field.trim().parse::<f64>().unwrap_or(f64::NAN));
        }
        n_rows += 1;
    }

    let n_cols = headers.len();
    Ok((Matrix::new(data, n_rows, n_cols)?, headers))
}

/// Read a CSV file from disk. See [`read_csv`].
pub fn read_csv_path<P: AsRef<Path>>(path: P) -> Result<(Matrix, Vec<String>), IngestError> {
    let file = File::open(path.as_ref()).map_err(|source| IngestError::Open {
        path: path.as_ref().display().to_string(),
        source,
    })?;
    read_csv(file)
}

/// Read a CSV and split out the named target column.
///
/// Returns the dataset (all remaining columns as features, in header order)
/// and the feature column names. Feature cells may be NaN; a NaN target is
/// rejected because no imputation policy applies to targets.
pub fn load_dataset<R: Read>(
    reader: R,
    target: &str,
) -> Result<(Dataset, Vec<String>), IngestError> {
    let (table, headers) = read_csv(reader)?;
    let target_idx = headers
        .iter()
        .position(|h| h == target)
        .ok_or_else(|| IngestError::TargetColumnNotFound(target.to_string()))?;

    let cols = table.cols();
    let mut features = Vec::with_capacity(table.rows() * (cols - 1));
    let mut targets = Vec::with_capacity(table.rows());
    for i in 0..table.rows() {
        let row = table.row(i)?;
        for (j, &v) in row.iter().enumerate() {
            if j == target_idx {
                if v.is_nan() {
                    return Err(IngestError::TargetNotNumeric { row: i });
                }
                targets.push(v);
            } else {
                features.push(v);
            }
        }
    }

    let feature_names: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != target_idx)
        .map(|(_, h)| h.clone())
        .collect();

    let matrix = Matrix::new(features, table.rows(), cols - 1)?;
    Ok((Dataset::new(matrix, targets)?, feature_names))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv_marks_bad_cells_nan() {
        let csv = "a,b\n1.0,2.0\n,oops\n3.5,4.5\n";
        let (m, headers) = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(headers, vec!["a", "b"]);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.get(0, 1).unwrap(), 2.0);
        assert!(m.get(1, 0).unwrap().is_nan());
        assert!(m.get(1, 1).unwrap().is_nan());
        assert_eq!(m.get(2, 0).unwrap(), 3.5);
    }

    #[test]
    fn test_load_dataset_splits_target_column() {
        let csv = "size,rooms,price\n50.0,2,100.0\n80.0,3,160.0\n";
        let (ds, feature_names) = load_dataset(csv.as_bytes(), "price").unwrap();
        assert_eq!(feature_names, vec!["size", "rooms"]);
        assert_eq!(ds.targets(), &[100.0, 160.0]);
        assert_eq!(ds.features().cols(), 2);
        assert_eq!(ds.features().get(1, 0).unwrap(), 80.0);
    }

    #[test]
    fn test_read_csv_path() {
        let path = std::env::temp_dir().join("ferrum_ml_io_roundtrip.csv");
        std::fs::write(&path, "a,b\n1.0,2.0\n").unwrap();
        let (m, headers) = read_csv_path(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(headers, vec!["a", "b"]);
        assert_eq!(m.row(0).unwrap(), &[1.0, 2.0]);

        assert!(matches!(
            read_csv_path("/nonexistent/ferrum.csv"),
            Err(IngestError::Open { .. })
        ));
    }

    #[test]
    fn test_missing_target_column_is_an_error() {
        let csv = "a,b\n1,2\n";
        assert!(matches!(
            load_dataset(csv.as_bytes(), "c"),
            Err(IngestError::TargetColumnNotFound(_))
        ));
    }

    #[test]
    fn test_loaded_csv_trains_end_to_end() {
        use ferrum_ml_engine::{ModelKind, ModelSession, ProblemType};

        // One blank feature cell: the row survives ingestion as NaN and is
        // imputed during training instead of being dropped.
        let csv = "x,y\n0.0,0.0\n1.0,2.0\n,4.5\n3.0,6.0\n4.0,8.0\n";
        let (ds, _) = load_dataset(csv.as_bytes(), "y").unwrap();
        assert_eq!(ds.len(), 5);
        assert!(ds.features().get(2, 0).unwrap().is_nan());

        let session = ModelSession::new();
        let outcome = session
            .train(&ds, ModelKind::LinearRegression, ProblemType::Regression)
            .unwrap();
        assert_eq!(outcome.held_out.len(), 1);
        assert_eq!(outcome.held_out[0].actual, 8.0);
    }

    #[test]
    fn test_unparsable_target_is_an_error() {
        let csv = "a,y\n1,2\n3,???\n";
        assert!(matches!(
            load_dataset(csv.as_bytes(), "y"),
            Err(IngestError::TargetNotNumeric { row: 1 })
        ));
    }
}
