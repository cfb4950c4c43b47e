//! # FerrumML 🦀
//!
//! The numerical estimation engine behind a CSV train-and-predict dashboard:
//! upload tabular data, pick an estimator and a target column, train, read
//! the held-out metrics, then ask for single-point predictions.
//!
//! ## Modules
//!
//! - **core** — dense row-major `Matrix` and the shared error taxonomy
//! - **linalg** — Gauss-Jordan matrix inversion with partial pivoting
//! - **preprocessing** — NaN mean-imputation, `MinMaxScaler`, sequential split
//! - **linear** — closed-form linear regression with a ridge-then-zero
//!   fallback when `XᵀX` is singular
//! - **neighbors** — brute-force Euclidean KNN, majority vote or mean
//! - **metrics** — MSE/MAE and accuracy, reported as a tagged `Metrics` enum
//! - **engine** — `ModelSession`: train, hold out, score, publish, predict
//! - **io** — CSV ingestion with NaN markers for unparsable cells
//! - **datasets** — seeded synthetic generators for tests and demos
//!
//! ## Quick start
//!
//! ```
//! use ferrum_ml::engine::{Dataset, ModelKind, ModelSession, ProblemType};
//!
//! let dataset = Dataset::from_rows(
//!     &[vec![0.0], vec![1.0], vec![2.0], vec![3.0], vec![4.0]],
//!     vec![0.0, 2.0, 4.0, 6.0, 8.0],
//! )
//! .unwrap();
//!
//! let session = ModelSession::new();
//! let outcome = session
//!     .train(&dataset, ModelKind::LinearRegression, ProblemType::Regression)
//!     .unwrap();
//! println!("held-out metrics: {:?}", outcome.metrics);
//!
//! let prediction = session.predict(&[5.0]).unwrap();
//! assert!((prediction[0] - 10.0).abs() < 1e-6);
//! ```

/// Dense matrix engine.
pub use ferrum_ml_core as core;

/// Linear algebra kernel.
pub use ferrum_ml_linalg as linalg;

/// Data preprocessing.
pub use ferrum_ml_preprocessing as preprocessing;

/// Closed-form linear regression.
pub use ferrum_ml_linear as linear;

/// Nearest neighbors.
pub use ferrum_ml_neighbors as neighbors;

/// Evaluation metrics.
pub use ferrum_ml_metrics as metrics;

/// Training orchestration and the model session.
pub use ferrum_ml_engine as engine;

/// CSV ingestion.
pub use ferrum_ml_io as io;

/// Synthetic datasets.
pub use ferrum_ml_datasets as datasets;
