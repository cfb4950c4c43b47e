use std::sync::{Arc, PoisonError, RwLock};

use ferrum_ml_core::Matrix;
use ferrum_ml_linear::LinearRegression;
use ferrum_ml_metrics::{evaluate_classification, evaluate_regression, Metrics};
use ferrum_ml_neighbors::{Aggregation, KnnModel};
use ferrum_ml_preprocessing::{mean_impute, sequential_split, MinMaxScaler};
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{EngineError, EngineResult};

/// Leading fraction of rows used for fitting; the rest is held out.
const TRAIN_FRACTION: f64 = 0.8;

/// The engine always trains KNN with this neighborhood size.
const KNN_NEIGHBORS: usize = 3;

/// Which estimator to train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    LinearRegression,
    Knn,
}

/// Whether targets are continuous values or numeric-coded labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemType {
    Regression,
    Classification,
}

/// The fitted estimator, tagged by kind.
///
/// Exactly the fields each estimator needs and nothing optional, so an
/// inconsistent combination of stored fields cannot be constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FittedModel {
    Linear { weights: Vec<f64> },
    Knn(KnnModel),
}

/// Everything one training call produces for later predictions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedModel {
    pub problem_type: ProblemType,
    pub scaler: MinMaxScaler,
    pub model: FittedModel,
}

/// One held-out row: its position in the test split, the true target, and
/// the model's prediction. The dashboard charts these directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeldOutPoint {
    pub index: usize,
    pub actual: f64,
    pub predicted: f64,
}

/// What a training call returns to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainOutcome {
    pub metrics: Metrics,
    pub held_out: Vec<HeldOutPoint>,
}

/// Process-wide store for the single current model.
///
/// Holds at most one trained model at a time. Training builds the
/// replacement completely off to the side and publishes it by swapping the
/// slot under a write lock, so a concurrent reader can never observe a
/// half-written model. Retraining replaces the previous model wholesale.
///
/// This is an explicit object: the hosting shell constructs one and passes
/// it to its handlers rather than reaching for a global.
#[derive(Debug, Default)]
pub struct ModelSession {
    slot: RwLock<Option<Arc<TrainedModel>>>,
}

impl ModelSession {
    pub fn new() -> Self {
        ModelSession {
            slot: RwLock::new(None),
        }
    }

    pub fn is_trained(&self) -> bool {
        self.current().is_some()
    }

    /// Snapshot of the currently published model, if any.
    pub fn current(&self) -> Option<Arc<TrainedModel>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Train an estimator and publish it as the session's model.
    ///
    /// Pipeline: impute missing cells with column means, fit the min-max
    /// scaler on the cleaned features, scale, split the leading 80% of rows
    /// for training, fit, score the held-out tail, publish. Targets are
    /// used as-is and never scaled.
    pub fn train(
        &self,
        dataset: &Dataset,
        kind: ModelKind,
        problem_type: ProblemType,
    ) -> EngineResult<TrainOutcome> {
        let cleaned = mean_impute(dataset.features());
        let scaler = MinMaxScaler::fit(&cleaned)?;
        let scaled = scaler.transform(&cleaned)?;

        let (x_train, x_test, y_train, y_test) =
            sequential_split(&scaled, dataset.targets(), TRAIN_FRACTION)?;
        if x_train.rows() == 0 || x_test.rows() == 0 {
            return Err(EngineError::DatasetTooSmall {
                rows: dataset.len(),
            });
        }

        let (model, predictions) = match kind {
            ModelKind::LinearRegression => {
                let mut estimator = LinearRegression::new();
                estimator.fit(&x_train, &y_train)?;
                let predictions = estimator.predict(&x_test)?;
                let weights = estimator
                    .into_weights()
                    .ok_or(EngineError::InvalidModelState)?;
                (FittedModel::Linear { weights }, predictions)
            }
            ModelKind::Knn => {
                let aggregation = match problem_type {
                    ProblemType::Regression => Aggregation::Mean,
                    ProblemType::Classification => Aggregation::MajorityVote,
                };
                let estimator = KnnModel::fit(x_train, y_train, KNN_NEIGHBORS, aggregation)?;
                let predictions = estimator.predict(&x_test)?;
                (FittedModel::Knn(estimator), predictions)
            }
        };

        let metrics = match problem_type {
            ProblemType::Regression => evaluate_regression(&y_test, &predictions)?,
            ProblemType::Classification => evaluate_classification(&y_test, &predictions)?,
        };

        let held_out = y_test
            .iter()
            .zip(&predictions)
            .enumerate()
            .map(|(index, (&actual, &predicted))| HeldOutPoint {
                index,
                actual,
                predicted,
            })
            .collect();

        let trained = Arc::new(TrainedModel {
            problem_type,
            scaler,
            model,
        });
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(trained);

        Ok(TrainOutcome { metrics, held_out })
    }

    /// Predict a single point with the session's current model.
    ///
    /// The input must match the training feature count and column order; it
    /// is scaled with the scaler frozen at training time.
    pub fn predict(&self, features: &[f64]) -> EngineResult<Vec<f64>> {
        let trained = self.current().ok_or(EngineError::NotTrained)?;

        let expected = trained.scaler.feature_count();
        if features.len() != expected {
            return Err(EngineError::FeatureCountMismatch {
                expected,
                got: features.len(),
            });
        }

        let scaled = trained.scaler.transform_row(features)?;
        let row = Matrix::new(scaled, 1, expected)?;

        let prediction = match &trained.model {
            FittedModel::Linear { weights } => LinearRegression::predict_with(weights, &row)?,
            FittedModel::Knn(knn) => knn.predict(&row)?,
        };
        Ok(prediction)
    }
}
