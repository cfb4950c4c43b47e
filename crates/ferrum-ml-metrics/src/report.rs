use serde::{Deserialize, Serialize};

/// Scores for one held-out evaluation, tagged by problem family.
///
/// Serializes with a `type` tag so the JSON consumed by the dashboard reads
/// `{"type":"regression","mse":..,"mae":..}` or
/// `{"type":"classification","accuracy":..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Metrics {
    Regression { mse: f64, mae: f64 },
    Classification { accuracy: f64 },
}
