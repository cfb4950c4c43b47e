use ferrum_ml_core::error::MatrixResult;
use ferrum_ml_core::{Matrix, MatrixError};
use serde::{Deserialize, Serialize};

/// How the k selected neighbors are reduced to one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Aggregation {
    /// Most frequent label wins; ties go to the label encountered first in
    /// distance order.
    MajorityVote,
    /// Arithmetic mean of the neighbor targets.
    Mean,
}

/// K-Nearest Neighbors predictor.
///
/// The stored training matrix and target vector ARE the model; there is no
/// compression step. Distances are Euclidean and neighbor search is brute
/// force over every training row: O(test · train · features), no spatial
/// index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnnModel {
    x_train: Matrix,
    y_train: Vec<f64>,
    k: usize,
    aggregation: Aggregation,
}

impl KnnModel {
    /// Store the training data after validating that rows and targets pair
    /// up and that `1 <= k <= rows`. An out-of-range `k` is an error, never
    /// silently clamped.
    pub fn fit(
        x_train: Matrix,
        y_train: Vec<f64>,
        k: usize,
        aggregation: Aggregation,
    ) -> MatrixResult<Self> {
        if x_train.rows() != y_train.len() {
            return Err(MatrixError::DimensionMismatch(format!(
                "training matrix has {} rows but target vector has {}",
                x_train.rows(),
                y_train.len()
            )));
        }
        if k == 0 || k > x_train.rows() {
            return Err(MatrixError::InvalidOperation(format!(
                "k must be within 1..={}, got {}",
                x_train.rows(),
                k
            )));
        }
        Ok(KnnModel {
            x_train,
            y_train,
            k,
            aggregation,
        })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn feature_count(&self) -> usize {
        self.x_train.cols()
    }

    /// Predict one value per test row.
    pub fn predict(&self, x_test: &Matrix) -> MatrixResult<Vec<f64>> {
        if x_test.cols() != self.x_train.cols() {
            return Err(MatrixError::DimensionMismatch(format!(
                "model fitted on {} features but input has {}",
                self.x_train.cols(),
                x_test.cols()
            )));
        }

        let mut predictions = Vec::with_capacity(x_test.rows());
        for i in 0..x_test.rows() {
            let point = x_test.row(i)?;

            let mut dists: Vec<(f64, usize)> = Vec::with_capacity(self.x_train.rows());
            for j in 0..self.x_train.rows() {
                dists.push((euclidean(point, self.x_train.row(j)?), j));
            }
            // Stable sort: equidistant neighbors keep training order.
            dists.sort_by(|a, b| a.0.total_cmp(&b.0));
            let neighbors = &dists[..self.k];

            predictions.push(match self.aggregation {
                Aggregation::MajorityVote => self.vote(neighbors),
                Aggregation::Mean => {
                    let sum: f64 = neighbors.iter().map(|&(_, j)| self.y_train[j]).sum();
                    sum / self.k as f64
                }
            });
        }
        Ok(predictions)
    }

    /// Majority vote with counts accumulated in first-encountered order.
    ///
    /// The winner is only replaced on a strictly greater count, so a tie
    /// resolves to whichever label appeared earliest among the neighbors in
    /// distance order. Downstream consumers depend on this exact behavior
    /// for reproducibility.
    fn vote(&self, neighbors: &[(f64, usize)]) -> f64 {
        let mut counts: Vec<(f64, usize)> = Vec::new();
        for &(_, j) in neighbors {
            let label = self.y_train[j];
            match counts.iter_mut().find(|(l, _)| *l == label) {
                Some((_, c)) => *c += 1,
                None => counts.push((label, 1)),
            }
        }

        let mut best = self.y_train[neighbors[0].1];
        let mut best_count = 0usize;
        for &(label, count) in &counts {
            if count > best_count {
                best = label;
                best_count = count;
            }
        }
        best
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_cluster_data() -> (Matrix, Vec<f64>) {
        let x = Matrix::from_rows(&[
            vec![0.0, 0.0],
            vec![0.5, 0.5],
            vec![1.0, 1.0],
            vec![5.0, 5.0],
            vec![5.5, 5.5],
            vec![6.0, 6.0],
        ])
        .unwrap();
        let y = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        (x, y)
    }

    #[test]
    fn test_classification_on_clusters() {
        let (x, y) = two_cluster_data();
        let knn = KnnModel::fit(x.clone(), y.clone(), 3, Aggregation::MajorityVote).unwrap();
        assert_eq!(knn.k(), 3);
        assert_eq!(knn.feature_count(), 2);
        let pred = knn.predict(&x).unwrap();
        assert_eq!(pred, y);
    }

    #[test]
    fn test_k1_returns_exact_training_label() {
        let (x, y) = two_cluster_data();
        let knn = KnnModel::fit(x, y, 1, Aggregation::MajorityVote).unwrap();
        let pred = knn
            .predict(&Matrix::from_rows(&[vec![5.5, 5.5]]).unwrap())
            .unwrap();
        assert_eq!(pred, vec![1.0]);
    }

    #[test]
    fn test_vote_tie_goes_to_nearest_label() {
        // k = 2 with one neighbor of each label: both counts are 1, so the
        // label of the closer neighbor must win.
        let x = Matrix::from_rows(&[vec![0.0], vec![1.0]]).unwrap();
        let y = vec![5.0, 7.0];
        let knn = KnnModel::fit(x, y, 2, Aggregation::MajorityVote).unwrap();

        let pred = knn
            .predict(&Matrix::from_rows(&[vec![0.25]]).unwrap())
            .unwrap();
        assert_eq!(pred, vec![5.0]);

        // Mirrored test point flips which label is nearest.
        let pred = knn
            .predict(&Matrix::from_rows(&[vec![0.75]]).unwrap())
            .unwrap();
        assert_eq!(pred, vec![7.0]);
    }

    #[test]
    fn test_regression_averages_neighbors() {
        let x = Matrix::from_rows(&[vec![0.0], vec![1.0], vec![10.0]]).unwrap();
        let y = vec![2.0, 4.0, 100.0];
        let knn = KnnModel::fit(x, y, 2, Aggregation::Mean).unwrap();
        let pred = knn
            .predict(&Matrix::from_rows(&[vec![0.5]]).unwrap())
            .unwrap();
        assert_eq!(pred, vec![3.0]);
    }

    #[test]
    fn test_k_out_of_range_is_rejected() {
        let x = Matrix::from_rows(&[vec![0.0], vec![1.0]]).unwrap();
        assert!(KnnModel::fit(x.clone(), vec![0.0, 1.0], 0, Aggregation::Mean).is_err());
        assert!(KnnModel::fit(x, vec![0.0, 1.0], 3, Aggregation::Mean).is_err());
    }

    #[test]
    fn test_feature_count_mismatch_is_rejected() {
        let x = Matrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 1.0]]).unwrap();
        let knn = KnnModel::fit(x, vec![0.0, 1.0], 1, Aggregation::MajorityVote).unwrap();
        assert!(knn.predict(&Matrix::zeros(1, 3)).is_err());
    }
}
