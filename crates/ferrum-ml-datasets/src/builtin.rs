use ferrum_ml_core::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate synthetic regression data: y = Xw + noise.
pub fn make_regression(
    n_samples: usize,
    n_features: usize,
    noise: f64,
    seed: Option<u64>,
) -> (Matrix, Vec<f64>) {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let true_weights: Vec<f64> = (0..n_features)
        .map(|_| rng.gen::<f64>() * 10.0 - 5.0)
        .collect();

    let mut features = Vec::with_capacity(n_samples * n_features);
    let mut targets = Vec::with_capacity(n_samples);

    for _ in 0..n_samples {
        let mut y = 0.0;
        for w in &true_weights {
            let x: f64 = rng.gen::<f64>() * 2.0 - 1.0;
            features.push(x);
            y += x * w;
        }
        targets.push(y + gaussian(&mut rng) * noise);
    }

    (
        Matrix::new(features, n_samples, n_features).expect("regression features"),
        targets,
    )
}

/// Generate synthetic classification data (Gaussian blobs).
pub fn make_blobs(
    n_samples: usize,
    n_features: usize,
    n_centers: usize,
    cluster_std: f64,
    seed: Option<u64>,
) -> (Matrix, Vec<f64>) {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut centers = vec![0.0; n_centers * n_features];
    for c in 0..n_centers {
        for f in 0..n_features {
            centers[c * n_features + f] = (c as f64) * 5.0 + rng.gen::<f64>();
        }
    }

    let samples_per_center = n_samples / n_centers;
    let mut features = Vec::with_capacity(n_samples * n_features);
    let mut labels = Vec::with_capacity(n_samples);

    for c in 0..n_centers {
        let actual_samples = if c == n_centers - 1 {
            n_samples - samples_per_center * (n_centers - 1)
        } else {
            samples_per_center
        };

        for _ in 0..actual_samples {
            for f in 0..n_features {
                features.push(centers[c * n_features + f] + gaussian(&mut rng) * cluster_std);
            }
            labels.push(c as f64);
        }
    }

    let n = labels.len();
    (
        Matrix::new(features, n, n_features).expect("blob features"),
        labels,
    )
}

/// Standard normal sample via the Box-Muller transform.
fn gaussian(rng: &mut StdRng) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-10);
    let u2: f64 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_regression_shapes() {
        let (x, y) = make_regression(50, 3, 0.1, Some(42));
        assert_eq!(x.rows(), 50);
        assert_eq!(x.cols(), 3);
        assert_eq!(y.len(), 50);
    }

    #[test]
    fn test_make_regression_is_reproducible() {
        let (x1, y1) = make_regression(20, 2, 0.5, Some(7));
        let (x2, y2) = make_regression(20, 2, 0.5, Some(7));
        assert_eq!(x1, x2);
        assert_eq!(y1, y2);
    }

    #[test]
    fn test_make_blobs_labels_every_sample() {
        let (x, y) = make_blobs(100, 2, 3, 0.5, Some(42));
        assert_eq!(x.rows(), 100);
        assert_eq!(y.len(), 100);
        assert!(y.iter().all(|&l| l == 0.0 || l == 1.0 || l == 2.0));
    }
}
