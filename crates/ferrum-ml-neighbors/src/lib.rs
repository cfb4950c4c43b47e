pub mod knn;

pub use knn::{Aggregation, KnnModel};
