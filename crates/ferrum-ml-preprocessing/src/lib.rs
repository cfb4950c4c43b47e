pub mod impute;
pub mod scaler;
pub mod split;

pub use impute::mean_impute;
pub use scaler::MinMaxScaler;
pub use split::sequential_split;
