pub mod dataset;
pub mod error;
pub mod session;

pub use dataset::Dataset;
pub use error::{EngineError, EngineResult};
pub use session::{
    FittedModel, HeldOutPoint, ModelKind, ModelSession, ProblemType, TrainOutcome, TrainedModel,
};
