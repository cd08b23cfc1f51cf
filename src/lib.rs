pub mod activation;
pub mod dataset;
pub mod error;
pub mod grad;
pub mod loss;
pub mod model;
pub mod optim;
pub mod report;
pub mod train;

// Convenience re-exports
pub use activation::ActivationFunction;
pub use dataset::{Dataset, GateKind};
pub use error::{Error, Result};
pub use grad::DifferenceScheme;
pub use loss::MseCost;
pub use model::{Linear, Model, ParamVector, SigmoidNeuron, XorNet};
pub use optim::Sgd;
pub use report::TruthTable;
pub use train::{train, RunSpec, TrainConfig, TrainOutcome, TrainStats};
