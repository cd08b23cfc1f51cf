pub mod run_spec;
pub mod train_config;
pub mod train_stats;
pub mod trainer;

pub use run_spec::RunSpec;
pub use train_config::TrainConfig;
pub use train_stats::TrainStats;
pub use trainer::{train, TrainOutcome};
