use serde::{Deserialize, Serialize};

/// Snapshot of a running training loop, sent over
/// `TrainConfig::progress_tx`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainStats {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Total iterations requested for this run.
    pub total_iterations: usize,
    /// Cost after this iteration's update.
    pub cost: f64,
    /// Wall-clock time since the run started, in milliseconds.
    pub elapsed_ms: u64,
}
