use std::sync::mpsc;

use crate::grad::DifferenceScheme;
use crate::train::train_stats::TrainStats;

/// Hyperparameters and reporting hooks for one `train` run.
///
/// # Fields
/// - `iterations`     — fixed iteration budget; the run always uses all
///                      of it, there is no convergence detection
/// - `learning_rate`  — step size for the descent update
/// - `epsilon`        — finite-difference probe distance
/// - `scheme`         — forward (default) or central differences
/// - `progress_every` — emit `TrainStats` every this many iterations
///                      (plus the final one); `0` disables reporting
/// - `progress_tx`    — optional stats channel. Sends are best-effort: a
///                      dropped receiver never shortens the run.
pub struct TrainConfig {
    pub iterations: usize,
    pub learning_rate: f64,
    pub epsilon: f64,
    pub scheme: DifferenceScheme,
    pub progress_every: usize,
    pub progress_tx: Option<mpsc::Sender<TrainStats>>,
}

impl TrainConfig {
    /// Forward differences, no progress reporting.
    pub fn new(iterations: usize, learning_rate: f64, epsilon: f64) -> Self {
        TrainConfig {
            iterations,
            learning_rate,
            epsilon,
            scheme: DifferenceScheme::Forward,
            progress_every: 0,
            progress_tx: None,
        }
    }
}
