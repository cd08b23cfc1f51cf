use serde::{Deserialize, Serialize};

use crate::dataset::GateKind;
use crate::grad::DifferenceScheme;
use crate::train::train_config::TrainConfig;

/// A saved gate-training configuration: which truth table to learn and
/// the hyperparameters to learn it with.
///
/// `RunSpec` can be written to / read from JSON independently of any
/// run, so gate experiments are reproducible from a file instead of
/// edited constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSpec {
    pub gate: GateKind,
    pub iterations: usize,
    pub learning_rate: f64,
    pub epsilon: f64,
    #[serde(default)]
    pub scheme: DifferenceScheme,
}

impl RunSpec {
    /// Stock gate hyperparameters: 10^6 iterations, rate 0.01,
    /// epsilon 1e-3, forward differences.
    pub fn for_gate(gate: GateKind) -> RunSpec {
        RunSpec {
            gate,
            iterations: 1_000_000,
            learning_rate: 0.01,
            epsilon: 1e-3,
            scheme: DifferenceScheme::Forward,
        }
    }

    pub fn train_config(&self) -> TrainConfig {
        let mut config = TrainConfig::new(self.iterations, self.learning_rate, self.epsilon);
        config.scheme = self.scheme;
        config
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `RunSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<RunSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
