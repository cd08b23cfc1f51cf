use serde::{Deserialize, Serialize};

use super::records::Dataset;

/// Selects which boolean truth table a run trains against.
///
/// OR, AND and NAND are linearly separable and fit a single sigmoid
/// neuron; XOR and XNOR need the two-layer network. The chosen dataset
/// is passed into the training driver explicitly, there is no ambient
/// "active gate" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    Or,
    And,
    Nand,
    Xor,
    Xnor,
}

impl GateKind {
    /// The gate's 4-record truth table: `x1, x2, target` per record, in
    /// (0,0), (0,1), (1,0), (1,1) input order.
    pub fn dataset(&self) -> Dataset {
        let bits = self.expected_bits();
        let rows: Vec<Vec<f64>> = [(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]
            .iter()
            .zip(bits.iter())
            .map(|(&(x1, x2), &y)| vec![x1, x2, f64::from(y)])
            .collect();
        Dataset::from_records(&rows).expect("gate truth tables are fixed and valid")
    }

    /// Target outputs in (0,0), (0,1), (1,0), (1,1) input order.
    pub fn expected_bits(&self) -> [u8; 4] {
        match self {
            GateKind::Or => [0, 1, 1, 1],
            GateKind::And => [0, 0, 0, 1],
            GateKind::Nand => [1, 1, 1, 0],
            GateKind::Xor => [0, 1, 1, 0],
            GateKind::Xnor => [1, 0, 0, 1],
        }
    }

    /// Whether a single neuron can represent this gate.
    pub fn is_linearly_separable(&self) -> bool {
        !matches!(self, GateKind::Xor | GateKind::Xnor)
    }

    pub fn name(&self) -> &'static str {
        match self {
            GateKind::Or => "OR",
            GateKind::And => "AND",
            GateKind::Nand => "NAND",
            GateKind::Xor => "XOR",
            GateKind::Xnor => "XNOR",
        }
    }
}
