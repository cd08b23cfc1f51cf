use crate::activation::ActivationFunction;

use super::params::ParamVector;
use super::Model;

/// Two-layer, 3-neuron network for the XOR family.
///
/// Strict two-stage pipeline: two first-layer sigmoid neurons read the
/// same two raw inputs through disjoint 3-parameter sub-vectors, and one
/// second-layer sigmoid neuron combines their outputs. The parameter
/// names reflect the hand-derived decomposition
/// `x ^ y = (x | y) & ~(x & y)`; training is free to land on any other
/// internal solution, the names only fix the layout.
pub struct XorNet;

const SHAPE: &[&str] = &[
    "or_w1", "or_w2", "or_b", "nand_w1", "nand_w2", "nand_b", "and_w1", "and_w2", "and_b",
];

// Sub-vector offsets into SHAPE.
pub const OR: usize = 0;
pub const NAND: usize = 3;
pub const AND: usize = 6;

fn neuron(params: &ParamVector, at: usize, x1: f64, x2: f64) -> f64 {
    let z = x1 * params[at] + x2 * params[at + 1] + params[at + 2];
    ActivationFunction::Sigmoid.function(z)
}

impl Model for XorNet {
    fn shape(&self) -> &'static [&'static str] {
        SHAPE
    }

    fn input_arity(&self) -> usize {
        2
    }

    fn evaluate(&self, params: &ParamVector, inputs: &[f64]) -> f64 {
        let (a, b) = self.hidden(params, inputs[0], inputs[1]);
        neuron(params, AND, a, b)
    }
}

impl XorNet {
    /// Outputs of the two first-layer neurons for one input pair, in
    /// declaration order. The demos print each hidden neuron's own
    /// truth table from this.
    pub fn hidden(&self, params: &ParamVector, x1: f64, x2: f64) -> (f64, f64) {
        (neuron(params, OR, x1, x2), neuron(params, NAND, x1, x2))
    }
}
