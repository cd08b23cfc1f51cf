use crate::activation::ActivationFunction;

use super::params::ParamVector;
use super::Model;

/// Single sigmoid neuron over two inputs:
/// `y = sigmoid(x1 * w1 + x2 * w2 + b)`.
///
/// Enough capacity for any linearly separable 2-input gate (OR, AND,
/// NAND); the XOR family needs [`super::XorNet`].
pub struct SigmoidNeuron;

const SHAPE: &[&str] = &["w1", "w2", "b"];

impl Model for SigmoidNeuron {
    fn shape(&self) -> &'static [&'static str] {
        SHAPE
    }

    fn input_arity(&self) -> usize {
        2
    }

    fn evaluate(&self, params: &ParamVector, inputs: &[f64]) -> f64 {
        let z = inputs[0] * params[0] + inputs[1] * params[1] + params[2];
        ActivationFunction::Sigmoid.function(z)
    }
}
