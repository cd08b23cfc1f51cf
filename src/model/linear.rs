use crate::activation::ActivationFunction;
use crate::dataset::Dataset;
use crate::error::{Error, Result};

use super::params::ParamVector;
use super::Model;

/// Single linear neuron over one input: `y = x * w + b`, no squashing.
///
/// Simplest instance of the model contract; its cost surface is a
/// quadratic bowl, which also makes it the reference point for checking
/// the finite-difference estimator against analytic derivatives.
pub struct Linear;

const SHAPE: &[&str] = &["w", "b"];

impl Model for Linear {
    fn shape(&self) -> &'static [&'static str] {
        SHAPE
    }

    fn input_arity(&self) -> usize {
        1
    }

    fn evaluate(&self, params: &ParamVector, inputs: &[f64]) -> f64 {
        ActivationFunction::Identity.function(inputs[0] * params[0] + params[1])
    }
}

impl Linear {
    /// Closed-form least-squares fit over the whole dataset, via the
    /// usual means identity:
    ///
    ///   w = (mean(xy) - mean(x) mean(y)) / (mean(x^2) - mean(x)^2)
    ///   b = mean(y) - w mean(x)
    ///
    /// The one-shot baseline the linear demo compares gradient descent
    /// against. One pass, no iteration; does not scale past a single
    /// parameter pair, which is the whole reason the iterative loop
    /// exists.
    pub fn least_squares(data: &Dataset) -> Result<ParamVector> {
        if data.input_arity() != 1 {
            return Err(Error::ArityMismatch {
                expected: 1,
                found: data.input_arity(),
            });
        }

        let n = data.len() as f64;
        let (mut sx, mut sy, mut sxx, mut sxy) = (0.0, 0.0, 0.0, 0.0);
        for (inputs, target) in data.iter() {
            let x = inputs[0];
            sx += x;
            sy += target;
            sxx += x * x;
            sxy += x * target;
        }
        let (mx, my, mxx, mxy) = (sx / n, sy / n, sxx / n, sxy / n);

        let w = (mxy - mx * my) / (mxx - mx * mx);
        let b = my - w * mx;
        Ok(ParamVector::from_values(vec![w, b]))
    }
}
