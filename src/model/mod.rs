pub mod linear;
pub mod neuron;
pub mod params;
pub mod xor_net;

pub use linear::Linear;
pub use neuron::SigmoidNeuron;
pub use params::ParamVector;
pub use xor_net::XorNet;

use crate::error::{Error, Result};

/// A fixed-shape model: an ordered list of named parameters plus a pure
/// evaluation function over one record's inputs.
///
/// Object-safe on purpose: the cost function, gradient estimator,
/// optimizer and training driver are written once over `&dyn Model` and
/// never branch on the concrete variant.
pub trait Model {
    /// Ordered parameter names. The length of this slice is the shape
    /// shared by the parameter vector and every gradient computed for it.
    fn shape(&self) -> &'static [&'static str];

    /// Number of input values consumed per record.
    fn input_arity(&self) -> usize;

    /// Predicted scalar for one record's inputs. `params` must match
    /// `shape()` and `inputs` must match `input_arity()`; callers that
    /// loop over datasets check both once up front.
    fn evaluate(&self, params: &ParamVector, inputs: &[f64]) -> f64;

    fn param_count(&self) -> usize {
        self.shape().len()
    }
}

/// Fails fast when `params` does not match the model's declared shape.
pub fn check_shape(model: &dyn Model, params: &ParamVector) -> Result<()> {
    if params.len() != model.param_count() {
        return Err(Error::ShapeMismatch {
            expected: model.param_count(),
            found: params.len(),
        });
    }
    Ok(())
}
