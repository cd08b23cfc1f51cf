use serde::{Deserialize, Serialize};
use std::f64::consts::E;

/// Element-wise squashing applied to a neuron's raw weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    /// Logistic sigmoid 1 / (1 + e^-x). Total on all finite floats;
    /// saturates toward 0 as x goes to -inf and 1 as x goes to +inf,
    /// which makes neuron outputs readable as gate truth values.
    Sigmoid,
    /// Pass-through. Used by the plain linear model.
    Identity,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Identity => x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_midpoint_is_half() {
        assert_eq!(ActivationFunction::Sigmoid.function(0.0), 0.5);
    }

    #[test]
    fn sigmoid_saturates() {
        assert!(ActivationFunction::Sigmoid.function(-40.0) < 1e-12);
        assert!(ActivationFunction::Sigmoid.function(40.0) > 1.0 - 1e-12);
    }

    #[test]
    fn sigmoid_is_monotonic() {
        let f = |x| ActivationFunction::Sigmoid.function(x);
        assert!(f(-1.0) < f(0.0));
        assert!(f(0.0) < f(1.0));
    }

    #[test]
    fn identity_passes_through() {
        assert_eq!(ActivationFunction::Identity.function(-3.25), -3.25);
    }
}
