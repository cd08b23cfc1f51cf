use crate::model::ParamVector;

/// Plain gradient descent. No momentum, no adaptive rate, no clipping.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// One descent step: `params[i] - learning_rate * gradient[i]`
    /// elementwise. Pure; the training driver rebinds the returned
    /// vector, making this the system's only parameter mutation point.
    pub fn step(&self, params: &ParamVector, gradient: &ParamVector) -> ParamVector {
        debug_assert_eq!(params.len(), gradient.len());
        let values = params
            .values()
            .iter()
            .zip(gradient.values().iter())
            .map(|(p, g)| p - self.learning_rate * g)
            .collect();
        ParamVector::from_values(values)
    }
}
