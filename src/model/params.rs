use rand::Rng;

/// Ordered collection of scalar parameters for one model variant.
///
/// The gradient estimator produces its output with this same type:
/// entry `i` of a gradient always corresponds to entry `i` of the
/// parameters it was computed for, and the two vectors always have the
/// same length. Parameter names live on the model (`Model::shape`), not
/// here, so the estimator, optimizer and driver stay variant-agnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamVector {
    values: Vec<f64>,
}

impl ParamVector {
    pub fn zeros(len: usize) -> ParamVector {
        ParamVector {
            values: vec![0.0; len],
        }
    }

    /// Independent uniform draws in [0, 1) per parameter.
    ///
    /// The random source is caller-supplied and expected to live for the
    /// whole process (`rand::thread_rng()` in demos, a seeded `StdRng`
    /// in tests); nothing here reseeds between draws.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> ParamVector {
        ParamVector {
            values: (0..len).map(|_| rng.gen::<f64>()).collect(),
        }
    }

    pub fn from_values(values: Vec<f64>) -> ParamVector {
        ParamVector { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Copy of this vector with entry `i` shifted by `delta`; `self` is
    /// untouched. This is the estimator's probe constructor.
    pub fn perturbed(&self, i: usize, delta: f64) -> ParamVector {
        let mut probe = self.clone();
        probe.values[i] += delta;
        probe
    }
}

impl std::ops::Index<usize> for ParamVector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}
