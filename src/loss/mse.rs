use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::model::{check_shape, Model, ParamVector};

pub struct MseCost;

impl MseCost {
    /// Mean squared error of `model` under `params` over every record:
    /// mean((predicted - target)²).
    ///
    /// Pure and deterministic: identical arguments always produce the
    /// identical scalar. Shape and arity are checked before the loop; a
    /// `Dataset` is non-empty by construction, so the mean is always
    /// well defined.
    pub fn cost(model: &dyn Model, params: &ParamVector, data: &Dataset) -> Result<f64> {
        check_shape(model, params)?;
        if data.input_arity() != model.input_arity() {
            return Err(Error::ArityMismatch {
                expected: model.input_arity(),
                found: data.input_arity(),
            });
        }

        let total: f64 = data
            .iter()
            .map(|(inputs, target)| {
                let diff = model.evaluate(params, inputs) - target;
                diff * diff
            })
            .sum();
        Ok(total / data.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Linear, SigmoidNeuron};

    fn doubling() -> Dataset {
        Dataset::from_records(&[
            vec![0.0, 0.0],
            vec![1.0, 2.0],
            vec![2.0, 4.0],
            vec![3.0, 6.0],
            vec![4.0, 8.0],
        ])
        .unwrap()
    }

    #[test]
    fn exact_fit_costs_zero() {
        let params = ParamVector::from_values(vec![2.0, 0.0]);
        assert_eq!(MseCost::cost(&Linear, &params, &doubling()).unwrap(), 0.0);
    }

    #[test]
    fn miss_is_mean_of_squared_errors() {
        // w = 0, b = 0 predicts 0 everywhere: errors are the targets.
        let params = ParamVector::zeros(2);
        let expected = (4.0 + 16.0 + 36.0 + 64.0) / 5.0;
        assert_eq!(
            MseCost::cost(&Linear, &params, &doubling()).unwrap(),
            expected
        );
    }

    #[test]
    fn cost_is_idempotent() {
        let params = ParamVector::from_values(vec![1.5, -0.25]);
        let data = doubling();
        let first = MseCost::cost(&Linear, &params, &data).unwrap();
        let second = MseCost::cost(&Linear, &params, &data).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_shape_mismatch() {
        let err = MseCost::cost(&Linear, &ParamVector::zeros(3), &doubling()).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn rejects_arity_mismatch() {
        let err = MseCost::cost(&SigmoidNeuron, &ParamVector::zeros(3), &doubling()).unwrap_err();
        assert_eq!(
            err,
            Error::ArityMismatch {
                expected: 2,
                found: 1
            }
        );
    }
}
