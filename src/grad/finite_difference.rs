use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::loss::MseCost;
use crate::model::{check_shape, Model, ParamVector};

/// Which difference quotient approximates each partial derivative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceScheme {
    /// One-sided: (cost(p + eps) - cost(p)) / eps. One shared base cost
    /// plus one probe per parameter.
    #[default]
    Forward,
    /// Symmetric: (cost(p + eps) - cost(p - eps)) / 2eps. Two probes per
    /// parameter, but truncation error falls off as eps² instead of eps.
    Central,
}

/// Numerical gradient of the MSE cost with respect to every parameter.
///
/// Each parameter is probed independently along its own axis; nothing
/// couples the probes, so this approximates the gradient one partial at
/// a time rather than computing a true multivariate derivative. The
/// result always has exactly one entry per parameter, positionally
/// aligned with `params`.
///
/// One call costs `|params|` full cost evaluations plus the shared base
/// (twice `|params|` for `Central`), i.e. O(|params| * |dataset|); that
/// price multiplies by the iteration count over a full run.
///
/// `epsilon` trades truncation error (grows with epsilon) against
/// floating-point cancellation between near-equal costs (grows as
/// epsilon shrinks). It is a tuning knob, never validated: the linear
/// demo uses 1e-6, the gate demos 1e-3.
pub fn estimate(
    model: &dyn Model,
    params: &ParamVector,
    data: &Dataset,
    epsilon: f64,
    scheme: DifferenceScheme,
) -> Result<ParamVector> {
    check_shape(model, params)?;

    let mut gradient = Vec::with_capacity(params.len());
    match scheme {
        DifferenceScheme::Forward => {
            let base = MseCost::cost(model, params, data)?;
            for i in 0..params.len() {
                let probed = MseCost::cost(model, &params.perturbed(i, epsilon), data)?;
                gradient.push((probed - base) / epsilon);
            }
        }
        DifferenceScheme::Central => {
            for i in 0..params.len() {
                let ahead = MseCost::cost(model, &params.perturbed(i, epsilon), data)?;
                let behind = MseCost::cost(model, &params.perturbed(i, -epsilon), data)?;
                gradient.push((ahead - behind) / (2.0 * epsilon));
            }
        }
    }
    Ok(ParamVector::from_values(gradient))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Linear, SigmoidNeuron, XorNet};

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

    /// Analytic MSE gradient for the linear model:
    /// dC/dw = 2/n * sum((w x + b - y) x), dC/db = 2/n * sum(w x + b - y).
    fn analytic_linear_gradient(params: &ParamVector, data: &Dataset) -> (f64, f64) {
        let n = data.len() as f64;
        let (mut dw, mut db) = (0.0, 0.0);
        for (inputs, target) in data.iter() {
            let x = inputs[0];
            let err = x * params[0] + params[1] - target;
            dw += 2.0 * err * x;
            db += 2.0 * err;
        }
        (dw / n, db / n)
    }

    #[test]
    fn forward_difference_tracks_analytic_gradient() {
        let params = ParamVector::from_values(vec![0.5, -0.25]);
        let data = doubling();
        let (dw, db) = analytic_linear_gradient(&params, &data);

        let grad = estimate(&Linear, &params, &data, 1e-6, DifferenceScheme::Forward).unwrap();
        assert!((grad[0] - dw).abs() < 1e-3);
        assert!((grad[1] - db).abs() < 1e-3);
    }

    #[test]
    fn forward_error_shrinks_with_epsilon() {
        let params = ParamVector::from_values(vec![0.5, -0.25]);
        let data = doubling();
        let (dw, _) = analytic_linear_gradient(&params, &data);

        let coarse = estimate(&Linear, &params, &data, 1e-2, DifferenceScheme::Forward).unwrap();
        let fine = estimate(&Linear, &params, &data, 1e-4, DifferenceScheme::Forward).unwrap();
        assert!((fine[0] - dw).abs() < (coarse[0] - dw).abs());
    }

    #[test]
    fn central_difference_is_exact_on_quadratic_cost() {
        // The linear model's MSE is quadratic in (w, b), so the symmetric
        // quotient has zero truncation error; only rounding remains.
        let params = ParamVector::from_values(vec![0.5, -0.25]);
        let data = doubling();
        let (dw, db) = analytic_linear_gradient(&params, &data);

        let grad = estimate(&Linear, &params, &data, 1e-3, DifferenceScheme::Central).unwrap();
        assert!((grad[0] - dw).abs() < 1e-8);
        assert!((grad[1] - db).abs() < 1e-8);
    }

    #[test]
    fn gradient_shape_matches_params_for_every_variant() {
        let line = doubling();
        let gate = crate::dataset::GateKind::Or.dataset();
        let cases: [(&dyn Model, &Dataset); 3] = [
            (&Linear, &line),
            (&SigmoidNeuron, &gate),
            (&XorNet, &gate),
        ];
        for (model, data) in cases {
            let params = ParamVector::zeros(model.param_count());
            let grad = estimate(model, &params, data, 1e-3, DifferenceScheme::Forward).unwrap();
            assert_eq!(grad.len(), params.len());
        }
    }

    #[test]
    fn rejects_shape_mismatch_before_probing() {
        let err = estimate(
            &Linear,
            &ParamVector::zeros(9),
            &doubling(),
            1e-6,
            DifferenceScheme::Central,
        )
        .unwrap_err();
        assert_eq!(
            err,
            crate::error::Error::ShapeMismatch {
                expected: 2,
                found: 9
            }
        );
    }
}
