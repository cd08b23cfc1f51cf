use std::time::Instant;

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::grad;
use crate::loss::MseCost;
use crate::model::{check_shape, Model, ParamVector};
use crate::optim::Sgd;
use crate::train::train_config::TrainConfig;
use crate::train::train_stats::TrainStats;

/// Final state of a completed run.
#[derive(Debug, Clone)]
pub struct TrainOutcome {
    pub params: ParamVector,
    pub cost: f64,
}

/// Runs exactly `config.iterations` estimate-then-step rounds starting
/// from `init`, and returns the final parameters with their cost.
///
/// All validation happens before iteration one: parameter shape and
/// dataset arity against the model. After that the loop is flat: no
/// convergence check, no retry, no early exit. A run that diverges
/// still burns its whole budget and comes back with a NaN/Inf cost for
/// the caller to judge.
pub fn train(
    model: &dyn Model,
    init: ParamVector,
    data: &Dataset,
    config: &TrainConfig,
) -> Result<TrainOutcome> {
    check_shape(model, &init)?;
    if data.input_arity() != model.input_arity() {
        return Err(Error::ArityMismatch {
            expected: model.input_arity(),
            found: data.input_arity(),
        });
    }

    let optimizer = Sgd::new(config.learning_rate);
    let started = Instant::now();
    let mut params = init;

    for iteration in 1..=config.iterations {
        let gradient = grad::estimate(model, &params, data, config.epsilon, config.scheme)?;
        params = optimizer.step(&params, &gradient);

        if should_report(iteration, config) {
            if let Some(ref tx) = config.progress_tx {
                let stats = TrainStats {
                    iteration,
                    total_iterations: config.iterations,
                    cost: MseCost::cost(model, &params, data)?,
                    elapsed_ms: started.elapsed().as_millis() as u64,
                };
                // Best-effort: a gone receiver must not end the run early.
                let _ = tx.send(stats);
            }
        }
    }

    let cost = MseCost::cost(model, &params, data)?;
    Ok(TrainOutcome { params, cost })
}

fn should_report(iteration: usize, config: &TrainConfig) -> bool {
    config.progress_every != 0
        && (iteration % config.progress_every == 0 || iteration == config.iterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Linear;
    use std::sync::mpsc;

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
    fn zero_iterations_returns_initial_params() {
        let config = TrainConfig::new(0, 0.01, 1e-6);
        let outcome = train(&Linear, ParamVector::zeros(2), &doubling(), &config).unwrap();
        assert_eq!(outcome.params.values(), &[0.0, 0.0]);
        assert_eq!(
            outcome.cost,
            MseCost::cost(&Linear, &outcome.params, &doubling()).unwrap()
        );
    }

    #[test]
    fn rejects_bad_shape_before_iterating() {
        let config = TrainConfig::new(10, 0.01, 1e-6);
        let err = train(&Linear, ParamVector::zeros(5), &doubling(), &config).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                expected: 2,
                found: 5
            }
        );
    }

    #[test]
    fn rejects_dataset_arity_mismatch() {
        let gate = crate::dataset::GateKind::And.dataset();
        let config = TrainConfig::new(10, 0.01, 1e-6);
        let err = train(&Linear, ParamVector::zeros(2), &gate, &config).unwrap_err();
        assert_eq!(
            err,
            Error::ArityMismatch {
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn progress_stats_cover_the_whole_run() {
        let (tx, rx) = mpsc::channel();
        let mut config = TrainConfig::new(10, 0.01, 1e-6);
        config.progress_every = 4;
        config.progress_tx = Some(tx);

        train(&Linear, ParamVector::zeros(2), &doubling(), &config).unwrap();
        drop(config);

        let stats: Vec<TrainStats> = rx.iter().collect();
        let iterations: Vec<usize> = stats.iter().map(|s| s.iteration).collect();
        // Every progress_every-th iteration plus the final one.
        assert_eq!(iterations, vec![4, 8, 10]);
        assert!(stats.iter().all(|s| s.total_iterations == 10));
    }

    #[test]
    fn dropped_receiver_does_not_shorten_the_run() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut config = TrainConfig::new(50, 0.01, 1e-6);
        config.progress_every = 1;
        config.progress_tx = Some(tx);

        // Must still improve over the full budget rather than bail at
        // the first failed send.
        let before = MseCost::cost(&Linear, &ParamVector::zeros(2), &doubling()).unwrap();
        let outcome = train(&Linear, ParamVector::zeros(2), &doubling(), &config).unwrap();
        assert!(outcome.cost < before);
    }

    #[test]
    fn cost_never_increases_with_small_rate() {
        let (tx, rx) = mpsc::channel();
        let mut config = TrainConfig::new(200, 0.005, 1e-6);
        config.progress_every = 1;
        config.progress_tx = Some(tx);

        train(&Linear, ParamVector::zeros(2), &doubling(), &config).unwrap();
        drop(config);

        let costs: Vec<f64> = rx.iter().map(|s| s.cost).collect();
        assert_eq!(costs.len(), 200);
        for pair in costs.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-6, "{} then {}", pair[0], pair[1]);
        }
    }
}
