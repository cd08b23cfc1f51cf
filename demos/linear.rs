use numgrad::{Dataset, Linear, Model, MseCost, ParamVector, TrainConfig};

fn main() {
    // y = 2x, with 5.0 held out as the prediction check.
    let data = Dataset::from_records(&[
        vec![0.0, 0.0],
        vec![1.0, 2.0],
        vec![2.0, 4.0],
        vec![3.0, 6.0],
        vec![4.0, 8.0],
    ])
    .expect("demo dataset is valid");

    let model = Linear;

    let exact = Linear::least_squares(&data).expect("single-input dataset");
    println!(
        "exact:   w = {:.6}  b = {:.6}  cost = {:.6}",
        exact[0],
        exact[1],
        MseCost::cost(&model, &exact, &data).expect("valid shape")
    );
    println!(
        "exact:   predict(5.0) = {:.6} vs real 10.0",
        model.evaluate(&exact, &[5.0])
    );

    let init = ParamVector::zeros(model.param_count());
    println!(
        "initial: w = {:.6}  b = {:.6}  cost = {:.6}",
        init[0],
        init[1],
        MseCost::cost(&model, &init, &data).expect("valid shape")
    );

    let config = TrainConfig::new(200, 0.01, 1e-6);
    let outcome = numgrad::train(&model, init, &data, &config).expect("valid training inputs");

    println!(
        "trained: w = {:.6}  b = {:.6}  cost = {:.6}",
        outcome.params[0], outcome.params[1], outcome.cost
    );
    println!(
        "trained: predict(5.0) = {:.6} vs real 10.0",
        model.evaluate(&outcome.params, &[5.0])
    );
}
