use std::sync::mpsc;

use numgrad::model::xor_net::{NAND, OR};
use numgrad::{GateKind, Model, MseCost, ParamVector, RunSpec, TruthTable, XorNet};

fn main() {
    // XOR by default; "xnor" as the first argument trains the other
    // non-separable gate with the same network.
    let gate = match std::env::args().nth(1).as_deref() {
        None | Some("xor") => GateKind::Xor,
        Some("xnor") => GateKind::Xnor,
        Some(other) => panic!("unknown gate: {other} (expected xor / xnor)"),
    };
    let spec = RunSpec::for_gate(gate);

    let model = XorNet;
    let data = gate.dataset();
    let mut rng = rand::thread_rng();
    let init = ParamVector::random(model.param_count(), &mut rng);
    println!(
        "cost before: {:.6}",
        MseCost::cost(&model, &init, &data).expect("valid shape")
    );

    let (tx, rx) = mpsc::channel();
    let mut config = spec.train_config();
    config.progress_every = spec.iterations / 10;
    config.progress_tx = Some(tx);

    let outcome = numgrad::train(&model, init, &data, &config).expect("valid training inputs");
    drop(config);

    for stats in rx.iter() {
        println!(
            "iter {:>7}/{}: cost = {:.6} ({} ms)",
            stats.iteration, stats.total_iterations, stats.cost, stats.elapsed_ms
        );
    }

    for (name, value) in model.shape().iter().zip(outcome.params.values()) {
        println!("{name} = {value:.6}");
    }
    println!("cost after:  {:.6}", outcome.cost);

    let table = TruthTable::tabulate(&model, &outcome.params).expect("2-input model");
    println!("--- {} ---", gate.name());
    print!("{table}");

    // What each hidden neuron actually learned, named slot by named slot.
    for (label, at) in [("first hidden neuron", OR), ("second hidden neuron", NAND)] {
        println!("--- {label} ---");
        for x1 in 0..2u8 {
            for x2 in 0..2u8 {
                let (a, b) = model.hidden(&outcome.params, f64::from(x1), f64::from(x2));
                let out = if at == OR { a } else { b };
                println!("f({x1}, {x2}) = {out:.6}");
            }
        }
    }
}
