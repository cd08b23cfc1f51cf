use numgrad::{GateKind, Model, MseCost, ParamVector, RunSpec, SigmoidNeuron, TruthTable};

fn main() {
    // Gate name (or / and / nand) or a RunSpec JSON path as the first
    // argument; OR by default.
    let spec = match std::env::args().nth(1) {
        None => RunSpec::for_gate(GateKind::Or),
        Some(arg) if arg.ends_with(".json") => {
            RunSpec::load_json(&arg).expect("readable RunSpec JSON")
        }
        Some(arg) => RunSpec::for_gate(parse_gate(&arg)),
    };
    assert!(
        spec.gate.is_linearly_separable(),
        "{} needs two layers, run the xor demo instead",
        spec.gate.name()
    );

    let model = SigmoidNeuron;
    let data = spec.gate.dataset();
    let mut rng = rand::thread_rng();
    let init = ParamVector::random(model.param_count(), &mut rng);
    println!(
        "cost before: {:.6}",
        MseCost::cost(&model, &init, &data).expect("valid shape")
    );

    let outcome =
        numgrad::train(&model, init, &data, &spec.train_config()).expect("valid training inputs");

    for (name, value) in model.shape().iter().zip(outcome.params.values()) {
        println!("{name} = {value:.6}");
    }
    println!("cost after:  {:.6}", outcome.cost);

    let table = TruthTable::tabulate(&model, &outcome.params).expect("2-input model");
    println!("--- {} ---", spec.gate.name());
    print!("{table}");
}

fn parse_gate(name: &str) -> GateKind {
    match name.to_ascii_lowercase().as_str() {
        "or" => GateKind::Or,
        "and" => GateKind::And,
        "nand" => GateKind::Nand,
        "xor" | "xnor" => panic!("{name} needs two layers, run the xor demo instead"),
        other => panic!("unknown gate: {other} (expected or / and / nand)"),
    }
}
