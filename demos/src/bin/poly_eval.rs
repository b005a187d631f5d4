use std::process::ExitCode;

use clap::Parser;
use p3_baby_bear::BabyBear;
use p3_field::Field;
use p3_goldilocks::Goldilocks;
use tracing::info;
use zkc_circuit::Visibility;
use zkc_demos::parsers::FieldOptions;
use zkc_demos::reports::{init_tracing, report_result};
use zkc_polynomial::{PolynomialEval, PolynomialEvalCircuit};

#[derive(Parser, Debug)]
#[command(version, about = "Evaluate a polynomial inside a circuit", long_about = None)]
struct Args {
    /// The field the circuit is built over.
    #[arg(short, long, ignore_case = true, value_enum, default_value_t = FieldOptions::BabyBear)]
    field: FieldOptions,

    /// Coefficients c_0, c_1, ..., c_n of P(X) = c_0 + c_1 X + ... + c_n X^n.
    #[arg(short, long, value_delimiter = ',', default_value = "1,1")]
    coefficients: Vec<u64>,

    /// Points to evaluate P at.
    #[arg(short, long, value_delimiter = ',', default_value = "1")]
    points: Vec<u64>,

    /// Keep the evaluation points private.
    #[arg(long)]
    private: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match args.field {
        FieldOptions::BabyBear => run::<BabyBear>(&args),
        FieldOptions::Goldilocks => run::<Goldilocks>(&args),
    }
}

fn run<F: Field>(args: &Args) -> ExitCode {
    let coefficients = args.coefficients.iter().map(|&c| F::from_u64(c)).collect();
    let polynomial = match PolynomialEval::new(coefficients) {
        Ok(polynomial) => polynomial,
        Err(e) => return report_result(Err(e), false),
    };
    let points: Vec<F> = args.points.iter().map(|&x| F::from_u64(x)).collect();
    let values: Vec<F> = points.iter().map(|&x| polynomial.eval_native(x)).collect();
    for (x, y) in points.iter().zip(&values) {
        println!("P({x}) = {y}");
    }

    let visibility = if args.private {
        Visibility::Private
    } else {
        Visibility::Public
    };
    let instance = match PolynomialEvalCircuit::new(points.len())
        .with_input_visibility(visibility)
        .build(&polynomial)
    {
        Ok(instance) => instance,
        Err(e) => return report_result(Err(e), false),
    };
    info!(stats = %instance.circuit().stats(), "circuit statistics");

    report_result(instance.assign(&points, &values).map(|_| ()), false)
}
