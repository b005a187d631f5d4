use p3_baby_bear::BabyBear;
use p3_field::{Field, PrimeCharacteristicRing};
use p3_goldilocks::Goldilocks;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use zkc_circuit::{CircuitBuilder, CircuitError, Target, Visibility};
use zkc_polynomial::{PolynomialError, PolynomialEval, PolynomialEvalCircuit};

fn one_plus_x<F: Field>() -> PolynomialEval<F> {
    PolynomialEval::new(vec![F::ONE, F::ONE]).unwrap()
}

#[test]
fn test_one_plus_x() {
    let instance = PolynomialEvalCircuit::new(1)
        .build(&one_plus_x::<BabyBear>())
        .unwrap();
    instance.assign(&[BabyBear::ONE], &[BabyBear::TWO]).unwrap();
}

#[test]
fn test_one_plus_x_private_input() {
    let instance = PolynomialEvalCircuit::new(1)
        .with_input_visibility(Visibility::Private)
        .build(&one_plus_x::<BabyBear>())
        .unwrap();
    let circuit = instance.circuit();
    assert_eq!(circuit.private_inputs(), instance.inputs());
    assert_eq!(circuit.public_inputs(), instance.outputs());

    // x stays hidden, only P(x) is public.
    circuit
        .check(&[BabyBear::new(43)], &[BabyBear::new(42)])
        .unwrap();
    assert!(matches!(
        circuit.check(&[BabyBear::new(42)], &[BabyBear::new(42)]),
        Err(CircuitError::ConstraintViolated { .. })
    ));
}

#[test]
fn test_wrong_value_rejected() {
    let instance = PolynomialEvalCircuit::new(1)
        .build(&one_plus_x::<Goldilocks>())
        .unwrap();
    assert!(matches!(
        instance.assign(&[Goldilocks::ONE], &[Goldilocks::ONE]),
        Err(PolynomialError::Circuit(
            CircuitError::ConstraintViolated { .. }
        ))
    ));
}

#[test]
fn test_random_polynomial_matches_native() {
    let mut rng = SmallRng::seed_from_u64(5);
    let coefficients: Vec<Goldilocks> = (0..8)
        .map(|_| Goldilocks::from_u64(rng.random()))
        .collect();
    let poly = PolynomialEval::new(coefficients).unwrap();

    let points: Vec<Goldilocks> = (0..4)
        .map(|_| Goldilocks::from_u64(rng.random()))
        .collect();
    let values: Vec<Goldilocks> = points.iter().map(|&x| poly.eval_native(x)).collect();

    let instance = PolynomialEvalCircuit::new(points.len()).build(&poly).unwrap();
    let witness = instance.assign(&points, &values).unwrap();
    assert_eq!(witness.num_assigned(), instance.circuit().num_wires());

    let mut wrong = values.clone();
    wrong[2] += Goldilocks::ONE;
    assert!(instance.assign(&points, &wrong).is_err());
}

#[test]
fn test_assign_checks_lengths() {
    let instance = PolynomialEvalCircuit::new(2)
        .build(&one_plus_x::<BabyBear>())
        .unwrap();
    assert_eq!(
        instance.assign(&[BabyBear::ONE; 2], &[BabyBear::TWO]),
        Err(PolynomialError::LengthMismatch {
            inputs: 2,
            outputs: 1
        })
    );
    assert_eq!(
        instance.assign(&[BabyBear::ONE], &[BabyBear::TWO]),
        Err(PolynomialError::PointCount {
            expected: 2,
            actual: 1
        })
    );
}

#[test]
fn test_define_with_constant_points() {
    // Constant points fold completely; only the assertions remain.
    let poly = one_plus_x::<BabyBear>();
    let mut builder = CircuitBuilder::new();
    let output = Target::from(builder.add_input(Visibility::Public));
    poly.define(&mut builder, &[Target::constant(BabyBear::new(6))], &[output])
        .unwrap();
    assert_eq!(builder.num_gates(), 1);

    let circuit = builder.build();
    circuit.check(&[BabyBear::new(7)], &[]).unwrap();
}
