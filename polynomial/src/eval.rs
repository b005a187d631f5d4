use alloc::vec::Vec;

use p3_field::Field;
use tracing::{debug, instrument};
use zkc_circuit::{CircuitBuilder, Target};

use crate::{PolynomialError, PolynomialResult};

/// A polynomial with constant coefficients, lowest degree first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolynomialEval<F> {
    coefficients: Vec<F>,
}

impl<F: Field> PolynomialEval<F> {
    pub fn new(coefficients: Vec<F>) -> PolynomialResult<Self> {
        if coefficients.is_empty() {
            return Err(PolynomialError::EmptyPolynomial);
        }
        Ok(Self { coefficients })
    }

    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluate at `x` with the Horner scheme, one `mul` and one `add` per coefficient below the
    /// leading one. Multiplications by one and additions of zero fold away.
    pub fn eval(&self, builder: &mut CircuitBuilder<F>, x: Target<F>) -> Target<F> {
        let Some((&leading, rest)) = self.coefficients.split_last() else {
            return Target::ZERO;
        };
        rest.iter().rev().fold(Target::constant(leading), |acc, &c| {
            let scaled = builder.mul(acc, x);
            builder.add(scaled, Target::constant(c))
        })
    }

    pub fn eval_native(&self, x: F) -> F {
        self.coefficients
            .iter()
            .rev()
            .fold(F::ZERO, |acc, &c| acc * x + c)
    }

    /// Constrain `outputs[i] = P(inputs[i])` for every `i`.
    ///
    /// Fails without touching `builder` if the two slices differ in length.
    #[instrument(
        name = "define polynomial evaluations",
        skip_all,
        fields(degree = self.degree(), points = inputs.len())
    )]
    pub fn define(
        &self,
        builder: &mut CircuitBuilder<F>,
        inputs: &[Target<F>],
        outputs: &[Target<F>],
    ) -> PolynomialResult<()> {
        if inputs.len() != outputs.len() {
            return Err(PolynomialError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        for (&x, &y) in inputs.iter().zip(outputs) {
            let value = self.eval(builder, x);
            builder.assert_eq(value, y);
        }
        debug!(num_gates = builder.num_gates(), "polynomial evaluations defined");
        Ok(())
    }
}
