use alloc::vec::Vec;

use p3_field::Field;
use tracing::instrument;
use zkc_circuit::{Circuit, CircuitBuilder, Target, Visibility, WireId, Witness};

use crate::{PolynomialError, PolynomialEval, PolynomialResult};

/// Shape of a standalone evaluation circuit: how many points are evaluated and whether the points
/// are revealed. Claimed values are always public.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolynomialEvalCircuit {
    pub num_points: usize,
    pub input_visibility: Visibility,
}

impl PolynomialEvalCircuit {
    pub const fn new(num_points: usize) -> Self {
        Self {
            num_points,
            input_visibility: Visibility::Public,
        }
    }

    pub const fn with_input_visibility(mut self, visibility: Visibility) -> Self {
        self.input_visibility = visibility;
        self
    }

    #[instrument(name = "build polynomial circuit", skip_all, fields(num_points = self.num_points))]
    pub fn build<F: Field>(
        &self,
        polynomial: &PolynomialEval<F>,
    ) -> PolynomialResult<PolynomialEvalInstance<F>> {
        let mut builder = CircuitBuilder::new();
        let inputs = builder.add_inputs(self.num_points, self.input_visibility);
        let outputs = builder.add_inputs(self.num_points, Visibility::Public);

        let input_targets: Vec<Target<F>> = inputs.iter().copied().map(Target::from).collect();
        let output_targets: Vec<Target<F>> = outputs.iter().copied().map(Target::from).collect();
        polynomial.define(&mut builder, &input_targets, &output_targets)?;

        Ok(PolynomialEvalInstance {
            circuit: builder.build(),
            inputs,
            outputs,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolynomialEvalInstance<F> {
    circuit: Circuit<F>,
    inputs: Vec<WireId>,
    outputs: Vec<WireId>,
}

impl<F: Field> PolynomialEvalInstance<F> {
    pub const fn circuit(&self) -> &Circuit<F> {
        &self.circuit
    }

    pub fn inputs(&self) -> &[WireId] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[WireId] {
        &self.outputs
    }

    /// Assign evaluation points and claimed values, then replay the circuit.
    pub fn assign(&self, points: &[F], values: &[F]) -> PolynomialResult<Witness<F>> {
        if points.len() != values.len() {
            return Err(PolynomialError::LengthMismatch {
                inputs: points.len(),
                outputs: values.len(),
            });
        }
        if points.len() != self.inputs.len() {
            return Err(PolynomialError::PointCount {
                expected: self.inputs.len(),
                actual: points.len(),
            });
        }

        let mut witness = self.circuit.new_witness();
        let wires = self.inputs.iter().zip(points).chain(self.outputs.iter().zip(values));
        for (&wire, &value) in wires {
            witness.set_wire_value(wire, value)?;
        }
        self.circuit.generate(&mut witness)?;
        Ok(witness)
    }
}
