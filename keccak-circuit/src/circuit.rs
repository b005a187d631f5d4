use alloc::vec::Vec;

use p3_field::Field;
use tracing::instrument;
use zkc_circuit::{Circuit, CircuitBuilder, Target, Visibility, WireId};

use crate::{DIGEST_BITS, KeccakCircuitError, KeccakCircuitResult, keccak256_digest};

/// Constrain `output` to be the Keccak-256 digest of `input`.
///
/// Both slices hold boolean targets, least-significant bit of each byte first. A claimed digest
/// of the wrong length is rejected before anything is added to `builder`.
pub fn keccak256<F: Field>(
    builder: &mut CircuitBuilder<F>,
    input: &[Target<F>],
    output: &[Target<F>],
) -> KeccakCircuitResult<()> {
    if output.len() != DIGEST_BITS {
        return Err(KeccakCircuitError::OutputLength {
            actual: output.len(),
        });
    }

    let digest = keccak256_digest(builder, input);
    for (&computed, &claimed) in digest.iter().zip(output) {
        builder.assert_eq(computed, claimed);
    }
    Ok(())
}

/// Parameters of a standalone Keccak-256 circuit: the message length in bits and whether the
/// message is revealed. The 256 digest bits are always public.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keccak256Circuit {
    pub input_bits: usize,
    pub input_visibility: Visibility,
}

impl Keccak256Circuit {
    pub const fn new(input_bits: usize) -> Self {
        Self {
            input_bits,
            input_visibility: Visibility::Public,
        }
    }

    /// A circuit sized for messages of `len` bytes.
    pub const fn for_message(len: usize) -> Self {
        Self::new(len * 8)
    }

    pub const fn with_input_visibility(mut self, visibility: Visibility) -> Self {
        self.input_visibility = visibility;
        self
    }

    #[instrument(name = "build Keccak-256 circuit", skip_all, fields(input_bits = self.input_bits))]
    pub fn build<F: Field>(&self) -> KeccakCircuitResult<Keccak256Instance<F>> {
        let mut builder = CircuitBuilder::new();
        let input = builder.add_inputs(self.input_bits, self.input_visibility);
        let output = builder.add_inputs(DIGEST_BITS, Visibility::Public);

        let input_targets: Vec<Target<F>> = input.iter().copied().map(Target::from).collect();
        let output_targets: Vec<Target<F>> = output.iter().copied().map(Target::from).collect();
        keccak256(&mut builder, &input_targets, &output_targets)?;

        Ok(Keccak256Instance {
            circuit: builder.build(),
            input,
            output,
        })
    }
}

/// A built Keccak-256 circuit together with the wires of its message and digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keccak256Instance<F> {
    pub(crate) circuit: Circuit<F>,
    pub(crate) input: Vec<WireId>,
    pub(crate) output: Vec<WireId>,
}

impl<F> Keccak256Instance<F> {
    pub const fn circuit(&self) -> &Circuit<F> {
        &self.circuit
    }

    pub fn input(&self) -> &[WireId] {
        &self.input
    }

    pub fn output(&self) -> &[WireId] {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use p3_baby_bear::BabyBear;
    use zkc_circuit::GateKind;

    use super::*;

    #[test]
    fn test_wrong_output_length_adds_nothing() {
        for len in [0, 255, 257] {
            let mut builder = CircuitBuilder::<BabyBear>::new();
            let input: Vec<Target<BabyBear>> = builder
                .add_inputs(8, Visibility::Public)
                .into_iter()
                .map(Target::from)
                .collect();
            let output = builder.add_inputs(len, Visibility::Public);
            let output: Vec<Target<BabyBear>> = output.into_iter().map(Target::from).collect();

            let result = keccak256(&mut builder, &input, &output);
            assert_eq!(result, Err(KeccakCircuitError::OutputLength { actual: len }));
            assert_eq!(builder.num_gates(), 0);
        }
    }

    #[test]
    fn test_instance_layout() {
        let instance = Keccak256Circuit::for_message(3)
            .with_input_visibility(Visibility::Private)
            .build::<BabyBear>()
            .unwrap();
        let circuit = instance.circuit();

        assert_eq!(instance.input().len(), 24);
        assert_eq!(instance.output().len(), DIGEST_BITS);
        assert_eq!(circuit.private_inputs(), instance.input());
        assert_eq!(circuit.public_inputs(), instance.output());

        // The circuit ends with one assertion per digest bit.
        let tail = &circuit.gates()[circuit.gates().len() - DIGEST_BITS..];
        assert!(tail.iter().all(|gate| gate.kind() == GateKind::AssertEq));
        assert_eq!(circuit.stats().num_assert_eq, DIGEST_BITS);
        assert_eq!(circuit.stats().num_add + circuit.stats().num_mul, 0);
    }
}
