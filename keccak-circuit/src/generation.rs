use p3_field::Field;
use tracing::instrument;
use zkc_circuit::utils::bytes_to_bits_le;
use zkc_circuit::{WireId, Witness};

use crate::{DIGEST_BITS, Keccak256Instance, KeccakCircuitError, KeccakCircuitResult};

impl<F: Field> Keccak256Instance<F> {
    /// Assign a message and a claimed digest, both as little-endian bits, and replay the circuit.
    ///
    /// The returned witness is complete. Any unsatisfied gate is reported as
    /// [`KeccakCircuitError::Circuit`].
    #[instrument(
        name = "generate Keccak-256 witness",
        skip_all,
        fields(input_bits = input_bits.len())
    )]
    pub fn assign(
        &self,
        input_bits: &[bool],
        digest_bits: &[bool],
    ) -> KeccakCircuitResult<Witness<F>> {
        if input_bits.len() != self.input.len() {
            return Err(KeccakCircuitError::InputLength {
                expected: self.input.len(),
                actual: input_bits.len(),
            });
        }
        if digest_bits.len() != DIGEST_BITS {
            return Err(KeccakCircuitError::OutputLength {
                actual: digest_bits.len(),
            });
        }

        let mut witness = self.circuit.new_witness();
        set_bits(&mut witness, &self.input, input_bits)?;
        set_bits(&mut witness, &self.output, digest_bits)?;
        self.circuit.generate(&mut witness)?;
        Ok(witness)
    }

    /// Check that `digest_bits` is the Keccak-256 digest of `input_bits`.
    pub fn verify(&self, input_bits: &[bool], digest_bits: &[bool]) -> KeccakCircuitResult<()> {
        self.assign(input_bits, digest_bits).map(|_| ())
    }

    /// Byte-level variant of [`Self::verify`].
    pub fn verify_bytes(&self, message: &[u8], digest: &[u8; 32]) -> KeccakCircuitResult<()> {
        self.verify(&bytes_to_bits_le(message), &bytes_to_bits_le(digest))
    }
}

fn set_bits<F: Field>(
    witness: &mut Witness<F>,
    wires: &[WireId],
    bits: &[bool],
) -> KeccakCircuitResult<()> {
    for (&wire, &bit) in wires.iter().zip(bits) {
        witness.set_wire_value(wire, F::from_bool(bit))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use p3_goldilocks::Goldilocks;

    use super::*;
    use crate::Keccak256Circuit;

    #[test]
    fn test_length_checks() {
        let instance = Keccak256Circuit::new(16).build::<Goldilocks>().unwrap();
        assert_eq!(
            instance.verify(&[false; 15], &[false; DIGEST_BITS]),
            Err(KeccakCircuitError::InputLength {
                expected: 16,
                actual: 15
            })
        );
        assert_eq!(
            instance.verify(&[false; 16], &[false; 255]),
            Err(KeccakCircuitError::OutputLength { actual: 255 })
        );
    }

    #[test]
    fn test_witness_is_complete() {
        // Keccak-256("abc")
        let digest = hex_literal::hex!(
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
        let instance = Keccak256Circuit::for_message(3).build::<Goldilocks>().unwrap();
        let witness = instance
            .assign(&bytes_to_bits_le(b"abc"), &bytes_to_bits_le(&digest))
            .unwrap();
        assert_eq!(witness.num_assigned(), instance.circuit().num_wires());
    }
}
