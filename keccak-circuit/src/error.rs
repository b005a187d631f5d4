use thiserror::Error;
use zkc_circuit::CircuitError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeccakCircuitError {
    /// The claimed digest does not have exactly [`DIGEST_BITS`](crate::DIGEST_BITS) bits.
    #[error("expected a 256-bit digest, received {actual} bits")]
    OutputLength { actual: usize },

    /// The witness input does not match the input length the circuit was built for.
    #[error("circuit was built for {expected} input bits, received {actual}")]
    InputLength { expected: usize, actual: usize },

    #[error(transparent)]
    Circuit(#[from] CircuitError),
}

pub type KeccakCircuitResult<T> = core::result::Result<T, KeccakCircuitError>;
