use thiserror::Error;
use zkc_circuit::CircuitError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolynomialError {
    #[error("a polynomial needs at least one coefficient")]
    EmptyPolynomial,

    /// Evaluation points and claimed values must pair up one to one.
    #[error("{inputs} evaluation points but {outputs} claimed values")]
    LengthMismatch { inputs: usize, outputs: usize },

    #[error("circuit was built for {expected} evaluation points, received {actual}")]
    PointCount { expected: usize, actual: usize },

    #[error(transparent)]
    Circuit(#[from] CircuitError),
}

pub type PolynomialResult<T> = core::result::Result<T, PolynomialError>;
