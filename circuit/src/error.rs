use alloc::string::String;

use thiserror::Error;

use crate::WireId;

/// Errors raised while assigning or replaying a witness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CircuitError {
    #[error("wire {0} does not exist in this circuit")]
    InvalidWireId(WireId),

    #[error("wire {0} was read before a value was assigned to it")]
    InputNotSet(WireId),

    #[error("wire {0} was assigned two different values")]
    WireSetTwice(WireId),

    /// A boolean gate received an operand outside of `{0, 1}`.
    #[error("gate {gate} expects boolean operands, got {value}")]
    NotBoolean { gate: usize, value: String },

    /// An equality assertion does not hold for the replayed witness.
    #[error("gate {gate} asserts {lhs} == {rhs}, which does not hold")]
    ConstraintViolated {
        gate: usize,
        lhs: String,
        rhs: String,
    },

    #[error("expected {expected} {kind} input values, received {actual}")]
    InputCount {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type CircuitResult<T> = core::result::Result<T, CircuitError>;
