use core::fmt;

use p3_field::Field;

/// Index of a wire inside a single circuit.
pub type WireId = usize;

/// An operand of a gate: either a wire whose value is part of the witness, or a constant that is
/// fixed when the circuit is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target<F> {
    Wire(WireId),
    Constant(F),
}

impl<F: Field> Target<F> {
    pub const ZERO: Self = Self::Constant(F::ZERO);
    pub const ONE: Self = Self::Constant(F::ONE);

    #[inline]
    pub const fn constant(value: F) -> Self {
        Self::Constant(value)
    }

    #[inline]
    pub fn from_bool(bit: bool) -> Self {
        Self::Constant(F::from_bool(bit))
    }

    #[inline]
    pub const fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }
}

impl<F> From<WireId> for Target<F> {
    fn from(id: WireId) -> Self {
        Self::Wire(id)
    }
}

impl<F: fmt::Display> fmt::Display for Target<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wire(id) => write!(f, "w{id}"),
            Self::Constant(value) => write!(f, "{value}"),
        }
    }
}
