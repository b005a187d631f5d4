use alloc::vec;
use alloc::vec::Vec;

use p3_field::Field;

use crate::{CircuitError, CircuitResult, Target, WireId};

/// A (partial) assignment of values to the wires of one circuit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness<F> {
    wires: Vec<Option<F>>,
}

impl<F: Field> Witness<F> {
    pub fn new(num_wires: usize) -> Self {
        Self {
            wires: vec![None; num_wires],
        }
    }

    pub fn num_wires(&self) -> usize {
        self.wires.len()
    }

    pub fn num_assigned(&self) -> usize {
        self.wires.iter().filter(|value| value.is_some()).count()
    }

    pub fn get_wire_value(&self, id: WireId) -> CircuitResult<Option<F>> {
        self.wires
            .get(id)
            .copied()
            .ok_or(CircuitError::InvalidWireId(id))
    }

    /// Assign `value` to wire `id`.
    ///
    /// Re-assigning the value a wire already holds is accepted; assigning a different one is not.
    pub fn set_wire_value(&mut self, id: WireId, value: F) -> CircuitResult<()> {
        let slot = self
            .wires
            .get_mut(id)
            .ok_or(CircuitError::InvalidWireId(id))?;
        match slot {
            Some(previous) if *previous != value => Err(CircuitError::WireSetTwice(id)),
            Some(_) => Ok(()),
            None => {
                *slot = Some(value);
                Ok(())
            }
        }
    }

    /// Resolve a target to its value, failing if it names an unassigned wire.
    #[inline]
    pub fn read(&self, target: Target<F>) -> CircuitResult<F> {
        match target {
            Target::Constant(value) => Ok(value),
            Target::Wire(id) => self
                .get_wire_value(id)?
                .ok_or(CircuitError::InputNotSet(id)),
        }
    }

    /// Resolve a target that is expected to carry a boolean value.
    ///
    /// Returns `None` when the value lies outside of `{0, 1}`.
    pub fn read_bool(&self, target: Target<F>) -> CircuitResult<Option<bool>> {
        let value = self.read(target)?;
        Ok(if value == F::ZERO {
            Some(false)
        } else if value == F::ONE {
            Some(true)
        } else {
            None
        })
    }
}
