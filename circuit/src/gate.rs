use alloc::string::ToString;

use p3_field::Field;

use crate::utils::{is_bool, xor};
use crate::{CircuitError, CircuitResult, Target, WireId, Witness};

/// The operation performed by a gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GateKind {
    Xor,
    And,
    Add,
    Mul,
    AssertEq,
}

/// A single gate of a circuit.
///
/// Every gate reads two operands. All gates except `AssertEq` write a fresh output wire which no
/// other gate writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gate<F> {
    /// `output = lhs ^ rhs`, for boolean operands.
    Xor {
        lhs: Target<F>,
        rhs: Target<F>,
        output: WireId,
    },
    /// `output = lhs & rhs`, for boolean operands.
    And {
        lhs: Target<F>,
        rhs: Target<F>,
        output: WireId,
    },
    Add {
        lhs: Target<F>,
        rhs: Target<F>,
        output: WireId,
    },
    Mul {
        lhs: Target<F>,
        rhs: Target<F>,
        output: WireId,
    },
    AssertEq {
        lhs: Target<F>,
        rhs: Target<F>,
    },
}

const BINOP_N_INPUTS: usize = 2;

impl<F: Field> Gate<F> {
    pub const fn kind(&self) -> GateKind {
        match self {
            Self::Xor { .. } => GateKind::Xor,
            Self::And { .. } => GateKind::And,
            Self::Add { .. } => GateKind::Add,
            Self::Mul { .. } => GateKind::Mul,
            Self::AssertEq { .. } => GateKind::AssertEq,
        }
    }

    pub const fn n_inputs(&self) -> usize {
        BINOP_N_INPUTS
    }

    pub const fn n_outputs(&self) -> usize {
        match self {
            Self::AssertEq { .. } => 0,
            _ => 1,
        }
    }

    pub const fn inputs(&self) -> [Target<F>; BINOP_N_INPUTS] {
        match self {
            Self::Xor { lhs, rhs, .. }
            | Self::And { lhs, rhs, .. }
            | Self::Add { lhs, rhs, .. }
            | Self::Mul { lhs, rhs, .. }
            | Self::AssertEq { lhs, rhs } => [*lhs, *rhs],
        }
    }

    pub const fn output(&self) -> Option<WireId> {
        match self {
            Self::Xor { output, .. }
            | Self::And { output, .. }
            | Self::Add { output, .. }
            | Self::Mul { output, .. } => Some(*output),
            Self::AssertEq { .. } => None,
        }
    }

    /// Evaluate this gate against `witness`, writing its output wire.
    ///
    /// `index` is the position of the gate in its circuit and is only used for error reporting.
    pub fn generate(&self, index: usize, witness: &mut Witness<F>) -> CircuitResult<()> {
        match *self {
            Self::Xor { lhs, rhs, output } => {
                let x = read_boolean(witness, index, lhs)?;
                let y = read_boolean(witness, index, rhs)?;
                witness.set_wire_value(output, xor(x, y))
            }
            Self::And { lhs, rhs, output } => {
                let x = read_boolean(witness, index, lhs)?;
                let y = read_boolean(witness, index, rhs)?;
                witness.set_wire_value(output, x * y)
            }
            Self::Add { lhs, rhs, output } => {
                let res = witness.read(lhs)? + witness.read(rhs)?;
                witness.set_wire_value(output, res)
            }
            Self::Mul { lhs, rhs, output } => {
                let res = witness.read(lhs)? * witness.read(rhs)?;
                witness.set_wire_value(output, res)
            }
            Self::AssertEq { lhs, rhs } => {
                let x = witness.read(lhs)?;
                let y = witness.read(rhs)?;
                if x == y {
                    Ok(())
                } else {
                    Err(CircuitError::ConstraintViolated {
                        gate: index,
                        lhs: x.to_string(),
                        rhs: y.to_string(),
                    })
                }
            }
        }
    }
}

fn read_boolean<F: Field>(
    witness: &Witness<F>,
    gate: usize,
    target: Target<F>,
) -> CircuitResult<F> {
    let value = witness.read(target)?;
    if is_bool(value) {
        Ok(value)
    } else {
        Err(CircuitError::NotBoolean {
            gate,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use p3_baby_bear::BabyBear;
    use p3_field::PrimeCharacteristicRing;

    use super::*;

    type F = BabyBear;

    fn witness_with(values: &[F]) -> Witness<F> {
        let mut witness = Witness::new(values.len() + 1);
        for (id, &value) in values.iter().enumerate() {
            witness.set_wire_value(id, value).unwrap();
        }
        witness
    }

    #[test]
    fn test_boolean_truth_tables() {
        for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
            let values = [F::from_bool(a), F::from_bool(b)];
            let output = values.len();

            let mut witness = witness_with(&values);
            let xor_gate = Gate::Xor {
                lhs: Target::Wire(0),
                rhs: Target::Wire(1),
                output,
            };
            xor_gate.generate(0, &mut witness).unwrap();
            assert_eq!(witness.read_bool(Target::Wire(output)), Ok(Some(a ^ b)));

            let mut witness = witness_with(&values);
            let and_gate = Gate::And {
                lhs: Target::Wire(0),
                rhs: Target::Wire(1),
                output,
            };
            and_gate.generate(0, &mut witness).unwrap();
            assert_eq!(witness.read_bool(Target::Wire(output)), Ok(Some(a & b)));
        }
    }

    #[test]
    fn test_xor_rejects_non_boolean() {
        let mut witness = witness_with(&[F::TWO]);
        let gate = Gate::Xor {
            lhs: Target::Wire(0),
            rhs: Target::ONE,
            output: 1,
        };
        assert!(matches!(
            gate.generate(4, &mut witness),
            Err(CircuitError::NotBoolean { gate: 4, .. })
        ));
    }

    #[test]
    fn test_field_gates() {
        let mut witness = witness_with(&[F::new(5), F::new(3)]);
        let add = Gate::Add {
            lhs: Target::Wire(0),
            rhs: Target::Wire(1),
            output: 2,
        };
        add.generate(0, &mut witness).unwrap();
        assert_eq!(witness.read(Target::Wire(2)), Ok(F::new(8)));

        let mut witness = witness_with(&[F::new(5), F::new(3)]);
        let mul = Gate::Mul {
            lhs: Target::Wire(0),
            rhs: Target::Constant(F::new(4)),
            output: 2,
        };
        mul.generate(0, &mut witness).unwrap();
        assert_eq!(witness.read(Target::Wire(2)), Ok(F::new(20)));
        assert_eq!(mul.kind(), GateKind::Mul);
        assert_eq!(mul.output(), Some(2));
    }

    #[test]
    fn test_assert_eq() {
        let mut witness = witness_with(&[F::new(9)]);
        let holds = Gate::AssertEq {
            lhs: Target::Wire(0),
            rhs: Target::Constant(F::new(9)),
        };
        holds.generate(0, &mut witness).unwrap();
        assert_eq!(holds.n_outputs(), 0);

        let fails = Gate::AssertEq {
            lhs: Target::Wire(0),
            rhs: Target::Constant(F::new(10)),
        };
        assert!(matches!(
            fails.generate(1, &mut witness),
            Err(CircuitError::ConstraintViolated { gate: 1, .. })
        ));
    }

    #[test]
    fn test_unassigned_operand() {
        let mut witness = Witness::<F>::new(2);
        let gate = Gate::Add {
            lhs: Target::Wire(0),
            rhs: Target::ONE,
            output: 1,
        };
        assert_eq!(
            gate.generate(0, &mut witness),
            Err(CircuitError::InputNotSet(0))
        );
    }
}
