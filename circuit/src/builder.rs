use alloc::vec::Vec;
use core::fmt;

use p3_field::Field;
use tracing::{info, instrument};

use crate::utils::xor;
use crate::{CircuitError, CircuitResult, Gate, GateKind, Target, WireId, Witness};

/// Whether an input wire is exposed to the verifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// Records the gates of a circuit.
///
/// Every operation either folds to a constant target or emits exactly one gate whose output is a
/// fresh wire, so gates are kept in a topological order and can be replayed front to back.
#[derive(Clone, Debug)]
pub struct CircuitBuilder<F> {
    num_wires: usize,
    gates: Vec<Gate<F>>,
    public_inputs: Vec<WireId>,
    private_inputs: Vec<WireId>,
}

impl<F: Field> Default for CircuitBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field> CircuitBuilder<F> {
    pub const fn new() -> Self {
        Self {
            num_wires: 0,
            gates: Vec::new(),
            public_inputs: Vec::new(),
            private_inputs: Vec::new(),
        }
    }

    fn new_wire(&mut self) -> WireId {
        self.num_wires += 1;
        self.num_wires - 1
    }

    pub fn add_input(&mut self, visibility: Visibility) -> WireId {
        let wire = self.new_wire();
        match visibility {
            Visibility::Public => self.public_inputs.push(wire),
            Visibility::Private => self.private_inputs.push(wire),
        }
        wire
    }

    pub fn add_inputs(&mut self, n: usize, visibility: Visibility) -> Vec<WireId> {
        (0..n).map(|_| self.add_input(visibility)).collect()
    }

    pub const fn num_wires(&self) -> usize {
        self.num_wires
    }

    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    fn push_binop(
        &mut self,
        make: fn(Target<F>, Target<F>, WireId) -> Gate<F>,
        lhs: Target<F>,
        rhs: Target<F>,
    ) -> Target<F> {
        let output = self.new_wire();
        self.gates.push(make(lhs, rhs, output));
        Target::Wire(output)
    }

    /// Boolean exclusive-or. Both operands must carry 0 or 1 in any satisfying witness.
    pub fn xor(&mut self, lhs: Target<F>, rhs: Target<F>) -> Target<F> {
        match (lhs, rhs) {
            (Target::Constant(x), Target::Constant(y)) => Target::Constant(xor(x, y)),
            (other, Target::Constant(c)) | (Target::Constant(c), other) if c == F::ZERO => other,
            _ => self.push_binop(|lhs, rhs, output| Gate::Xor { lhs, rhs, output }, lhs, rhs),
        }
    }

    /// Boolean conjunction. Both operands must carry 0 or 1 in any satisfying witness.
    pub fn and(&mut self, lhs: Target<F>, rhs: Target<F>) -> Target<F> {
        match (lhs, rhs) {
            (Target::Constant(x), Target::Constant(y)) => Target::Constant(x * y),
            (_, Target::Constant(c)) | (Target::Constant(c), _) if c == F::ZERO => Target::ZERO,
            (other, Target::Constant(c)) | (Target::Constant(c), other) if c == F::ONE => other,
            _ => self.push_binop(|lhs, rhs, output| Gate::And { lhs, rhs, output }, lhs, rhs),
        }
    }

    pub fn add(&mut self, lhs: Target<F>, rhs: Target<F>) -> Target<F> {
        match (lhs, rhs) {
            (Target::Constant(x), Target::Constant(y)) => Target::Constant(x + y),
            (other, Target::Constant(c)) | (Target::Constant(c), other) if c == F::ZERO => other,
            _ => self.push_binop(|lhs, rhs, output| Gate::Add { lhs, rhs, output }, lhs, rhs),
        }
    }

    pub fn mul(&mut self, lhs: Target<F>, rhs: Target<F>) -> Target<F> {
        match (lhs, rhs) {
            (Target::Constant(x), Target::Constant(y)) => Target::Constant(x * y),
            (_, Target::Constant(c)) | (Target::Constant(c), _) if c == F::ZERO => Target::ZERO,
            (other, Target::Constant(c)) | (Target::Constant(c), other) if c == F::ONE => other,
            _ => self.push_binop(|lhs, rhs, output| Gate::Mul { lhs, rhs, output }, lhs, rhs),
        }
    }

    /// Constrain `lhs` and `rhs` to be equal. Always emits a gate, even for two constants.
    pub fn assert_eq(&mut self, lhs: Target<F>, rhs: Target<F>) {
        self.gates.push(Gate::AssertEq { lhs, rhs });
    }

    #[instrument(name = "finalize circuit", skip_all)]
    pub fn build(self) -> Circuit<F> {
        let circuit = Circuit {
            num_wires: self.num_wires,
            gates: self.gates,
            public_inputs: self.public_inputs,
            private_inputs: self.private_inputs,
        };
        info!(stats = %circuit.stats(), "circuit built");
        circuit
    }
}

/// A finished, immutable gate graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Circuit<F> {
    num_wires: usize,
    gates: Vec<Gate<F>>,
    public_inputs: Vec<WireId>,
    private_inputs: Vec<WireId>,
}

impl<F: Field> Circuit<F> {
    pub fn gates(&self) -> &[Gate<F>] {
        &self.gates
    }

    pub const fn num_wires(&self) -> usize {
        self.num_wires
    }

    pub fn public_inputs(&self) -> &[WireId] {
        &self.public_inputs
    }

    pub fn private_inputs(&self) -> &[WireId] {
        &self.private_inputs
    }

    pub fn stats(&self) -> CircuitStats {
        let mut stats = CircuitStats {
            num_wires: self.num_wires,
            num_public_inputs: self.public_inputs.len(),
            num_private_inputs: self.private_inputs.len(),
            ..Default::default()
        };
        for gate in &self.gates {
            match gate.kind() {
                GateKind::Xor => stats.num_xor += 1,
                GateKind::And => stats.num_and += 1,
                GateKind::Add => stats.num_add += 1,
                GateKind::Mul => stats.num_mul += 1,
                GateKind::AssertEq => stats.num_assert_eq += 1,
            }
        }
        stats
    }

    pub fn new_witness(&self) -> Witness<F> {
        Witness::new(self.num_wires)
    }

    /// Replay every gate against `witness`, filling in all derived wires.
    ///
    /// All input wires must already be assigned. Stops at the first gate that fails.
    #[instrument(name = "replay circuit", skip_all, fields(num_gates = self.gates.len()))]
    pub fn generate(&self, witness: &mut Witness<F>) -> CircuitResult<()> {
        for &wire in self.public_inputs.iter().chain(&self.private_inputs) {
            if witness.get_wire_value(wire)?.is_none() {
                return Err(CircuitError::InputNotSet(wire));
            }
        }
        self.gates
            .iter()
            .enumerate()
            .try_for_each(|(index, gate)| gate.generate(index, witness))
    }

    /// Assign the given input values in declaration order and replay the circuit.
    pub fn check(&self, public_values: &[F], private_values: &[F]) -> CircuitResult<Witness<F>> {
        check_count("public", self.public_inputs.len(), public_values.len())?;
        check_count("private", self.private_inputs.len(), private_values.len())?;

        let mut witness = self.new_witness();
        for (&wire, &value) in self.public_inputs.iter().zip(public_values) {
            witness.set_wire_value(wire, value)?;
        }
        for (&wire, &value) in self.private_inputs.iter().zip(private_values) {
            witness.set_wire_value(wire, value)?;
        }
        self.generate(&mut witness)?;
        Ok(witness)
    }
}

fn check_count(kind: &'static str, expected: usize, actual: usize) -> CircuitResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(CircuitError::InputCount {
            kind,
            expected,
            actual,
        })
    }
}

/// Wire and gate counts of a circuit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CircuitStats {
    pub num_wires: usize,
    pub num_public_inputs: usize,
    pub num_private_inputs: usize,
    pub num_xor: usize,
    pub num_and: usize,
    pub num_add: usize,
    pub num_mul: usize,
    pub num_assert_eq: usize,
}

impl CircuitStats {
    pub const fn num_gates(&self) -> usize {
        self.num_xor + self.num_and + self.num_add + self.num_mul + self.num_assert_eq
    }
}

impl fmt::Display for CircuitStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} wires ({} public, {} private inputs), {} gates: {} xor, {} and, {} add, {} mul, {} assert_eq",
            self.num_wires,
            self.num_public_inputs,
            self.num_private_inputs,
            self.num_gates(),
            self.num_xor,
            self.num_and,
            self.num_add,
            self.num_mul,
            self.num_assert_eq,
        )
    }
}
