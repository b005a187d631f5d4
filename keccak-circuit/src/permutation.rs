use p3_field::Field;
use tracing::instrument;
use zkc_circuit::CircuitBuilder;

use crate::chi::chi;
use crate::iota::iota;
use crate::rho_pi::rho_pi;
use crate::theta::theta;
use crate::{KeccakState, NUM_ROUNDS};

/// One round of Keccak-f[1600]: θ, ρ∘π, χ, then ι with the constant of `round`.
pub fn keccak_round<F: Field>(
    builder: &mut CircuitBuilder<F>,
    state: &mut KeccakState<F>,
    round: usize,
) {
    theta(builder, state);
    rho_pi(state);
    chi(builder, state);
    iota(builder, state, round);
}

/// The full Keccak-f[1600] permutation, all 24 rounds unrolled into the circuit.
#[instrument(name = "Keccak-f permutation", level = "debug", skip_all)]
pub fn keccak_f<F: Field>(builder: &mut CircuitBuilder<F>, state: &mut KeccakState<F>) {
    for round in 0..NUM_ROUNDS {
        keccak_round(builder, state, round);
    }
}
