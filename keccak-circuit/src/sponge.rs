use core::array;

use p3_field::Field;
use tracing::{debug, instrument};
use zkc_circuit::{CircuitBuilder, Target};

use crate::{DIGEST_BITS, KeccakState, RATE_BITS, keccak_f};

/// Absorb `input` into a fresh sponge and squeeze the 256 digest bits.
///
/// Full 1088-bit blocks are absorbed and permuted one after another. The remaining
/// `0 <= r < 1088` bits are XORed into the start of the rate and the block is closed with
/// pad10*1, so an input whose length is a multiple of the rate (including the empty input) still
/// gets a full padding block. Since the digest fits in the rate, no extra squeeze is needed.
#[instrument(name = "absorb Keccak-256 input", skip_all, fields(input_bits = input.len()))]
pub fn keccak256_digest<F: Field>(
    builder: &mut CircuitBuilder<F>,
    input: &[Target<F>],
) -> [Target<F>; DIGEST_BITS] {
    let mut state = KeccakState::new();

    let mut blocks = input.chunks_exact(RATE_BITS);
    for (index, block) in blocks.by_ref().enumerate() {
        debug!(block = index, "absorbing full block");
        absorb(builder, &mut state, block);
        keccak_f(builder, &mut state);
    }

    let remainder = blocks.remainder();
    debug!(remaining_bits = remainder.len(), "absorbing final block");
    absorb(builder, &mut state, remainder);
    pad_and_permute(builder, &mut state, remainder.len());

    array::from_fn(|i| state[i])
}

/// XOR `block` into the first `block.len()` bits of the rate.
fn absorb<F: Field>(
    builder: &mut CircuitBuilder<F>,
    state: &mut KeccakState<F>,
    block: &[Target<F>],
) {
    debug_assert!(block.len() <= RATE_BITS);
    for (i, &bit) in block.iter().enumerate() {
        state[i] = builder.xor(state[i], bit);
    }
}

/// Apply pad10*1 after `remaining` absorbed bits and run the final permutation(s).
///
/// A one is XORed in right after the message and another at the last bit of the rate. When only
/// one bit of the rate is left (`remaining == RATE_BITS - 1`) both ones cannot share the block:
/// the first closes the current block, and the second goes into an otherwise empty extra block.
fn pad_and_permute<F: Field>(
    builder: &mut CircuitBuilder<F>,
    state: &mut KeccakState<F>,
    remaining: usize,
) {
    state[remaining] = builder.xor(state[remaining], Target::ONE);
    if remaining == RATE_BITS - 1 {
        debug!("padding spills into an extra block");
        keccak_f(builder, state);
    }
    state[RATE_BITS - 1] = builder.xor(state[RATE_BITS - 1], Target::ONE);
    keccak_f(builder, state);
}
