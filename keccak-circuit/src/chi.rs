use core::array;

use p3_field::Field;
use zkc_circuit::{CircuitBuilder, Target};

use crate::{KeccakState, LANE_BITS};

/// χ: `A[x, y] ^= !A[x + 1, y] & A[x + 2, y]`, row by row.
///
/// The NOT is an XOR with the constant one, leaving χ as the only step with AND gates. Each row is
/// read in full before any of its lanes is overwritten.
pub(crate) fn chi<F: Field>(builder: &mut CircuitBuilder<F>, state: &mut KeccakState<F>) {
    for y in 0..5 {
        let row: [[Target<F>; LANE_BITS]; 5] = array::from_fn(|x| state.lane(x, y));
        for x in 0..5 {
            for z in 0..LANE_BITS {
                let not_next = builder.xor(row[(x + 1) % 5][z], Target::ONE);
                let term = builder.and(not_next, row[(x + 2) % 5][z]);
                let bit = builder.xor(row[x][z], term);
                state.set(x, y, z, bit);
            }
        }
    }
}
