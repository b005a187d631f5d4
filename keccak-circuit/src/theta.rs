use p3_field::Field;
use zkc_circuit::{CircuitBuilder, Target};

use crate::{KeccakState, LANE_BITS};

/// θ: XOR every bit with the parities of two neighbouring columns.
///
/// `A[x, y, z] ^= C[x - 1, z] ^ C[x + 1, z - 1]` where `C[x, z]` is the XOR of column `x`. The
/// combined term `D[x, z]` is computed once per column bit; all XORs are binary.
pub(crate) fn theta<F: Field>(builder: &mut CircuitBuilder<F>, state: &mut KeccakState<F>) {
    let mut c = [[Target::ZERO; LANE_BITS]; 5];
    for (x, column) in c.iter_mut().enumerate() {
        for (z, parity) in column.iter_mut().enumerate() {
            *parity = (1..5).fold(state.get(x, 0, z), |acc, y| {
                builder.xor(acc, state.get(x, y, z))
            });
        }
    }

    let mut d = [[Target::ZERO; LANE_BITS]; 5];
    for (x, column) in d.iter_mut().enumerate() {
        for (z, term) in column.iter_mut().enumerate() {
            *term = builder.xor(c[(x + 4) % 5][z], c[(x + 1) % 5][(z + 63) % 64]);
        }
    }

    for y in 0..5 {
        for x in 0..5 {
            for z in 0..LANE_BITS {
                let bit = builder.xor(state.get(x, y, z), d[x][z]);
                state.set(x, y, z, bit);
            }
        }
    }
}
