use p3_field::Field;
use zkc_circuit::{CircuitBuilder, Target};

use crate::{KeccakState, LANE_BITS, rc_value_bit};

/// ι: XOR the round constant into lane (0, 0). The constant is folded into the wiring, so only its
/// set bits produce gates.
pub(crate) fn iota<F: Field>(
    builder: &mut CircuitBuilder<F>,
    state: &mut KeccakState<F>,
    round: usize,
) {
    for z in 0..LANE_BITS {
        let bit = builder.xor(state.get(0, 0, z), Target::from_bool(rc_value_bit(round, z)));
        state.set(0, 0, z, bit);
    }
}

#[cfg(test)]
mod tests {
    use core::array;

    use p3_baby_bear::BabyBear;
    use zkc_circuit::Visibility;

    use super::*;
    use crate::test_utils::eval_on_state;
    use crate::{NUM_ROUNDS, RC};

    #[test]
    fn test_iota_matches_native() {
        let input: [u64; 25] = array::from_fn(|i| (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        for round in 0..NUM_ROUNDS {
            let mut expected = input;
            expected[0] ^= RC[round];
            assert_eq!(
                eval_on_state(|builder, state| iota(builder, state, round), input),
                expected
            );
        }
    }

    #[test]
    fn test_iota_gates_follow_constant_weight() {
        for round in 0..NUM_ROUNDS {
            let mut builder = CircuitBuilder::<BabyBear>::new();
            let mut state = KeccakState::new();
            for z in 0..LANE_BITS {
                state.set(0, 0, z, Target::Wire(builder.add_input(Visibility::Private)));
            }
            iota(&mut builder, &mut state, round);
            assert_eq!(builder.num_gates(), RC[round].count_ones() as usize);
        }
    }
}
