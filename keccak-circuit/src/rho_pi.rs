use core::array;

use p3_field::Field;

use crate::{KeccakState, LANE_BITS, PI, RHO, lane_index};

/// ρ and π together, as one walk over the 24-lane cycle of π.
///
/// The lane carried from the previous position is rotated and written into the next position, and
/// the lane it displaces is carried on. Lane (0, 0) is left alone. Only wiring changes, so no
/// gates are emitted.
pub(crate) fn rho_pi<F: Field>(state: &mut KeccakState<F>) {
    let mut current = state.lane_at(lane_index(1, 0));
    for (&dest, &offset) in PI.iter().zip(RHO.iter()) {
        let displaced = state.lane_at(dest);
        state.set_lane_at(dest, rotate_left(current, offset));
        current = displaced;
    }
}

#[inline]
fn rotate_left<T: Copy>(lane: [T; LANE_BITS], offset: usize) -> [T; LANE_BITS] {
    array::from_fn(|z| lane[(z + LANE_BITS - offset) % LANE_BITS])
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::test_utils::eval_on_state;

    /// Separate ρ (rotation by triangular numbers along the walk) and π (lane transposition).
    fn rho_then_pi_native(mut a: [u64; 25]) -> [u64; 25] {
        let (mut x, mut y) = (1, 0);
        for t in 0..24 {
            let offset = ((t + 1) * (t + 2) / 2) % 64;
            a[x + 5 * y] = a[x + 5 * y].rotate_left(offset as u32);
            (x, y) = (y, (2 * x + 3 * y) % 5);
        }

        let mut b = [0; 25];
        for y in 0..5 {
            for x in 0..5 {
                b[y + 5 * ((2 * x + 3 * y) % 5)] = a[x + 5 * y];
            }
        }
        b
    }

    #[test]
    fn test_rho_pi_matches_separate_steps() {
        let mut rng = SmallRng::seed_from_u64(2);
        for _ in 0..3 {
            let input: [u64; 25] = array::from_fn(|_| rng.random());
            let output = eval_on_state(|_, state| rho_pi(state), input);
            assert_eq!(output, rho_then_pi_native(input));
            assert_eq!(output[0], input[0]);
        }
    }

    #[test]
    fn test_rotate_left() {
        let lane: [usize; LANE_BITS] = array::from_fn(|z| z);
        let rotated = rotate_left(lane, 3);
        // Bit z of the result is bit z - 3 of the input.
        assert_eq!(rotated[3], 0);
        assert_eq!(rotated[0], 61);
    }
}
