use alloc::boxed::Box;
use core::array;
use core::ops::{Index, IndexMut};

use p3_field::Field;
use zkc_circuit::Target;

use crate::{LANE_BITS, STATE_BITS};

/// Flat position of lane `(x, y)` among the 25 lanes.
#[inline]
pub const fn lane_index(x: usize, y: usize) -> usize {
    x + 5 * y
}

/// Flat position of bit `z` of lane `(x, y)` in the 1600-bit state.
#[inline]
pub const fn bit_index(x: usize, y: usize, z: usize) -> usize {
    lane_index(x, y) * LANE_BITS + z
}

/// The Keccak-f[1600] state as 1600 boolean targets, laid out lane by lane.
///
/// The length never changes; steps of the permutation only replace entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeccakState<F> {
    bits: Box<[Target<F>; STATE_BITS]>,
}

impl<F: Field> Default for KeccakState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field> KeccakState<F> {
    /// The all-zero state, made entirely of constants.
    pub fn new() -> Self {
        Self {
            bits: Box::new([Target::ZERO; STATE_BITS]),
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Target<F> {
        self.bits[bit_index(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: Target<F>) {
        self.bits[bit_index(x, y, z)] = value;
    }

    pub fn lane(&self, x: usize, y: usize) -> [Target<F>; LANE_BITS] {
        self.lane_at(lane_index(x, y))
    }

    /// The 64 bits of the lane at flat position `index`.
    pub fn lane_at(&self, index: usize) -> [Target<F>; LANE_BITS] {
        array::from_fn(|z| self.bits[index * LANE_BITS + z])
    }

    pub fn set_lane_at(&mut self, index: usize, lane: [Target<F>; LANE_BITS]) {
        self.bits[index * LANE_BITS..(index + 1) * LANE_BITS].copy_from_slice(&lane);
    }

    pub fn bits(&self) -> &[Target<F>; STATE_BITS] {
        &self.bits
    }
}

impl<F> Index<usize> for KeccakState<F> {
    type Output = Target<F>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bits[index]
    }
}

impl<F> IndexMut<usize> for KeccakState<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.bits[index]
    }
}
