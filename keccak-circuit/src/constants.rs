use crate::NUM_ROUNDS;

/// Number of lanes visited by the combined ρ∘π walk; lane (0, 0) is its only fixed point.
pub const RHO_PI_CYCLE_LEN: usize = 24;

/// Round constants XORed into lane (0, 0) by ι, one per round.
pub const RC: [u64; NUM_ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808A,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808B,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008A,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000A,
    0x0000_0000_8000_808B,
    0x8000_0000_0000_008B,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800A,
    0x8000_0000_8000_000A,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Left-rotation applied to the lane carried into `PI[i]` at step `i` of the ρ∘π walk.
pub const RHO: [usize; RHO_PI_CYCLE_LEN] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Flat lane indices (`x + 5y`) visited by the ρ∘π walk, which starts from lane (1, 0).
pub const PI: [usize; RHO_PI_CYCLE_LEN] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Bit `z` of the round constant for `round`.
#[inline]
pub const fn rc_value_bit(round: usize, z: usize) -> bool {
    (RC[round] >> z) & 1 == 1
}
