//! A Keccak-256 circuit built only from binary XOR and AND gates over boolean signals.
//!
//! The 1600-bit Keccak-f state is held bit-sliced, one target per bit, and every loop bound and
//! table lookup is fixed when the circuit is built; nothing depends on witness values.

#![no_std]

extern crate alloc;

mod chi;
mod circuit;
mod constants;
mod error;
mod generation;
mod iota;
mod permutation;
mod rho_pi;
mod sponge;
mod state;
mod theta;

pub use circuit::*;
pub use constants::*;
pub use error::*;
pub use permutation::*;
pub use sponge::*;
pub use state::*;

pub const NUM_ROUNDS: usize = 24;
pub const LANE_BITS: usize = 64;
pub const NUM_LANES: usize = 25;
pub const STATE_BITS: usize = NUM_LANES * LANE_BITS;
pub const RATE_BITS: usize = 1088;
pub const DIGEST_BITS: usize = 256;
