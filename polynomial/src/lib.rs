//! Evaluation of a fixed polynomial `P(X) = c_0 + c_1 X + ... + c_n X^n` inside a circuit.
//!
//! The coefficients are baked into the circuit as constants; only the evaluation points and the
//! claimed values are wires.

#![no_std]

extern crate alloc;

mod circuit;
mod error;
mod eval;

pub use circuit::*;
pub use error::*;
pub use eval::*;
