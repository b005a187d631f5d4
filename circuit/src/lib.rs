//! A gate-level circuit builder over a prime field.
//!
//! Circuits are assembled from binary `XOR`/`AND` gates over boolean signals, field `ADD`/`MUL`
//! gates and equality assertions. The builder records a static gate graph; a [`Witness`] is then
//! replayed through that graph to decide whether an assignment of the inputs satisfies it.

#![no_std]

extern crate alloc;

mod builder;
mod error;
mod gate;
mod target;
pub mod utils;
mod witness;

pub use builder::*;
pub use error::*;
pub use gate::*;
pub use target::*;
pub use witness::*;
