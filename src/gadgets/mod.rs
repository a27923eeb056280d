//! Circuits assembled purely through the public [`crate::Circuit`] API.

pub mod basic;
pub mod half_adder;

pub use basic::xor;
pub use half_adder::build_half_adder;
