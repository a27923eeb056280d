pub mod gate;
pub mod gate_type;
pub mod signal;
pub mod snapshot;
pub mod wire;
