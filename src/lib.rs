pub mod circuit;
mod config;
mod core;
pub mod gadgets;
pub mod logging;
pub mod report;

pub use crate::core::{
    gate::{Gate, GateError},
    gate_type::{GateCount, GateType},
    signal::Signal,
    snapshot::Snapshot,
    wire::{Wire, WireError, WireId, Wires},
};

pub use circuit::{Circuit, CircuitError, RunReport};
pub use config::{DEFAULT_MAX_ITERATIONS, RunConfig};
pub use report::{HalfAdderRecord, HalfAdderReport, ReportError};
