use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub use crate::GateType;
use crate::{Signal, WireId, Wires, core::gate_type::MAX_ARITY};

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("Gate `{gate}` ({gate_type}) takes {expected} input(s), got {actual}")]
    Arity {
        gate: String,
        gate_type: GateType,
        expected: usize,
        actual: usize,
    },
}
pub type GateError = Error;

/// Gate description by wire names, as handed to [`crate::Circuit::attach_gate`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    pub id: String,
    pub inputs: Vec<String>,
    pub output: String,
    pub gate_type: GateType,
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}({}) -> {}",
            self.id,
            self.gate_type,
            self.inputs.iter().join(", "),
            self.output
        )
    }
}

impl Gate {
    /// Builds a gate of any type. The input count is checked on attachment.
    #[must_use]
    pub fn new<I, S>(gate_type: GateType, id: &str, inputs: I, output: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.to_owned(),
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: output.to_owned(),
            gate_type,
        }
    }

    #[must_use]
    pub fn not(id: &str, input: &str, output: &str) -> Self {
        Self::new(GateType::Not, id, [input], output)
    }

    #[must_use]
    pub fn and(id: &str, input_a: &str, input_b: &str, output: &str) -> Self {
        Self::new(GateType::And, id, [input_a, input_b], output)
    }

    #[must_use]
    pub fn or(id: &str, input_a: &str, input_b: &str, output: &str) -> Self {
        Self::new(GateType::Or, id, [input_a, input_b], output)
    }

    #[must_use]
    pub fn nand(id: &str, input_a: &str, input_b: &str, output: &str) -> Self {
        Self::new(GateType::Nand, id, [input_a, input_b], output)
    }

    pub fn check_arity(&self) -> Result<(), GateError> {
        let expected = self.gate_type.arity();
        if self.inputs.len() != expected {
            return Err(GateError::Arity {
                gate: self.id.clone(),
                gate_type: self.gate_type,
                expected,
                actual: self.inputs.len(),
            });
        }
        Ok(())
    }
}

/// Gate whose wire names have been resolved against a circuit's arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WiredGate {
    pub gate: Gate,
    pub inputs: Vec<WireId>,
    pub output: WireId,
}

impl WiredGate {
    pub fn id(&self) -> &str {
        &self.gate.id
    }

    pub fn gate_type(&self) -> GateType {
        self.gate.gate_type
    }

    /// Reads the input wires and writes the output wire.
    ///
    /// Pure in the current wire values, so evaluating twice without touching the
    /// inputs writes the same value twice. Returns whether the output changed.
    pub fn evaluate(&self, wires: &mut Wires) -> bool {
        let mut signals = [Signal::Unknown; MAX_ARITY];
        for (signal, wire_id) in signals.iter_mut().zip(&self.inputs) {
            *signal = wires.value(*wire_id);
        }

        let value = self.gate.gate_type.apply(&signals[..self.inputs.len()]);
        wires.set(self.output, value)
    }
}
