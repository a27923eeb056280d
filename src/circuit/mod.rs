use std::collections::HashMap;

use log::debug;

use crate::{
    Gate, GateError, Signal, Snapshot, WireId, Wires,
    core::{gate::WiredGate, gate_type::GateCount},
};

mod scheduler;
mod stabilize;

pub use stabilize::RunReport;

/// Structural errors raised while building or scheduling a circuit.
///
/// Attach-time errors leave the circuit exactly as it was before the call.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("Gate `{gate}` reads wire `{wire}`, which is not declared")]
    UnresolvedWire { gate: String, wire: String },
    #[error("Gate `{gate}` drives wire `{wire}`, which is already driven by `{existing}`")]
    DuplicateDriver {
        wire: String,
        existing: String,
        gate: String,
    },
    #[error("Gate id `{0}` is already attached")]
    DuplicateGate(String),
    #[error(transparent)]
    Gate(#[from] GateError),
    #[error("Dependency cycle among gates: {}", .gates.join(", "))]
    Cycle { gates: Vec<String> },
}
pub type CircuitError = Error;

/// Owner of every wire and gate of a combinational circuit.
///
/// ```rust
/// use tristate_circuit::{Circuit, Gate, RunConfig, Signal};
///
/// let mut circuit = Circuit::new();
/// circuit.declare_wire("a", Signal::True);
/// circuit.declare_wire("b", Signal::Unknown);
/// circuit.attach_gate(Gate::and("and1", "a", "b", "out")).unwrap();
///
/// let snapshot = circuit.run(&RunConfig::default()).unwrap();
/// assert_eq!(snapshot.get("out"), Some(Signal::Unknown));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Circuit {
    wires: Wires,
    gates: Vec<WiredGate>,
    gate_ids: HashMap<String, usize>,
    drivers: HashMap<WireId, usize>,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a wire, or overwrites its value if the name is already taken.
    pub fn declare_wire(&mut self, name: &str, initial: impl Into<Signal>) -> WireId {
        self.wires.declare(name, initial.into())
    }

    /// Resolves the gate's wires and appends it.
    ///
    /// Every input must already exist. The output is created as `Unknown` when
    /// missing and may not be driven by another gate. Returns the output wire.
    pub fn attach_gate(&mut self, gate: Gate) -> Result<WireId, CircuitError> {
        gate.check_arity()?;

        if self.gate_ids.contains_key(&gate.id) {
            return Err(CircuitError::DuplicateGate(gate.id));
        }

        let inputs = gate
            .inputs
            .iter()
            .map(|name| {
                self.wires
                    .id(name)
                    .ok_or_else(|| CircuitError::UnresolvedWire {
                        gate: gate.id.clone(),
                        wire: name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(&existing) = self
            .wires
            .id(&gate.output)
            .and_then(|wire_id| self.drivers.get(&wire_id))
        {
            return Err(CircuitError::DuplicateDriver {
                wire: gate.output.clone(),
                existing: self.gates[existing].id().to_owned(),
                gate: gate.id,
            });
        }

        let index = self.gates.len();
        let output = self.wires.get_or_declare(&gate.output);
        self.drivers.insert(output, index);
        self.gate_ids.insert(gate.id.clone(), index);

        debug!("attach #{index}: {gate}");
        self.gates.push(WiredGate {
            gate,
            inputs,
            output,
        });

        Ok(output)
    }

    /// Drives new input values, declaring any wire that does not exist yet.
    pub fn set_inputs<I, N, V>(&mut self, inputs: I)
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<Signal>,
    {
        for (name, value) in inputs {
            self.wires.declare(name.as_ref(), value.into());
        }
    }

    pub fn wires(&self) -> &Wires {
        &self.wires
    }

    pub fn wire_value(&self, name: &str) -> Option<Signal> {
        self.wires.get_by_name(name).ok().map(|wire| wire.value)
    }

    /// Gates in attachment order.
    pub fn gates(&self) -> impl Iterator<Item = &Gate> {
        self.gates.iter().map(|wired| &wired.gate)
    }

    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    pub fn gate_counts(&self) -> GateCount {
        self.gates.iter().map(WiredGate::gate_type).collect()
    }

    /// Id of the gate driving `wire`, if any.
    pub fn driver(&self, wire: &str) -> Option<&str> {
        let wire_id = self.wires.id(wire)?;
        self.drivers
            .get(&wire_id)
            .map(|&index| self.gates[index].id())
    }

    /// Gate ids in the order a run evaluates them.
    pub fn topological_order(&self) -> Result<Vec<&str>, CircuitError> {
        Ok(self
            .schedule()?
            .into_iter()
            .map(|index| self.gates[index].id())
            .collect())
    }

    fn schedule(&self) -> Result<Vec<usize>, CircuitError> {
        scheduler::DependencyGraph::build(&self.gates, self.wires.len())
            .topological_order(&self.gates)
    }

    /// Current wire values, without running anything.
    pub fn snapshot(&self) -> Snapshot {
        self.wires.snapshot()
    }
}
