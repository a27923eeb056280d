use crate::{Circuit, CircuitError, Gate, Signal};

pub const INPUT_A: &str = "a";
pub const INPUT_B: &str = "b";
pub const SUM: &str = "sum";
pub const CARRY: &str = "carry";

const WIRES: [&str; 7] = [INPUT_A, INPUT_B, "and_temp", "or_temp", "not_temp", SUM, CARRY];

/// The four input combinations with their expected `(sum, carry)`.
pub const TRUTH_TABLE: [((bool, bool), (bool, bool)); 4] = [
    ((false, false), (false, false)),
    ((false, true), (true, false)),
    ((true, false), (true, false)),
    ((true, true), (false, true)),
];

/// Five-gate half adder: `sum = (a OR b) AND NOT(a AND b)`, `carry = a AND b`.
///
/// All wires start `Unknown`; drive `a` and `b` with [`Circuit::set_inputs`].
pub fn build_half_adder() -> Result<Circuit, CircuitError> {
    let mut circuit = Circuit::new();
    for name in WIRES {
        circuit.declare_wire(name, Signal::Unknown);
    }

    circuit.attach_gate(Gate::and("and1", INPUT_A, INPUT_B, "and_temp"))?;
    circuit.attach_gate(Gate::or("or1", INPUT_A, INPUT_B, "or_temp"))?;
    circuit.attach_gate(Gate::not("not1", "and_temp", "not_temp"))?;
    circuit.attach_gate(Gate::and("and2", "or_temp", "not_temp", SUM))?;
    circuit.attach_gate(Gate::and("and3_carry", INPUT_A, INPUT_B, CARRY))?;

    Ok(circuit)
}
