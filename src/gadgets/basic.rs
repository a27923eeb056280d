use crate::{Circuit, CircuitError, Gate, WireId};

/// XOR(a, b) = (a OR b) AND NOT(a AND b), as four gates.
///
/// Intermediate wires and gate ids are `{id}.and`, `{id}.or` and `{id}.not`;
/// the final AND gate is `{id}` itself and drives `out`.
pub fn xor(
    circuit: &mut Circuit,
    id: &str,
    a: &str,
    b: &str,
    out: &str,
) -> Result<WireId, CircuitError> {
    let [and, or, not] = ["and", "or", "not"].map(|suffix| format!("{id}.{suffix}"));

    circuit.attach_gate(Gate::and(&and, a, b, &and))?;
    circuit.attach_gate(Gate::or(&or, a, b, &or))?;
    circuit.attach_gate(Gate::not(&not, &and, &not))?;
    circuit.attach_gate(Gate::and(id, &or, &not, out))
}

/// Half adder on existing wires `a` and `b`. Returns `(sum, carry)`.
pub fn half_adder(
    circuit: &mut Circuit,
    id: &str,
    a: &str,
    b: &str,
) -> Result<(WireId, WireId), CircuitError> {
    let sum = xor(circuit, &format!("{id}.sum"), a, b, &format!("{id}.sum"))?;
    let carry = circuit.attach_gate(Gate::and(
        &format!("{id}.carry"),
        a,
        b,
        &format!("{id}.carry"),
    ))?;

    Ok((sum, carry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RunConfig, Signal};

    const TEST_CASES: [(bool, bool); 4] =
        [(false, false), (false, true), (true, false), (true, true)];

    #[test]
    fn xor_by_composition() {
        let mut circuit = Circuit::new();
        circuit.declare_wire("a", Signal::Unknown);
        circuit.declare_wire("b", Signal::Unknown);
        xor(&mut circuit, "x", "a", "b", "out").unwrap();

        assert_eq!(circuit.gate_count(), 4);

        for (a, b) in TEST_CASES {
            circuit.set_inputs([("a", a), ("b", b)]);
            let snapshot = circuit.run(&RunConfig::default()).unwrap();

            assert_eq!(
                snapshot.get("out"),
                Some(Signal::from((a || b) && !(a && b))),
                "XOR({a}, {b})"
            );
        }
    }

    #[test]
    fn chained_half_adders_share_inputs() {
        let mut circuit = Circuit::new();
        circuit.declare_wire("a", Signal::Unknown);
        circuit.declare_wire("b", Signal::Unknown);
        half_adder(&mut circuit, "ha0", "a", "b").unwrap();
        // second stage adds the first carry back onto the first sum
        half_adder(&mut circuit, "ha1", "ha0.sum", "ha0.carry").unwrap();

        for (a, b) in TEST_CASES {
            circuit.set_inputs([("a", a), ("b", b)]);
            let snapshot = circuit.run(&RunConfig::default()).unwrap();

            let (sum, carry) = (a ^ b, a && b);
            assert_eq!(snapshot.get("ha1.sum"), Some(Signal::from(sum ^ carry)));
            assert_eq!(snapshot.get("ha1.carry"), Some(Signal::from(sum && carry)));
        }
    }

    #[test]
    fn xor_names_clash_is_reported() {
        let mut circuit = Circuit::new();
        circuit.declare_wire("a", Signal::True);
        circuit.declare_wire("b", Signal::False);
        xor(&mut circuit, "x", "a", "b", "out").unwrap();

        assert_eq!(
            xor(&mut circuit, "x", "a", "b", "out2"),
            Err(CircuitError::DuplicateGate("x.and".to_owned()))
        );
    }
}
