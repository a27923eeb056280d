// Black-box checks of the circuit engine through the public API only.

use test_log::test;
use tristate_circuit::{
    Circuit, CircuitError, DEFAULT_MAX_ITERATIONS, Gate, RunConfig, Signal,
    gadgets::{self, half_adder},
};

const TEST_CASES: [(bool, bool); 4] =
    [(false, false), (false, true), (true, false), (true, true)];

#[test]
fn xor_composition_law() {
    let mut circuit = Circuit::new();
    for name in ["a", "b", "and_temp", "or_temp", "not_temp", "out"] {
        circuit.declare_wire(name, Signal::Unknown);
    }
    circuit.attach_gate(Gate::and("and1", "a", "b", "and_temp")).unwrap();
    circuit.attach_gate(Gate::or("or1", "a", "b", "or_temp")).unwrap();
    circuit.attach_gate(Gate::not("not1", "and_temp", "not_temp")).unwrap();
    circuit.attach_gate(Gate::and("and2", "or_temp", "not_temp", "out")).unwrap();

    for (a, b) in TEST_CASES {
        circuit.set_inputs([("a", a), ("b", b)]);
        let snapshot = circuit.run(&RunConfig::default()).unwrap();
        assert_eq!(snapshot.get("out"), Some(Signal::from(a ^ b)), "XOR({a}, {b})");
    }
}

#[test]
fn half_adder_literal_table() {
    let mut circuit = gadgets::build_half_adder().unwrap();
    let expected = [
        ((false, false), (Signal::False, Signal::False)),
        ((false, true), (Signal::True, Signal::False)),
        ((true, false), (Signal::True, Signal::False)),
        ((true, true), (Signal::False, Signal::True)),
    ];

    for ((a, b), (sum, carry)) in expected {
        circuit.set_inputs([(half_adder::INPUT_A, a), (half_adder::INPUT_B, b)]);
        let snapshot = circuit.run(&RunConfig::default()).unwrap();

        assert_eq!(snapshot.get(half_adder::SUM), Some(sum));
        assert_eq!(snapshot.get(half_adder::CARRY), Some(carry));
        assert_eq!(snapshot.len(), 7);
    }
}

#[test]
fn mutual_dependency_is_a_cycle() {
    let mut circuit = Circuit::new();
    circuit.declare_wire("x", Signal::True);
    circuit.declare_wire("y", Signal::False);
    circuit.attach_gate(Gate::not("to_y", "x", "y")).unwrap();
    circuit.attach_gate(Gate::not("to_x", "y", "x")).unwrap();

    assert!(matches!(
        circuit.run(&RunConfig::default()),
        Err(CircuitError::Cycle { .. })
    ));
    assert_eq!(circuit.wire_value("x"), Some(Signal::True));
    assert_eq!(circuit.wire_value("y"), Some(Signal::False));
}

#[test]
fn identical_builds_agree() {
    let run = || {
        let mut circuit = gadgets::build_half_adder().unwrap();
        circuit.set_inputs([("a", Signal::True), ("b", Signal::Unknown)]);
        circuit.run(&RunConfig::default()).unwrap()
    };

    let first = run();
    assert_eq!(first, run());
    assert_eq!(first.get("or_temp"), Some(Signal::Unknown));
    assert_eq!(first.get("a"), Some(Signal::True));
}

#[test]
fn default_budget() {
    assert_eq!(RunConfig::default().max_iterations, DEFAULT_MAX_ITERATIONS);
    assert_eq!(DEFAULT_MAX_ITERATIONS, 5);
    assert!(!RunConfig::default().trace);
}
