//! Engine-level behaviour through the public API: primitive truth tables,
//! aliasing, wire semantics, driver contracts.

use std::collections::BTreeMap;

use gatesim::{Bit, Catalog, CircuitDef, CircuitError, Simulator};

fn initials(pairs: &[(&str, Bit)]) -> BTreeMap<String, Bit> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

#[test]
fn not_primitive_truth_table() {
    let catalog = Catalog::with_builtins();
    let mut sim = Simulator::new(catalog.instantiate("NOT").unwrap());
    assert_eq!(sim.run(&initials(&[("in1", 0)])).unwrap()["out1"], 1);
    assert_eq!(sim.run(&initials(&[("in1", 1)])).unwrap()["out1"], 0);
}

#[test]
fn and_primitive_truth_table() {
    let catalog = Catalog::with_builtins();
    let mut sim = Simulator::new(catalog.instantiate("AND").unwrap());
    for (a, b, expected) in [(0, 0, 0), (0, 1, 0), (1, 0, 0), (1, 1, 1)] {
        let out = sim.run(&initials(&[("in1", a), ("in2", b)])).unwrap();
        assert_eq!(out["out1"], expected, "AND({}, {})", a, b);
    }
}

#[test]
fn or_primitive_truth_table() {
    let catalog = Catalog::with_builtins();
    let mut sim = Simulator::new(catalog.instantiate("OR").unwrap());
    for (a, b, expected) in [(0, 0, 0), (0, 1, 1), (1, 0, 1), (1, 1, 1)] {
        let out = sim.run(&initials(&[("in1", a), ("in2", b)])).unwrap();
        assert_eq!(out["out1"], expected, "OR({}, {})", a, b);
    }
}

#[test]
fn bridge_is_identity() {
    let catalog = Catalog::with_builtins();
    let mut sim = Simulator::new(catalog.instantiate("BRIDGE").unwrap());
    assert_eq!(sim.run(&initials(&[("in1", 1)])).unwrap()["out1"], 1);
    assert_eq!(sim.run(&initials(&[("in1", 0)])).unwrap()["out1"], 0);
}

#[test]
fn bridge_delays_by_one_cycle() {
    // One cycle is enough for the bridge itself; a consumer fed through a
    // wire sees the value one cycle later.
    let mut catalog = Catalog::with_builtins();
    catalog.register(
        CircuitDef::new("CHAIN")
            .children("BRIDGE", ["b1", "b2"])
            .port("in1", ("b1", "in1"))
            .port("out1", ("b2", "out1"))
            .wire(("b1", "out1"), ("b2", "in1")),
    );
    let mut sim = Simulator::new(catalog.instantiate("CHAIN").unwrap()).with_cycles(1);
    let out = sim.run(&initials(&[("in1", 1)])).unwrap();
    assert_eq!(out["out1"], 0, "second stage still holds the old snapshot");
    sim.step();
    assert_eq!(sim.circuit().value("out1").unwrap(), 1);
}

#[test]
fn shared_sink_takes_the_last_writer() {
    // Two wires target b2.in1: the NOT drives 1, the bridge drives 0, and
    // the bridge's wire was declared last.
    let mut catalog = Catalog::with_builtins();
    catalog.register(
        CircuitDef::new("RACE")
            .children("NOT", ["n1"])
            .children("BRIDGE", ["b1", "b2"])
            .port("in1", ("n1", "in1"))
            .port("in2", ("b1", "in1"))
            .port("out1", ("b2", "out1"))
            .wire(("n1", "out1"), ("b2", "in1"))
            .wire(("b1", "out1"), ("b2", "in1")),
    );
    let mut sim = Simulator::new(catalog.instantiate("RACE").unwrap());
    let out = sim.run(&initials(&[("in1", 0), ("in2", 0)])).unwrap();
    assert_eq!(out["out1"], 0);
}

#[test]
fn inputs_survive_settling() {
    // The initial assignment is re-applied every cycle, so driven inputs
    // still hold their values in the final assignment.
    let catalog = Catalog::with_builtins();
    let mut sim = Simulator::new(catalog.instantiate("AND").unwrap());
    let out = sim.run(&initials(&[("in1", 1), ("in2", 1)])).unwrap();
    assert_eq!(out["in1"], 1);
    assert_eq!(out["in2"], 1);
}

#[test]
fn determinism_across_instances() {
    let catalog = Catalog::with_builtins();
    let mut first = Simulator::new(catalog.instantiate("AND").unwrap());
    let mut second = Simulator::new(catalog.instantiate("AND").unwrap());
    let assignment = initials(&[("in1", 1), ("in2", 0)]);
    assert_eq!(
        first.run(&assignment).unwrap(),
        second.run(&assignment).unwrap()
    );
}

#[test]
fn extra_cycles_do_not_change_settled_outputs() {
    let catalog = Catalog::with_builtins();
    let assignment = initials(&[("in1", 1), ("in2", 0)]);
    let mut sim = Simulator::new(catalog.instantiate("OR").unwrap());
    let settled = sim.run(&assignment).unwrap();
    let mut longer = Simulator::new(catalog.instantiate("OR").unwrap()).with_cycles(150);
    assert_eq!(settled, longer.run(&assignment).unwrap());
}

#[test]
fn construction_error_taxonomy() {
    let mut catalog = Catalog::with_builtins();

    catalog.register(
        CircuitDef::new("BADPORT")
            .children("NOT", ["n1"])
            .port("clock", ("n1", "in1")),
    );
    assert!(matches!(
        catalog.instantiate("BADPORT").unwrap_err(),
        CircuitError::BadPortName(_)
    ));

    catalog.register(
        CircuitDef::new("DUP")
            .children("NOT", ["n1"])
            .children("BRIDGE", ["n1"])
            .port("in1", ("n1", "in1")),
    );
    assert!(matches!(
        catalog.instantiate("DUP").unwrap_err(),
        CircuitError::DuplicateChild(_)
    ));

    catalog.register(
        CircuitDef::new("DANGLE")
            .children("NOT", ["n1"])
            .port("in1", ("missing", "in1")),
    );
    assert!(matches!(
        catalog.instantiate("DANGLE").unwrap_err(),
        CircuitError::UnknownChild(_)
    ));

    catalog.register(
        CircuitDef::new("BADWIRE")
            .children("NOT", ["n1"])
            .port("in1", ("n1", "in1"))
            .port("out1", ("n1", "out1"))
            .wire(("n1", "out7"), ("n1", "in1")),
    );
    assert!(matches!(
        catalog.instantiate("BADWIRE").unwrap_err(),
        CircuitError::UnknownPort(_)
    ));

    assert!(matches!(
        catalog.instantiate("NOSUCH").unwrap_err(),
        CircuitError::UnknownKind(_)
    ));
}

#[test]
fn driver_rejects_unknown_ports_before_running() {
    let catalog = Catalog::with_builtins();
    let mut sim = Simulator::new(catalog.instantiate("NOT").unwrap());
    let err = sim.run(&initials(&[("in1", 1), ("enable", 1)])).unwrap_err();
    assert!(matches!(err, CircuitError::UnknownPort(_)));
}

#[test]
fn owned_ports_default_to_zero_and_accept_wires() {
    // A composite with a fresh input fanned into a gate through a wire, and
    // a fresh output fed from the gate.
    let mut catalog = Catalog::with_builtins();
    catalog.register(
        CircuitDef::new("WRAP")
            .children("NOT", ["n1"])
            .port_owned("in1")
            .port_owned("out1")
            .wire("in1", ("n1", "in1"))
            .wire(("n1", "out1"), "out1"),
    );
    let mut sim = Simulator::new(catalog.instantiate("WRAP").unwrap());
    assert_eq!(sim.run(&initials(&[])).unwrap()["out1"], 1);
    assert_eq!(sim.run(&initials(&[("in1", 1)])).unwrap()["out1"], 0);
}
