//! Two-input compound gates and the constant-low generator.

use crate::core::components::{Catalog, CircuitDef};

fn nand() -> CircuitDef {
    CircuitDef::new("NAND")
        .children("AND", ["o1"])
        .children("NOT", ["n1"])
        .port("in1", ("o1", "in1"))
        .port("in2", ("o1", "in2"))
        .port("out1", ("n1", "out1"))
        .wire(("o1", "out1"), ("n1", "in1"))
}

fn nor() -> CircuitDef {
    CircuitDef::new("NOR")
        .children("OR", ["o1"])
        .children("NOT", ["n1"])
        .port("in1", ("o1", "in1"))
        .port("in2", ("o1", "in2"))
        .port("out1", ("n1", "out1"))
        .wire(("o1", "out1"), ("n1", "in1"))
}

/// XOR as AND(NAND, OR). The two bridges give each input one fan-out stage
/// so NAND and OR read the same snapshot of it.
fn xor() -> CircuitDef {
    CircuitDef::new("XOR")
        .children("NAND", ["na1"])
        .children("OR", ["o1"])
        .children("AND", ["a1"])
        .children("BRIDGE", ["b1", "b2"])
        .port("in1", ("b1", "in1"))
        .port("in2", ("b2", "in1"))
        .port("out1", ("a1", "out1"))
        .wire(("b1", "out1"), ("na1", "in1"))
        .wire(("b1", "out1"), ("o1", "in2"))
        .wire(("b2", "out1"), ("na1", "in2"))
        .wire(("b2", "out1"), ("o1", "in1"))
        .wire(("na1", "out1"), ("a1", "in1"))
        .wire(("o1", "out1"), ("a1", "in2"))
}

fn xnor() -> CircuitDef {
    CircuitDef::new("XNOR")
        .children("AND", ["a1"])
        .children("NOR", ["n1"])
        .children("OR", ["o1"])
        .children("BRIDGE", ["b1", "b2"])
        .port("in1", ("b1", "in1"))
        .port("in2", ("b2", "in1"))
        .port("out1", ("o1", "out1"))
        .wire(("b1", "out1"), ("a1", "in1"))
        .wire(("b2", "out1"), ("a1", "in2"))
        .wire(("a1", "out1"), ("o1", "in2"))
        .wire(("b2", "out1"), ("n1", "in2"))
        .wire(("b1", "out1"), ("n1", "in1"))
        .wire(("n1", "out1"), ("o1", "in1"))
}

/// Single-bit equality, the building block of the wide comparators.
fn eq() -> CircuitDef {
    CircuitDef::new("EQ")
        .children("XOR", ["x1"])
        .children("NOT", ["n1"])
        .port("in1", ("x1", "in1"))
        .port("in2", ("x1", "in2"))
        .port("out1", ("n1", "out1"))
        .wire(("x1", "out1"), ("n1", "in1"))
}

/// in1 AND NOT in2
fn andn() -> CircuitDef {
    CircuitDef::new("ANDN")
        .children("NOT", ["n1"])
        .children("AND", ["a1"])
        .port("in1", ("a1", "in1"))
        .port("in2", ("n1", "in1"))
        .port("out1", ("a1", "out1"))
        .wire(("n1", "out1"), ("a1", "in2"))
}

/// in1 OR NOT in2
fn orn() -> CircuitDef {
    CircuitDef::new("ORN")
        .children("NOT", ["n1"])
        .children("OR", ["o1"])
        .port("in1", ("o1", "in1"))
        .port("in2", ("n1", "in1"))
        .port("out1", ("o1", "out1"))
        .wire(("n1", "out1"), ("o1", "in2"))
}

/// Constant low: x AND NOT x settles to 0 whatever drives in1. The segments
/// use it to pin their unused output lanes.
fn gnd() -> CircuitDef {
    CircuitDef::new("GND")
        .children("NOT", ["n1"])
        .children("AND", ["a1"])
        .children("BRIDGE", ["b1"])
        .port("in1", ("b1", "in1"))
        .port("out1", ("a1", "out1"))
        .wire(("b1", "out1"), ("n1", "in1"))
        .wire(("n1", "out1"), ("a1", "in1"))
        .wire(("b1", "out1"), ("a1", "in2"))
}

pub(crate) fn install(catalog: &mut Catalog) {
    catalog.register(nand());
    catalog.register(nor());
    catalog.register(xor());
    catalog.register(xnor());
    catalog.register(eq());
    catalog.register(andn());
    catalog.register(orn());
    catalog.register(gnd());
}
