//! Population circuits: single-pattern terms and the exactly-N / at-least-N
//! combinations built from their rotations.

use crate::core::components::{Catalog, CircuitDef};

/// in1 AND NOR(in2, in3): only the first of three inputs set.
fn one3() -> CircuitDef {
    CircuitDef::new("ONE3")
        .children("AND", ["a1"])
        .children("NOR", ["n1"])
        .port("in1", ("a1", "in1"))
        .port("in2", ("n1", "in1"))
        .port("in3", ("n1", "in2"))
        .port("out1", ("a1", "out1"))
        .wire(("n1", "out1"), ("a1", "in2"))
}

/// in1 AND in2 AND NOT in3: the first two of three inputs set.
fn two3() -> CircuitDef {
    CircuitDef::new("TWO3")
        .children("AND", ["a1", "a2"])
        .children("NOT", ["n1"])
        .port("in1", ("a1", "in1"))
        .port("in2", ("a1", "in2"))
        .port("in3", ("n1", "in1"))
        .port("out1", ("a2", "out1"))
        .wire(("n1", "out1"), ("a2", "in2"))
        .wire(("a1", "out1"), ("a2", "in1"))
}

/// Exactly one of three inputs set: OR over the three rotations of ONE3.
fn exact1() -> CircuitDef {
    CircuitDef::new("EXACT1")
        .children("BRIDGE", ["b1", "b2", "b3"])
        .children("ONE3", ["u1", "u2", "u3"])
        .children("OR3", ["o1"])
        .port("in1", ("b1", "in1"))
        .port("in2", ("b2", "in1"))
        .port("in3", ("b3", "in1"))
        .port("out1", ("o1", "out1"))
        .wire(("b1", "out1"), ("u1", "in1"))
        .wire(("b2", "out1"), ("u1", "in2"))
        .wire(("b3", "out1"), ("u1", "in3"))
        .wire(("u1", "out1"), ("o1", "in1"))
        .wire(("b2", "out1"), ("u2", "in1"))
        .wire(("b1", "out1"), ("u2", "in2"))
        .wire(("b3", "out1"), ("u2", "in3"))
        .wire(("u2", "out1"), ("o1", "in2"))
        .wire(("b3", "out1"), ("u3", "in1"))
        .wire(("b2", "out1"), ("u3", "in2"))
        .wire(("b1", "out1"), ("u3", "in3"))
        .wire(("u3", "out1"), ("o1", "in3"))
}

/// Exactly two of three inputs set: OR over the three rotations of TWO3.
fn exact2() -> CircuitDef {
    CircuitDef::new("EXACT2")
        .children("BRIDGE", ["b1", "b2", "b3"])
        .children("TWO3", ["t1", "t2", "t3"])
        .children("OR3", ["o1"])
        .port("in1", ("b1", "in1"))
        .port("in2", ("b2", "in1"))
        .port("in3", ("b3", "in1"))
        .port("out1", ("o1", "out1"))
        .wire(("b1", "out1"), ("t1", "in1"))
        .wire(("b2", "out1"), ("t1", "in2"))
        .wire(("b3", "out1"), ("t1", "in3"))
        .wire(("t1", "out1"), ("o1", "in1"))
        .wire(("b1", "out1"), ("t2", "in1"))
        .wire(("b3", "out1"), ("t2", "in2"))
        .wire(("b2", "out1"), ("t2", "in3"))
        .wire(("t2", "out1"), ("o1", "in2"))
        .wire(("b3", "out1"), ("t3", "in1"))
        .wire(("b2", "out1"), ("t3", "in2"))
        .wire(("b1", "out1"), ("t3", "in3"))
        .wire(("t3", "out1"), ("o1", "in3"))
}

/// One-hot population count of three inputs: out1..out4 report count 0..3.
fn tally3() -> CircuitDef {
    CircuitDef::new("TALLY3")
        .children("BRIDGE", ["b1", "b2", "b3"])
        .children("AND3", ["a3"])
        .children("OR3", ["o1", "o2"])
        .children("NOR3", ["n3"])
        .children("ONE3", ["u1", "u2", "u3"])
        .children("TWO3", ["t1", "t2", "t3"])
        .port("in1", ("b1", "in1"))
        .port("in2", ("b2", "in1"))
        .port("in3", ("b3", "in1"))
        .port("out1", ("n3", "out1"))
        .port("out2", ("o1", "out1"))
        .port("out3", ("o2", "out1"))
        .port("out4", ("a3", "out1"))
        .wire(("b1", "out1"), ("n3", "in1"))
        .wire(("b2", "out1"), ("n3", "in2"))
        .wire(("b3", "out1"), ("n3", "in3"))
        .wire(("b1", "out1"), ("a3", "in1"))
        .wire(("b2", "out1"), ("a3", "in2"))
        .wire(("b3", "out1"), ("a3", "in3"))
        .wire(("b1", "out1"), ("u1", "in1"))
        .wire(("b2", "out1"), ("u1", "in2"))
        .wire(("b3", "out1"), ("u1", "in3"))
        .wire(("b2", "out1"), ("u2", "in1"))
        .wire(("b1", "out1"), ("u2", "in2"))
        .wire(("b3", "out1"), ("u2", "in3"))
        .wire(("b3", "out1"), ("u3", "in1"))
        .wire(("b1", "out1"), ("u3", "in2"))
        .wire(("b2", "out1"), ("u3", "in3"))
        .wire(("u1", "out1"), ("o1", "in1"))
        .wire(("u2", "out1"), ("o1", "in2"))
        .wire(("u3", "out1"), ("o1", "in3"))
        .wire(("b1", "out1"), ("t1", "in1"))
        .wire(("b2", "out1"), ("t1", "in2"))
        .wire(("b3", "out1"), ("t1", "in3"))
        .wire(("b1", "out1"), ("t2", "in1"))
        .wire(("b3", "out1"), ("t2", "in2"))
        .wire(("b2", "out1"), ("t2", "in3"))
        .wire(("b2", "out1"), ("t3", "in1"))
        .wire(("b3", "out1"), ("t3", "in2"))
        .wire(("b1", "out1"), ("t3", "in3"))
        .wire(("t1", "out1"), ("o2", "in1"))
        .wire(("t2", "out1"), ("o2", "in2"))
        .wire(("t3", "out1"), ("o2", "in3"))
}

/// in1 AND in2 AND in3 AND NOT in4: the first three of four inputs set.
fn three4() -> CircuitDef {
    CircuitDef::new("THREE4")
        .children("AND", ["a1"])
        .children("NOT", ["n1"])
        .children("AND3", ["a3"])
        .port("in1", ("a3", "in1"))
        .port("in2", ("a3", "in2"))
        .port("in3", ("a3", "in3"))
        .port("in4", ("n1", "in1"))
        .port("out1", ("a1", "out1"))
        .wire(("a3", "out1"), ("a1", "in1"))
        .wire(("n1", "out1"), ("a1", "in2"))
}

/// NOR3(in1, in2, in3) AND in4: only the last of four inputs set.
fn one4() -> CircuitDef {
    CircuitDef::new("ONE4")
        .children("NOR3", ["n3"])
        .children("AND", ["a1"])
        .port("in1", ("n3", "in1"))
        .port("in2", ("n3", "in2"))
        .port("in3", ("n3", "in3"))
        .port("in4", ("a1", "in2"))
        .port("out1", ("a1", "out1"))
        .wire(("n3", "out1"), ("a1", "in1"))
}

fn notone4() -> CircuitDef {
    CircuitDef::new("NOTONE4")
        .children("ONE4", ["u1"])
        .children("NOT", ["n1"])
        .port("in1", ("u1", "in1"))
        .port("in2", ("u1", "in2"))
        .port("in3", ("u1", "in3"))
        .port("in4", ("u1", "in4"))
        .port("out1", ("n1", "out1"))
        .wire(("u1", "out1"), ("n1", "in1"))
}

/// At least two of four inputs set: no single-bit pattern matches, and the
/// inputs are not all clear.
fn atleast2() -> CircuitDef {
    CircuitDef::new("ATLEAST2")
        .children("NOTONE4", ["no1", "no2", "no3", "no4"])
        .children("OR4", ["o4"])
        .children("AND4", ["a4"])
        .children("AND", ["a1"])
        .children("BRIDGE", ["b1", "b2", "b3", "b4"])
        .port("in1", ("b1", "in1"))
        .port("in2", ("b2", "in1"))
        .port("in3", ("b3", "in1"))
        .port("in4", ("b4", "in1"))
        .port("out1", ("a1", "out1"))
        .wire(("b1", "out1"), ("no1", "in1"))
        .wire(("b2", "out1"), ("no1", "in2"))
        .wire(("b3", "out1"), ("no1", "in3"))
        .wire(("b4", "out1"), ("no1", "in4"))
        .wire(("b1", "out1"), ("no2", "in1"))
        .wire(("b3", "out1"), ("no2", "in2"))
        .wire(("b4", "out1"), ("no2", "in3"))
        .wire(("b2", "out1"), ("no2", "in4"))
        .wire(("b1", "out1"), ("no3", "in1"))
        .wire(("b2", "out1"), ("no3", "in2"))
        .wire(("b4", "out1"), ("no3", "in3"))
        .wire(("b3", "out1"), ("no3", "in4"))
        .wire(("b3", "out1"), ("no4", "in1"))
        .wire(("b2", "out1"), ("no4", "in2"))
        .wire(("b4", "out1"), ("no4", "in3"))
        .wire(("b1", "out1"), ("no4", "in4"))
        .wire(("no1", "out1"), ("a4", "in1"))
        .wire(("no2", "out1"), ("a4", "in2"))
        .wire(("no3", "out1"), ("a4", "in3"))
        .wire(("no4", "out1"), ("a4", "in4"))
        .wire(("b1", "out1"), ("o4", "in1"))
        .wire(("b2", "out1"), ("o4", "in2"))
        .wire(("b3", "out1"), ("o4", "in3"))
        .wire(("b4", "out1"), ("o4", "in4"))
        .wire(("a4", "out1"), ("a1", "in1"))
        .wire(("o4", "out1"), ("a1", "in2"))
}

/// Odd parity of four inputs: exactly one or exactly three set, as an OR
/// over the four rotations of each pattern term.
fn parity4() -> CircuitDef {
    let mut def = CircuitDef::new("PARITY4")
        .children("THREE4", ["t1", "t2", "t3", "t4"])
        .children("ONE4", ["u1", "u2", "u3", "u4"])
        .children("BRIDGE", ["b1", "b2", "b3", "b4"])
        .children("ANY8", ["o8"])
        .port("in1", ("b1", "in1"))
        .port("in2", ("b2", "in1"))
        .port("in3", ("b3", "in1"))
        .port("in4", ("b4", "in1"))
        .port("out1", ("o8", "out1"));
    // One rotation of the four inputs per term instance.
    let rotations = [
        ["b1", "b2", "b3", "b4"],
        ["b1", "b3", "b4", "b2"],
        ["b1", "b2", "b4", "b3"],
        ["b3", "b2", "b4", "b1"],
    ];
    for (term, rotation) in ["t1", "t2", "t3", "t4"].into_iter().zip(rotations) {
        for (slot, bridge) in rotation.into_iter().enumerate() {
            def = def.wire((bridge, "out1"), (term, format!("in{}", slot + 1)));
        }
    }
    for (term, rotation) in ["u1", "u2", "u3", "u4"].into_iter().zip(rotations) {
        for (slot, bridge) in rotation.into_iter().enumerate() {
            def = def.wire((bridge, "out1"), (term, format!("in{}", slot + 1)));
        }
    }
    for (slot, term) in ["t1", "t2", "t3", "t4", "u1", "u2", "u3", "u4"]
        .into_iter()
        .enumerate()
    {
        def = def.wire((term, "out1"), ("o8", format!("in{}", slot + 1)));
    }
    def
}

pub(crate) fn install(catalog: &mut Catalog) {
    catalog.register(one3());
    catalog.register(two3());
    catalog.register(exact1());
    catalog.register(exact2());
    catalog.register(tally3());
    catalog.register(three4());
    catalog.register(one4());
    catalog.register(notone4());
    catalog.register(atleast2());
    catalog.register(parity4());
}
