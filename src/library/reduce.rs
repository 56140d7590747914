//! N-way AND/OR/NOR reductions.

use crate::core::components::{Catalog, CircuitDef};

fn and3() -> CircuitDef {
    CircuitDef::new("AND3")
        .children("AND", ["a1", "a2"])
        .port("in1", ("a1", "in1"))
        .port("in2", ("a2", "in1"))
        .port("in3", ("a2", "in2"))
        .port("out1", ("a1", "out1"))
        .wire(("a2", "out1"), ("a1", "in2"))
}

fn or3() -> CircuitDef {
    CircuitDef::new("OR3")
        .children("OR", ["o1", "o2"])
        .port("in1", ("o1", "in1"))
        .port("in2", ("o1", "in2"))
        .port("in3", ("o2", "in2"))
        .port("out1", ("o2", "out1"))
        .wire(("o1", "out1"), ("o2", "in1"))
}

fn nor3() -> CircuitDef {
    CircuitDef::new("NOR3")
        .children("NOT", ["n1", "n2", "n3"])
        .children("AND3", ["a3"])
        .port("in1", ("n1", "in1"))
        .port("in2", ("n2", "in1"))
        .port("in3", ("n3", "in1"))
        .port("out1", ("a3", "out1"))
        .wire(("n1", "out1"), ("a3", "in1"))
        .wire(("n2", "out1"), ("a3", "in2"))
        .wire(("n3", "out1"), ("a3", "in3"))
}

fn and4() -> CircuitDef {
    CircuitDef::new("AND4")
        .children("AND3", ["a3"])
        .children("AND", ["a1"])
        .port("in1", ("a3", "in1"))
        .port("in2", ("a3", "in2"))
        .port("in3", ("a3", "in3"))
        .port("in4", ("a1", "in2"))
        .port("out1", ("a1", "out1"))
        .wire(("a3", "out1"), ("a1", "in1"))
}

fn or4() -> CircuitDef {
    CircuitDef::new("OR4")
        .children("OR3", ["o3"])
        .children("OR", ["o1"])
        .port("in1", ("o3", "in1"))
        .port("in2", ("o3", "in2"))
        .port("in3", ("o3", "in3"))
        .port("in4", ("o1", "in2"))
        .port("out1", ("o1", "out1"))
        .wire(("o3", "out1"), ("o1", "in1"))
}

/// Eight-way AND reduction: 1 iff every input is 1.
fn all8() -> CircuitDef {
    let mut def = CircuitDef::new("ALL8")
        .children("AND4", ["a4_1", "a4_2"])
        .children("AND", ["a1"]);
    for k in 1..=4 {
        def = def.port(&format!("in{}", k), ("a4_1", format!("in{}", k)));
    }
    for k in 5..=8 {
        def = def.port(&format!("in{}", k), ("a4_2", format!("in{}", k - 4)));
    }
    def.port("out1", ("a1", "out1"))
        .wire(("a4_1", "out1"), ("a1", "in1"))
        .wire(("a4_2", "out1"), ("a1", "in2"))
}

/// Eight-way OR reduction: 1 iff any input is 1.
fn any8() -> CircuitDef {
    let mut def = CircuitDef::new("ANY8")
        .children("OR3", ["o3_1", "o3_2", "o3_3"])
        .children("OR", ["o1"]);
    for k in 1..=3 {
        def = def.port(&format!("in{}", k), ("o3_1", format!("in{}", k)));
    }
    for k in 4..=6 {
        def = def.port(&format!("in{}", k), ("o3_2", format!("in{}", k - 3)));
    }
    def.port("in7", ("o1", "in1"))
        .port("in8", ("o1", "in2"))
        .port("out1", ("o3_3", "out1"))
        .wire(("o3_1", "out1"), ("o3_3", "in1"))
        .wire(("o3_2", "out1"), ("o3_3", "in2"))
        .wire(("o1", "out1"), ("o3_3", "in3"))
}

pub(crate) fn install(catalog: &mut Catalog) {
    catalog.register(and3());
    catalog.register(or3());
    catalog.register(nor3());
    catalog.register(and4());
    catalog.register(or4());
    catalog.register(all8());
    catalog.register(any8());
}
