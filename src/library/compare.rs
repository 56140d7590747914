//! Equality and magnitude comparators over 8-bit operands. Operand a sits
//! MSB-first on `in1..in8`, operand b on `in9..in16`.

use crate::core::components::{Catalog, CircuitDef};

/// One ripple stage of the magnitude comparator. For bit pair (in1, in2)
/// with the strictly-greater carry so far on in3: out1 = in1 >= in2 OR
/// carry, out2 = in1 > in2 OR carry.
fn cmpbit() -> CircuitDef {
    CircuitDef::new("CMPBIT")
        .children("ORN", ["r1"])
        .children("ANDN", ["d1"])
        .children("OR", ["o1", "o2"])
        .children("BRIDGE", ["b1", "b2", "b3"])
        .port("in1", ("b1", "in1"))
        .port("in2", ("b2", "in1"))
        .port("in3", ("b3", "in1"))
        .port("out1", ("o1", "out1"))
        .port("out2", ("o2", "out1"))
        .wire(("b1", "out1"), ("r1", "in1"))
        .wire(("b1", "out1"), ("d1", "in1"))
        .wire(("b2", "out1"), ("r1", "in2"))
        .wire(("b2", "out1"), ("d1", "in2"))
        .wire(("r1", "out1"), ("o1", "in1"))
        .wire(("b3", "out1"), ("o1", "in2"))
        .wire(("d1", "out1"), ("o2", "in1"))
        .wire(("b3", "out1"), ("o2", "in2"))
}

fn eq8() -> CircuitDef {
    let mut def = CircuitDef::new("EQ8")
        .children("ALL8", ["a1"])
        .children("EQ", (1..=8).map(|k| format!("e{}", k)));
    for k in 1..=8 {
        def = def
            .port(&format!("in{}", k), (format!("e{}", k), "in1"))
            .port(&format!("in{}", k + 8), (format!("e{}", k), "in2"));
    }
    def = def.port("out1", ("a1", "out1"));
    for k in 1..=8 {
        def = def.wire((format!("e{}", k), "out1"), ("a1", format!("in{}", k)));
    }
    def
}

fn neq8() -> CircuitDef {
    let mut def = CircuitDef::new("NEQ8")
        .children("ALL8", ["a1"])
        .children("EQ", (1..=8).map(|k| format!("e{}", k)))
        .children("NOT", ["n1"]);
    for k in 1..=8 {
        def = def
            .port(&format!("in{}", k), (format!("e{}", k), "in1"))
            .port(&format!("in{}", k + 8), (format!("e{}", k), "in2"));
    }
    def = def.port("out1", ("n1", "out1"));
    for k in 1..=8 {
        def = def.wire((format!("e{}", k), "out1"), ("a1", format!("in{}", k)));
    }
    def.wire(("a1", "out1"), ("n1", "in1"))
}

/// a > b: every bit position holds a_i >= b_i or a higher position already
/// decided strictly greater, and the operands differ. The head bit uses
/// ORN/ANDN directly; the remaining seven ripple through CMPBIT stages.
fn gt8() -> CircuitDef {
    let mut def = CircuitDef::new("GT8")
        .children("BRIDGE", (1..=16).map(|k| format!("b{}", k)))
        .children("ALL8", ["m1"])
        .children("NEQ8", ["q1"])
        .children("AND", ["g1"])
        .children("CMPBIT", (1..=7).map(|k| format!("s{}", k)))
        .children("ORN", ["r1"])
        .children("ANDN", ["d1"]);
    for k in 1..=16 {
        def = def.port(&format!("in{}", k), (format!("b{}", k), "in1"));
    }
    def = def.port("out1", ("g1", "out1"));
    for k in 1..=16 {
        def = def.wire((format!("b{}", k), "out1"), ("q1", format!("in{}", k)));
    }
    def = def
        .wire(("q1", "out1"), ("g1", "in1"))
        .wire(("b1", "out1"), ("r1", "in1"))
        .wire(("b1", "out1"), ("d1", "in1"))
        .wire(("b9", "out1"), ("r1", "in2"))
        .wire(("b9", "out1"), ("d1", "in2"))
        .wire(("r1", "out1"), ("m1", "in1"))
        .wire(("d1", "out1"), ("s1", "in3"));
    for k in 1..=7 {
        def = def
            .wire((format!("b{}", k + 1), "out1"), (format!("s{}", k), "in1"))
            .wire((format!("b{}", k + 9), "out1"), (format!("s{}", k), "in2"))
            .wire((format!("s{}", k), "out1"), ("m1", format!("in{}", k + 1)));
        if k < 7 {
            def = def.wire((format!("s{}", k), "out2"), (format!("s{}", k + 1), "in3"));
        }
    }
    def.wire(("m1", "out1"), ("g1", "in2"))
}

/// a < b as NOT(a > b) AND a != b.
fn lt8() -> CircuitDef {
    let mut def = CircuitDef::new("LT8")
        .children("GT8", ["g8"])
        .children("NEQ8", ["q1"])
        .children("AND", ["g1"])
        .children("NOT", ["n1"])
        .children("BRIDGE", (1..=16).map(|k| format!("b{}", k)));
    for k in 1..=16 {
        def = def.port(&format!("in{}", k), (format!("b{}", k), "in1"));
    }
    def = def.port("out1", ("g1", "out1"));
    for k in 1..=16 {
        def = def.wire((format!("b{}", k), "out1"), ("q1", format!("in{}", k)));
    }
    def = def.wire(("q1", "out1"), ("g1", "in1"));
    for k in 1..=16 {
        def = def.wire((format!("b{}", k), "out1"), ("g8", format!("in{}", k)));
    }
    def.wire(("g8", "out1"), ("n1", "in1"))
        .wire(("n1", "out1"), ("g1", "in2"))
}

/// a >= b as (a == b) OR (a > b).
fn gte8() -> CircuitDef {
    let mut def = CircuitDef::new("GTE8")
        .children("GT8", ["g8"])
        .children("EQ8", ["e1"])
        .children("OR", ["o1"])
        .children("BRIDGE", (1..=16).map(|k| format!("b{}", k)));
    for k in 1..=16 {
        def = def.port(&format!("in{}", k), (format!("b{}", k), "in1"));
    }
    def = def.port("out1", ("o1", "out1"));
    for k in 1..=16 {
        def = def.wire((format!("b{}", k), "out1"), ("e1", format!("in{}", k)));
    }
    def = def.wire(("e1", "out1"), ("o1", "in1"));
    for k in 1..=16 {
        def = def.wire((format!("b{}", k), "out1"), ("g8", format!("in{}", k)));
    }
    def.wire(("g8", "out1"), ("o1", "in2"))
}

/// a <= b as NOT(a > b).
fn lte8() -> CircuitDef {
    let mut def = CircuitDef::new("LTE8")
        .children("GT8", ["g8"])
        .children("NOT", ["n1"])
        .children("BRIDGE", (1..=16).map(|k| format!("b{}", k)));
    for k in 1..=16 {
        def = def.port(&format!("in{}", k), (format!("b{}", k), "in1"));
    }
    def = def.port("out1", ("n1", "out1"));
    for k in 1..=16 {
        def = def.wire((format!("b{}", k), "out1"), ("g8", format!("in{}", k)));
    }
    def.wire(("g8", "out1"), ("n1", "in1"))
}

pub(crate) fn install(catalog: &mut Catalog) {
    catalog.register(cmpbit());
    catalog.register(eq8());
    catalog.register(neq8());
    catalog.register(gt8());
    catalog.register(lt8());
    catalog.register(gte8());
    catalog.register(lte8());
}
