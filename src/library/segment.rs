//! Opcode-gated ALU segments.
//!
//! Every segment receives the full ALU input bus: `in1..in4` carry the
//! opcode, `in5..in12` operand a and `in13..in20` operand b (the unary NOT
//! segment stops at `in12`). A segment decodes its own opcode (zero bits
//! route through a NOT, one bits go straight into an AND4) and uses the
//! resulting select line to gate its operation onto a 9-bit output bus, so
//! the buses of all ten segments can simply be OR-merged.
//!
//! Opcode map (in1..in4): NOT=0000, OR=0001, AND=0010, EQ=0011, NEQ=0100,
//! GT=0101, LT=0110, GTE=0111, LTE=1000, ADD=1001.

use crate::core::components::{Catalog, CircuitDef};
use crate::core::types::Bit;

/// Select-line scaffolding shared by every segment: aliases the opcode bits
/// onto NOTs (zero bits) or the AND4 (one bits), then wires the NOT outputs
/// into the remaining AND4 slots.
fn decode_opcode(mut def: CircuitDef, select: &str, opcode: [Bit; 4]) -> CircuitDef {
    let mut negated = 0;
    for (i, bit) in opcode.into_iter().enumerate() {
        let port = format!("in{}", i + 1);
        if bit == 0 {
            negated += 1;
            def = def.port(&port, (format!("n{}", negated), "in1"));
        } else {
            def = def.port(&port, (select, format!("in{}", i + 1)));
        }
    }
    let mut negated = 0;
    for (i, bit) in opcode.into_iter().enumerate() {
        if bit == 0 {
            negated += 1;
            def = def.wire(
                (format!("n{}", negated), "out1"),
                (select, format!("in{}", i + 1)),
            );
        }
    }
    def
}

fn not_names(opcode: [Bit; 4]) -> Vec<String> {
    let count = opcode.iter().filter(|bit| **bit == 0).count();
    (1..=count).map(|j| format!("n{}", j)).collect()
}

/// A segment whose operation produces an 8-bit bus (`op` is NOT8, OR8 or
/// AND8): the bus is masked lane-by-lane with the select line and `out9` is
/// pinned low.
fn bus_segment(name: &str, op: &str, opcode: [Bit; 4], operand_bits: usize) -> CircuitDef {
    let mut def = CircuitDef::new(name)
        .children("NOT", not_names(opcode))
        .children("AND4", ["a1"])
        .children("AND8", ["a8"])
        .children(op, ["v1"])
        .children("BRIDGE", ["b1"])
        .children("GND", ["f1"]);
    def = decode_opcode(def, "a1", opcode);
    for k in 1..=operand_bits {
        def = def.port(&format!("in{}", k + 4), ("v1", format!("in{}", k)));
    }
    for k in 1..=8 {
        def = def.port(&format!("out{}", k), ("a8", format!("out{}", k)));
    }
    def = def
        .port("out9", ("f1", "out1"))
        .wire(("a1", "out1"), ("b1", "in1"));
    for k in 1..=8 {
        def = def.wire(("v1", format!("out{}", k)), ("a8", format!("in{}", k)));
    }
    for k in 9..=16 {
        def = def.wire(("b1", "out1"), ("a8", format!("in{}", k)));
    }
    def.wire(("b1", "out1"), ("f1", "in1"))
}

/// A segment whose operation produces a single flag (`op` is one of the
/// comparators): `out1` carries the gated flag and `out2..out9` all publish
/// the same grounded line.
fn flag_segment(name: &str, op: &str, opcode: [Bit; 4]) -> CircuitDef {
    let mut def = CircuitDef::new(name)
        .children("NOT", not_names(opcode))
        .children("AND4", ["a4"])
        .children("AND", ["a1"])
        .children(op, ["v1"])
        .children("GND", ["f1"])
        .children("BRIDGE", ["b1", "b2"]);
    def = decode_opcode(def, "a4", opcode);
    for k in 1..=16 {
        def = def.port(&format!("in{}", k + 4), ("v1", format!("in{}", k)));
    }
    def = def.port("out1", ("b2", "out1"));
    for k in 2..=9 {
        def = def.port(&format!("out{}", k), ("b1", "out1"));
    }
    def.wire(("a4", "out1"), ("a1", "in2"))
        .wire(("v1", "out1"), ("a1", "in1"))
        .wire(("a1", "out1"), ("b2", "in1"))
        .wire(("b2", "out1"), ("f1", "in1"))
        .wire(("f1", "out1"), ("b1", "in1"))
}

/// The adder segment is the one segment with a nine-bit payload: sum lanes
/// LSB-first on out1..out8 plus the carry on out9, all masked with the
/// select line through an AND9.
fn add8_segment() -> CircuitDef {
    let mut def = CircuitDef::new("ADD8_SEG")
        .children("ADD8", ["v1"])
        .children("NOT", ["n1", "n2"])
        .children("AND4", ["a4"])
        .children("AND9", ["a9"])
        .children("BRIDGE", ["b1"])
        .port("in1", ("a4", "in1"))
        .port("in2", ("n1", "in1"))
        .port("in3", ("n2", "in1"))
        .port("in4", ("a4", "in4"));
    for k in 1..=16 {
        def = def.port(&format!("in{}", k + 4), ("v1", format!("in{}", k)));
    }
    for k in 1..=9 {
        def = def.port(&format!("out{}", k), ("a9", format!("out{}", k)));
    }
    def = def
        .wire(("n1", "out1"), ("a4", "in2"))
        .wire(("n2", "out1"), ("a4", "in3"))
        .wire(("a4", "out1"), ("b1", "in1"));
    for k in 1..=9 {
        def = def.wire(("b1", "out1"), ("a9", format!("in{}", k)));
    }
    for k in 1..=9 {
        def = def.wire(("v1", format!("out{}", k)), ("a9", format!("in{}", k + 9)));
    }
    def
}

pub(crate) fn install(catalog: &mut Catalog) {
    catalog.register(bus_segment("NOT8_SEG", "NOT8", [0, 0, 0, 0], 8));
    catalog.register(bus_segment("OR8_SEG", "OR8", [0, 0, 0, 1], 16));
    catalog.register(bus_segment("AND8_SEG", "AND8", [0, 0, 1, 0], 16));
    catalog.register(flag_segment("EQ8_SEG", "EQ8", [0, 0, 1, 1]));
    catalog.register(flag_segment("NEQ8_SEG", "NEQ8", [0, 1, 0, 0]));
    catalog.register(flag_segment("GT8_SEG", "GT8", [0, 1, 0, 1]));
    catalog.register(flag_segment("LT8_SEG", "LT8", [0, 1, 1, 0]));
    catalog.register(flag_segment("GTE8_SEG", "GTE8", [0, 1, 1, 1]));
    catalog.register(flag_segment("LTE8_SEG", "LTE8", [1, 0, 0, 0]));
    catalog.register(add8_segment());
}
