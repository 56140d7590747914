//! The 8-bit ALU: twenty bridge fan-out stages broadcasting the input bus to
//! all ten opcode-gated segments, whose 9-bit buses are OR-merged onto the
//! outputs.
//!
//! Inputs: `in1..in4` opcode, `in5..in12` operand a (MSB-first),
//! `in13..in20` operand b. Outputs: `out1..out9`, the selected segment's
//! bus. For the bitwise operations `out1..out8` is the result MSB-first,
//! for the comparators `out1` is the flag, and for ADD `out1..out8` is the
//! sum LSB-first with the carry on `out9`.

use crate::core::components::{Catalog, CircuitDef};

/// Segment kinds in opcode order, with instance names and how much of the
/// 20-bit input bus each consumes.
const SEGMENTS: [(&str, &str, usize); 10] = [
    ("NOT8_SEG", "s_not", 12),
    ("OR8_SEG", "s_or", 20),
    ("AND8_SEG", "s_and", 20),
    ("EQ8_SEG", "s_eq", 20),
    ("NEQ8_SEG", "s_neq", 20),
    ("GT8_SEG", "s_gt", 20),
    ("LT8_SEG", "s_lt", 20),
    ("GTE8_SEG", "s_gte", 20),
    ("LTE8_SEG", "s_lte", 20),
    ("ADD8_SEG", "s_add", 20),
];

fn alu() -> CircuitDef {
    let mut def = CircuitDef::new("ALU");
    for (kind, name, _) in SEGMENTS {
        def = def.children(kind, [name]);
    }
    def = def
        .children("MERGE10", ["m1"])
        .children("BRIDGE", (1..=20).map(|k| format!("b{}", k)));
    for k in 1..=20 {
        def = def.port(&format!("in{}", k), (format!("b{}", k), "in1"));
    }
    for k in 1..=9 {
        def = def.port(&format!("out{}", k), ("m1", format!("out{}", k)));
    }
    for (bus, (_, name, fan_in)) in SEGMENTS.into_iter().enumerate() {
        for k in 1..=fan_in {
            def = def.wire((format!("b{}", k), "out1"), (name, format!("in{}", k)));
        }
        for k in 1..=9 {
            def = def.wire((name, format!("out{}", k)), ("m1", format!("in{}", 9 * bus + k)));
        }
    }
    def
}

pub(crate) fn install(catalog: &mut Catalog) {
    catalog.register(alu());
}
