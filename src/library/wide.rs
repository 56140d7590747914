//! Bitwise vector circuits: independent lanes over 8- and 9-bit operands,
//! plus the ten-bus OR merge tree the ALU collects its segments with.

use crate::core::components::{Catalog, CircuitDef};

fn not8() -> CircuitDef {
    let mut def = CircuitDef::new("NOT8").children("NOT", (1..=8).map(|k| format!("n{}", k)));
    for k in 1..=8 {
        def = def
            .port(&format!("in{}", k), (format!("n{}", k), "in1"))
            .port(&format!("out{}", k), (format!("n{}", k), "out1"));
    }
    def
}

/// `lanes` independent two-input gates of `kind`; lane k pairs `in(k)` with
/// `in(k + lanes)` onto `out(k)`.
fn lane_gates(name: &str, kind: &str, lanes: usize) -> CircuitDef {
    let mut def = CircuitDef::new(name).children(kind, (1..=lanes).map(|k| format!("g{}", k)));
    for k in 1..=lanes {
        def = def
            .port(&format!("in{}", k), (format!("g{}", k), "in1"))
            .port(&format!("in{}", k + lanes), (format!("g{}", k), "in2"))
            .port(&format!("out{}", k), (format!("g{}", k), "out1"));
    }
    def
}

/// OR-merge of ten 9-bit buses. Buses land pairwise on o1..o5; o6..o9 fold
/// the partial results. Bus b occupies in(9b+1)..in(9b+9).
fn merge10() -> CircuitDef {
    let mut def = CircuitDef::new("MERGE10").children("OR9", (1..=9).map(|k| format!("o{}", k)));
    for i in 1..=90 {
        let child = (i - 1) / 18 + 1;
        let port = (i - 1) % 18 + 1;
        def = def.port(
            &format!("in{}", i),
            (format!("o{}", child), format!("in{}", port)),
        );
    }
    for k in 1..=9 {
        def = def.port(&format!("out{}", k), ("o9", format!("out{}", k)));
    }
    let folds = [
        ("o1", "o6", 0),
        ("o2", "o6", 9),
        ("o3", "o7", 0),
        ("o4", "o7", 9),
        ("o6", "o8", 0),
        ("o7", "o8", 9),
        ("o8", "o9", 0),
        ("o5", "o9", 9),
    ];
    for (source, target, base) in folds {
        for k in 1..=9 {
            def = def.wire(
                (source, format!("out{}", k)),
                (target, format!("in{}", base + k)),
            );
        }
    }
    def
}

pub(crate) fn install(catalog: &mut Catalog) {
    catalog.register(not8());
    catalog.register(lane_gates("AND8", "AND", 8));
    catalog.register(lane_gates("OR8", "OR", 8));
    catalog.register(lane_gates("AND9", "AND", 9));
    catalog.register(lane_gates("OR9", "OR", 9));
    catalog.register(merge10());
}
