//! Runs every ALU operation over sample operands and prints a JSON report.
//!
//! Usage: `RUST_LOG=debug cargo run --bin alu_demo`

use std::collections::BTreeMap;

use serde::Serialize;

use gatesim::library::standard_catalog;
use gatesim::{Bit, Simulator};

#[derive(Serialize)]
struct OpReport {
    op: &'static str,
    opcode: String,
    a: u8,
    b: u8,
    outputs: BTreeMap<String, Bit>,
}

#[derive(Serialize)]
struct RunReport {
    circuit: String,
    ports: usize,
    cycles: u64,
    operations: Vec<OpReport>,
}

const OPERATIONS: [(&str, u8); 10] = [
    ("NOT", 0b0000),
    ("OR", 0b0001),
    ("AND", 0b0010),
    ("EQ", 0b0011),
    ("NEQ", 0b0100),
    ("GT", 0b0101),
    ("LT", 0b0110),
    ("GTE", 0b0111),
    ("LTE", 0b1000),
    ("ADD", 0b1001),
];

fn assignment(opcode: u8, a: u8, b: u8) -> BTreeMap<String, Bit> {
    let mut map = BTreeMap::new();
    for k in 0..4 {
        map.insert(format!("in{}", k + 1), (opcode >> (3 - k)) & 1);
    }
    for k in 0..8 {
        map.insert(format!("in{}", 5 + k), (a >> (7 - k)) & 1);
        map.insert(format!("in{}", 13 + k), (b >> (7 - k)) & 1);
    }
    map
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let catalog = standard_catalog();
    let mut sim = Simulator::new(catalog.instantiate("ALU")?);

    let (a, b) = (0b0000_1111, 0b0000_0001);
    let mut operations = Vec::new();
    for (op, opcode) in OPERATIONS {
        let outputs = sim.run(&assignment(opcode, a, b))?;
        operations.push(OpReport {
            op,
            opcode: format!("{:04b}", opcode),
            a,
            b,
            outputs,
        });
    }

    let report = RunReport {
        circuit: sim.circuit().kind().to_string(),
        ports: sim.circuit().port_count(),
        cycles: sim.cycles(),
        operations,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
