//! End-to-end scenarios over the wide circuits and the ALU, including
//! randomized differential checks against integer references.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gatesim::library::standard_catalog;
use gatesim::{Bit, Simulator};

/// Spread `value` MSB-first over `in{first}..in{first + 7}`.
fn set_byte(assignment: &mut BTreeMap<String, Bit>, first: usize, value: u8) {
    for offset in 0..8 {
        let bit = (value >> (7 - offset)) & 1;
        assignment.insert(format!("in{}", first + offset), bit);
    }
}

/// Operand pair for the 16-input circuits: a on in1..in8, b on in9..in16.
fn operand_pair(a: u8, b: u8) -> BTreeMap<String, Bit> {
    let mut assignment = BTreeMap::new();
    set_byte(&mut assignment, 1, a);
    set_byte(&mut assignment, 9, b);
    assignment
}

/// Sum read back LSB-first from out1..out8.
fn read_sum(out: &BTreeMap<String, Bit>) -> u8 {
    (0..8).fold(0, |sum, k| sum | (out[&format!("out{}", k + 1)] << k))
}

/// Result read back MSB-first from out1..out8.
fn read_msb_first(out: &BTreeMap<String, Bit>) -> u8 {
    (0..8).fold(0, |result, k| {
        result | (out[&format!("out{}", k + 1)] << (7 - k))
    })
}

fn sample_pairs(count: usize, seed: u64) -> Vec<(u8, u8)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pairs = vec![
        (0x00, 0x00),
        (0xff, 0xff),
        (0x00, 0xff),
        (0xff, 0x00),
        (0xaa, 0xaa),
        (0xaa, 0xab),
        (0x80, 0x7f),
    ];
    while pairs.len() < count {
        let pair: (u8, u8) = (rng.gen(), rng.gen());
        // Keep a healthy share of equal operands in the mix.
        pairs.push(pair);
        pairs.push((pair.0, pair.0));
    }
    pairs
}

#[test]
fn eq8_matches_equality() {
    let catalog = standard_catalog();
    let mut sim = Simulator::new(catalog.instantiate("EQ8").unwrap());
    assert_eq!(sim.run(&operand_pair(0b1010_1010, 0b1010_1010)).unwrap()["out1"], 1);
    assert_eq!(sim.run(&operand_pair(0b1010_1010, 0b1010_1011)).unwrap()["out1"], 0);
    for (a, b) in sample_pairs(31, 11) {
        let out = sim.run(&operand_pair(a, b)).unwrap();
        assert_eq!(out["out1"], (a == b) as Bit, "EQ8({:#04x}, {:#04x})", a, b);
    }
}

#[test]
fn neq8_matches_inequality() {
    let catalog = standard_catalog();
    let mut sim = Simulator::new(catalog.instantiate("NEQ8").unwrap());
    for (a, b) in sample_pairs(31, 13) {
        let out = sim.run(&operand_pair(a, b)).unwrap();
        assert_eq!(out["out1"], (a != b) as Bit, "NEQ8({:#04x}, {:#04x})", a, b);
    }
}

#[test]
fn magnitude_comparators_match_integer_order() {
    let catalog = standard_catalog();
    let mut gt = Simulator::new(catalog.instantiate("GT8").unwrap());
    let mut lt = Simulator::new(catalog.instantiate("LT8").unwrap());
    let mut gte = Simulator::new(catalog.instantiate("GTE8").unwrap());
    let mut lte = Simulator::new(catalog.instantiate("LTE8").unwrap());
    for (a, b) in sample_pairs(25, 17) {
        let assignment = operand_pair(a, b);
        assert_eq!(
            gt.run(&assignment).unwrap()["out1"],
            (a > b) as Bit,
            "GT8({:#04x}, {:#04x})",
            a,
            b
        );
        assert_eq!(
            lt.run(&assignment).unwrap()["out1"],
            (a < b) as Bit,
            "LT8({:#04x}, {:#04x})",
            a,
            b
        );
        assert_eq!(
            gte.run(&assignment).unwrap()["out1"],
            (a >= b) as Bit,
            "GTE8({:#04x}, {:#04x})",
            a,
            b
        );
        assert_eq!(
            lte.run(&assignment).unwrap()["out1"],
            (a <= b) as Bit,
            "LTE8({:#04x}, {:#04x})",
            a,
            b
        );
    }
}

#[test]
fn add8_reference_scenarios() {
    let catalog = standard_catalog();
    let mut sim = Simulator::new(catalog.instantiate("ADD8").unwrap());

    let out = sim.run(&operand_pair(0b0000_0001, 0b0000_0001)).unwrap();
    assert_eq!(read_sum(&out), 0b0000_0010);
    assert_eq!(out["out9"], 0);

    let out = sim.run(&operand_pair(0b1111_1111, 0b0000_0001)).unwrap();
    assert_eq!(read_sum(&out), 0b0000_0000);
    assert_eq!(out["out9"], 1);
}

#[test]
fn add8_matches_integer_addition() {
    let catalog = standard_catalog();
    let mut sim = Simulator::new(catalog.instantiate("ADD8").unwrap());
    for (a, b) in sample_pairs(33, 19) {
        let out = sim.run(&operand_pair(a, b)).unwrap();
        let total = a as u16 + b as u16;
        assert_eq!(read_sum(&out), (total & 0xff) as u8, "ADD8({:#04x}, {:#04x})", a, b);
        assert_eq!(out["out9"], (total > 0xff) as Bit, "carry of {:#04x} + {:#04x}", a, b);
    }
}

/// ALU assignment: opcode on in1..in4, a on in5..in12, b on in13..in20.
fn alu_assignment(opcode: u8, a: u8, b: u8) -> BTreeMap<String, Bit> {
    let mut assignment = BTreeMap::new();
    for k in 0..4 {
        assignment.insert(format!("in{}", k + 1), (opcode >> (3 - k)) & 1);
    }
    set_byte(&mut assignment, 5, a);
    set_byte(&mut assignment, 13, b);
    assignment
}

const OP_NOT: u8 = 0b0000;
const OP_OR: u8 = 0b0001;
const OP_AND: u8 = 0b0010;
const OP_EQ: u8 = 0b0011;
const OP_NEQ: u8 = 0b0100;
const OP_GT: u8 = 0b0101;
const OP_LT: u8 = 0b0110;
const OP_GTE: u8 = 0b0111;
const OP_LTE: u8 = 0b1000;
const OP_ADD: u8 = 0b1001;

fn assert_flag_bus(out: &BTreeMap<String, Bit>, flag: Bit, context: &str) {
    assert_eq!(out["out1"], flag, "{}", context);
    for k in 2..=9 {
        assert_eq!(out[&format!("out{}", k)], 0, "{} lane {}", context, k);
    }
}

#[test]
fn alu_add_path_scenario() {
    let catalog = standard_catalog();
    let mut sim = Simulator::new(catalog.instantiate("ALU").unwrap());
    let out = sim
        .run(&alu_assignment(OP_ADD, 0b0000_1111, 0b0000_0001))
        .unwrap();
    assert_eq!(read_sum(&out), 0b0001_0000);
    assert_eq!(out["out9"], 0);
}

#[test]
fn alu_bitwise_operations() {
    let catalog = standard_catalog();
    let mut sim = Simulator::new(catalog.instantiate("ALU").unwrap());
    for (a, b) in [(0x5a, 0x0f), (0x00, 0xff), (0xc3, 0x3c)] {
        let out = sim.run(&alu_assignment(OP_NOT, a, b)).unwrap();
        assert_eq!(read_msb_first(&out), !a, "NOT {:#04x}", a);
        assert_eq!(out["out9"], 0);

        let out = sim.run(&alu_assignment(OP_OR, a, b)).unwrap();
        assert_eq!(read_msb_first(&out), a | b, "{:#04x} OR {:#04x}", a, b);
        assert_eq!(out["out9"], 0);

        let out = sim.run(&alu_assignment(OP_AND, a, b)).unwrap();
        assert_eq!(read_msb_first(&out), a & b, "{:#04x} AND {:#04x}", a, b);
        assert_eq!(out["out9"], 0);
    }
}

#[test]
fn alu_comparison_operations() {
    let catalog = standard_catalog();
    let mut sim = Simulator::new(catalog.instantiate("ALU").unwrap());
    for (a, b) in [(0x10, 0x10), (0x10, 0x11), (0x80, 0x01)] {
        let out = sim.run(&alu_assignment(OP_EQ, a, b)).unwrap();
        assert_flag_bus(&out, (a == b) as Bit, "EQ");
        let out = sim.run(&alu_assignment(OP_NEQ, a, b)).unwrap();
        assert_flag_bus(&out, (a != b) as Bit, "NEQ");
        let out = sim.run(&alu_assignment(OP_GT, a, b)).unwrap();
        assert_flag_bus(&out, (a > b) as Bit, "GT");
        let out = sim.run(&alu_assignment(OP_LT, a, b)).unwrap();
        assert_flag_bus(&out, (a < b) as Bit, "LT");
        let out = sim.run(&alu_assignment(OP_GTE, a, b)).unwrap();
        assert_flag_bus(&out, (a >= b) as Bit, "GTE");
        let out = sim.run(&alu_assignment(OP_LTE, a, b)).unwrap();
        assert_flag_bus(&out, (a <= b) as Bit, "LTE");
    }
}

#[test]
fn alu_add_matches_integer_addition() {
    let catalog = standard_catalog();
    let mut sim = Simulator::new(catalog.instantiate("ALU").unwrap());
    for (a, b) in [(0x01, 0x01), (0xff, 0x01), (0x7f, 0x7f), (0x90, 0x90)] {
        let out = sim.run(&alu_assignment(OP_ADD, a, b)).unwrap();
        let total = a as u16 + b as u16;
        assert_eq!(read_sum(&out), (total & 0xff) as u8, "{:#04x} + {:#04x}", a, b);
        assert_eq!(out["out9"], (total > 0xff) as Bit);
    }
}

#[test]
fn alu_settles_within_the_default_budget() {
    let catalog = standard_catalog();
    let mut sim = Simulator::new(catalog.instantiate("ALU").unwrap());
    let settled = sim.run(&alu_assignment(OP_ADD, 0xff, 0x01)).unwrap();
    sim.step();
    assert_eq!(sim.circuit().snapshot(), settled);
}

#[test]
fn alu_is_deterministic_across_instances() {
    let catalog = standard_catalog();
    let assignment = alu_assignment(OP_GT, 0x90, 0x0f);
    let mut first = Simulator::new(catalog.instantiate("ALU").unwrap());
    let mut second = Simulator::new(catalog.instantiate("ALU").unwrap());
    assert_eq!(first.run(&assignment).unwrap(), second.run(&assignment).unwrap());
}
