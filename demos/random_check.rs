//! Randomized differential check: drives ADD8 and the comparators with
//! random operands on independent simulator instances, in parallel, and
//! compares every output against the integer reference.
//!
//! Usage: `cargo run --release --bin random_check [cases-per-circuit]`

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use gatesim::library::standard_catalog;
use gatesim::{Bit, Simulator};

fn operand_pair(a: u8, b: u8) -> BTreeMap<String, Bit> {
    let mut map = BTreeMap::new();
    for k in 0..8 {
        map.insert(format!("in{}", 1 + k), (a >> (7 - k)) & 1);
        map.insert(format!("in{}", 9 + k), (b >> (7 - k)) & 1);
    }
    map
}

fn read_sum(out: &BTreeMap<String, Bit>) -> u16 {
    let low = (0..8).fold(0u16, |sum, k| sum | ((out[&format!("out{}", k + 1)] as u16) << k));
    low | ((out["out9"] as u16) << 8)
}

/// Run one circuit kind over the case list on a fresh simulator per thread
/// chunk; returns the number of mismatches.
fn check(kind: &str, cases: &[(u8, u8)], reference: fn(u8, u8, &BTreeMap<String, Bit>) -> bool) -> usize {
    cases
        .par_chunks(32)
        .map(|chunk| {
            let catalog = standard_catalog();
            let mut sim = Simulator::new(catalog.instantiate(kind).expect("library kind"));
            let mut bad = 0;
            for (a, b) in chunk {
                let out = sim.run(&operand_pair(*a, *b)).expect("run");
                if !reference(*a, *b, &out) {
                    log::warn!("{} mismatch for a={:#04x} b={:#04x}", kind, a, b);
                    bad += 1;
                }
            }
            bad
        })
        .sum()
}

fn main() {
    env_logger::init();

    let cases: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(256);
    let mut rng = StdRng::seed_from_u64(0xa1u64);
    let pairs: Vec<(u8, u8)> = (0..cases).map(|_| (rng.gen(), rng.gen())).collect();

    let checks: [(&str, fn(u8, u8, &BTreeMap<String, Bit>) -> bool); 6] = [
        ("ADD8", |a, b, out| read_sum(out) == a as u16 + b as u16),
        ("EQ8", |a, b, out| out["out1"] == (a == b) as Bit),
        ("NEQ8", |a, b, out| out["out1"] == (a != b) as Bit),
        ("GT8", |a, b, out| out["out1"] == (a > b) as Bit),
        ("LT8", |a, b, out| out["out1"] == (a < b) as Bit),
        ("GTE8", |a, b, out| out["out1"] == (a >= b) as Bit),
    ];

    let mut failures = 0;
    for (kind, reference) in checks {
        let bad = check(kind, &pairs, reference);
        println!("{:>5}: {} cases, {} mismatches", kind, pairs.len(), bad);
        failures += bad;
    }

    if failures > 0 {
        eprintln!("{} mismatches", failures);
        std::process::exit(1);
    }
    println!("all circuits agree with the integer reference");
}
