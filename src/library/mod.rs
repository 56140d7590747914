//! Derived circuit library: everything from two-gate compounds up to the
//! 8-bit ALU, expressed as catalogue data over the primitive gates.
//!
//! Each definition is a connection table; no module here contains evaluation
//! logic. Multi-bit operands are MSB-first across `in1..inN` unless a
//! definition documents otherwise.

pub mod adder;
pub mod alu;
pub mod basic;
pub mod compare;
pub mod count;
pub mod reduce;
pub mod segment;
pub mod wide;

use crate::core::components::Catalog;

/// Register the whole derived library into an existing catalogue.
pub fn install(catalog: &mut Catalog) {
    basic::install(catalog);
    reduce::install(catalog);
    count::install(catalog);
    adder::install(catalog);
    wide::install(catalog);
    compare::install(catalog);
    segment::install(catalog);
    alu::install(catalog);
}

/// A catalogue holding the built-in gates plus the whole derived library.
pub fn standard_catalog() -> Catalog {
    let mut catalog = Catalog::with_builtins();
    install(&mut catalog);
    catalog
}
