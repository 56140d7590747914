// Organized module structure
pub mod components;
pub mod error;
pub mod execution;
pub mod ports;
pub mod types;

// Re-export all commonly used types
pub use components::{Catalog, CatalogEntry, ChildDecl, CircuitDef, GateModule, PortDecl, WireDecl};
pub use error::CircuitError;
pub use execution::{Circuit, Simulator, Wire};
pub use ports::PortBank;
pub use types::{Bit, PortId, PortRef, PortRole};
