pub mod core;
pub mod library;

// Re-export commonly used types
pub use crate::core::components::{Catalog, CircuitDef, GateModule};
pub use crate::core::error::CircuitError;
pub use crate::core::execution::{Circuit, Simulator};
pub use crate::core::types::{Bit, PortId, PortRef, PortRole};
