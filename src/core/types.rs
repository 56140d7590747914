use crate::core::error::CircuitError;

/// A signal level. Ports only ever hold 0 or 1; there is no tri-state or
/// "unknown" level.
pub type Bit = u8;

/// Handle to a port in a circuit's [`PortBank`](crate::core::ports::PortBank).
///
/// Handles are stable for the lifetime of the circuit that allocated them.
/// Two handles compare equal exactly when they denote the same port, which is
/// how composite aliasing works: a composite's external port and the child
/// port it aliases share one `PortId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortId(pub(crate) usize);

impl PortId {
    /// Index of this port in its owning bank.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Whether a port is an input or an output of its owning element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortRole {
    Input,
    Output,
}

impl PortRole {
    /// Classify a declared external port name by its prefix.
    ///
    /// Names starting with `in` are inputs, names starting with `out` are
    /// outputs; anything else is a construction error carrying the offending
    /// name.
    pub fn from_name(name: &str) -> Result<Self, CircuitError> {
        if name.starts_with("in") {
            Ok(PortRole::Input)
        } else if name.starts_with("out") {
            Ok(PortRole::Output)
        } else {
            Err(CircuitError::BadPortName(name.to_string()))
        }
    }
}

/// A by-name reference to a port inside a composite declaration.
///
/// Wire endpoints refer either to a port of a named child or to one of the
/// composite's own external ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortRef {
    /// One of the declaring composite's own external ports.
    External(String),
    /// A port of a named child element.
    Child(String, String),
}

impl From<&str> for PortRef {
    fn from(name: &str) -> Self {
        PortRef::External(name.to_string())
    }
}

impl From<String> for PortRef {
    fn from(name: String) -> Self {
        PortRef::External(name)
    }
}

impl<C: Into<String>, P: Into<String>> From<(C, P)> for PortRef {
    fn from((child, port): (C, P)) -> Self {
        PortRef::Child(child.into(), port.into())
    }
}
