/// Error types for circuit construction and driver input resolution
///
/// Every variant carries the offending name, qualified with the declaring
/// circuit kind where that helps (`"XOR.in9"`). Propagation itself never
/// produces an error: once a circuit is built, `step()` is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CircuitError {
    /// Declared external port name does not start with `in` or `out`
    BadPortName(String),
    /// Wire endpoint, alias target, or driver key names a port that does not exist
    UnknownPort(String),
    /// Alias or wire endpoint names a child that does not exist
    UnknownChild(String),
    /// Two children of one composite share a name
    DuplicateChild(String),
    /// Catalogue has no gate or composite registered under the name
    UnknownKind(String),
}

impl std::fmt::Display for CircuitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CircuitError::BadPortName(name) => {
                write!(f, "Bad port name '{}': expected an 'in' or 'out' prefix", name)
            }
            CircuitError::UnknownPort(name) => write!(f, "Unknown port: {}", name),
            CircuitError::UnknownChild(name) => write!(f, "Unknown child: {}", name),
            CircuitError::DuplicateChild(name) => write!(f, "Duplicate child: {}", name),
            CircuitError::UnknownKind(name) => write!(f, "Unknown circuit kind: {}", name),
        }
    }
}

impl std::error::Error for CircuitError {}
