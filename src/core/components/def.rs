use crate::core::types::PortRef;

/// One block of child declarations: a kind plus the instance names to create.
///
/// Blocks are kept in declaration order and names in list order because the
/// flattened sequence is the propagation order of the composite. It is a
/// declarative order, not a topological sort of the data flow.
#[derive(Debug, Clone)]
pub struct ChildDecl {
    pub kind: String,
    pub names: Vec<String>,
}

/// One declared external port of a composite.
///
/// With an alias the external port *is* the named child's port (shared
/// identity, no copy). Without one a fresh port is created; fresh inputs are
/// the composite's primary inputs and get re-asserted at the tail of each
/// cycle.
#[derive(Debug, Clone)]
pub struct PortDecl {
    pub name: String,
    pub alias: Option<(String, String)>,
}

/// A directed internal wire between two port references.
#[derive(Debug, Clone)]
pub struct WireDecl {
    pub source: PortRef,
    pub sink: PortRef,
}

/// Declarative description of a composite circuit: ordered children, the
/// external port table, and ordered internal wires.
///
/// A definition is pure data. It references other kinds by catalogue name and
/// is only checked when instantiated, so definitions can be registered in any
/// order.
#[derive(Debug, Clone)]
pub struct CircuitDef {
    pub name: String,
    pub children: Vec<ChildDecl>,
    pub ports: Vec<PortDecl>,
    pub wires: Vec<WireDecl>,
}

impl CircuitDef {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            children: Vec::new(),
            ports: Vec::new(),
            wires: Vec::new(),
        }
    }

    /// Declare a block of children of one kind.
    pub fn children<I, S>(mut self, kind: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children.push(ChildDecl {
            kind: kind.to_string(),
            names: names.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Declare an external port aliased to a child's port.
    pub fn port<C, P>(mut self, name: &str, alias: (C, P)) -> Self
    where
        C: Into<String>,
        P: Into<String>,
    {
        self.ports.push(PortDecl {
            name: name.to_string(),
            alias: Some((alias.0.into(), alias.1.into())),
        });
        self
    }

    /// Declare a fresh owned external port.
    pub fn port_owned(mut self, name: &str) -> Self {
        self.ports.push(PortDecl {
            name: name.to_string(),
            alias: None,
        });
        self
    }

    /// Declare an internal wire copying `source` into `sink` each cycle.
    pub fn wire(mut self, source: impl Into<PortRef>, sink: impl Into<PortRef>) -> Self {
        self.wires.push(WireDecl {
            source: source.into(),
            sink: sink.into(),
        });
        self
    }
}
