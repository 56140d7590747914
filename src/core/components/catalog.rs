use std::collections::HashMap;

use crate::core::components::def::CircuitDef;
use crate::core::components::gate::{builtins, GateModule};
use crate::core::error::CircuitError;
use crate::core::execution::circuit::Circuit;
use crate::core::execution::node::{CompositeNode, GateNode, Node, Wire};
use crate::core::ports::PortBank;
use crate::core::types::{PortId, PortRef, PortRole};

/// A registered circuit kind: either a primitive gate or a composite
/// definition.
#[derive(Debug, Clone)]
pub enum CatalogEntry {
    Gate(GateModule),
    Composite(CircuitDef),
}

impl CatalogEntry {
    pub fn is_gate(&self) -> bool {
        matches!(self, CatalogEntry::Gate(_))
    }
}

/// Registry of circuit kinds by name.
///
/// Registration never fails and never checks cross-references; all
/// construction errors surface when a kind is instantiated. Re-registering a
/// name replaces the previous entry.
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    /// An empty catalogue, without even the primitive gates.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// A catalogue preloaded with the built-in NOT, AND, OR and BRIDGE gates.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        for gate in builtins() {
            catalog.register_gate(gate);
        }
        catalog
    }

    /// Register a primitive gate kind.
    pub fn register_gate(&mut self, module: GateModule) {
        self.entries
            .insert(module.name.clone(), CatalogEntry::Gate(module));
    }

    /// Register a composite kind.
    pub fn register(&mut self, def: CircuitDef) {
        self.entries
            .insert(def.name.clone(), CatalogEntry::Composite(def));
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.entries.contains_key(kind)
    }

    pub fn get(&self, kind: &str) -> Option<&CatalogEntry> {
        self.entries.get(kind)
    }

    /// Build a runnable circuit from a registered kind.
    ///
    /// All construction errors are raised here; a successfully instantiated
    /// circuit can always be stepped.
    pub fn instantiate(&self, kind: &str) -> Result<Circuit, CircuitError> {
        let mut bank = PortBank::new();
        let root = self.build_node(kind, &mut bank)?;
        Ok(Circuit::new(kind, bank, root))
    }

    fn build_node(&self, kind: &str, bank: &mut PortBank) -> Result<Node, CircuitError> {
        match self.entries.get(kind) {
            None => Err(CircuitError::UnknownKind(kind.to_string())),
            Some(CatalogEntry::Gate(module)) => Ok(Node::Gate(self.build_gate(module, bank))),
            Some(CatalogEntry::Composite(def)) => {
                Ok(Node::Composite(self.build_composite(def, bank)?))
            }
        }
    }

    fn build_gate(&self, module: &GateModule, bank: &mut PortBank) -> GateNode {
        let mut ports = Vec::with_capacity(module.inputs.len() + module.outputs.len());
        let inputs: Vec<PortId> = module
            .inputs
            .iter()
            .map(|name| {
                let id = bank.alloc(PortRole::Input);
                ports.push((name.clone(), id));
                id
            })
            .collect();
        let outputs: Vec<PortId> = module
            .outputs
            .iter()
            .map(|name| {
                let id = bank.alloc(PortRole::Output);
                ports.push((name.clone(), id));
                id
            })
            .collect();
        GateNode::new(&module.name, module.evaluate, inputs, outputs, ports)
    }

    fn build_composite(
        &self,
        def: &CircuitDef,
        bank: &mut PortBank,
    ) -> Result<CompositeNode, CircuitError> {
        // Children are instantiated in declaration order: kind blocks in
        // declared order, names in list order. This order is the propagation
        // order and part of the contract.
        let mut children: Vec<(String, Node)> = Vec::new();
        for decl in &def.children {
            for name in &decl.names {
                if children.iter().any(|(existing, _)| existing == name) {
                    return Err(CircuitError::DuplicateChild(format!(
                        "{}.{}",
                        def.name, name
                    )));
                }
                let node = self.build_node(&decl.kind, bank)?;
                children.push((name.clone(), node));
            }
        }

        // Resolve the external port table. Aliased ports share the child
        // port's identity; unaliased ones get fresh ports, and fresh inputs
        // are recorded as the composite's primary inputs.
        let mut externals: Vec<(String, PortId)> = Vec::with_capacity(def.ports.len());
        let mut fresh_inputs: Vec<PortId> = Vec::new();
        for decl in &def.ports {
            let role = PortRole::from_name(&decl.name)
                .map_err(|_| CircuitError::BadPortName(format!("{}.{}", def.name, decl.name)))?;
            let id = match &decl.alias {
                Some((child, port)) => {
                    let node = Self::child(&children, child).ok_or_else(|| {
                        CircuitError::UnknownChild(format!("{}.{}", def.name, child))
                    })?;
                    node.port(port).ok_or_else(|| {
                        CircuitError::UnknownPort(format!("{}.{}.{}", def.name, child, port))
                    })?
                }
                None => {
                    let id = bank.alloc(role);
                    if role == PortRole::Input {
                        fresh_inputs.push(id);
                    }
                    id
                }
            };
            externals.push((decl.name.clone(), id));
        }

        // Wires are installed last so both endpoints can name any child port
        // or external port; their declaration order is the firing order, and
        // on a shared sink the last writer wins.
        let mut wires = Vec::with_capacity(def.wires.len());
        for decl in &def.wires {
            let source = Self::resolve(&def.name, &children, &externals, &decl.source)?;
            let sink = Self::resolve(&def.name, &children, &externals, &decl.sink)?;
            wires.push(Wire { source, sink });
        }

        Ok(CompositeNode::new(
            &def.name,
            children,
            wires,
            externals,
            fresh_inputs,
        ))
    }

    fn child<'a>(children: &'a [(String, Node)], name: &str) -> Option<&'a Node> {
        children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }

    fn resolve(
        kind: &str,
        children: &[(String, Node)],
        externals: &[(String, PortId)],
        port_ref: &PortRef,
    ) -> Result<PortId, CircuitError> {
        match port_ref {
            PortRef::External(name) => externals
                .iter()
                .find(|(external, _)| external == name)
                .map(|(_, id)| *id)
                .ok_or_else(|| CircuitError::UnknownPort(format!("{}.{}", kind, name))),
            PortRef::Child(child, port) => {
                let node = Self::child(children, child)
                    .ok_or_else(|| CircuitError::UnknownChild(format!("{}.{}", kind, child)))?;
                node.port(port).ok_or_else(|| {
                    CircuitError::UnknownPort(format!("{}.{}.{}", kind, child, port))
                })
            }
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_builtins()
    }
}
