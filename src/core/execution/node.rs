use crate::core::ports::PortBank;
use crate::core::types::{Bit, PortId};

/// A directed copy link between two ports.
///
/// A wire holds no state: one step copies the source value into the sink.
/// When several wires share a sink they fire in construction order and the
/// last writer wins; the engine neither merges nor rejects multi-driver
/// sinks.
#[derive(Debug, Clone, Copy)]
pub struct Wire {
    pub source: PortId,
    pub sink: PortId,
}

impl Wire {
    pub fn step(&self, bank: &mut PortBank) {
        let value = bank.get(self.source);
        bank.set(self.sink, value);
    }
}

/// An instantiated element of the net-list.
#[derive(Debug)]
pub enum Node {
    Gate(GateNode),
    Composite(CompositeNode),
}

impl Node {
    /// Look up one of this element's named ports (a gate's own ports, or a
    /// composite's external table).
    pub fn port(&self, name: &str) -> Option<PortId> {
        self.ports()
            .iter()
            .find(|(port, _)| port == name)
            .map(|(_, id)| *id)
    }

    /// The element's named ports in declaration order.
    pub fn ports(&self) -> &[(String, PortId)] {
        match self {
            Node::Gate(gate) => &gate.ports,
            Node::Composite(composite) => &composite.externals,
        }
    }

    /// The element's primary input ports: a gate's inputs, or the fresh
    /// (unaliased) inputs a composite created for itself.
    pub fn fresh_inputs(&self) -> &[PortId] {
        match self {
            Node::Gate(gate) => &gate.inputs,
            Node::Composite(composite) => &composite.fresh_inputs,
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Node::Gate(gate) => &gate.kind,
            Node::Composite(composite) => &composite.kind,
        }
    }

    /// Run one propagation cycle of this element.
    pub fn step(&mut self, bank: &mut PortBank) {
        match self {
            Node::Gate(gate) => gate.step(bank),
            Node::Composite(composite) => composite.step(bank),
        }
    }
}

/// An instantiated primitive gate.
///
/// The scratch buffers are allocated once at construction so a cycle runs
/// without allocating.
#[derive(Debug)]
pub struct GateNode {
    pub(crate) kind: String,
    evaluate: fn(&[Bit], &mut [Bit]),
    pub(crate) inputs: Vec<PortId>,
    pub(crate) outputs: Vec<PortId>,
    pub(crate) ports: Vec<(String, PortId)>,
    in_buf: Vec<Bit>,
    out_buf: Vec<Bit>,
}

impl GateNode {
    pub(crate) fn new(
        kind: &str,
        evaluate: fn(&[Bit], &mut [Bit]),
        inputs: Vec<PortId>,
        outputs: Vec<PortId>,
        ports: Vec<(String, PortId)>,
    ) -> Self {
        let in_buf = vec![0; inputs.len()];
        let out_buf = vec![0; outputs.len()];
        Self {
            kind: kind.to_string(),
            evaluate,
            inputs,
            outputs,
            ports,
            in_buf,
            out_buf,
        }
    }

    /// Evaluate the gate: read the input ports as currently set, write every
    /// output port. Never reads its own outputs.
    fn step(&mut self, bank: &mut PortBank) {
        for (slot, id) in self.in_buf.iter_mut().zip(&self.inputs) {
            *slot = bank.get(*id);
        }
        (self.evaluate)(&self.in_buf, &mut self.out_buf);
        for (slot, id) in self.out_buf.iter().zip(&self.outputs) {
            bank.set(*id, *slot);
        }
    }
}

/// An instantiated composite: named children in propagation order, internal
/// wires in firing order, and the resolved external port table.
#[derive(Debug)]
pub struct CompositeNode {
    pub(crate) kind: String,
    children: Vec<(String, Node)>,
    wires: Vec<Wire>,
    pub(crate) externals: Vec<(String, PortId)>,
    pub(crate) fresh_inputs: Vec<PortId>,
}

impl CompositeNode {
    pub(crate) fn new(
        kind: &str,
        children: Vec<(String, Node)>,
        wires: Vec<Wire>,
        externals: Vec<(String, PortId)>,
        fresh_inputs: Vec<PortId>,
    ) -> Self {
        Self {
            kind: kind.to_string(),
            children,
            wires,
            externals,
            fresh_inputs,
        }
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children
            .iter()
            .map(|(name, node)| (name.as_str(), node))
    }

    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// One propagation cycle: children evaluate in construction order (one
    /// inner cycle at every depth), then the wires fire in construction
    /// order. Wires never fire during the child-evaluation phase.
    fn step(&mut self, bank: &mut PortBank) {
        for (_, child) in &mut self.children {
            child.step(bank);
        }
        for wire in &self.wires {
            wire.step(bank);
        }
    }
}
