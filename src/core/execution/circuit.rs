use std::collections::BTreeMap;

use uuid::Uuid;

use crate::core::error::CircuitError;
use crate::core::execution::node::Node;
use crate::core::ports::PortBank;
use crate::core::types::{Bit, PortId};

/// A fully instantiated, runnable circuit.
///
/// Owns the port arena for the whole hierarchy plus the root element. The
/// driver's initial-value overrides live here: they are applied at the head
/// of every cycle and the entries landing on fresh primary inputs are
/// re-asserted at the tail, so intermediate wiring settling through the
/// net-list can never clobber a driven input between cycles.
#[derive(Debug)]
pub struct Circuit {
    id: Uuid,
    kind: String,
    bank: PortBank,
    root: Node,
    overrides: Vec<(PortId, Bit)>,
    fresh_inputs: Vec<PortId>,
}

impl Circuit {
    pub(crate) fn new(kind: &str, bank: PortBank, root: Node) -> Self {
        let id = Uuid::new_v4();
        let fresh_inputs = root.fresh_inputs().to_vec();
        log::debug!(
            "instantiated {} as circuit {} ({} ports, {} external)",
            kind,
            id,
            bank.len(),
            root.ports().len()
        );
        Self {
            id,
            kind: kind.to_string(),
            bank,
            root,
            overrides: Vec::new(),
            fresh_inputs,
        }
    }

    /// Instance identifier, for log correlation.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The catalogue kind this circuit was instantiated from.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Total number of ports in the arena, across all depths.
    pub fn port_count(&self) -> usize {
        self.bank.len()
    }

    /// The root element's external port table, in declaration order.
    pub fn external_ports(&self) -> &[(String, PortId)] {
        self.root.ports()
    }

    fn external(&self, name: &str) -> Result<PortId, CircuitError> {
        self.root
            .port(name)
            .ok_or_else(|| CircuitError::UnknownPort(format!("{}.{}", self.kind, name)))
    }

    /// Read an external port by name.
    pub fn value(&self, name: &str) -> Result<Bit, CircuitError> {
        Ok(self.bank.get(self.external(name)?))
    }

    /// Write an external port by name. Inputs and outputs accept the same
    /// write; the distinction between the two is purely the name prefix.
    pub fn set_value(&mut self, name: &str, value: Bit) -> Result<(), CircuitError> {
        let id = self.external(name)?;
        self.bank.set(id, value);
        Ok(())
    }

    /// Replace the per-cycle overrides with a resolved assignment.
    pub(crate) fn set_overrides(&mut self, overrides: Vec<(PortId, Bit)>) {
        self.overrides = overrides;
    }

    /// Run one propagation cycle.
    ///
    /// Phases, in order: apply the overrides, evaluate the hierarchy (each
    /// child runs one inner cycle, recursively), fire the wires, then
    /// re-assert the overridden fresh primary inputs. There is no
    /// convergence check; callers decide how many cycles to run.
    pub fn step(&mut self) {
        for (id, value) in &self.overrides {
            self.bank.set(*id, *value);
        }
        self.root.step(&mut self.bank);
        for (id, value) in &self.overrides {
            if self.fresh_inputs.contains(id) {
                self.bank.set(*id, *value);
            }
        }
    }

    /// Snapshot every external port by name.
    ///
    /// Several external names may publish the same underlying port; each name
    /// appears with that shared value.
    pub fn snapshot(&self) -> BTreeMap<String, Bit> {
        self.root
            .ports()
            .iter()
            .map(|(name, id)| (name.clone(), self.bank.get(*id)))
            .collect()
    }

    /// Direct arena access for aliasing checks and tests.
    pub fn port_value(&self, id: PortId) -> Bit {
        self.bank.get(id)
    }

    pub(crate) fn root(&self) -> &Node {
        &self.root
    }
}
