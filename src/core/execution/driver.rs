use std::collections::BTreeMap;

use crate::core::error::CircuitError;
use crate::core::execution::circuit::Circuit;
use crate::core::types::Bit;

/// Drives a circuit: applies an initial assignment and runs a bounded number
/// of propagation cycles.
///
/// The cycle budget defaults to 100, sized to exceed the combinational depth
/// of everything in the shipped library; deeper circuits can raise it with
/// [`Simulator::with_cycles`]. There is no internal termination criterion;
/// a run that has not settled simply reports whatever the outputs hold.
pub struct Simulator {
    circuit: Circuit,
    cycles: u64,
}

impl Simulator {
    pub const DEFAULT_CYCLES: u64 = 100;

    pub fn new(circuit: Circuit) -> Self {
        Self {
            circuit,
            cycles: Self::DEFAULT_CYCLES,
        }
    }

    /// Override the number of cycles a run executes.
    pub fn with_cycles(mut self, cycles: u64) -> Self {
        self.cycles = cycles;
        self
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn circuit_mut(&mut self) -> &mut Circuit {
        &mut self.circuit
    }

    pub fn into_circuit(self) -> Circuit {
        self.circuit
    }

    /// Apply the initial assignment and run the configured number of cycles,
    /// returning the final assignment of every external port.
    ///
    /// Initial values are re-applied on every cycle, not only the first, so
    /// primary inputs hold steady while the net-list settles. A key that is
    /// not an external port of the circuit fails here, before any cycle
    /// runs; propagation itself cannot fail.
    pub fn run(
        &mut self,
        initials: &BTreeMap<String, Bit>,
    ) -> Result<BTreeMap<String, Bit>, CircuitError> {
        let mut overrides = Vec::with_capacity(initials.len());
        for (name, value) in initials {
            let id = self
                .circuit
                .external_ports()
                .iter()
                .find(|(external, _)| external == name)
                .map(|(_, id)| *id)
                .ok_or_else(|| {
                    CircuitError::UnknownPort(format!("{}.{}", self.circuit.kind(), name))
                })?;
            overrides.push((id, (*value != 0) as Bit));
        }
        self.circuit.set_overrides(overrides);

        log::debug!(
            "running {} ({}) for {} cycles with {} driven ports",
            self.circuit.kind(),
            self.circuit.id(),
            self.cycles,
            initials.len()
        );
        for _ in 0..self.cycles {
            self.circuit.step();
        }
        Ok(self.circuit.snapshot())
    }

    /// Run one extra cycle with the current overrides still applied.
    pub fn step(&mut self) {
        self.circuit.step();
    }
}
