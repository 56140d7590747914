use crate::core::types::Bit;

/// Descriptor for a primitive gate: named ports plus a boolean function.
///
/// The evaluator reads the input values as currently set and writes every
/// output. It must not inspect its previous outputs, allocate, or fail; the
/// engine guarantees `inputs.len()` and `outputs.len()` match the port lists.
#[derive(Clone)]
pub struct GateModule {
    /// Gate kind name used for catalogue registration
    pub name: String,
    /// Input port names, in declaration order
    pub inputs: Vec<String>,
    /// Output port names, in declaration order
    pub outputs: Vec<String>,
    /// Boolean function computing outputs from inputs
    pub evaluate: fn(&[Bit], &mut [Bit]),
}

impl GateModule {
    pub fn new(
        name: &str,
        inputs: &[&str],
        outputs: &[&str],
        evaluate: fn(&[Bit], &mut [Bit]),
    ) -> Self {
        Self {
            name: name.to_string(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            outputs: outputs.iter().map(|s| s.to_string()).collect(),
            evaluate,
        }
    }
}

impl std::fmt::Debug for GateModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateModule")
            .field("name", &self.name)
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .finish()
    }
}

fn eval_not(inputs: &[Bit], outputs: &mut [Bit]) {
    outputs[0] = 1 - inputs[0];
}

fn eval_and(inputs: &[Bit], outputs: &mut [Bit]) {
    outputs[0] = inputs[0] & inputs[1];
}

fn eval_or(inputs: &[Bit], outputs: &mut [Bit]) {
    outputs[0] = inputs[0] | inputs[1];
}

// The bridge is an identity stage, not sugar: it delays a signal by one
// cycle so a fan-out point presents the same snapshot to every consumer.
fn eval_bridge(inputs: &[Bit], outputs: &mut [Bit]) {
    outputs[0] = inputs[0];
}

/// The built-in primitive gates: NOT, AND, OR and the BRIDGE identity stage.
pub(crate) fn builtins() -> Vec<GateModule> {
    vec![
        GateModule::new("NOT", &["in1"], &["out1"], eval_not),
        GateModule::new("AND", &["in1", "in2"], &["out1"], eval_and),
        GateModule::new("OR", &["in1", "in2"], &["out1"], eval_or),
        GateModule::new("BRIDGE", &["in1"], &["out1"], eval_bridge),
    ]
}
