use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::network::init::InitPolicy;
use crate::network::network::Network;

/// Architecture of a network whose input and output widths come from the
/// dataset it will be trained on.
///
/// Fields:
/// - `hidden_layers` — neuron count of each hidden layer, input side first
/// - `init`          — how the initial weights are drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSpec {
    pub hidden_layers: Vec<usize>,
    pub init: InitPolicy,
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec {
            hidden_layers: vec![3],
            init: InitPolicy::default(),
        }
    }
}

impl NetworkSpec {
    /// `[input, hidden..., output]`.
    pub fn layer_sizes(&self, input_size: usize, output_size: usize) -> Vec<usize> {
        std::iter::once(input_size)
            .chain(self.hidden_layers.iter().copied())
            .chain(std::iter::once(output_size))
            .collect()
    }

    pub fn build(&self, input_size: usize, output_size: usize) -> Result<Network> {
        Network::create(&self.layer_sizes(input_size, output_size), &self.init)
    }
}
