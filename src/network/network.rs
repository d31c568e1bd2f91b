use crate::{
    activation::activation::ActivationFunction,
    error::{NetworkError, Result},
    layers::dense::Layer,
    network::init::InitPolicy,
};

/// A feedforward network. The input layer is implicit; `layers` holds every
/// hidden layer followed by the output layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from `[input, hidden..., output]` sizes.
    ///
    /// Hidden layers use a sigmoid activation; the output layer is linear.
    pub fn create(layer_sizes: &[usize], init: &InitPolicy) -> Result<Network> {
        if layer_sizes.len() < 2 {
            return Err(NetworkError::InvalidTopology(format!(
                "need at least an input and an output size, got {layer_sizes:?}"
            )));
        }
        if let Some(i) = layer_sizes.iter().position(|&s| s == 0) {
            return Err(NetworkError::InvalidTopology(format!(
                "layer {i} of {layer_sizes:?} has no neurons"
            )));
        }

        let weights = init.weights_for(layer_sizes)?;
        let last = weights.len() - 1;
        let layers = weights.into_iter()
            .enumerate()
            .map(|(i, w)| {
                let activation = if i == last {
                    ActivationFunction::Identity
                } else {
                    ActivationFunction::Sigmoid
                };
                Layer::new(w, activation)
            })
            .collect();
        Ok(Network { layers })
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, Layer::input_size)
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, Layer::size)
    }

    /// `[input, hidden..., output]`, the same shape `create` was given.
    pub fn layer_sizes(&self) -> Vec<usize> {
        std::iter::once(self.input_size())
            .chain(self.layers.iter().map(Layer::size))
            .collect()
    }

    /// Snapshot of every weight, indexed `[layer][neuron][weight]`.
    pub fn weights(&self) -> Vec<Vec<Vec<f64>>> {
        self.layers.iter()
            .map(|layer| layer.neurons.iter().map(|n| n.weights.clone()).collect())
            .collect()
    }

    /// Output-layer values recorded by the most recent forward pass.
    pub fn output_values(&self) -> Vec<f64> {
        self.layers.last().map(Layer::outputs).unwrap_or_default()
    }

    /// Squared output-layer error left by the most recent backward pass.
    pub fn output_squared_error(&self) -> f64 {
        self.layers.last().map_or(0.0, Layer::squared_error)
    }

    /// Forward pass; records every neuron's output for backprop.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.check_has_layers()?;
        check_len("input vector", self.input_size(), input.len())?;
        let mut current = input.to_vec();
        for layer in &mut self.layers {
            current = layer.feed_from(&current);
        }
        Ok(current)
    }

    /// Backward pass for one sample, using the outputs recorded by the
    /// preceding `forward(input)`.
    ///
    /// Errors and deltas are computed for the whole network, output layer
    /// first, before any weight moves. Only then is every weight updated.
    pub fn backward(&mut self, input: &[f64], target: &[f64], learning_rate: f64) -> Result<()> {
        self.check_has_layers()?;
        check_len("input vector", self.input_size(), input.len())?;
        check_len("target vector", self.output_size(), target.len())?;

        let last = self.layers.len() - 1;
        for i in (0..=last).rev() {
            // Split so layer i can read layer i+1 (errors set, weights untouched)
            // and layer i-1 (outputs from the forward pass).
            let (upstream, rest) = self.layers.split_at_mut(i);
            let (layer, downstream) = rest.split_at_mut(1);
            let layer = &mut layer[0];

            if i == last {
                layer.compute_output_errors(target);
            } else {
                layer.compute_hidden_errors(&downstream[0]);
            }

            match upstream.last() {
                Some(prev) => layer.compute_deltas(&prev.outputs(), learning_rate),
                None => layer.compute_deltas(input, learning_rate),
            }
        }

        for layer in &mut self.layers {
            layer.apply_deltas();
        }
        Ok(())
    }

    /// `layers` is public, so a hand-built network may have none.
    fn check_has_layers(&self) -> Result<()> {
        if self.layers.is_empty() {
            return Err(NetworkError::InvalidTopology("network has no layers".into()));
        }
        Ok(())
    }
}

fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(NetworkError::DimensionMismatch { what, expected, actual });
    }
    Ok(())
}
