use crate::{activation::activation::ActivationFunction, network::neuron::Neuron};

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
    pub activator: ActivationFunction,
}

impl Layer {
    /// Builds a layer from one weight vector per neuron (bias last).
    pub fn new(weights: Vec<Vec<f64>>, activation: ActivationFunction) -> Layer {
        Layer {
            neurons: weights.into_iter().map(Neuron::new).collect(),
            activator: activation,
        }
    }

    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    /// Number of signals each neuron expects from the previous layer.
    pub fn input_size(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::incoming)
    }

    /// Computes and records every neuron's output for `input`.
    pub fn feed_from(&mut self, input: &[f64]) -> Vec<f64> {
        let activator = self.activator;
        self.neurons.iter_mut()
            .map(|neuron| {
                neuron.output = activator.function(neuron.net(input));
                neuron.output
            })
            .collect()
    }

    /// Outputs recorded by the last `feed_from`.
    pub fn outputs(&self) -> Vec<f64> {
        self.neurons.iter().map(|n| n.output).collect()
    }

    /// Output-layer error: the plain `target - output` difference, with no
    /// activation derivative applied.
    pub fn compute_output_errors(&mut self, target: &[f64]) {
        for (neuron, t) in self.neurons.iter_mut().zip(target.iter()) {
            neuron.error = t - neuron.output;
        }
    }

    /// Hidden-layer error, back-propagated from `downstream` (the next layer
    /// toward the output). `downstream` must still hold its pre-update
    /// weights and already carry its own errors.
    pub fn compute_hidden_errors(&mut self, downstream: &Layer) {
        let activator = self.activator;
        for (j, neuron) in self.neurons.iter_mut().enumerate() {
            let propagated: f64 = downstream.neurons.iter()
                .map(|k| k.weights[j] * k.error)
                .sum();
            neuron.error = activator.derivative_from_output(neuron.output) * propagated;
        }
    }

    /// Fills every neuron's deltas from this layer's `inputs`.
    pub fn compute_deltas(&mut self, inputs: &[f64], learning_rate: f64) {
        for neuron in &mut self.neurons {
            neuron.compute_deltas(inputs, learning_rate);
        }
    }

    pub fn apply_deltas(&mut self) {
        for neuron in &mut self.neurons {
            neuron.apply_deltas();
        }
    }

    /// Sum of squared neuron errors.
    pub fn squared_error(&self) -> f64 {
        self.neurons.iter().map(|n| n.error * n.error).sum()
    }
}
