/// One unit of a layer.
///
/// `weights` holds one entry per incoming signal followed by the bias weight,
/// so `weights.len() == incoming + 1`. `deltas` mirrors that layout and is
/// only meaningful after a backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    pub weights: Vec<f64>,
    pub output: f64,
    pub error: f64,
    pub deltas: Vec<f64>,
}

impl Neuron {
    pub fn new(weights: Vec<f64>) -> Neuron {
        let deltas = vec![0.0; weights.len()];
        Neuron {
            weights,
            output: 0.0,
            error: 0.0,
            deltas,
        }
    }

    /// Number of incoming signals, excluding the bias.
    pub fn incoming(&self) -> usize {
        self.weights.len().saturating_sub(1)
    }

    pub fn bias(&self) -> f64 {
        self.weights.last().copied().unwrap_or(0.0)
    }

    /// Weighted sum of `inputs` plus the bias.
    pub fn net(&self, inputs: &[f64]) -> f64 {
        debug_assert_eq!(inputs.len(), self.incoming());
        self.weights.iter()
            .zip(inputs.iter())
            .fold(self.bias(), |acc, (w, x)| acc + w * x)
    }

    /// Fills `deltas` as `learning_rate * error * input`, bias delta last.
    pub fn compute_deltas(&mut self, inputs: &[f64], learning_rate: f64) {
        let scale = learning_rate * self.error;
        self.deltas.clear();
        self.deltas.extend(inputs.iter().map(|x| scale * x));
        self.deltas.push(scale);
    }

    pub fn apply_deltas(&mut self) {
        for (w, d) in self.weights.iter_mut().zip(self.deltas.iter()) {
            *w += d;
        }
    }
}
