use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};

/// Half-width of the default uniform weight range.
pub const DEFAULT_INIT_RANGE: f64 = 0.05;

/// How the builder fills each neuron's weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InitPolicy {
    /// Uniform in `[-range, range)` from the thread RNG.
    Uniform { range: f64 },
    /// Uniform in `[-range, range)` from an RNG seeded with `seed`.
    Seeded { range: f64, seed: u64 },
    /// Explicit weights, indexed `[layer][neuron][weight]` with the bias last.
    Preset { weights: Vec<Vec<Vec<f64>>> },
}

impl Default for InitPolicy {
    fn default() -> Self {
        InitPolicy::Uniform { range: DEFAULT_INIT_RANGE }
    }
}

impl InitPolicy {
    /// The fixed weights for a `[3, 3, 2]` network used as the reference
    /// fixture for the training walkthrough.
    pub fn assignment() -> InitPolicy {
        InitPolicy::Preset {
            weights: vec![
                vec![
                    vec![0.74, 0.80, 0.35, 0.90],
                    vec![0.13, 0.40, 0.97, 0.45],
                    vec![0.68, 0.10, 0.96, 0.36],
                ],
                vec![
                    vec![0.35, 0.50, 0.90, 0.98],
                    vec![0.80, 0.13, 0.80, 0.92],
                ],
            ],
        }
    }

    /// Produces weights for every layer after the input, shaped by
    /// `layer_sizes` (already validated by the caller).
    pub(crate) fn weights_for(&self, layer_sizes: &[usize]) -> Result<Vec<Vec<Vec<f64>>>> {
        match self {
            InitPolicy::Uniform { range } => {
                Ok(uniform_weights(layer_sizes, *range, &mut rand::thread_rng()))
            }
            InitPolicy::Seeded { range, seed } => {
                Ok(uniform_weights(layer_sizes, *range, &mut StdRng::seed_from_u64(*seed)))
            }
            InitPolicy::Preset { weights } => {
                check_preset_shape(weights, layer_sizes)?;
                Ok(weights.clone())
            }
        }
    }
}

fn uniform_weights<R: Rng>(layer_sizes: &[usize], range: f64, rng: &mut R) -> Vec<Vec<Vec<f64>>> {
    layer_sizes.windows(2)
        .map(|pair| {
            let (incoming, size) = (pair[0], pair[1]);
            (0..size)
                .map(|_| {
                    (0..=incoming)
                        .map(|_| sample(rng, range))
                        .collect()
                })
                .collect()
        })
        .collect()
}

fn sample<R: Rng>(rng: &mut R, range: f64) -> f64 {
    if range > 0.0 {
        rng.gen_range(-range..range)
    } else {
        0.0
    }
}

fn check_preset_shape(weights: &[Vec<Vec<f64>>], layer_sizes: &[usize]) -> Result<()> {
    let expected_layers = layer_sizes.len() - 1;
    if weights.len() != expected_layers {
        return Err(NetworkError::PresetShapeMismatch(format!(
            "{} weight layers for {} non-input layers",
            weights.len(),
            expected_layers
        )));
    }
    for (i, (layer, pair)) in weights.iter().zip(layer_sizes.windows(2)).enumerate() {
        let (incoming, size) = (pair[0], pair[1]);
        if layer.len() != size {
            return Err(NetworkError::PresetShapeMismatch(format!(
                "layer {i} has {} neurons, expected {size}",
                layer.len()
            )));
        }
        if let Some((j, neuron)) = layer.iter().enumerate().find(|(_, w)| w.len() != incoming + 1) {
            return Err(NetworkError::PresetShapeMismatch(format!(
                "layer {i} neuron {j} has {} weights, expected {}",
                neuron.len(),
                incoming + 1
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_weights_stay_in_range() {
        let weights = InitPolicy::default().weights_for(&[4, 5, 2]).unwrap();
        assert_eq!(weights.len(), 2);
        assert_eq!(weights[0].len(), 5);
        assert!(weights[0].iter().all(|n| n.len() == 5));
        assert!(weights[1].iter().all(|n| n.len() == 6));
        assert!(weights.iter().flatten().flatten().all(|w| w.abs() <= DEFAULT_INIT_RANGE));
    }

    #[test]
    fn seeded_policy_is_reproducible() {
        let policy = InitPolicy::Seeded { range: 0.05, seed: 7 };
        assert_eq!(policy.weights_for(&[2, 3, 2]).unwrap(), policy.weights_for(&[2, 3, 2]).unwrap());
    }

    #[test]
    fn preset_with_wrong_bias_count_is_rejected() {
        let policy = InitPolicy::Preset { weights: vec![vec![vec![0.1, 0.2]]] };
        assert!(policy.weights_for(&[1, 1]).is_ok());
        let err = policy.weights_for(&[2, 1]).unwrap_err();
        assert!(matches!(err, NetworkError::PresetShapeMismatch(_)));
    }

    #[test]
    fn policy_round_trips_through_json() {
        let json = r#"{"type":"seeded","range":0.1,"seed":3}"#;
        let policy: InitPolicy = serde_json::from_str(json).unwrap();
        assert_eq!(policy, InitPolicy::Seeded { range: 0.1, seed: 3 });
    }
}
