use tracing::debug;

use crate::error::{NetworkError, Result};
use crate::network::network::Network;

/// Classifies every input with the trained network, in order.
///
/// The network keeps the outputs of the last input afterwards, which is
/// what `output_softmax` reports on.
pub fn test(network: &mut Network, inputs: &[Vec<f64>]) -> Result<Vec<usize>> {
    inputs.iter()
        .map(|input| {
            let output = network.forward(input)?;
            let class = classify(&output)?;
            debug!(?input, ?output, class, "classified");
            Ok(class)
        })
        .collect()
}

/// Binary decision over a two-score output: `0` if the first score is
/// strictly greater, otherwise `1` (ties go to class 1).
pub fn classify(output: &[f64]) -> Result<usize> {
    match output {
        [first, second] => Ok(if first > second { 0 } else { 1 }),
        _ => Err(NetworkError::DimensionMismatch {
            what: "output vector",
            expected: 2,
            actual: output.len(),
        }),
    }
}

/// `p_k = e^{v_k} / sum_j e^{v_j}`, shifted by the largest score so large
/// linear outputs cannot overflow `exp`.
pub fn softmax(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = values.iter().map(|v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Softmax of the output layer as it stands, i.e. for whichever sample was
/// forwarded last. Display only; it plays no part in `classify`.
pub fn output_softmax(network: &Network) -> Vec<f64> {
    softmax(&network.output_values())
}
