use crate::{error::Result, network::network::Network};

/// Runs forward then backward for one sample and returns the squared
/// output-layer error the backward pass left behind.
pub fn train_sample(
    network: &mut Network,
    input: &[f64],
    target: &[f64],
    learning_rate: f64,
) -> Result<f64> {
    network.forward(input)?;
    network.backward(input, target, learning_rate)?;
    Ok(network.output_squared_error())
}

/// One in-order pass over the data. Each sample sees the weights left by
/// the one before it. Returns the summed squared error of the pass.
///
/// Callers check that `inputs` and `targets` have equal length.
pub fn train_epoch(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    learning_rate: f64,
) -> Result<f64> {
    let mut total = 0.0;
    for (input, target) in inputs.iter().zip(targets.iter()) {
        total += train_sample(network, input, target, learning_rate)?;
    }
    Ok(total)
}
