use tracing::{debug, info};

use crate::error::{NetworkError, Result};
use crate::network::network::Network;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_epoch;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs of online gradient descent and
/// hands it back together with the summed squared error of every epoch.
///
/// # Arguments
/// - `network` — taken by value; the trained network is returned
/// - `inputs`  — training samples, each of length `network.input_size()`
/// - `targets` — matching target vectors, each of length `network.output_size()`
/// - `config`  — epoch count, learning rate and logging cadence
///
/// Samples are visited in the given order every epoch and weights carry over
/// between samples and between epochs. With `config.epochs == 0` the network
/// comes back untouched alongside an empty error sequence.
///
/// # Errors
/// `SampleCountMismatch` if `inputs` and `targets` differ in length, and any
/// `DimensionMismatch` raised by a sample of the wrong width. On error the
/// network is dropped, including any updates already applied by earlier
/// samples; callers that need it back should check sample widths first or
/// keep a clone.
pub fn train_loop(
    mut network: Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<(Network, Vec<f64>)> {
    if inputs.len() != targets.len() {
        return Err(NetworkError::SampleCountMismatch {
            inputs: inputs.len(),
            targets: targets.len(),
        });
    }

    info!(
        layers = ?network.layer_sizes(),
        samples = inputs.len(),
        epochs = config.epochs,
        learning_rate = config.learning_rate,
        "training started"
    );

    let mut errors = Vec::with_capacity(config.epochs);
    for epoch in 0..config.epochs {
        let squared_error = train_epoch(&mut network, inputs, targets, config.learning_rate)?;
        errors.push(squared_error);

        if should_log(epoch, config) {
            debug!(epoch, squared_error, "epoch finished");
        }
    }

    if let Some(last) = errors.last() {
        info!(epochs = errors.len(), final_squared_error = last, "training finished");
    }
    Ok((network, errors))
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn should_log(epoch: usize, config: &TrainConfig) -> bool {
    let is_last = epoch + 1 == config.epochs;
    is_last || (config.log_every > 0 && epoch % config.log_every == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::init::InitPolicy;

    fn xor() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let inputs = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ];
        let targets = vec![
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
        ];
        (inputs, targets)
    }

    fn network() -> Network {
        Network::create(&[2, 4, 2], &InitPolicy::Seeded { range: 0.5, seed: 11 }).unwrap()
    }

    #[test]
    fn zero_epochs_leave_network_untouched() {
        let (inputs, targets) = xor();
        let net = network();
        let (trained, errors) = train_loop(net.clone(), &inputs, &targets, &TrainConfig::new(0, 0.1)).unwrap();
        assert!(errors.is_empty());
        assert_eq!(trained, net);
    }

    #[test]
    fn one_total_per_epoch_all_non_negative() {
        let (inputs, targets) = xor();
        let (_, errors) = train_loop(network(), &inputs, &targets, &TrainConfig::new(25, 0.1)).unwrap();
        assert_eq!(errors.len(), 25);
        assert!(errors.iter().all(|e| *e >= 0.0));
    }

    #[test]
    fn training_lowers_the_epoch_error() {
        let (inputs, targets) = xor();
        let (_, errors) = train_loop(network(), &inputs, &targets, &TrainConfig::new(200, 0.1)).unwrap();
        assert!(errors[errors.len() - 1] < errors[0]);
    }

    #[test]
    fn training_is_deterministic_for_a_fixed_start() {
        let (inputs, targets) = xor();
        let config = TrainConfig::new(10, 0.1);
        let a = train_loop(network(), &inputs, &targets, &config).unwrap();
        let b = train_loop(network(), &inputs, &targets, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn mismatched_sample_counts_are_rejected() {
        let (inputs, mut targets) = xor();
        targets.pop();
        let err = train_loop(network(), &inputs, &targets, &TrainConfig::default()).unwrap_err();
        assert_eq!(err, NetworkError::SampleCountMismatch { inputs: 4, targets: 3 });
    }

    #[test]
    fn wrong_width_sample_is_reported() {
        let (mut inputs, targets) = xor();
        inputs[2] = vec![1.0];
        let start = network();
        let err = train_loop(start.clone(), &inputs, &targets, &TrainConfig::new(1, 0.1)).unwrap_err();
        assert!(matches!(err, NetworkError::DimensionMismatch { expected: 2, actual: 1, .. }));
        // the network that was moved in is gone; only the caller's copy remains
        assert_eq!(start, network());
    }

    #[test]
    fn log_cadence_includes_last_epoch() {
        let config = TrainConfig { epochs: 5, learning_rate: 0.1, log_every: 0 };
        let logged: Vec<usize> = (0..5).filter(|&e| should_log(e, &config)).collect();
        assert_eq!(logged, vec![4]);

        let config = TrainConfig { log_every: 2, ..config };
        let logged: Vec<usize> = (0..5).filter(|&e| should_log(e, &config)).collect();
        assert_eq!(logged, vec![0, 2, 4]);
    }
}
