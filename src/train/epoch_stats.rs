use serde::{Serialize, Deserialize};

/// One point of the learning curve: the summed squared output error of an
/// epoch. `epoch` is 0-based, matching the order `train_loop` reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    pub epoch: usize,
    pub squared_error: f64,
}

/// Pairs each per-epoch total with its epoch index, ready for plotting.
pub fn learning_curve(errors: &[f64]) -> Vec<EpochStats> {
    errors.iter()
        .enumerate()
        .map(|(epoch, &squared_error)| EpochStats { epoch, squared_error })
        .collect()
}
