use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};

use crate::error::DataError;
use crate::network::spec::NetworkSpec;
use crate::train::train_config::TrainConfig;

/// Everything a training run needs besides the data itself.
///
/// Every field has a default, so a JSON file only has to name what it
/// changes:
///
/// ```json
/// { "train": { "epochs": 500 }, "network": { "hidden_layers": [4] } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub network: NetworkSpec,
    pub train: TrainConfig,
    /// Labelled data the network is trained on.
    pub train_file: PathBuf,
    /// Unlabelled data classified after training.
    pub test_file: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            network: NetworkSpec::default(),
            train: TrainConfig::default(),
            train_file: PathBuf::from("data-assignment.txt"),
            test_file: PathBuf::from("data-assignment-test.txt"),
        }
    }
}

impl RunConfig {
    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &Path) -> Result<(), DataError> {
        let file = std::fs::File::create(path).map_err(|source| io_error(path, source))?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `RunConfig` from a JSON file.
    pub fn load_json(path: &Path) -> Result<RunConfig, DataError> {
        let file = std::fs::File::open(path).map_err(|source| io_error(path, source))?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> DataError {
    DataError::Io { path: path.to_path_buf(), source }
}
