pub mod error;
pub mod activation;
pub mod layers;
pub mod network;
pub mod train;
pub mod eval;
pub mod data;
pub mod config;

// Convenience re-exports
pub use error::{DataError, NetworkError, Result};
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::{InitPolicy, Network, NetworkSpec, Neuron};
pub use train::{learning_curve, train_loop, EpochStats, TrainConfig};
pub use eval::{classify, output_softmax, softmax, test};
pub use data::{load_records, parse_records, Dataset};
pub use config::RunConfig;
