use std::path::PathBuf;

/// Result type for network construction, propagation and training.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors raised by the network core.
///
/// None of these are transient: every variant describes a caller mistake
/// (bad topology, wrongly sized vector) and is reported at the call site.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("{what} has length {actual}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("preset weights do not fit the topology: {0}")]
    PresetShapeMismatch(String),

    #[error("{inputs} input samples but {targets} target vectors")]
    SampleCountMismatch { inputs: usize, targets: usize },
}

/// Errors raised while loading datasets and run configuration.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: feature '{value}' is not a number")]
    ParseFeature { line: usize, value: String },

    #[error("line {line}: target '{value}' is not an integer")]
    ParseTarget { line: usize, value: String },

    #[error("line {line}: no tab-separated target block")]
    MissingTargets { line: usize },

    #[error("'{}' contains no records", path.display())]
    Empty { path: PathBuf },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
