//! Loader for the plain-text dataset format.
//!
//! Each line holds a whitespace-separated block of float features, a tab,
//! then a whitespace-separated block of integer targets (one-hot style):
//!
//! ```text
//! 0.5 1.0 0.25	1 0
//! ```
//!
//! Test files carry only the feature block. Blank lines are skipped and line
//! numbers in errors are 1-based.
use std::path::{Path, PathBuf};

use crate::error::DataError;

/// Parsed records. `targets` is empty for test data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub inputs: Vec<Vec<f64>>,
    pub targets: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Width of the first feature vector.
    pub fn input_size(&self) -> usize {
        self.inputs.first().map_or(0, Vec::len)
    }

    /// Width of the first target vector.
    pub fn output_size(&self) -> usize {
        self.targets.first().map_or(0, Vec::len)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parses dataset text. When `has_targets` is false anything after a tab is
/// ignored.
pub fn parse_records(text: &str, has_targets: bool) -> Result<Dataset, DataError> {
    let mut dataset = Dataset::default();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut blocks = line.splitn(2, '\t');
        let features = blocks.next().unwrap_or_default();
        dataset.inputs.push(parse_features(features, line_no)?);

        if has_targets {
            let targets = blocks.next()
                .filter(|block| !block.trim().is_empty())
                .ok_or(DataError::MissingTargets { line: line_no })?;
            dataset.targets.push(parse_targets(targets, line_no)?);
        }
    }

    Ok(dataset)
}

/// Reads and parses a dataset file.
///
/// The bare file name is tried in the working directory first, then the
/// path as given.
pub fn load_records(path: &Path, has_targets: bool) -> Result<Dataset, DataError> {
    let text = read_with_fallback(path)?;
    let dataset = parse_records(&text, has_targets)?;
    if dataset.is_empty() {
        return Err(DataError::Empty { path: path.to_path_buf() });
    }
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn read_with_fallback(path: &Path) -> Result<String, DataError> {
    let local: Option<PathBuf> = path.file_name()
        .map(PathBuf::from)
        .filter(|name| name.as_path() != path);

    if let Some(text) = local.and_then(|name| std::fs::read_to_string(name).ok()) {
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_features(block: &str, line: usize) -> Result<Vec<f64>, DataError> {
    block.split_whitespace()
        .map(|cell| {
            cell.parse::<f64>().map_err(|_| DataError::ParseFeature {
                line,
                value: cell.to_string(),
            })
        })
        .collect()
}

fn parse_targets(block: &str, line: usize) -> Result<Vec<f64>, DataError> {
    block.split_whitespace()
        .map(|cell| {
            cell.parse::<i64>()
                .map(|v| v as f64)
                .map_err(|_| DataError::ParseTarget {
                    line,
                    value: cell.to_string(),
                })
        })
        .collect()
}
