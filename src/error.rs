//! Error types for sorting, searching and the benchmark harness.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the sort entry points.
///
/// Comparison sorts only fail on malformed spans; the radix family also
/// rejects negative values and out-of-range base parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("radix sort requires non-negative values, found {value} at index {index}")]
    NegativeValue { index: usize, value: i64 },

    #[error("radix base must be at least 2, got {0}")]
    InvalidBase(u64),

    #[error("radix power must be in 1..={max}, got {power}")]
    InvalidPower { power: u32, max: u32 },

    #[error("span [{left}, {right}] is out of bounds for length {len}")]
    SpanOutOfBounds { left: usize, right: usize, len: usize },
}

/// Errors raised by the bounded search entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("span [{left}, {right}] is out of bounds for length {len}")]
    SpanOutOfBounds { left: usize, right: usize, len: usize },
}

/// Errors raised by the data helpers and the benchmark harness.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: cannot parse {content:?} as an integer", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),

    #[error(transparent)]
    Sort(#[from] SortError),
}

impl HarnessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HarnessError::Io {
            path: path.into(),
            source,
        }
    }
}
