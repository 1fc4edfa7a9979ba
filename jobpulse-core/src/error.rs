//! Error types for the core crate

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while loading assets or reading and writing datasets
///
/// Classification itself never fails.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The mapping asset is not valid TOML or has the wrong shape
    #[error("Failed to parse function mapping: {0}")]
    MappingParse(#[from] toml::de::Error),

    /// A mapping entry points at a label outside the canonical set
    #[error("Mapping for {label:?} targets unknown category {target:?}")]
    UnknownCategory {
        /// Upstream label on the left-hand side
        label: String,
        /// Offending right-hand side
        target: String,
    },

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset file could not be encoded or decoded
    #[error("Dataset error: {0}")]
    Dataset(#[from] csv::Error),

    /// A table record did not flatten to a column map
    #[error("Failed to encode record: {0}")]
    Record(String),
}

impl CoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
