//! Error types for merger-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while appending or combining CSV files
///
/// Every variant is fatal to the run that produced it.
#[derive(Debug, Error)]
pub enum Error {
    /// An input could not be opened, or the output could not be removed or created
    #[error("unable to open file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed or truncated record in an input file
    #[error("error reading file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Writing or flushing the output failed
    #[error("error writing file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The config artifact could not be written
    #[error("unable to create config file '{path}': {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A config artifact could not be read back
    #[error("unable to load config file '{path}': {message}")]
    ConfigRead { path: PathBuf, message: String },

    /// A positional column selection did not name a header
    #[error("invalid column selection '{0}'")]
    Selection(String),

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileOpen {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Error::FileRead {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: impl Into<csv::Error>) -> Self {
        Error::FileWrite {
            path: path.into(),
            source: source.into(),
        }
    }

    pub(crate) fn config_write(path: impl Into<PathBuf>, source: impl Into<csv::Error>) -> Self {
        Error::ConfigWrite {
            path: path.into(),
            source: source.into(),
        }
    }
}
