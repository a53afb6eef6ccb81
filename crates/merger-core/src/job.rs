//! Merge job description, optionally stored as a JSON job file

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Output file used when no other is given
pub const DEFAULT_OUTPUT_FILE: &str = "merged.csv";

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

/// Everything a combine run needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeJob {
    /// Input files, processed in this order
    pub inputs: Vec<PathBuf>,
    /// Requested output columns, may contain duplicates
    pub columns: Vec<String>,
    /// Columns whose data values get their minus sign stripped
    #[serde(default)]
    pub negate: BTreeSet<String>,
    /// Output file, overwritten by the run
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Write the requested columns to the config artifact after combining
    #[serde(default)]
    pub emit_config: bool,
}

impl MergeJob {
    /// Create a job writing to the default output file
    pub fn new<P, S>(inputs: impl IntoIterator<Item = P>, columns: impl IntoIterator<Item = S>) -> Self
    where
        P: Into<PathBuf>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            columns: columns.into_iter().map(Into::into).collect(),
            negate: BTreeSet::new(),
            output: default_output(),
            emit_config: false,
        }
    }

    pub fn with_negate<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.negate.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Use `output` instead of the default, if given
    pub fn with_output(mut self, output: Option<impl Into<PathBuf>>) -> Self {
        if let Some(output) = output {
            self.output = output.into();
        }
        self
    }

    pub fn with_emit_config(mut self, emit_config: bool) -> Self {
        self.emit_config = emit_config;
        self
    }

    /// Load a job file from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::open(path.as_ref(), e))?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save the job file to JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
