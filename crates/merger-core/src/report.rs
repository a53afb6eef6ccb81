//! Diagnostics returned by append and combine runs

use serde::Serialize;
use std::path::PathBuf;

/// What one input file contributed to the output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileSummary {
    /// Input file
    pub input: PathBuf,
    /// Records written for this file, header included
    pub records_written: usize,
    /// Resolved column positions, in output order (`None` when appending)
    pub positions: Option<Vec<usize>>,
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergeReport {
    /// Output file
    pub output: PathBuf,
    /// Inputs in the order they were written
    pub files: Vec<FileSummary>,
    /// Config artifact, if one was generated
    pub config: Option<PathBuf>,
}

impl MergeReport {
    pub fn new(output: PathBuf) -> Self {
        Self {
            output,
            files: Vec::new(),
            config: None,
        }
    }

    /// Total records written across all inputs
    pub fn records_written(&self) -> usize {
        self.files.iter().map(|f| f.records_written).sum()
    }

    /// One `<output> <- <input>` line per input file
    pub fn progress_lines(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|f| format!("{} <- {}", self.output.display(), f.input.display()))
            .collect()
    }
}
