//! merger-core: Core library for combining CSV files with differing headers
//!
//! This library provides functionality to:
//! - Discover CSV files among file and directory arguments
//! - Append files verbatim into a single output
//! - Combine files by projecting each one onto a requested list of column names,
//!   resolved independently against every file's own header
//! - Strip the minus sign from selected columns while combining
//! - Save the requested columns as a config artifact and load it back

pub mod append;
pub mod config;
pub mod error;
pub mod job;
pub mod merger;
pub mod negate;
pub mod parser;
pub mod report;
pub mod resolver;
pub mod scanner;
pub mod selection;
pub mod table;

pub use append::append;
pub use config::{load_config, write_config, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use job::{MergeJob, DEFAULT_OUTPUT_FILE};
pub use merger::{combine, project_table, ProjectedTable};
pub use negate::negate_value;
pub use parser::{headers, parse_csv, read_header};
pub use report::{FileSummary, MergeReport};
pub use resolver::resolve_columns;
pub use scanner::discover;
pub use selection::{numbered_headers, select_columns};
pub use table::Table;
