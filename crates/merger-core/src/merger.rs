//! Combine engine: project every input file onto the requested columns

use crate::config::{config_path, recreate, write_config, CONFIG_FILE_NAME};
use crate::error::{Error, Result};
use crate::job::MergeJob;
use crate::negate::negate_value;
use crate::parser::parse_csv;
use crate::report::{FileSummary, MergeReport};
use crate::resolver::resolve_columns;
use crate::table::Table;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

/// Output rows of one file, projected through its resolved positions
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedTable {
    /// Positions in the file's header, in output order
    pub positions: Vec<usize>,
    /// One output row per record, header first
    pub rows: Vec<Vec<String>>,
}

/// Project a table onto the requested columns.
///
/// Every record is projected, the header included. On data rows, values whose
/// header name in *this* table is in `negate` have their sign stripped. A record
/// too short for a resolved position contributes an empty value there.
pub fn project_table<S: AsRef<str>>(
    table: &Table,
    requested: &[S],
    negate: &BTreeSet<String>,
) -> ProjectedTable {
    let header = table.header();
    let positions = resolve_columns(header.as_slice(), requested);

    let negated: Vec<bool> = positions
        .iter()
        .map(|&i| table.column_name(i).is_some_and(|name| negate.contains(name)))
        .collect();

    let rows: Vec<Vec<String>> = table
        .records
        .iter()
        .enumerate()
        .map(|(row_idx, record)| {
            positions
                .iter()
                .zip(&negated)
                .map(|(&col, &flip)| {
                    let value = record.get(col).unwrap_or_default();
                    if row_idx > 0 && flip {
                        negate_value(value)
                    } else {
                        value.to_string()
                    }
                })
                .collect::<Vec<String>>()
        })
        .collect();

    ProjectedTable { positions, rows }
}

/// Combine the job's inputs into `writer`, one file at a time.
///
/// Each file's rows are written and the writer flushed before the next file is
/// read. The writer must be flexible, since files resolving a different number
/// of columns produce rows of different width. `output` only labels errors and
/// progress messages.
pub fn combine_into<W: Write>(
    writer: &mut csv::Writer<W>,
    job: &MergeJob,
    output: &Path,
) -> Result<Vec<FileSummary>> {
    log::debug!("columns to keep: {:?}", job.columns);
    log::debug!("columns to negate: {:?}", job.negate);

    let mut summaries = Vec::with_capacity(job.inputs.len());

    for input in &job.inputs {
        let table = parse_csv(input)?;
        let projected = project_table(&table, &job.columns, &job.negate);
        log::debug!(
            "{}: positions {:?} of header {:?}",
            table.source_path.display(),
            projected.positions,
            table.header()
        );

        // A zero-width row would be written as `""`, a one-field record
        let rows: &[Vec<String>] = if projected.positions.is_empty() {
            &[]
        } else {
            &projected.rows
        };
        for row in rows {
            writer
                .write_record(row)
                .map_err(|e| Error::write(output, e))?;
        }
        writer.flush().map_err(|e| Error::write(output, e))?;
        log::info!("{} <- {}", output.display(), input.display());

        summaries.push(FileSummary {
            input: input.clone(),
            records_written: rows.len(),
            positions: Some(projected.positions),
        });
    }

    Ok(summaries)
}

/// Run a combine job: (re)create the output, combine every input into it, then
/// write the config artifact if the job asks for one.
///
/// An output named like the config artifact is rejected when a config is
/// requested, since writing the config would replace it.
pub fn combine(job: &MergeJob) -> Result<MergeReport> {
    if job.emit_config && config_path(&job.output) == job.output {
        return Err(Error::config_write(
            &job.output,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("output file must not be named {}", CONFIG_FILE_NAME),
            ),
        ));
    }

    let file = recreate(&job.output).map_err(|e| Error::open(&job.output, e))?;
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(file);

    let mut report = MergeReport::new(job.output.clone());
    report.files = combine_into(&mut writer, job, &job.output)?;

    if job.emit_config {
        let path = config_path(&job.output);
        write_config(&path, &job.columns)?;
        report.config = Some(path);
    }

    Ok(report)
}
