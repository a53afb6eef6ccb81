//! Append mode: copy every record of every file, unchanged

use crate::config::recreate;
use crate::error::{Error, Result};
use crate::report::{FileSummary, MergeReport};
use csv::StringRecord;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append `files` to `writer` in order, headers included.
///
/// Records are streamed one at a time and the writer is flushed after each file.
pub fn append_into<W: Write, P: AsRef<Path>>(
    writer: &mut csv::Writer<W>,
    files: &[P],
    output: &Path,
) -> Result<Vec<FileSummary>> {
    log::debug!(
        "input files: {:?}",
        files.iter().map(|f| f.as_ref()).collect::<Vec<_>>()
    );

    let mut summaries = Vec::with_capacity(files.len());
    let mut record = StringRecord::new();

    for input in files {
        let input = input.as_ref();
        let file = File::open(input).map_err(|e| Error::open(input, e))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut records_written = 0;
        while reader
            .read_record(&mut record)
            .map_err(|e| Error::read(input, e))?
        {
            writer
                .write_record(&record)
                .map_err(|e| Error::write(output, e))?;
            records_written += 1;
        }
        writer.flush().map_err(|e| Error::write(output, e))?;
        log::info!("{} <- {}", output.display(), input.display());

        summaries.push(FileSummary {
            input: input.to_path_buf(),
            records_written,
            positions: None,
        });
    }

    Ok(summaries)
}

/// Append `files` into a freshly created `output`
pub fn append<P: AsRef<Path>>(files: &[P], output: impl Into<PathBuf>) -> Result<MergeReport> {
    let output = output.into();
    let file = recreate(&output).map_err(|e| Error::open(&output, e))?;
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(file);

    let mut report = MergeReport::new(output);
    report.files = append_into(&mut writer, files, &report.output)?;
    Ok(report)
}
