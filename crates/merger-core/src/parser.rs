//! CSV reading: whole files and header rows

use crate::error::{Error, Result};
use crate::table::Table;
use csv::StringRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false) // The header is record 0, returned like any other
        .flexible(true);
    builder
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| Error::open(path, e))
}

/// Read every record of a CSV file into memory
pub fn parse_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    parse_reader(open(path)?, path.to_path_buf())
}

/// Parse CSV from a string (useful for testing)
pub fn parse_csv_str(content: &str, source_name: &str) -> Result<Table> {
    parse_reader(content.as_bytes(), PathBuf::from(source_name))
}

fn parse_reader<R: Read>(reader: R, source_path: PathBuf) -> Result<Table> {
    let mut csv_reader = reader_builder().from_reader(reader);

    let records = csv_reader
        .records()
        .collect::<std::result::Result<Vec<StringRecord>, csv::Error>>()
        .map_err(|e| Error::read(&source_path, e))?;

    Ok(Table {
        records,
        source_path,
    })
}

/// Read only the first record of a CSV file
///
/// An empty file has an empty header.
pub fn read_header<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut csv_reader = reader_builder().from_reader(open(path)?);

    let mut record = StringRecord::new();
    let found = csv_reader
        .read_record(&mut record)
        .map_err(|e| Error::read(path, e))?;

    if !found {
        return Ok(Vec::new());
    }
    Ok(record.iter().map(str::to_string).collect())
}

/// Header row of each file, in the order given
pub fn headers<P: AsRef<Path>>(files: &[P]) -> Result<Vec<Vec<String>>> {
    files.iter().map(read_header).collect()
}
