//! In-memory representation of a delimited text file

use csv::StringRecord;
use std::path::PathBuf;

/// A fully materialized CSV file
///
/// Record 0 is the header. Nothing is skipped or reinterpreted while reading, so
/// the records are exactly what the file contained.
#[derive(Debug, Clone)]
pub struct Table {
    /// Every record of the file, header included
    pub records: Vec<StringRecord>,
    /// Source file path
    pub source_path: PathBuf,
}

impl Table {
    /// Header names, empty for an empty file
    pub fn header(&self) -> Vec<&str> {
        self.records
            .first()
            .map(|r| r.iter().collect())
            .unwrap_or_default()
    }

    /// Header name at a position
    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.records.first().and_then(|r| r.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Table {
        Table {
            records: rows.iter().map(|r| StringRecord::from(r.to_vec())).collect(),
            source_path: PathBuf::from("test.csv"),
        }
    }

    #[test]
    fn test_header_is_first_record() {
        let t = table(&[&["Date", "Amount"], &["2023-01-01", "-5"]]);
        assert_eq!(t.header(), vec!["Date", "Amount"]);
        assert_eq!(t.column_name(1), Some("Amount"));
        assert_eq!(t.column_name(2), None);
    }

    #[test]
    fn test_empty_table() {
        let t = table(&[]);
        assert!(t.header().is_empty());
        assert_eq!(t.column_name(0), None);
    }
}
