//! Config artifact: the requested columns of a run, saved for reuse

use crate::error::{Error, Result};
use crate::parser::read_header;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name of the config artifact
pub const CONFIG_FILE_NAME: &str = "cfg.csv";

/// Where the config artifact for a given output file is written
///
/// The name is fixed; only the directory follows the output file.
pub fn config_path(output: &Path) -> PathBuf {
    output.with_file_name(CONFIG_FILE_NAME)
}

/// Delete `path` if it exists, then create it empty
pub(crate) fn recreate(path: &Path) -> std::io::Result<File> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => return Err(e),
        _ => {}
    }
    File::create(path)
}

/// Write `columns` as the single record of the config artifact at `path`
pub fn write_config<S: AsRef<str>>(path: &Path, columns: &[S]) -> Result<()> {
    let file = recreate(path).map_err(|e| Error::config_write(path, e))?;
    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(columns.iter().map(|c| c.as_ref()))
        .map_err(|e| Error::config_write(path, e))?;
    writer.flush().map_err(|e| Error::config_write(path, e))?;

    log::info!("generated {}", path.display());
    Ok(())
}

/// Read the requested columns back from a config artifact
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let columns = read_header(path)?;

    if columns.is_empty() {
        return Err(Error::ConfigRead {
            path: path.to_path_buf(),
            message: "no columns found".to_string(),
        });
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_follows_output_directory() {
        assert_eq!(config_path(Path::new("merged.csv")), PathBuf::from("cfg.csv"));
        assert_eq!(
            config_path(Path::new("out/merged.csv")),
            PathBuf::from("out/cfg.csv")
        );
    }

    #[test]
    fn test_write_config_single_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        write_config(&path, &["Transaction Date", "Amount", "Default"]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Transaction Date,Amount,Default\n");
    }

    #[test]
    fn test_write_config_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "old,columns,that,are,longer\nand,a,second,line,here\n").unwrap();

        write_config(&path, &["Amount"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Amount\n");
    }

    #[test]
    fn test_write_config_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(CONFIG_FILE_NAME);

        let err = write_config(&path, &["Amount"]).unwrap_err();
        assert!(matches!(err, Error::ConfigWrite { .. }));
    }

    #[test]
    fn test_load_config_reads_first_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        write_config(&path, &["Date", "Memo, long", "Amount"]).unwrap();

        assert_eq!(load_config(&path).unwrap(), vec!["Date", "Memo, long", "Amount"]);
    }

    #[test]
    fn test_load_config_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
