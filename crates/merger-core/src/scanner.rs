//! Input discovery: expand file and directory arguments into CSV paths

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Whether a path names a CSV file (case-insensitive `.csv` extension)
pub fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Expand `args` into the CSV files to process, keeping argument order.
///
/// A directory contributes its direct CSV children sorted by file name. A file is
/// kept only if it is a CSV file. A path that does not exist is an error.
pub fn discover<P: AsRef<Path>>(args: &[P]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        let metadata = fs::metadata(arg).map_err(|e| Error::open(arg, e))?;

        if metadata.is_dir() {
            for entry in WalkDir::new(arg)
                .min_depth(1)
                .max_depth(1)
                .follow_links(true)
                .sort_by_file_name()
            {
                let entry = entry?;
                if entry.file_type().is_file() && is_csv(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else if is_csv(arg) {
            files.push(arg.to_path_buf());
        } else {
            log::debug!("skipping non-CSV file {}", arg.display());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_csv() {
        assert!(is_csv(Path::new("a.csv")));
        assert!(is_csv(Path::new("dir/EXPORT.CSV")));
        assert!(!is_csv(Path::new("a.txt")));
        assert!(!is_csv(Path::new("csv")));
    }

    #[test]
    fn test_discover_directory_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["transactions.csv", "test.csv", "test_info.csv", "notes.txt"] {
            fs::write(dir.path().join(name), "a\n").unwrap();
        }
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.csv"), "a\n").unwrap();

        let files = discover(&[dir.path()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_str().unwrap())
            .collect();

        assert_eq!(names, vec!["test.csv", "test_info.csv", "transactions.csv"]);
    }

    #[test]
    fn test_discover_keeps_argument_order() {
        let dir = tempfile::tempdir().unwrap();
        let b = dir.path().join("b.csv");
        let a = dir.path().join("a.CSV");
        let txt = dir.path().join("c.txt");
        for path in [&a, &b, &txt] {
            fs::write(path, "a\n").unwrap();
        }

        let files = discover(&[&b, &txt, &a]).unwrap();
        assert_eq!(files, vec![b, a]);
    }

    #[test]
    fn test_discover_missing_path() {
        let err = discover(&["no/such/dir"]).unwrap_err();
        assert!(matches!(err, Error::FileOpen { .. }));
    }
}
