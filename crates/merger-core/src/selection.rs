//! Positional column selection across the headers of several files
//!
//! Headers are numbered consecutively across files, so position 4 in a plan of a
//! four-column file followed by a six-column file is the second file's first column.

use crate::error::{Error, Result};
use std::fmt::Write;

/// Number every header name across all files, one line per file
pub fn numbered_headers<S: AsRef<str>>(headers: &[Vec<S>]) -> String {
    let mut out = String::new();
    let mut position = 0;

    for header in headers {
        let line: Vec<String> = header
            .iter()
            .map(|name| {
                let entry = format!("[{}]:'{}'", position, name.as_ref());
                position += 1;
                entry
            })
            .collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }

    out
}

/// Map selected positions onto header names.
///
/// Selections are kept in the order given, duplicates included.
pub fn select_columns<S, T>(headers: &[Vec<S>], selected: &[T]) -> Result<Vec<String>>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let flat: Vec<&str> = headers
        .iter()
        .flat_map(|h| h.iter().map(|name| name.as_ref()))
        .collect();

    selected
        .iter()
        .map(|s| {
            let s = s.as_ref().trim();
            s.parse::<usize>()
                .ok()
                .and_then(|i| flat.get(i))
                .map(|name| name.to_string())
                .ok_or_else(|| Error::Selection(s.to_string()))
        })
        .collect()
}
