//! Column resolution: requested column names to positions within one header

use std::collections::{HashMap, HashSet};

/// Map the requested column names onto positions in `header`.
///
/// Positions come back in the order the names were first requested, never in
/// header order. Repeated requests for a name collapse to its first occurrence,
/// and names missing from the header are skipped without error.
///
/// If the header itself repeats a name, the last occurrence is the one found.
pub fn resolve_columns<H, R>(header: &[H], requested: &[R]) -> Vec<usize>
where
    H: AsRef<str>,
    R: AsRef<str>,
{
    let positions: HashMap<&str, usize> = header
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_ref(), i))
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut added: HashSet<usize> = HashSet::new();
    let mut indexes = Vec::new();

    for name in requested {
        let name = name.as_ref();
        if !seen.insert(name) {
            continue;
        }
        if let Some(&index) = positions.get(name) {
            if added.insert(index) {
                indexes.push(index);
            }
        }
    }

    indexes
}
