use std::fmt;

use crate::table::Table;

/// One key's finalized statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: String,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

/// Finalized, key-sorted view of an aggregation run. Rendering is the
/// `{key=min/mean/max, ...}` line via `Display`.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// Computes `mean = sum / count` for every key and sorts the result in
/// ascending byte order. Borrows the table, so summarizing twice gives
/// identical reports.
pub fn summarize(table: &Table<'_>) -> Report {
    let mut keyed: Vec<_> = table.iter().map(|(key, acc)| (*key, *acc)).collect();
    keyed.sort_unstable_by_key(|(key, _)| *key);
    let entries = keyed
        .into_iter()
        .map(|(key, acc)| Entry {
            key: String::from_utf8_lossy(key).into_owned(),
            min: acc.min,
            mean: acc.mean(),
            max: acc.max,
        })
        .collect();
    Report { entries }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(
                f,
                "{}={:.1}/{:.1}/{:.1}",
                entry.key, entry.min, entry.mean, entry.max
            )?;
        }
        f.write_str("}")
    }
}
