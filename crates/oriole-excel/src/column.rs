//! Column metadata and spreadsheet-style header computation.

use crate::value::ColumnKind;

/// Column metadata.
///
/// `index` is 1-based to match the spreadsheet convention; `header` is the
/// computed letter header ("A", "B", ... "Z", "AA", ...); `name` is the
/// source label from the first row of the worksheet or CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// 1-based column index.
    pub index: usize,
    /// Spreadsheet letter header for `index`.
    pub header: String,
    /// Source column name (first-row label).
    pub name: String,
    /// Declared value kind.
    pub kind: ColumnKind,
}

impl Column {
    /// Create a column for a 1-based index, computing the letter header.
    pub fn new(index: usize, name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            index,
            header: column_header(index),
            name: name.into(),
            kind,
        }
    }
}

/// Compute the spreadsheet letter header for a 1-based column index:
/// a bijective base-26 transform where 1 = "A", 26 = "Z", 27 = "AA".
pub fn column_header(index: usize) -> String {
    let mut header = String::new();
    let mut n = index;
    while n > 0 {
        n -= 1;
        header.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    header
}
