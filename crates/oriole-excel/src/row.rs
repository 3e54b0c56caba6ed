//! Row model with positional, header and name lookups.

use std::fmt;
use std::sync::Arc;

use crate::column::Column;
use crate::value::CellValue;

/// One data row of a loaded worksheet.
///
/// Cells are aligned positionally with the provider's column list
/// (`cells.len() == columns.len()`, enforced at load). Lookups that miss
/// (out-of-range index, unknown header or name) yield `None` rather than
/// an error.
#[derive(Debug, Clone)]
pub struct Row {
    /// 1-based row index (the first data row is 1; the column-name row is
    /// not counted).
    pub index: usize,
    cells: Vec<CellValue>,
    columns: Arc<Vec<Column>>,
}

impl Row {
    pub(crate) fn new(index: usize, cells: Vec<CellValue>, columns: Arc<Vec<Column>>) -> Self {
        debug_assert_eq!(cells.len(), columns.len());
        Self {
            index,
            cells,
            columns,
        }
    }

    /// The raw cell values, in column order.
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Cell by 1-based column index.
    pub fn get(&self, column_index: usize) -> Option<&CellValue> {
        if column_index == 0 {
            return None;
        }
        self.cells.get(column_index - 1)
    }

    /// Cell by computed letter header ("A", "B", ...).
    pub fn get_by_header(&self, header: &str) -> Option<&CellValue> {
        let at = self.columns.iter().position(|c| c.header == header)?;
        self.cells.get(at)
    }

    /// Cell by source column name (first-row label).
    pub fn get_by_name(&self, name: &str) -> Option<&CellValue> {
        let at = self.columns.iter().position(|c| c.name == name)?;
        self.cells.get(at)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
