//! Tabular cursor boundary.

use crate::error::Result;
use crate::value::{CellValue, ColumnKind};

/// A forward-only reader over one tabular source (a worksheet query
/// result, a CSV file, ...). The provider drains a cursor exactly once at
/// load time; field metadata must be available before the first row is
/// read.
///
/// External drivers adapt their own errors via
/// [`TabularError::Cursor`](crate::error::TabularError::Cursor).
pub trait TabularCursor {
    /// Number of fields per row.
    fn field_count(&self) -> usize;

    /// Source name of a field (0-based).
    fn field_name(&self, index: usize) -> &str;

    /// Declared value kind of a field (0-based).
    fn field_kind(&self, index: usize) -> ColumnKind;

    /// Read the next row, or `None` when the source is exhausted.
    /// A returned row never has more than `field_count()` cells.
    fn next_row(&mut self) -> Result<Option<Vec<CellValue>>>;
}
