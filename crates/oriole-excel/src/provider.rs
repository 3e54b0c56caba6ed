//! Tabular provider: loads a cursor once into columns and rows.

use std::path::Path;
use std::sync::Arc;

use crate::column::Column;
use crate::csv_cursor::{CsvCursor, CsvCursorOptions};
use crate::cursor::TabularCursor;
use crate::error::{Result, TabularError};
use crate::row::Row;
use crate::value::CellValue;

/// Supported source file types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Legacy binary worksheet (Excel 97-2003).
    Xls,
    /// Office Open XML worksheet (Excel 2007+).
    Xlsx,
    /// Delimited text file with a column-name row.
    Csv,
}

impl FileType {
    /// Detect the file type from a path's extension (case-insensitive).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "xls" => Ok(FileType::Xls),
            "xlsx" => Ok(FileType::Xlsx),
            "csv" => Ok(FileType::Csv),
            _ => Err(TabularError::UnsupportedExtension {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Tabular data loaded from one worksheet or CSV source.
///
/// Columns and rows are built once, by draining a [`TabularCursor`]
/// exactly once at load time, and held for the provider's lifetime.
/// Worksheet file types get their cursor from a host query driver; CSV
/// sources are read directly via [`CsvCursor`].
pub struct ExcelProvider {
    source_name: String,
    file_type: FileType,
    sheet_name: Option<String>,
    columns: Arc<Vec<Column>>,
    rows: Vec<Row>,
}

impl ExcelProvider {
    /// Load a CSV file. The first row must contain the column names.
    pub fn open_csv<P: AsRef<Path>>(path: P, options: &CsvCursorOptions) -> Result<Self> {
        let path = path.as_ref();
        let file_type = FileType::from_path(path)?;
        if !path.exists() {
            return Err(TabularError::FileNotFound(path.to_path_buf()));
        }
        let cursor = CsvCursor::open(path, options)?;
        Self::from_cursor(path.display().to_string(), file_type, None, cursor)
    }

    /// Load from an arbitrary cursor. `sheet_name` is required for the
    /// worksheet file types and ignored for CSV.
    pub fn from_cursor<C: TabularCursor>(
        source_name: impl Into<String>,
        file_type: FileType,
        sheet_name: Option<&str>,
        mut cursor: C,
    ) -> Result<Self> {
        let source_name = source_name.into();

        if file_type != FileType::Csv && sheet_name.map_or(true, str::is_empty) {
            return Err(TabularError::SheetNameRequired(source_name.into()));
        }

        let columns: Vec<Column> = (0..cursor.field_count())
            .map(|i| Column::new(i + 1, cursor.field_name(i), cursor.field_kind(i)))
            .collect();
        let columns = Arc::new(columns);

        let mut rows = Vec::new();
        let mut index = 1;
        while let Some(mut cells) = cursor.next_row()? {
            // Positional alignment with the column list is an invariant of
            // the provider: short rows are padded, long rows rejected.
            if cells.len() > columns.len() {
                return Err(TabularError::RaggedRow {
                    row: index,
                    expected: columns.len(),
                    actual: cells.len(),
                });
            }
            cells.resize(columns.len(), CellValue::Null);
            rows.push(Row::new(index, cells, Arc::clone(&columns)));
            index += 1;
        }

        tracing::debug!(
            source = %source_name,
            columns = columns.len(),
            rows = rows.len(),
            "loaded tabular source"
        );

        Ok(Self {
            source_name,
            file_type,
            sheet_name: sheet_name.map(str::to_string),
            columns,
            rows,
        })
    }

    /// Name of the loaded source (file path or query description).
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Source file type.
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Worksheet name, when the source is a worksheet.
    pub fn sheet_name(&self) -> Option<&str> {
        self.sheet_name.as_deref()
    }

    /// Column definitions, in source order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Data rows, in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}
