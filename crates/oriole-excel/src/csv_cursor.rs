//! CSV-backed tabular cursor.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::cursor::TabularCursor;
use crate::error::Result;
use crate::value::{CellValue, ColumnKind};

/// Options for reading CSV sources.
#[derive(Debug, Clone)]
pub struct CsvCursorOptions {
    /// Field delimiter. Default: `,`
    pub delimiter: u8,
    /// Quote character. Default: `"`
    pub quote: u8,
    /// Detect value kinds from the first data row and convert cells
    /// accordingly. When off, every cell is text. Default: on.
    pub detect_types: bool,
}

impl Default for CsvCursorOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            detect_types: true,
        }
    }
}

/// A [`TabularCursor`] over a CSV stream.
///
/// The first record is the column-name row. Column kinds are inferred
/// from the first data row (which is buffered and replayed), since CSV
/// carries no declared schema of its own.
pub struct CsvCursor<R: Read> {
    reader: csv::Reader<R>,
    names: Vec<String>,
    kinds: Vec<ColumnKind>,
    pending: Option<Vec<CellValue>>,
    detect_types: bool,
}

impl CsvCursor<File> {
    /// Open a CSV file. The first row must contain the column names.
    pub fn open<P: AsRef<Path>>(path: P, options: &CsvCursorOptions) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(file, options)
    }
}

impl<R: Read> CsvCursor<R> {
    /// Build a cursor over any reader.
    pub fn new(reader: R, options: &CsvCursorOptions) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(true)
            .from_reader(reader);

        let names: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut cursor = Self {
            reader,
            names,
            kinds: Vec::new(),
            pending: None,
            detect_types: options.detect_types,
        };

        // Peek the first data row to infer column kinds, then replay it.
        let first = cursor.read_record()?;
        cursor.kinds = match &first {
            Some(cells) => cells.iter().map(CellValue::kind).collect(),
            None => Vec::new(),
        };
        cursor.kinds.resize(cursor.names.len(), ColumnKind::Text);
        cursor.pending = first;

        Ok(cursor)
    }

    fn read_record(&mut self) -> Result<Option<Vec<CellValue>>> {
        let mut record = csv::StringRecord::new();
        if !self.reader.read_record(&mut record)? {
            return Ok(None);
        }
        let cells = record
            .iter()
            .map(|field| {
                if self.detect_types {
                    detect_value(field)
                } else {
                    CellValue::String(field.to_string())
                }
            })
            .collect();
        Ok(Some(cells))
    }
}

impl<R: Read> TabularCursor for CsvCursor<R> {
    fn field_count(&self) -> usize {
        self.names.len()
    }

    fn field_name(&self, index: usize) -> &str {
        &self.names[index]
    }

    fn field_kind(&self, index: usize) -> ColumnKind {
        self.kinds.get(index).copied().unwrap_or(ColumnKind::Text)
    }

    fn next_row(&mut self) -> Result<Option<Vec<CellValue>>> {
        if let Some(pending) = self.pending.take() {
            return Ok(Some(pending));
        }
        self.read_record()
    }
}

/// Detect the value of a CSV field.
fn detect_value(field: &str) -> CellValue {
    let field = field.trim();

    if field.is_empty() {
        return CellValue::Null;
    }

    match field {
        "true" | "TRUE" | "True" => return CellValue::Bool(true),
        "false" | "FALSE" | "False" => return CellValue::Bool(false),
        _ => {}
    }

    if let Ok(n) = field.parse::<i64>() {
        return CellValue::Integer(n);
    }

    if let Ok(n) = field.parse::<f64>() {
        return CellValue::Number(n);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(field) {
        return CellValue::DateTime(dt.with_timezone(&Utc));
    }

    CellValue::String(field.to_string())
}
