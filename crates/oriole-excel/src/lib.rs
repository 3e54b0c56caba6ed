//! # oriole-excel
//!
//! Typed, queryable access to tabular data: worksheet query results and
//! CSV files loaded into an in-memory column/row model.
//!
//! The source sits behind the [`TabularCursor`] trait (field metadata plus
//! a forward-only row reader); [`ExcelProvider`] drains a cursor exactly
//! once at load time and holds the resulting [`Column`]s and [`Row`]s for
//! its lifetime. A [`CsvCursor`] backed by the `csv` crate is included;
//! worksheet cursors come from a host query driver.
//!
//! ## Example
//!
//! ```rust,no_run
//! use oriole_excel::{CsvCursorOptions, ExcelProvider};
//!
//! let provider = ExcelProvider::open_csv("people.csv", &CsvCursorOptions::default()).unwrap();
//! for row in provider.rows() {
//!     if let Some(age) = row.get_by_name("Age").and_then(|v| v.as_i64()) {
//!         println!("{age}");
//!     }
//! }
//! ```

pub mod column;
pub mod csv_cursor;
pub mod cursor;
pub mod error;
pub mod provider;
pub mod row;
pub mod value;

pub use column::{column_header, Column};
pub use csv_cursor::{CsvCursor, CsvCursorOptions};
pub use cursor::TabularCursor;
pub use error::{Result, TabularError};
pub use provider::{ExcelProvider, FileType};
pub use row::Row;
pub use value::{CellValue, ColumnKind};
