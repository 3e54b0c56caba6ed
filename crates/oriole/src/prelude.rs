//! Prelude module - common imports for oriole users
//!
//! ```rust
//! use oriole::prelude::*;
//! ```

pub use crate::{
    // Shared types
    Color,
    RetryPolicy,

    // Notebook types
    HierarchyScope,
    Notebook,
    NotebookSession,
    OneNoteProvider,
    Page,
    Section,

    // Tabular types
    CellValue,
    Column,
    ColumnKind,
    CsvCursor,
    CsvCursorOptions,
    ExcelProvider,
    FileType,
    Row,
    TabularCursor,

    // Mail types
    DefaultFolder,
    Folder,
    Item,
    ItemKind,
    MailSession,
    OutlookProvider,
};
