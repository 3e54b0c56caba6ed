//! # oriole
//!
//! Queryable, strongly-typed providers over Office automation hosts.
//!
//! Each provider turns an imperative host automation surface into an
//! in-memory object graph that plain iterator chains can query:
//!
//! - [`OneNoteProvider`] - the notebook/section/page hierarchy, parsed
//!   from the host's XML snapshot; nested or flattened-with-ancestry.
//! - [`ExcelProvider`] - worksheet or CSV tabular data as columns (with
//!   computed "A"/"B"/.../"AA" letter headers) and positional rows.
//! - [`OutlookProvider`] - the mail folder tree, flattened, with
//!   kind-checked item access and default-folder shortcuts.
//!
//! The hosts themselves stay behind boundary traits
//! ([`NotebookSession`], [`TabularCursor`], [`MailSession`]); session
//! construction, the one fragile host call, can be wrapped in a
//! [`RetryPolicy`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use oriole::prelude::*;
//!
//! let provider = OneNoteProvider::new(session);
//! let recent: Vec<_> = provider
//!     .pages()?
//!     .into_iter()
//!     .filter(|p| p.last_modified > cutoff)
//!     .collect();
//! ```

pub mod prelude;

// Re-export core types
pub use oriole_core::{Color, RetryPolicy};

// Re-export notebook types
pub use oriole_onenote::{
    HierarchyError, HierarchyScope, Notebook, NotebookSession, OneNoteProvider, Page,
    ProviderError, Section, XmlTree,
};

// Re-export tabular types
pub use oriole_excel::{
    column_header, CellValue, Column, ColumnKind, CsvCursor, CsvCursorOptions, ExcelProvider,
    FileType, Row, TabularCursor, TabularError,
};

// Re-export mail types
pub use oriole_outlook::{
    cleanup_contact_pictures, flatten_folders, save_contact_picture, DefaultFolder, Folder, Item,
    ItemKind, MailError, MailSession, OutlookProvider,
};
