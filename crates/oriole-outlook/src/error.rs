//! Error types for oriole-outlook

use thiserror::Error;

use crate::folder::ItemKind;

/// Result type alias using [`MailError`]
pub type Result<T> = std::result::Result<T, MailError>;

/// Errors that can occur while querying the mail folder tree.
#[derive(Debug, Error)]
pub enum MailError {
    /// No folder with the given path exists in the session.
    #[error("folder not found: {0}")]
    FolderNotFound(String),

    /// The folder's default item kind does not match the requested kind.
    #[error("folder {folder} does not contain {expected:?} items (has {actual:?})")]
    WrongItemKind {
        folder: String,
        expected: ItemKind,
        actual: ItemKind,
    },

    /// The host session call failed.
    #[error("host session call failed: {0}")]
    Session(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
