//! Mail host session boundary.

use crate::error::Result;
use crate::folder::{DefaultFolder, Folder};

/// A connection to the mail automation host.
///
/// Implementations snapshot the host's folder tree into plain [`Folder`]
/// values; host-side failures are adapted into
/// [`MailError::Session`](crate::error::MailError::Session).
pub trait MailSession {
    /// The root folders of every open store.
    fn root_folders(&self) -> Result<Vec<Folder>>;

    /// Look up one of the host's well-known default folders.
    fn default_folder(&self, which: DefaultFolder) -> Result<Folder>;
}
