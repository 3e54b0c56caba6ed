//! # oriole-outlook
//!
//! Typed access to a mail host's folder tree: flattened folder
//! enumeration, default-folder lookups and kind-checked item queries,
//! plus the `Contact_*.jpg` picture export/cleanup convention.
//!
//! The live automation host sits behind the [`MailSession`] trait;
//! implementations snapshot folders and items into plain values.

pub mod error;
pub mod folder;
pub mod pictures;
pub mod provider;
pub mod session;

pub use error::{MailError, Result};
pub use folder::{flatten_folders, DefaultFolder, Folder, Item, ItemKind};
pub use pictures::{cleanup_contact_pictures, save_contact_picture};
pub use provider::OutlookProvider;
pub use session::MailSession;
