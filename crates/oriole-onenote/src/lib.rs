//! # oriole-onenote
//!
//! Typed, queryable access to a notebook host's hierarchy: notebooks,
//! sections (with section groups flattened away) and pages.
//!
//! The live automation host sits behind the [`NotebookSession`] trait; the
//! host hands over its hierarchy as an XML snapshot, which the
//! [`parser`] module turns into plain data objects. Two walks are
//! supported over the same snapshot: the nested hierarchy
//! ([`OneNoteProvider::notebooks`]) and the flat page collection with
//! reconstructed ancestry ([`OneNoteProvider::pages`],
//! [`OneNoteProvider::find_pages`]).
//!
//! ## Example
//!
//! ```rust,ignore
//! let provider = OneNoteProvider::new(session);
//! for page in provider.pages()? {
//!     println!("{} / {} / {}",
//!         page.notebook.as_ref().unwrap().name,
//!         page.section.as_ref().unwrap().name,
//!         page.name);
//! }
//! ```

pub mod error;
pub mod model;
pub mod parser;
pub mod provider;
pub mod session;
pub mod xml;

pub use error::{HierarchyError, ProviderError, Result};
pub use model::{Notebook, Page, Section};
pub use provider::OneNoteProvider;
pub use session::{HierarchyScope, NotebookSession};
pub use xml::{NodeRef, XmlTree};
