//! Notebook provider: typed queries over a host session.

use oriole_core::RetryPolicy;

use crate::error::ProviderError;
use crate::model::{Notebook, Page};
use crate::parser;
use crate::session::{HierarchyScope, NotebookSession};
use crate::xml::XmlTree;

/// Typed access to the notebook hierarchy of a host session.
///
/// Every query fetches a fresh snapshot from the host and constructs new
/// data objects; nothing is cached between calls.
pub struct OneNoteProvider<S> {
    session: S,
}

impl<S: NotebookSession> OneNoteProvider<S> {
    /// Wrap an already-established session.
    pub fn new(session: S) -> Self {
        Self { session }
    }

    /// Establish a session through `factory`, retrying transient failures
    /// under `policy`. Host automation objects intermittently fail to
    /// instantiate right after the host application starts; `is_transient`
    /// decides which construction errors are worth riding out.
    pub fn connect_with<F, P>(
        policy: RetryPolicy,
        factory: F,
        is_transient: P,
    ) -> Result<Self, S::Error>
    where
        F: FnMut() -> Result<S, S::Error>,
        P: Fn(&S::Error) -> bool,
    {
        let session = policy.run(factory, is_transient, |err| {
            tracing::warn!("notebook host not ready, retrying: {err}");
        })?;
        Ok(Self::new(session))
    }

    /// The underlying host session.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// The notebook hierarchy, fully expanded: notebooks with their
    /// sections (section groups flattened away) and pages.
    pub fn notebooks(&self) -> Result<Vec<Notebook>, ProviderError<S::Error>> {
        let tree = self.fetch(HierarchyScope::Pages)?;
        let notebooks = parser::parse_notebooks(&tree)?;
        tracing::debug!(count = notebooks.len(), "parsed notebook hierarchy");
        Ok(notebooks)
    }

    /// All pages across all notebooks, each linked to the section and
    /// notebook it belongs to.
    pub fn pages(&self) -> Result<Vec<Page>, ProviderError<S::Error>> {
        let tree = self.fetch(HierarchyScope::Pages)?;
        let pages = parser::parse_pages(&tree)?;
        tracing::debug!(count = pages.len(), "parsed page collection");
        Ok(pages)
    }

    /// Pages matching a free-text query, each linked to its ancestry.
    pub fn find_pages(&self, query: &str) -> Result<Vec<Page>, ProviderError<S::Error>> {
        let xml = self
            .session
            .find_pages_xml(query)
            .map_err(ProviderError::Session)?;
        let tree = XmlTree::parse(&xml)?;
        let pages = parser::parse_pages(&tree)?;
        tracing::debug!(count = pages.len(), query, "parsed search results");
        Ok(pages)
    }

    fn fetch(&self, scope: HierarchyScope) -> Result<XmlTree, ProviderError<S::Error>> {
        let xml = self
            .session
            .hierarchy_xml(scope)
            .map_err(ProviderError::Session)?;
        Ok(XmlTree::parse(&xml)?)
    }
}
