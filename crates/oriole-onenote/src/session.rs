//! Host session boundary.
//!
//! The live automation host sits behind this trait. Production code plugs
//! in a COM-backed session; tests use an in-memory fake serving canned
//! snapshots.

/// How deep a hierarchy snapshot should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyScope {
    /// Notebooks only.
    Notebooks,
    /// Notebooks and sections.
    Sections,
    /// Notebooks, sections and pages.
    Pages,
}

/// A connection to the notebook automation host.
///
/// Both calls return a hierarchy snapshot as an XML string in the schema
/// consumed by [`crate::parser`]. `find_pages_xml` returns a pruned but
/// still-nested snapshot containing only matching pages and their
/// ancestors.
pub trait NotebookSession {
    type Error: std::error::Error;

    /// Fetch the hierarchy snapshot at the given scope.
    fn hierarchy_xml(&self, scope: HierarchyScope) -> Result<String, Self::Error>;

    /// Run a free-text search. The query string is passed to the host
    /// verbatim (the host's own operators, e.g. uppercase AND/OR, apply).
    fn find_pages_xml(&self, query: &str) -> Result<String, Self::Error>;
}
