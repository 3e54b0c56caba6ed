//! Error types for oriole-onenote

use thiserror::Error;

/// Result type alias using [`HierarchyError`]
pub type Result<T> = std::result::Result<T, HierarchyError>;

/// Errors raised while parsing a hierarchy snapshot.
#[derive(Debug, Error)]
pub enum HierarchyError {
    /// A required structural attribute is missing. Fatal for the node
    /// being parsed; optional attributes never produce this.
    #[error("malformed hierarchy: <{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    /// The document structure itself is broken (e.g. a page with no
    /// section or notebook ancestor).
    #[error("malformed hierarchy: {0}")]
    Malformed(String),

    /// The snapshot is not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Errors from a provider query: either the host session call failed or
/// the returned snapshot could not be parsed.
#[derive(Debug, Error)]
pub enum ProviderError<E: std::error::Error> {
    /// The host session call failed.
    #[error("host session call failed: {0}")]
    Session(E),

    /// The host returned a snapshot we could not parse.
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
}
