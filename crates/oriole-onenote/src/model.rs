//! Notebook, section and page data objects.
//!
//! All three are plain value objects, constructed fresh on every query
//! against the host. Two successive fetches yield structurally equal but
//! distinct objects; nothing here aliases the source tree.

use chrono::{DateTime, Utc};
use oriole_core::Color;

/// A notebook.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notebook {
    /// Host-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Nickname shown on the notebook tab. Empty if the host omits it.
    pub nickname: String,
    /// Filesystem path of the notebook folder.
    pub path: String,
    /// Tab color, if any.
    pub color: Option<Color>,
    /// Sections, populated only when the hierarchy walk requests them.
    /// Section groups are transparent: sections nested inside groups
    /// appear here directly.
    pub sections: Vec<Section>,
}

/// A section within a notebook.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    /// Host-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Filesystem path of the section file.
    pub path: String,
    /// True iff the host marked the section password-protected.
    pub encrypted: bool,
    /// Tab color, if any.
    pub color: Option<Color>,
    /// Pages, populated only when the hierarchy walk requests them.
    pub pages: Vec<Page>,
}

/// A page within a section.
///
/// The `section`/`notebook` ancestry fields are non-owning copies
/// reconstructed from the source tree on demand (their own child
/// collections are left empty). They are populated by the flattened
/// page-centric walks and absent from the nested hierarchy walk.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    /// Host-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Indentation depth within the section (0 for top-level pages).
    pub level: i32,
    /// Creation timestamp. `DateTime::<Utc>::MIN_UTC` when the host omits
    /// it or emits something unparsable.
    pub created: DateTime<Utc>,
    /// Last-modified timestamp, same fallback as `created`.
    pub last_modified: DateTime<Utc>,
    /// Owning section, when ancestry was requested.
    pub section: Option<Section>,
    /// Owning notebook, when ancestry was requested.
    pub notebook: Option<Notebook>,
}
