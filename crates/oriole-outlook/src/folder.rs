//! Folder and item snapshot model.

/// Kinds of items a folder can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Mail,
    Appointment,
    Contact,
    Task,
    Journal,
    Note,
    Post,
    DistributionList,
}

/// The host's well-known default folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefaultFolder {
    Inbox,
    SentMail,
    Contacts,
    Calendar,
    Notes,
    Tasks,
}

impl DefaultFolder {
    /// The item kind a default folder holds.
    pub fn item_kind(&self) -> ItemKind {
        match self {
            DefaultFolder::Inbox | DefaultFolder::SentMail => ItemKind::Mail,
            DefaultFolder::Contacts => ItemKind::Contact,
            DefaultFolder::Calendar => ItemKind::Appointment,
            DefaultFolder::Notes => ItemKind::Note,
            DefaultFolder::Tasks => ItemKind::Task,
        }
    }
}

/// A snapshot of one host item. Only identity-level fields are carried;
/// the full item body stays with the host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Host entry identifier.
    pub id: String,
    /// What kind of item this is.
    pub kind: ItemKind,
    /// Subject or display name.
    pub subject: String,
}

/// A snapshot of one folder in the host's folder tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Folder {
    /// Full folder path, `\\Store\Folder\Subfolder` style.
    pub path: String,
    /// The kind of item this folder holds by default.
    pub default_item_kind: ItemKind,
    /// The folder's items.
    pub items: Vec<Item>,
    /// Child folders.
    pub subfolders: Vec<Folder>,
}

/// Flatten a folder tree into a single sequence, depth-first with
/// subfolders yielded before their parent (the host enumeration order).
pub fn flatten_folders(folders: &[Folder]) -> Vec<&Folder> {
    let mut flat = Vec::new();
    collect(folders, &mut flat);
    flat
}

fn collect<'a>(folders: &'a [Folder], flat: &mut Vec<&'a Folder>) {
    for folder in folders {
        collect(&folder.subfolders, flat);
        flat.push(folder);
    }
}
