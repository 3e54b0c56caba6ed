//! Mail provider: flattened folder access and typed item queries.

use oriole_core::RetryPolicy;

use crate::error::{MailError, Result};
use crate::folder::{flatten_folders, DefaultFolder, Folder, Item, ItemKind};
use crate::session::MailSession;

/// Typed access to a mail host's folder tree.
///
/// The host holds folders hierarchically; [`folders`](Self::folders)
/// flattens that hierarchy into one sequence. Item queries check the
/// folder's default item kind before handing items out.
pub struct OutlookProvider<S> {
    session: S,
}

impl<S: MailSession> OutlookProvider<S> {
    /// Wrap an already-established session.
    pub fn new(session: S) -> Self {
        Self { session }
    }

    /// Establish a session through `factory`, retrying transient failures
    /// under `policy` (the host intermittently refuses automation clients
    /// while starting up).
    pub fn connect_with<F, P>(policy: RetryPolicy, factory: F, is_transient: P) -> Result<Self>
    where
        F: FnMut() -> Result<S>,
        P: Fn(&MailError) -> bool,
    {
        let session = policy.run(factory, is_transient, |err| {
            tracing::warn!("mail host not ready, retrying: {err}");
        })?;
        Ok(Self::new(session))
    }

    /// The underlying host session.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Every folder in every open store, flattened (subfolders precede
    /// their parent).
    pub fn folders(&self) -> Result<Vec<Folder>> {
        let roots = self.session.root_folders()?;
        Ok(flatten_folders(&roots).into_iter().cloned().collect())
    }

    /// Items of the folder at `path`, checked against the expected kind.
    ///
    /// A path without the leading `\\` is accepted and normalized.
    pub fn items(&self, path: &str, kind: ItemKind) -> Result<Vec<Item>> {
        let path = normalize_path(path);
        let folders = self.folders()?;
        let folder = folders
            .iter()
            .find(|f| f.path == path)
            .ok_or_else(|| MailError::FolderNotFound(path.clone()))?;
        items_of(folder, kind)
    }

    /// Items of a well-known default folder.
    pub fn default_items(&self, which: DefaultFolder) -> Result<Vec<Item>> {
        let folder = self.session.default_folder(which)?;
        items_of(&folder, which.item_kind())
    }

    /// Mail items of the default inbox.
    pub fn inbox_items(&self) -> Result<Vec<Item>> {
        self.default_items(DefaultFolder::Inbox)
    }

    /// Mail items of the default sent-mail folder.
    pub fn sent_mail_items(&self) -> Result<Vec<Item>> {
        self.default_items(DefaultFolder::SentMail)
    }

    /// Contact items of the default contacts folder.
    pub fn contact_items(&self) -> Result<Vec<Item>> {
        self.default_items(DefaultFolder::Contacts)
    }

    /// Appointment items of the default calendar.
    pub fn calendar_items(&self) -> Result<Vec<Item>> {
        self.default_items(DefaultFolder::Calendar)
    }

    /// Note items of the default notes folder.
    pub fn note_items(&self) -> Result<Vec<Item>> {
        self.default_items(DefaultFolder::Notes)
    }

    /// Task items of the default tasks folder.
    pub fn task_items(&self) -> Result<Vec<Item>> {
        self.default_items(DefaultFolder::Tasks)
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with(r"\\") {
        path.to_string()
    } else {
        format!(r"\\{path}")
    }
}

fn items_of(folder: &Folder, kind: ItemKind) -> Result<Vec<Item>> {
    if folder.default_item_kind != kind {
        return Err(MailError::WrongItemKind {
            folder: folder.path.clone(),
            expected: kind,
            actual: folder.default_item_kind,
        });
    }
    Ok(folder.items.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    struct FakeSession {
        roots: Vec<Folder>,
    }

    impl MailSession for FakeSession {
        fn root_folders(&self) -> Result<Vec<Folder>> {
            Ok(self.roots.clone())
        }

        fn default_folder(&self, which: DefaultFolder) -> Result<Folder> {
            let path = match which {
                DefaultFolder::Inbox => r"\\Mailbox\Inbox",
                DefaultFolder::Contacts => r"\\Mailbox\Contacts",
                _ => return Err(MailError::FolderNotFound(format!("{which:?}"))),
            };
            flatten_folders(&self.roots)
                .into_iter()
                .find(|f| f.path == path)
                .cloned()
                .ok_or_else(|| MailError::FolderNotFound(path.to_string()))
        }
    }

    fn item(id: &str, kind: ItemKind) -> Item {
        Item {
            id: id.to_string(),
            kind,
            subject: format!("subject {id}"),
        }
    }

    fn session() -> FakeSession {
        FakeSession {
            roots: vec![Folder {
                path: r"\\Mailbox".to_string(),
                default_item_kind: ItemKind::Mail,
                items: Vec::new(),
                subfolders: vec![
                    Folder {
                        path: r"\\Mailbox\Inbox".to_string(),
                        default_item_kind: ItemKind::Mail,
                        items: vec![item("m1", ItemKind::Mail), item("m2", ItemKind::Mail)],
                        subfolders: Vec::new(),
                    },
                    Folder {
                        path: r"\\Mailbox\Contacts".to_string(),
                        default_item_kind: ItemKind::Contact,
                        items: vec![item("c1", ItemKind::Contact)],
                        subfolders: Vec::new(),
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_folders_are_flattened() {
        let provider = OutlookProvider::new(session());
        let paths: Vec<_> = provider
            .folders()
            .unwrap()
            .into_iter()
            .map(|f| f.path)
            .collect();
        assert_eq!(
            paths,
            vec![r"\\Mailbox\Inbox", r"\\Mailbox\Contacts", r"\\Mailbox"]
        );
    }

    #[test]
    fn test_items_by_path_with_normalization() {
        let provider = OutlookProvider::new(session());
        let items = provider.items(r"Mailbox\Inbox", ItemKind::Mail).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "m1");
    }

    #[test]
    fn test_wrong_item_kind_is_an_error() {
        let provider = OutlookProvider::new(session());
        assert!(matches!(
            provider.items(r"\\Mailbox\Contacts", ItemKind::Mail),
            Err(MailError::WrongItemKind { .. })
        ));
    }

    #[test]
    fn test_unknown_folder_is_an_error() {
        let provider = OutlookProvider::new(session());
        assert!(matches!(
            provider.items(r"\\Mailbox\Nope", ItemKind::Mail),
            Err(MailError::FolderNotFound(_))
        ));
    }

    #[test]
    fn test_default_folder_items() {
        let provider = OutlookProvider::new(session());
        assert_eq!(provider.inbox_items().unwrap().len(), 2);
        assert_eq!(provider.contact_items().unwrap().len(), 1);
        assert!(provider.task_items().is_err());
    }
}
