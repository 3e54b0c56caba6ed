//! Contact picture export and cleanup.
//!
//! Exported pictures follow the `Contact_{id}.jpg` naming convention so a
//! later sweep can find and remove them without tracking state.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

const PICTURE_PREFIX: &str = "Contact_";
const PICTURE_SUFFIX: &str = ".jpg";

/// Write a contact's picture into `dir` as `Contact_{id}.jpg` and return
/// the path. An already-exported picture is left untouched.
pub fn save_contact_picture(dir: &Path, contact_id: &str, jpeg: &[u8]) -> Result<PathBuf> {
    let path = dir.join(format!("{PICTURE_PREFIX}{contact_id}{PICTURE_SUFFIX}"));
    if !path.exists() {
        fs::write(&path, jpeg)?;
    }
    Ok(path)
}

/// Delete every `Contact_*.jpg` in `dir`, returning how many were removed.
///
/// Per-file deletion failures (a viewer still has the file open, say) are
/// logged and skipped; the sweep continues.
pub fn cleanup_contact_pictures(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with(PICTURE_PREFIX) && name.ends_with(PICTURE_SUFFIX) {
            match fs::remove_file(entry.path()) {
                Ok(()) => removed += 1,
                Err(err) => {
                    tracing::debug!("could not remove {}: {err}", entry.path().display());
                }
            }
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_cleanup_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let path = save_contact_picture(dir.path(), "abc123", b"\xff\xd8jpeg").unwrap();
        assert_eq!(path.file_name().unwrap(), "Contact_abc123.jpg");
        assert!(path.exists());

        // A second export does not rewrite the file.
        let again = save_contact_picture(dir.path(), "abc123", b"other").unwrap();
        assert_eq!(fs::read(&again).unwrap(), b"\xff\xd8jpeg");

        assert_eq!(cleanup_contact_pictures(dir.path()).unwrap(), 1);
        assert!(!path.exists());
    }

    #[test]
    fn test_cleanup_leaves_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        save_contact_picture(dir.path(), "a", b"x").unwrap();
        save_contact_picture(dir.path(), "b", b"y").unwrap();
        fs::write(dir.path().join("Contact_notes.txt"), b"keep").unwrap();
        fs::write(dir.path().join("photo.jpg"), b"keep").unwrap();

        assert_eq!(cleanup_contact_pictures(dir.path()).unwrap(), 2);
        assert!(dir.path().join("Contact_notes.txt").exists());
        assert!(dir.path().join("photo.jpg").exists());
    }
}
