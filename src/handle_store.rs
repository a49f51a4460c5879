//! Persistent store for the selected journal folder reference.
//!
//! One JSON key-value file in the per-user data directory holds the opaque
//! folder references this application is allowed to reuse across sessions.
//! Today there is a single slot, keyed by [`JOURNAL_ROOT_KEY`]; saving a new
//! folder fully replaces the old one.

use std::{
    collections::HashMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, warn};
use tempfile::NamedTempFile;

use crate::{JotError, Result};

/// Fixed key under which the journal root folder is persisted.
pub const JOURNAL_ROOT_KEY: &str = "journal-root";

/// Key-value store backed by a single JSON file.
pub struct HandleStore {
    /// Path of the backing file; the parent directory may not exist yet
    path: PathBuf,
}

impl HandleStore {
    /// Opens the store at its default location in the per-user data directory.
    pub fn open_default() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "echo-jot").ok_or_else(|| {
            JotError::StoreUnavailable {
                message: "could not resolve a per-user data directory".to_string(),
            }
        })?;

        Ok(Self::at(dirs.data_dir().join("handles.json")))
    }

    /// Opens the store backed by an explicit file path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Persists the journal root reference, replacing any prior value.
    pub fn save_root(&self, root: &Path) -> Result<()> {
        // A corrupt store is superseded by the fresh selection
        let mut handles = self.read_handles().unwrap_or_else(|e| {
            warn!("Discarding unreadable handle store: {}", e);
            HashMap::new()
        });
        handles.insert(JOURNAL_ROOT_KEY.to_string(), root.to_path_buf());
        self.write_handles(&handles)?;
        debug!("Saved journal root reference: {}", root.display());
        Ok(())
    }

    /// Returns the previously saved journal root, or `None` for an empty store.
    pub fn load_root(&self) -> Result<Option<PathBuf>> {
        let mut handles = self.read_handles()?;
        Ok(handles.remove(JOURNAL_ROOT_KEY))
    }

    /// Like [`load_root`](Self::load_root), but degrades store failures to
    /// "no stored reference" after logging them.
    pub fn load_root_lenient(&self) -> Option<PathBuf> {
        match self.load_root() {
            Ok(root) => root,
            Err(e) => {
                warn!("Handle store unreadable, treating as empty: {}", e);
                None
            }
        }
    }

    fn read_handles(&self) -> Result<HashMap<String, PathBuf>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => {
                return Err(JotError::StoreUnavailable {
                    message: format!("failed to read {}: {}", self.path.display(), e),
                })
            }
        };

        serde_json::from_str(&text).map_err(|e| JotError::StoreUnavailable {
            message: format!("failed to parse {}: {}", self.path.display(), e),
        })
    }

    /// Writes the full handle map atomically (temp file + rename).
    fn write_handles(&self, handles: &HashMap<String, PathBuf>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                parent
            }
            _ => Path::new("."),
        };

        let json = serde_json::to_string_pretty(handles)?;

        let mut temp_file = NamedTempFile::new_in(dir)?;
        temp_file.write_all(json.as_bytes())?;
        temp_file.flush()?;
        temp_file
            .persist(&self.path)
            .map_err(|e| JotError::Io(e.error))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_from_empty_store_is_none() {
        let dir = tempdir().expect("tempdir");
        let store = HandleStore::at(dir.path().join("handles.json"));
        assert!(store.load_root().expect("load").is_none());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempdir().expect("tempdir");
        let store = HandleStore::at(dir.path().join("handles.json"));

        store.save_root(Path::new("/journals/2024")).expect("save");
        assert_eq!(
            store.load_root().expect("load"),
            Some(PathBuf::from("/journals/2024"))
        );
    }

    #[test]
    fn save_replaces_prior_value() {
        let dir = tempdir().expect("tempdir");
        let store = HandleStore::at(dir.path().join("handles.json"));

        store.save_root(Path::new("/old/root")).expect("save");
        store.save_root(Path::new("/new/root")).expect("save");
        assert_eq!(
            store.load_root().expect("load"),
            Some(PathBuf::from("/new/root"))
        );
    }

    #[test]
    fn corrupt_store_reads_as_unavailable_and_lenient_load_degrades() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("handles.json");
        fs::write(&path, "not json at all").expect("write");

        let store = HandleStore::at(path);
        assert!(matches!(
            store.load_root(),
            Err(JotError::StoreUnavailable { .. })
        ));
        assert!(store.load_root_lenient().is_none());
    }
}
