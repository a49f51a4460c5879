//! Access verification for a stored journal folder reference.
//!
//! A previously saved reference is not trusted blindly: before reuse, the
//! folder's grant is queried, and if that is inconclusive an explicit access
//! probe is made. Denial is a normal boolean outcome, never an error.

use std::{fs, path::Path};

use log::debug;
use tempfile::NamedTempFile;

/// Desired access level for the journal root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    ReadWrite,
}

/// Checks whether `path` is usable with the desired mode, probing for access
/// when the metadata query alone cannot confirm it.
pub fn verify_access(path: &Path, mode: AccessMode) -> bool {
    if query_access(path, mode) {
        return true;
    }
    request_access(path, mode)
}

/// Passive grant check: the path must exist, be a directory, and (for
/// read-write) not be marked read-only.
fn query_access(path: &Path, mode: AccessMode) -> bool {
    match fs::metadata(path) {
        Ok(meta) => {
            if !meta.is_dir() {
                debug!("Access query failed, not a directory: {}", path.display());
                return false;
            }
            match mode {
                AccessMode::Read => true,
                AccessMode::ReadWrite => !meta.permissions().readonly(),
            }
        }
        Err(e) => {
            debug!("Access query failed for {}: {}", path.display(), e);
            false
        }
    }
}

/// Active probe: attempt an enumeration for read access, a scratch-file
/// creation for read-write. The scratch file is removed on drop.
fn request_access(path: &Path, mode: AccessMode) -> bool {
    let granted = match mode {
        AccessMode::Read => fs::read_dir(path).is_ok(),
        AccessMode::ReadWrite => NamedTempFile::new_in(path).is_ok(),
    };

    if !granted {
        debug!(
            "Access request denied for {} ({:?})",
            path.display(),
            mode
        );
    }
    granted
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn grants_read_and_write_on_a_writable_directory() {
        let dir = tempdir().expect("tempdir");
        assert!(verify_access(dir.path(), AccessMode::Read));
        assert!(verify_access(dir.path(), AccessMode::ReadWrite));
    }

    #[test]
    fn denies_access_to_a_missing_path() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("gone");
        assert!(!verify_access(&missing, AccessMode::Read));
        assert!(!verify_access(&missing, AccessMode::ReadWrite));
    }

    #[test]
    fn denies_access_when_the_path_is_a_file() {
        let dir = tempdir().expect("tempdir");
        let file = dir.path().join("note.md");
        std::fs::write(&file, "x").expect("write");
        assert!(!verify_access(&file, AccessMode::Read));
    }
}
