//! Fast folder summary by filename shape.
//!
//! A cheaper pass than the full scan: it never opens a file, it only counts
//! date folders and tallies contained filenames by pattern. The `NNN-*.md`
//! notes pattern is deliberately independent of the scanner's
//! frontmatter-based classification and the two may disagree for the same
//! folder.

use std::{path::Path, sync::LazyLock};

use log::debug;
use regex::Regex;
use serde::Serialize;
use tokio::fs;

use crate::{JotError, Result};

static NOTE_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-.+\.md$").expect("valid note file pattern"));
static TASK_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^task-.+\.md$").expect("valid task file pattern"));

/// Aggregate counts for a journal root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FolderStats {
    /// Directories named `YYYY-MM-DD`
    pub date_folders: usize,
    /// Files named `reminder-*.md` inside date folders
    pub reminders: usize,
    /// Files named `NNN-*.md` (three-digit prefix) inside date folders
    pub notes: usize,
    /// Files named `task-*.md` inside date folders
    pub tasks: usize,
}

/// Tallies folder and file counts under `root` without parsing any content.
///
/// Any enumeration failure discards the partial counts and surfaces a single
/// error.
pub async fn folder_stats(root: &Path) -> Result<FolderStats> {
    let mut stats = FolderStats::default();

    let mut entries = fs::read_dir(root).await.map_err(|e| stats_error(root, e))?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| stats_error(root, e))?
    {
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| stats_error(root, e))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };

        if !file_type.is_dir() || !crate::scanner::is_day_folder_name(name) {
            continue;
        }
        stats.date_folders += 1;

        let dir = entry.path();
        let mut files = fs::read_dir(&dir).await.map_err(|e| stats_error(&dir, e))?;
        while let Some(file) = files.next_entry().await.map_err(|e| stats_error(&dir, e))? {
            let is_file = file
                .file_type()
                .await
                .map_err(|e| stats_error(&dir, e))?
                .is_file();
            if !is_file {
                continue;
            }

            let name = file.file_name().to_string_lossy().to_lowercase();
            if name.starts_with("reminder-") && name.ends_with(".md") {
                stats.reminders += 1;
            } else if NOTE_FILE_RE.is_match(&name) {
                stats.notes += 1;
            } else if TASK_FILE_RE.is_match(&name) {
                stats.tasks += 1;
            }
        }
    }

    debug!(
        "Folder stats for {}: {} date folder(s), {} reminder(s), {} note(s), {} task(s)",
        root.display(),
        stats.date_folders,
        stats.reminders,
        stats.notes,
        stats.tasks
    );
    Ok(stats)
}

fn stats_error(path: &Path, e: std::io::Error) -> JotError {
    JotError::ScanFailed {
        message: format!("{}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn counts_by_filename_shape() {
        let root = tempdir().expect("tempdir");
        let day_one = root.path().join("2024-01-01");
        let day_two = root.path().join("2024-01-02");
        std_fs::create_dir(&day_one).expect("create");
        std_fs::create_dir(&day_two).expect("create");
        std_fs::write(day_one.join("reminder-a.md"), "").expect("write");
        std_fs::write(day_one.join("001-note.md"), "").expect("write");
        std_fs::write(day_two.join("task-x.md"), "").expect("write");

        let stats = folder_stats(root.path()).await.expect("stats");
        assert_eq!(
            stats,
            FolderStats {
                date_folders: 2,
                reminders: 1,
                notes: 1,
                tasks: 1,
            }
        );
    }

    #[tokio::test]
    async fn ignores_non_matching_names_and_non_date_folders() {
        let root = tempdir().expect("tempdir");
        let day = root.path().join("2024-02-02");
        std_fs::create_dir(&day).expect("create");
        std_fs::create_dir(root.path().join("drafts")).expect("create");
        std_fs::write(day.join("journal.md"), "").expect("write");
        std_fs::write(day.join("12-short.md"), "").expect("write");
        std_fs::write(day.join("task-plain.txt"), "").expect("write");

        let stats = folder_stats(root.path()).await.expect("stats");
        assert_eq!(
            stats,
            FolderStats {
                date_folders: 1,
                ..FolderStats::default()
            }
        );
    }

    #[tokio::test]
    async fn filename_matching_is_case_insensitive() {
        let root = tempdir().expect("tempdir");
        let day = root.path().join("2024-03-03");
        std_fs::create_dir(&day).expect("create");
        std_fs::write(day.join("Reminder-call.MD"), "").expect("write");
        std_fs::write(day.join("TASK-ship.md"), "").expect("write");

        let stats = folder_stats(root.path()).await.expect("stats");
        assert_eq!(stats.reminders, 1);
        assert_eq!(stats.tasks, 1);
    }

    #[tokio::test]
    async fn missing_root_is_a_single_error() {
        let root = tempdir().expect("tempdir");
        assert!(matches!(
            folder_stats(&root.path().join("gone")).await,
            Err(JotError::ScanFailed { .. })
        ));
    }
}
