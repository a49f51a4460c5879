//! Folder scanning and note aggregation.
//!
//! One scan walks the immediate children of the journal root, treats every
//! directory named `YYYY-MM-DD` as a day folder, parses each contained `.md`
//! file, and aggregates the valid blocks into sorted [`DayJournal`] groups.
//! Everything is rebuilt from disk on every call; nothing is cached between
//! scans.
//!
//! Failure policy: a read or parse error for an individual file is recorded
//! and skipped, while an enumeration-level failure (the root or a day folder
//! refusing to list) aborts the whole scan with a single error.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use log::{debug, info, warn};
use regex::Regex;
use tokio::fs;

use crate::{block::DayJournal, frontmatter, JotError, NoteBlock, Result};

/// Day folders are named as calendar dates, e.g. `2024-06-01`.
static DAY_FOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid day folder pattern"));

/// Whether a directory name follows the `YYYY-MM-DD` day folder convention.
pub(crate) fn is_day_folder_name(name: &str) -> bool {
    DAY_FOLDER_RE.is_match(name)
}

/// Outcome of one full scan of the journal root.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Day groups, sorted by date descending (most recent first)
    pub journals: Vec<DayJournal>,
    /// Files that failed to read or parse, with the failure message
    pub skipped: Vec<(PathBuf, String)>,
}

/// Scans the journal root and aggregates every valid note block.
///
/// Reads are issued sequentially in discovery order; each enumeration step
/// and file read is an await point. The caller is expected to have verified
/// access to `root` already.
pub async fn scan_journal_root(root: &Path) -> Result<ScanReport> {
    let mut report = ScanReport::default();

    let mut entries = fs::read_dir(root).await.map_err(|e| enumeration_error(root, e))?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| enumeration_error(root, e))?
    {
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| enumeration_error(root, e))?;
        if !file_type.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let Some(date) = name.to_str().filter(|n| is_day_folder_name(n)) else {
            debug!("Ignoring non-day entry: {}", entry.path().display());
            continue;
        };

        let blocks = scan_day_folder(&entry.path(), &mut report.skipped).await?;
        if blocks.is_empty() {
            debug!("Day folder {} has no valid blocks, omitting", date);
            continue;
        }

        report.journals.push(DayJournal {
            date: date.to_string(),
            blocks,
        });
    }

    // Most recent day first; lexicographic works for YYYY-MM-DD names
    report.journals.sort_by(|a, b| b.date.cmp(&a.date));

    info!(
        "Scan complete: {} day(s), {} file(s) skipped",
        report.journals.len(),
        report.skipped.len()
    );
    Ok(report)
}

/// Collects the valid blocks of one day folder, sorted ascending by
/// `created_at`.
async fn scan_day_folder(
    dir: &Path,
    skipped: &mut Vec<(PathBuf, String)>,
) -> Result<Vec<NoteBlock>> {
    let mut blocks = Vec::new();

    let mut entries = fs::read_dir(dir).await.map_err(|e| enumeration_error(dir, e))?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| enumeration_error(dir, e))?
    {
        let path = entry.path();

        let is_file = match entry.file_type().await {
            Ok(file_type) => file_type.is_file(),
            Err(e) => {
                warn!("Failed to stat {}: {}", path.display(), e);
                skipped.push((path, e.to_string()));
                continue;
            }
        };
        if !is_file || !path.extension().is_some_and(|ext| ext == "md") {
            continue;
        }

        match load_block(&path).await {
            Ok(Some(block)) => blocks.push(block),
            Ok(None) => {
                debug!(
                    "Skipping {}: missing or unrecognized type/createdAt",
                    path.display()
                );
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
                skipped.push((path, e.to_string()));
            }
        }
    }

    // Lexicographic on the raw timestamp strings; the sort is stable, so
    // ties keep discovery order
    blocks.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    Ok(blocks)
}

/// Reads and parses a single candidate file.
///
/// `Ok(None)` means the file is well-formed but is not a journal block.
async fn load_block(path: &Path) -> Result<Option<NoteBlock>> {
    let text = fs::read_to_string(path).await?;
    let doc = frontmatter::parse(&text)?;

    let fallback_id = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(NoteBlock::from_document(&fallback_id, &doc))
}

fn enumeration_error(path: &Path, e: std::io::Error) -> JotError {
    JotError::ScanFailed {
        message: format!("{}: {}", path.display(), e),
    }
}
