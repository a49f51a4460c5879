//! CLI application handler for the echo-jot application
//!
//! This module resolves the stored folder reference, re-verifies access, and
//! renders scan results for each subcommand.

use std::path::PathBuf;

use chrono::DateTime;
use log::{info, warn};

use crate::{
    folder_stats, partition_blocks, scan_journal_root, verify_access, AccessMode, Commands,
    DayJournal, FolderStats, HandleStore, JotError, NoteBlock, Result,
};

/// Processes CLI commands against the handle store and the journal folder.
pub struct App {
    /// Persistent store holding the selected folder reference
    store: HandleStore,
}

impl App {
    pub fn new(store: HandleStore) -> Self {
        Self { store }
    }

    /// Run the CLI application with the given command
    pub async fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Select { path } => self.select_folder(path).await,
            Commands::Status { json } => self.show_status(json).await,
            Commands::Stats { json } => self.show_stats(json).await,
            Commands::Timeline { json } => self.show_timeline(json).await,
        }
    }

    /// Folder-picker analog: validate, verify read-write access, persist.
    async fn select_folder(&self, path: PathBuf) -> Result<()> {
        let path = path.canonicalize()?;
        if !path.is_dir() {
            return Err(JotError::NotADirectory { path });
        }
        if !verify_access(&path, AccessMode::ReadWrite) {
            return Err(JotError::PermissionDenied { path });
        }

        self.store.save_root(&path)?;
        info!("Journal root saved: {}", path.display());
        println!("Selected folder: {}", path.display());

        let stats = folder_stats(&path).await?;
        print_stats(&stats);
        Ok(())
    }

    /// Settings summary: the stored folder plus its counts.
    async fn show_status(&self, json: bool) -> Result<()> {
        let root = self.load_verified_root(AccessMode::Read)?;
        let stats = folder_stats(&root).await?;

        if json {
            let status = serde_json::json!({
                "folder": root,
                "stats": stats,
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        } else {
            println!("Selected folder: {}", root.display());
            print_stats(&stats);
        }
        Ok(())
    }

    async fn show_stats(&self, json: bool) -> Result<()> {
        let root = self.load_verified_root(AccessMode::Read)?;
        let stats = folder_stats(&root).await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            print_stats(&stats);
        }
        Ok(())
    }

    /// Renders the day-grouped timeline, most recent day first.
    async fn show_timeline(&self, json: bool) -> Result<()> {
        let root = self.load_verified_root(AccessMode::Read)?;
        let report = scan_journal_root(&root).await?;

        if !report.skipped.is_empty() {
            warn!(
                "{} file(s) could not be read or parsed and were skipped",
                report.skipped.len()
            );
        }

        if json {
            println!("{}", serde_json::to_string_pretty(&report.journals)?);
            return Ok(());
        }

        if report.journals.is_empty() {
            println!("No journal entries found.");
            return Ok(());
        }

        for (i, journal) in report.journals.iter().enumerate() {
            if i > 0 {
                println!();
            }
            render_day(journal);
        }
        Ok(())
    }

    /// Loads the stored reference and re-verifies access before reuse.
    ///
    /// Store failures degrade to "no stored reference"; a denied grant is a
    /// user-visible error, not a scan attempt.
    fn load_verified_root(&self, mode: AccessMode) -> Result<PathBuf> {
        let root = self
            .store
            .load_root_lenient()
            .ok_or(JotError::NoFolderSelected)?;

        if !verify_access(&root, mode) {
            return Err(JotError::PermissionDenied { path: root });
        }
        Ok(root)
    }
}

fn print_stats(stats: &FolderStats) {
    println!("  Date folders: {}", stats.date_folders);
    println!("  Reminders:    {}", stats.reminders);
    println!("  Note blocks:  {}", stats.notes);
    println!("  Tasks:        {}", stats.tasks);
}

fn render_day(journal: &DayJournal) {
    println!("{}", console::style(&journal.date).bold());

    let (schedulable, notes) = partition_blocks(&journal.blocks);

    // Todos and reminders come first, without a time column
    for block in &schedulable {
        println!(
            "  {:>5} {} {}",
            "",
            console::style(format!("[{}]", block.block_type)).yellow(),
            console::style(display_title(block)).bold()
        );
        render_body(block);
    }

    if notes.is_empty() {
        println!("  {}", console::style("No notes").dim());
        return;
    }

    for block in &notes {
        // Pad before styling so the ANSI codes do not skew the column
        println!(
            "  {} {} {}",
            console::style(format!("{:>5}", format_time(&block.created_at))).dim(),
            console::style(format!("[{}]", block.block_type)).cyan(),
            console::style(display_title(block)).bold()
        );
        render_body(block);
    }
}

fn render_body(block: &NoteBlock) {
    for line in block.content.lines() {
        println!("        {}", line);
    }
}

fn display_title(block: &NoteBlock) -> &str {
    if block.title.is_empty() {
        &block.id
    } else {
        &block.title
    }
}

/// Best-effort `HH:MM` from an ISO-8601 timestamp; blank when unparsable.
fn format_time(created_at: &str) -> String {
    DateTime::parse_from_rfc3339(created_at)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_extracts_hours_and_minutes() {
        assert_eq!(format_time("2024-03-10T07:30:00Z"), "07:30");
        assert_eq!(format_time("2024-03-10T19:45:12+02:00"), "19:45");
    }

    #[test]
    fn format_time_is_blank_for_non_iso_input() {
        assert_eq!(format_time("yesterday-ish"), "");
        assert_eq!(format_time(""), "");
    }
}
