//! Core data structures for the echo-jot application.
//!
//! This module contains the primary types used throughout the application:
//! the block tag set, parsed journal entries, and per-day aggregates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::frontmatter::Document;

/// The fixed tag set a journal entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Reflect,
    Penny,
    Idea,
    Dark,
    Todo,
    Reminder,
}

impl BlockType {
    /// Parses a frontmatter `type` value. Anything outside the tag set is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "reflect" => Some(Self::Reflect),
            "penny" => Some(Self::Penny),
            "idea" => Some(Self::Idea),
            "dark" => Some(Self::Dark),
            "todo" => Some(Self::Todo),
            "reminder" => Some(Self::Reminder),
            _ => None,
        }
    }

    /// Todos and reminders are displayed apart from free-form notes.
    pub fn is_schedulable(self) -> bool {
        matches!(self, Self::Todo | Self::Reminder)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reflect => "reflect",
            Self::Penny => "penny",
            Self::Idea => "idea",
            Self::Dark => "dark",
            Self::Todo => "todo",
            Self::Reminder => "reminder",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed journal entry from a single markdown file.
///
/// `created_at` is kept as the raw frontmatter string and ordered
/// lexicographically; inputs are expected to be ISO-8601 and are not
/// validated (a non-ISO timestamp sorts wherever the string puts it).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteBlock {
    /// Unique within its day folder; frontmatter `id` or the filename stem
    pub id: String,
    /// Entry category from the fixed tag set
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// ISO-8601 timestamp string, required
    pub created_at: String,
    /// Display title, may be empty
    pub title: String,
    /// The markdown body after the frontmatter block
    pub content: String,
    /// Free-form labels
    pub tags: Vec<String>,
    /// Scheduling date for todos
    pub do_date: Option<String>,
    /// Scheduling date for reminders
    pub reminder_date: Option<String>,
    pub linked_todos: Vec<String>,
    pub linked_reminders: Vec<String>,
    pub linked_notes: Vec<String>,
    pub linked_by: Vec<String>,
}

impl NoteBlock {
    /// Builds a block from a parsed markdown document.
    ///
    /// Returns `None` when `type` or `createdAt` is missing, or when `type`
    /// falls outside the tag set; such files are excluded from the data set
    /// entirely.
    pub fn from_document(fallback_id: &str, doc: &Document) -> Option<Self> {
        let block_type = BlockType::parse(&doc.str_field("type")?)?;
        let created_at = doc.str_field("createdAt")?;

        let id = doc
            .str_field("id")
            .unwrap_or_else(|| fallback_id.to_string());

        Some(NoteBlock {
            id,
            block_type,
            created_at,
            title: doc.str_field("title").unwrap_or_default(),
            content: doc.body.clone(),
            tags: doc.string_list("tags"),
            do_date: doc.str_field("doDate"),
            reminder_date: doc.str_field("reminderDate"),
            linked_todos: doc.string_list("linkedTodos"),
            linked_reminders: doc.string_list("linkedReminders"),
            linked_notes: doc.string_list("linkedNotes"),
            linked_by: doc.string_list("linkedBy"),
        })
    }
}

/// All journal entries for one calendar date, combined.
///
/// The date comes from the folder name and is not validated as a real
/// calendar date. Built fresh on every scan; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayJournal {
    /// Folder name matching `YYYY-MM-DD`
    pub date: String,
    /// All blocks for that date, sorted ascending by `created_at`
    pub blocks: Vec<NoteBlock>,
}

/// Splits a day's already-sorted blocks into (schedulable, notes) at display
/// time, preserving each sequence's relative order. Pure and stateless.
pub fn partition_blocks(blocks: &[NoteBlock]) -> (Vec<&NoteBlock>, Vec<&NoteBlock>) {
    blocks
        .iter()
        .partition(|block| block.block_type.is_schedulable())
}
