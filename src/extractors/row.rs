// src/extractors/row.rs
//! The extracted row record and the tab-delimited column heuristic.

use serde::{Deserialize, Serialize};

/// Column separator used by spreadsheet-like views when copying a row
pub const COLUMN_SEPARATOR: char = '\t';

const PREVIEW_CHARS: usize = 50;

/// One captured table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRow {
    /// 1-based iteration index the row was captured on
    pub row_number: u32,

    /// Clipboard text exactly as it was read
    pub raw_content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arabic_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ExtractedRow {
    /// Build a row from clipboard text captured on iteration `row_number`.
    ///
    /// Returns `None` for empty text. Columns are filled left to right from
    /// the trimmed tab-separated segments; a row with fewer than three
    /// segments simply leaves the remaining columns unset.
    pub fn from_clipboard(row_number: u32, text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }

        let mut columns = text.split(COLUMN_SEPARATOR).map(|c| c.trim().to_string());

        Some(Self {
            row_number,
            raw_content: text.to_string(),
            english_name: columns.next(),
            arabic_name: columns.next(),
            id: columns.next(),
        })
    }

    /// Short label for progress output: the first column, or a prefix of the
    /// raw text when the first column is blank
    pub fn preview(&self) -> String {
        match self.english_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.raw_content.chars().take(PREVIEW_CHARS).collect(),
        }
    }
}
