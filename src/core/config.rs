// src/core/config.rs
//! Timing and behaviour knobs for an extraction run.

use std::time::Duration;

/// Default pause after the copy shortcut, in milliseconds
pub const DEFAULT_COPY_SETTLE_MS: u64 = 100;
/// Default pause after moving to the next row, in milliseconds
pub const DEFAULT_ADVANCE_SETTLE_MS: u64 = 100;
/// Default pause after the focus click, in milliseconds
pub const DEFAULT_FOCUS_SETTLE_MS: u64 = 500;

/// Configuration for the row extractor
///
/// None of the delays are acknowledged by the OS or the target application;
/// they are heuristic pauses that give the clipboard and the UI time to catch
/// up with the synthetic input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Pause after the copy shortcut before reading the clipboard
    pub copy_settle: Duration,

    /// Pause after moving the selection down before the next copy
    pub advance_settle: Duration,

    /// Pause after the initial focus click
    pub focus_settle: Duration,

    /// Whether to click once at the pointer position before the first row
    pub focus_click: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            copy_settle: Duration::from_millis(DEFAULT_COPY_SETTLE_MS),
            advance_settle: Duration::from_millis(DEFAULT_ADVANCE_SETTLE_MS),
            focus_settle: Duration::from_millis(DEFAULT_FOCUS_SETTLE_MS),
            focus_click: true,
        }
    }
}

impl ExtractorConfig {
    /// Configuration with every delay set to zero, for driving fake ports
    pub fn immediate() -> Self {
        Self {
            copy_settle: Duration::ZERO,
            advance_settle: Duration::ZERO,
            focus_settle: Duration::ZERO,
            ..Self::default()
        }
    }
}
