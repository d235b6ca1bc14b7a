// src/core/ports.rs
//! Narrow interfaces over the two pieces of process-external state the
//! extractor drives: the OS clipboard and the focused window's input queue.
//!
//! The extraction loop only ever talks to these traits, so it can run against
//! the real desktop (see [`crate::platform`]) or against scripted fakes.

use super::error::PortError;

/// Read access to the system text clipboard
pub trait ClipboardPort {
    /// Current clipboard text.
    ///
    /// `Ok(None)` means the clipboard holds no text. Implementations should not
    /// filter out empty strings; the loop treats `Some("")` as empty itself.
    fn read_text(&mut self) -> Result<Option<String>, PortError>;
}

/// Synthetic input sent to whichever window currently has focus
pub trait InputPort {
    /// Press the platform copy shortcut (Cmd+C / Ctrl+C)
    fn copy_selection(&mut self) -> Result<(), PortError>;

    /// Move the selection one row down
    fn move_selection_down(&mut self) -> Result<(), PortError>;

    /// Left click at the current pointer position
    fn click(&mut self) -> Result<(), PortError>;
}
