// src/platform/clipboard.rs
//! System clipboard access through `arboard`.

use arboard::Clipboard;

use crate::core::error::PortError;
use crate::core::ports::ClipboardPort;

/// The OS text clipboard
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, PortError> {
        let inner = Clipboard::new().map_err(|e| PortError::Unavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardPort for SystemClipboard {
    fn read_text(&mut self) -> Result<Option<String>, PortError> {
        match self.inner.get_text() {
            Ok(text) => Ok(Some(text)),
            // Non-text content (images, files) counts as no text
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(PortError::Clipboard(e.to_string())),
        }
    }
}
