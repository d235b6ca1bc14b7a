// src/platform/input.rs
//! Synthetic keyboard and mouse events through `enigo`.
//!
//! Events go to whichever window has focus; nothing here checks that it is
//! the intended application.

use enigo::{Button, Direction, Enigo, Key, Keyboard, Mouse, Settings};
use tracing::trace;

use crate::core::error::PortError;
use crate::core::ports::InputPort;

/// Modifier for the copy shortcut
#[cfg(target_os = "macos")]
const COPY_MODIFIER: Key = Key::Meta;
#[cfg(not(target_os = "macos"))]
const COPY_MODIFIER: Key = Key::Control;

/// Keyboard and mouse of the current desktop session
pub struct SystemInput {
    enigo: Enigo,
}

impl SystemInput {
    pub fn new() -> Result<Self, PortError> {
        let enigo =
            Enigo::new(&Settings::default()).map_err(|e| PortError::Unavailable(e.to_string()))?;
        Ok(Self { enigo })
    }

    fn key(&mut self, key: Key, direction: Direction) -> Result<(), PortError> {
        self.enigo
            .key(key, direction)
            .map_err(|e| PortError::Input(format!("{key:?} {direction:?}: {e}")))
    }
}

impl InputPort for SystemInput {
    fn copy_selection(&mut self) -> Result<(), PortError> {
        trace!("sending copy shortcut");
        self.key(COPY_MODIFIER, Direction::Press)?;
        let copied = self.key(Key::Unicode('c'), Direction::Click);
        // release the modifier even if the letter failed, so it does not stick
        let released = self.key(COPY_MODIFIER, Direction::Release);
        copied.and(released)
    }

    fn move_selection_down(&mut self) -> Result<(), PortError> {
        trace!("sending down arrow");
        self.key(Key::DownArrow, Direction::Click)
    }

    fn click(&mut self) -> Result<(), PortError> {
        trace!("sending left click");
        self.enigo
            .button(Button::Left, Direction::Click)
            .map_err(|e| PortError::Input(format!("left click: {e}")))
    }
}
