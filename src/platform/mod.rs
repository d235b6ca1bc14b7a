// src/platform/mod.rs
//! Real desktop implementations of the clipboard and input ports.

pub mod clipboard;
pub mod input;

pub use clipboard::SystemClipboard;
pub use input::SystemInput;
