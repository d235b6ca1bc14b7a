// src/core/stop.rs
//! Cooperative cancellation for the extraction loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag.
///
/// Cloned handles observe the same flag. The loop checks it once per
/// iteration, before issuing any input for that row.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    stopped: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the loop to stop at the next iteration boundary.
    ///
    /// Returns `true` if a stop had already been requested.
    pub fn trigger(&self) -> bool {
        self.stopped.swap(true, Ordering::SeqCst)
    }

    pub fn is_triggered(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}
