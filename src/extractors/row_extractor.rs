// src/extractors/row_extractor.rs
//! The extraction loop.
//!
//! For each requested row the extractor presses the copy shortcut, waits for
//! the clipboard to settle, parses whatever text it finds there and then moves
//! the selection down. It never verifies that the target application reacted;
//! the configured delays are all it relies on.

use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::row::ExtractedRow;
use crate::core::config::ExtractorConfig;
use crate::core::error::PortError;
use crate::core::ports::{ClipboardPort, InputPort};
use crate::core::stop::StopSignal;

/// How an extraction run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every requested iteration ran
    Completed,
    /// The stop signal was observed at an iteration boundary
    Interrupted,
    /// A synthetic input event failed; the message describes it
    Aborted(String),
}

/// Result of one extraction run. Rows are kept for every outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub rows: Vec<ExtractedRow>,
    pub requested: u32,
    /// Iterations that got as far as issuing the copy shortcut
    pub attempted: u32,
    /// Iteration indices where the clipboard held no text
    pub skipped: Vec<u32>,
    pub outcome: RunOutcome,
}

impl ExtractionReport {
    fn new(requested: u32) -> Self {
        Self {
            rows: Vec::new(),
            requested,
            attempted: 0,
            skipped: Vec::new(),
            outcome: RunOutcome::Completed,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.outcome == RunOutcome::Completed
    }
}

/// Observer for progress of an extraction run
pub trait ExtractionListener {
    /// Called right before the focus click is sent
    fn on_focus_click(&mut self) {}

    /// Called before the copy shortcut for `row_number` is sent
    fn on_row_started(&mut self, _row_number: u32, _total: u32) {}

    /// Called when a row was parsed and stored
    fn on_row_captured(&mut self, _row: &ExtractedRow) {}

    /// Called when the clipboard held nothing usable for `row_number`
    fn on_row_skipped(&mut self, _row_number: u32) {}

    /// Called once when the loop ends, whatever the outcome
    fn on_finished(&mut self, _report: &ExtractionReport) {}
}

/// Drives the copy / parse / advance loop over injected ports
pub struct RowExtractor<C, I> {
    clipboard: C,
    input: I,
    config: ExtractorConfig,
    listeners: Vec<Box<dyn ExtractionListener>>,
}

impl<C: ClipboardPort, I: InputPort> RowExtractor<C, I> {
    /// Create an extractor with default timings
    pub fn new(clipboard: C, input: I) -> Self {
        Self::with_config(clipboard, input, ExtractorConfig::default())
    }

    pub fn with_config(clipboard: C, input: I, config: ExtractorConfig) -> Self {
        Self {
            clipboard,
            input,
            config,
            listeners: Vec::new(),
        }
    }

    pub fn add_listener<T: ExtractionListener + 'static>(&mut self, listener: T) {
        self.listeners.push(Box::new(listener));
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Give the ports back, e.g. to inspect fakes after a run
    pub fn into_ports(self) -> (C, I) {
        (self.clipboard, self.input)
    }

    /// Extract up to `count` rows, stopping early when `stop` is triggered or
    /// an input event fails.
    pub fn run(&mut self, count: u32, stop: &StopSignal) -> ExtractionReport {
        let mut report = ExtractionReport::new(count);
        info!(count, "starting row extraction");

        if stop.is_triggered() {
            info!("stop requested before the first row");
            report.outcome = RunOutcome::Interrupted;
        } else if let Err(e) = self.focus() {
            warn!("focus click failed: {}", e);
            report.outcome = RunOutcome::Aborted(e.to_string());
        } else {
            let outcome = self.extract_rows(count, stop, &mut report);
            report.outcome = outcome;
        }

        info!(
            rows = report.rows.len(),
            skipped = report.skipped.len(),
            outcome = ?report.outcome,
            "row extraction finished"
        );
        for listener in &mut self.listeners {
            listener.on_finished(&report);
        }
        report
    }

    fn focus(&mut self) -> Result<(), PortError> {
        if !self.config.focus_click {
            return Ok(());
        }
        debug!("clicking to focus target window");
        for listener in &mut self.listeners {
            listener.on_focus_click();
        }
        self.input.click()?;
        pause(self.config.focus_settle);
        Ok(())
    }

    fn extract_rows(
        &mut self,
        count: u32,
        stop: &StopSignal,
        report: &mut ExtractionReport,
    ) -> RunOutcome {
        for row_number in 1..=count {
            if stop.is_triggered() {
                info!(row_number, "stop requested, ending extraction early");
                return RunOutcome::Interrupted;
            }

            for listener in &mut self.listeners {
                listener.on_row_started(row_number, count);
            }

            report.attempted = row_number;
            if let Err(e) = self.input.copy_selection() {
                warn!(row_number, "copy shortcut failed: {}", e);
                return RunOutcome::Aborted(e.to_string());
            }
            pause(self.config.copy_settle);

            match self.read_clipboard(row_number) {
                Some(row) => {
                    debug!(row_number, raw = %row.raw_content, "captured row");
                    for listener in &mut self.listeners {
                        listener.on_row_captured(&row);
                    }
                    report.rows.push(row);
                }
                None => {
                    warn!(row_number, "no data captured");
                    report.skipped.push(row_number);
                    for listener in &mut self.listeners {
                        listener.on_row_skipped(row_number);
                    }
                }
            }

            if row_number < count {
                if let Err(e) = self.input.move_selection_down() {
                    warn!(row_number, "move down failed: {}", e);
                    return RunOutcome::Aborted(e.to_string());
                }
                pause(self.config.advance_settle);
            }
        }

        RunOutcome::Completed
    }

    /// A failed read is indistinguishable from an empty clipboard here
    fn read_clipboard(&mut self, row_number: u32) -> Option<ExtractedRow> {
        match self.clipboard.read_text() {
            Ok(Some(text)) => ExtractedRow::from_clipboard(row_number, &text),
            Ok(None) => None,
            Err(e) => {
                debug!(row_number, "clipboard read error: {}", e);
                None
            }
        }
    }
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}
