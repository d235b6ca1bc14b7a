//! End-to-end runs of the extractor against fake ports, through to the JSON
//! file on disk.

use std::collections::VecDeque;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use clipboard_row_extractor::prelude::*;

/// Clipboard fed from a queue of texts; an empty queue reads as no text
struct QueueClipboard {
    texts: VecDeque<Option<String>>,
    on_read: Option<Box<dyn FnMut(usize)>>,
    reads: usize,
}

impl QueueClipboard {
    fn new<'a>(texts: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        Self {
            texts: texts.into_iter().map(|t| t.map(str::to_string)).collect(),
            on_read: None,
            reads: 0,
        }
    }

    fn empty() -> Self {
        Self::new(std::iter::empty())
    }
}

impl ClipboardPort for QueueClipboard {
    fn read_text(&mut self) -> Result<Option<String>, PortError> {
        self.reads += 1;
        if let Some(hook) = self.on_read.as_mut() {
            hook(self.reads);
        }
        Ok(self.texts.pop_front().flatten())
    }
}

#[derive(Default)]
struct CountingInput {
    copies: usize,
    downs: usize,
    clicks: usize,
}

impl InputPort for CountingInput {
    fn copy_selection(&mut self) -> Result<(), PortError> {
        self.copies += 1;
        Ok(())
    }

    fn move_selection_down(&mut self) -> Result<(), PortError> {
        self.downs += 1;
        Ok(())
    }

    fn click(&mut self) -> Result<(), PortError> {
        self.clicks += 1;
        Ok(())
    }
}

fn run(clipboard: QueueClipboard, count: u32, stop: &StopSignal) -> (ExtractionReport, CountingInput) {
    let mut extractor =
        RowExtractor::with_config(clipboard, CountingInput::default(), ExtractorConfig::immediate());
    let report = extractor.run(count, stop);
    let (_, input) = extractor.into_ports();
    (report, input)
}

#[test]
fn test_full_run_written_and_read_back() {
    let clipboard = QueueClipboard::new([
        Some("Cat\tقطة\t001"),
        Some("Dog\tكلب\t002"),
        Some("SoloWord"),
    ]);
    let (report, input) = run(clipboard, 3, &StopSignal::new());

    assert_eq!(report.outcome, RunOutcome::Completed);
    assert_eq!(input.clicks, 1);
    assert_eq!(input.copies, 3);
    assert_eq!(input.downs, 2);

    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_OUTPUT_FILE);
    write_rows(&path, &report.rows).unwrap();

    let restored = read_rows(&path).unwrap();
    assert_eq!(restored, report.rows);
    assert_eq!(restored[1].arabic_name.as_deref(), Some("كلب"));

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("قطة"));
    assert!(!text.contains("\\u"));

    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let solo = json[2].as_object().unwrap();
    assert_eq!(solo["english_name"], "SoloWord");
    assert!(!solo.contains_key("arabic_name"));
    assert!(!solo.contains_key("id"));
}

#[test]
fn test_skipped_row_keeps_iteration_numbering() {
    let clipboard = QueueClipboard::new([Some("a"), Some("b"), None, Some("d"), Some("e")]);
    let (report, _) = run(clipboard, 5, &StopSignal::new());

    let numbers: Vec<u32> = report.rows.iter().map(|r| r.row_number).collect();
    assert_eq!(numbers, vec![1, 2, 4, 5]);
    assert_eq!(report.skipped, vec![3]);
}

#[test]
fn test_interrupted_run_persists_completed_rows() {
    let stop = StopSignal::new();
    let mut clipboard = QueueClipboard::new(["r1", "r2", "r3", "r4", "r5"].map(Some));
    let hook_stop = stop.clone();
    clipboard.on_read = Some(Box::new(move |reads| {
        if reads == 2 {
            hook_stop.trigger();
        }
    }));

    let (report, input) = run(clipboard, 5, &stop);
    assert_eq!(report.outcome, RunOutcome::Interrupted);
    assert_eq!(input.copies, 2);

    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.json");
    write_rows(&path, &report.rows).unwrap();

    let restored = read_rows(&path).unwrap();
    assert_eq!(restored.len(), 2);
    assert_eq!(restored[0].raw_content, "r1");
    assert_eq!(restored[1].raw_content, "r2");
}

#[test]
fn test_zero_rows_writes_empty_array() {
    let (report, input) = run(QueueClipboard::empty(), 0, &StopSignal::new());
    assert!(report.rows.is_empty());
    assert_eq!(input.copies, 0);
    assert_eq!(input.downs, 0);

    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.json");
    write_rows(&path, &report.rows).unwrap();
    assert_eq!(read_rows(&path).unwrap(), Vec::<ExtractedRow>::new());
}

#[test]
fn test_default_timings() {
    let extractor = RowExtractor::new(QueueClipboard::empty(), CountingInput::default());
    let config = extractor.config();

    assert_eq!(config.copy_settle.as_millis(), 100);
    assert_eq!(config.advance_settle.as_millis(), 100);
    assert_eq!(config.focus_settle.as_millis(), 500);
    assert!(config.focus_click);
}
