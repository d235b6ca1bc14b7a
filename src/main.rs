// src/main.rs
//! Row Extractor
//!
//! Walks down a table in the focused application, copying one row at a time
//! and saving the parsed rows to a JSON file.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use clipboard_row_extractor::core::config::{
    DEFAULT_ADVANCE_SETTLE_MS, DEFAULT_COPY_SETTLE_MS, DEFAULT_FOCUS_SETTLE_MS,
};
use clipboard_row_extractor::platform::{SystemClipboard, SystemInput};
use clipboard_row_extractor::prelude::*;
use clipboard_row_extractor::prompt;

const DEFAULT_START_DELAY_SECS: u64 = 3;

/// Conventional exit status for termination by SIGINT
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Command line interface for the row extractor
#[derive(Debug, Parser)]
#[command(
    name = "row-extractor",
    about = "Extract table rows from the focused application via the clipboard",
    long_about = "Copies the selected row of the focused application, parses the tab-separated \
                  columns from the clipboard, presses the down arrow and repeats. The collected \
                  rows are written to a JSON file, also when the run is stopped early with Ctrl+C."
)]
struct Args {
    /// Number of rows to extract (asked interactively when omitted)
    #[arg(short = 'n', long)]
    rows: Option<u32>,

    /// Output JSON file, overwritten if it exists
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Wait after the copy shortcut before reading the clipboard
    #[arg(long, default_value_t = DEFAULT_COPY_SETTLE_MS)]
    copy_delay_ms: u64,

    /// Wait after moving to the next row
    #[arg(long, default_value_t = DEFAULT_ADVANCE_SETTLE_MS)]
    advance_delay_ms: u64,

    /// Wait after the initial focus click
    #[arg(long, default_value_t = DEFAULT_FOCUS_SETTLE_MS)]
    focus_delay_ms: u64,

    /// Countdown before the first input event is sent
    #[arg(long, default_value_t = DEFAULT_START_DELAY_SECS)]
    start_delay_secs: u64,

    /// Do not click at the pointer position before starting
    #[arg(long)]
    no_focus_click: bool,

    /// Skip the "press Enter" confirmation
    #[arg(short, long)]
    yes: bool,

    /// Verbosity level for logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            copy_settle: Duration::from_millis(self.copy_delay_ms),
            advance_settle: Duration::from_millis(self.advance_delay_ms),
            focus_settle: Duration::from_millis(self.focus_delay_ms),
            focus_click: !self.no_focus_click,
        }
    }
}

/// Prints per-row progress to stdout
struct ConsoleProgress;

impl ExtractionListener for ConsoleProgress {
    fn on_focus_click(&mut self) {
        println!("Clicking to focus window...");
    }

    fn on_row_started(&mut self, row_number: u32, total: u32) {
        println!("\nExtracting row {}/{}...", row_number, total);
    }

    fn on_row_captured(&mut self, row: &ExtractedRow) {
        println!("✓ Captured: {}", row.preview());
    }

    fn on_row_skipped(&mut self, row_number: u32) {
        println!("✗ No data captured for row {}", row_number);
    }

    fn on_finished(&mut self, report: &ExtractionReport) {
        match &report.outcome {
            RunOutcome::Completed => {}
            RunOutcome::Interrupted => println!("\n\n⚠ Extraction interrupted by user!"),
            RunOutcome::Aborted(reason) => println!("\n\n⚠ Extraction stopped: {}", reason),
        }
    }
}

/// Set up logging based on verbosity level
fn setup_logging(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    // stay quiet by default so the console shows only the progress lines
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose > 1)
        .with_thread_ids(verbose > 2)
        .init();
}

/// Run the prompts and return the number of rows to extract
fn gather_row_count(args: &Args) -> Result<u32> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    prompt::print_instructions(&mut out)?;
    if !args.yes {
        prompt::wait_for_confirmation(&mut input, &mut out)?;
    }

    match args.rows {
        Some(rows) => Ok(rows),
        None => match prompt::ask_row_count(&mut input, &mut out) {
            Ok(rows) => Ok(rows),
            Err(e) => {
                println!("Invalid number. Exiting.");
                Err(e).context("Row count must be a whole number")
            }
        },
    }
}

/// Spawn a task that turns Ctrl+C into a stop request. A second Ctrl+C
/// exits immediately, without writing the output file.
fn install_interrupt_handler(stop: &StopSignal) {
    let stop = stop.clone();
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if stop.trigger() {
                warn!("second interrupt received, exiting without saving");
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
            warn!("interrupt received, stopping after the current row (Ctrl+C again to quit now)");
        }
    });
}

fn print_summary(report: &ExtractionReport, output: &Path) {
    let shown = output
        .canonicalize()
        .unwrap_or_else(|_| output.to_path_buf());

    println!("\n{}", prompt::rule());
    if report.is_complete() {
        println!("✓ Extraction complete!");
    } else {
        println!(
            "⚠ Extraction ended early after {}/{} rows",
            report.attempted, report.requested
        );
    }
    if !report.skipped.is_empty() {
        println!("✗ Rows without data: {:?}", report.skipped);
    }
    println!("✓ Saved {} rows to: {}", report.rows.len(), shown.display());
    println!("{}", prompt::rule());
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    info!("🚀 Starting Row Extractor v{}", env!("CARGO_PKG_VERSION"));
    debug!("Configuration: {:#?}", args);

    let count = gather_row_count(&args)?;
    let config = args.extractor_config();

    let stop = StopSignal::new();
    install_interrupt_handler(&stop);

    println!("\nStarting extraction in {} seconds...", args.start_delay_secs);
    println!("Keep the window focused!");
    tokio::time::sleep(Duration::from_secs(args.start_delay_secs)).await;

    // Platform handles are created on the blocking thread that uses them
    let task_stop = stop.clone();
    let report = tokio::task::spawn_blocking(move || -> ExtractResult<ExtractionReport> {
        let clipboard = SystemClipboard::new()?;
        let input = SystemInput::new()?;
        let mut extractor = RowExtractor::with_config(clipboard, input, config);
        extractor.add_listener(ConsoleProgress);
        Ok(extractor.run(count, &task_stop))
    })
    .await
    .context("Extraction task failed")?
    .context("Failed to initialize desktop automation")?;

    write_rows(&args.output, &report.rows)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    print_summary(&report, &args.output);
    Ok(())
}
