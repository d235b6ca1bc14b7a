//! Clipboard Row Extractor Library
//!
//! Copies rows out of whatever table-like view holds OS focus, one row at a
//! time, by sending the copy shortcut, reading the clipboard and pressing the
//! down arrow. The loop runs against the [`ClipboardPort`] and [`InputPort`]
//! traits; [`platform`] provides the real desktop implementations.

pub mod core;
pub mod extractors;
pub mod output;
pub mod platform;
pub mod prompt;

pub use crate::core::config::ExtractorConfig;
pub use crate::core::error::{ExtractError, ExtractResult, PortError};
pub use crate::core::ports::{ClipboardPort, InputPort};
pub use crate::core::stop::StopSignal;
pub use extractors::{ExtractedRow, ExtractionListener, ExtractionReport, RowExtractor, RunOutcome};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::config::ExtractorConfig;
    pub use crate::core::error::{ExtractError, ExtractResult, PortError};
    pub use crate::core::ports::{ClipboardPort, InputPort};
    pub use crate::core::stop::StopSignal;
    pub use crate::extractors::{
        ExtractedRow, ExtractionListener, ExtractionReport, RowExtractor, RunOutcome,
    };
    pub use crate::output::{read_rows, write_rows, DEFAULT_OUTPUT_FILE};
}
