// src/extractors/mod.rs
pub mod row;
pub mod row_extractor;

pub use row::ExtractedRow;
pub use row_extractor::{ExtractionListener, ExtractionReport, RowExtractor, RunOutcome};
