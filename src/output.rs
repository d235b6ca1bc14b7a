// src/output.rs
//! JSON persistence of extracted rows.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::core::error::ExtractResult;
use crate::extractors::row::ExtractedRow;

/// Default output file name, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "extracted_data.json";

/// Write `rows` as a pretty-printed JSON array, replacing any existing file.
///
/// Non-ASCII text is written as-is (UTF-8), indentation is two spaces.
pub fn write_rows(path: &Path, rows: &[ExtractedRow]) -> ExtractResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    debug!(path = %path.display(), rows = rows.len(), "wrote extraction output");
    Ok(())
}

/// Read back a file produced by [`write_rows`]
pub fn read_rows(path: &Path) -> ExtractResult<Vec<ExtractedRow>> {
    let file = File::open(path)?;
    let rows = serde_json::from_reader(BufReader::new(file))?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample_rows() -> Vec<ExtractedRow> {
        vec![
            ExtractedRow::from_clipboard(1, "Cat\tقطة\t001").unwrap(),
            ExtractedRow::from_clipboard(2, "SoloWord").unwrap(),
        ]
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT_FILE);
        let rows = sample_rows();

        write_rows(&path, &rows).unwrap();
        assert_eq!(read_rows(&path).unwrap(), rows);
    }

    #[test]
    fn test_layout_and_unescaped_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_rows(&path, &sample_rows()[..1]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let expected = concat!(
            "[\n",
            "  {\n",
            "    \"row_number\": 1,\n",
            "    \"raw_content\": \"Cat\\tقطة\\t001\",\n",
            "    \"english_name\": \"Cat\",\n",
            "    \"arabic_name\": \"قطة\",\n",
            "    \"id\": \"001\"\n",
            "  }\n",
            "]\n",
        );
        assert_eq!(text, expected);
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_empty_result_is_empty_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_rows(&path, &[]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "stale content that is much longer than the new output").unwrap();

        write_rows(&path, &sample_rows()).unwrap();
        assert_eq!(read_rows(&path).unwrap().len(), 2);
    }
}
