// src/prompt.rs
//! Interactive console prompts shown before extraction starts.

use std::io::{BufRead, Write};

use crate::core::error::{ExtractError, ExtractResult};

const RULE_WIDTH: usize = 50;

/// A line of `=` used to frame console output
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Print the title and usage steps
pub fn print_instructions<W: Write>(out: &mut W) -> ExtractResult<()> {
    writeln!(out, "Data Extractor - Row by Row")?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "\nInstructions:")?;
    writeln!(out, "1. Position your mouse on the FIRST row you want to extract")?;
    writeln!(out, "2. Press Enter to start")?;
    writeln!(out, "3. The extractor will:")?;
    writeln!(out, "   - Copy the selected row")?;
    writeln!(out, "   - Save it to JSON")?;
    writeln!(out, "   - Move to the next row (Down arrow)")?;
    writeln!(out, "4. Press Ctrl+C in this terminal to stop early\n")?;
    out.flush()?;
    Ok(())
}

/// Block until the user presses Enter
pub fn wait_for_confirmation<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> ExtractResult<()> {
    write!(out, "Press Enter when your mouse is on the first row...")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

/// Ask for the number of rows. Anything but a whole number is an error.
pub fn ask_row_count<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> ExtractResult<u32> {
    write!(out, "\nHow many rows do you want to extract? ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_row_count(&line)
}

pub fn parse_row_count(text: &str) -> ExtractResult<u32> {
    let trimmed = text.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| ExtractError::InvalidRowCount(trimmed.to_string()))
}
