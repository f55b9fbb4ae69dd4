//! Input file loading for the commits analyser.
//!
//! Both input files are small CSV exports, so they are read whole into memory
//! and closed before any parsing starts.

use std::io::BufRead;
use std::path::Path;

use analyser_core::error::{AnalyserError, Result};
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Read every line of `path`, with line terminators (`\n` or `\r\n`) removed.
///
/// A missing or unreadable file yields [`AnalyserError::FileOpen`] carrying
/// the path; so does a read failure part-way through the file.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path).map_err(|source| AnalyserError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = std::io::BufReader::new(file);
    let lines = reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|source| AnalyserError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Iterate the data rows of a CSV export: the header is dropped and blank
/// lines are skipped.
///
/// Yields `(line_number, row)` with 1-based line numbers that count the
/// header, so error messages point at the right line in an editor.
pub fn data_rows<I, S>(rows: I) -> impl Iterator<Item = (usize, S)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rows.into_iter()
        .enumerate()
        .skip(1)
        .map(|(idx, row)| (idx + 1, row))
        .filter(|(_, row)| !row.as_ref().trim().is_empty())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
