//! End-to-end run: file -> tokens -> frequency table -> report.

use std::fs;
use std::path::Path;

use tracing::{debug, info_span};
use triplets_types::{ReportConfig, TripletsError};

use crate::analyzer::Tokenizer;
use crate::report::Report;
use crate::table::FrequencyTable;

/// Reads the whole file into memory.
///
/// # Errors
///
/// Returns [`TripletsError::FileAccess`] if the file is missing or unreadable.
pub fn read_input(path: &Path) -> Result<Vec<u8>, TripletsError> {
    let bytes = fs::read(path).map_err(|source| TripletsError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "input loaded");
    Ok(bytes)
}

/// Counts the trigrams of `input` and ranks them.
///
/// # Errors
///
/// Returns [`TripletsError::InsufficientData`] if fewer than three words are
/// found.
pub fn analyze(input: &[u8], config: &ReportConfig) -> Result<Report, TripletsError> {
    let words = Tokenizer::new().tokens(input);
    debug!(tokens = words.len(), "tokenized");

    let table = FrequencyTable::from_tokens(&words)?;
    Ok(Report {
        rows: table.top(config.limit),
        stats: table.stats(),
    })
}

/// Loads `path` and runs [`analyze`] on its contents.
pub fn analyze_file(path: &Path, config: &ReportConfig) -> Result<Report, TripletsError> {
    let _span = info_span!("analyze_file", path = %path.display()).entered();
    let input = read_input(path)?;
    analyze(&input, config)
}
