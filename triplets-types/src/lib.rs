//! Core types shared by the triplets pipeline and its binaries.
//!
//! Keeping these separate from `triplets-core` lets the CLI, the bench tool
//! and the integration tests agree on:
//!
//! - **Ranked rows**: [`TrigramCount`] and how it renders
//! - **Statistics**: [`TableStats`] snapshots of a frequency table
//! - **Configuration**: [`ReportConfig`]
//! - **Errors**: the [`TripletsError`] taxonomy and its exit codes

#![warn(missing_docs)]

use core::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Number of words in a trigram.
pub const TRIGRAM_WORDS: usize = 3;

/// Default number of ranked trigrams reported.
pub const DEFAULT_LIMIT: usize = 3;

/// A ranked trigram and how many times it occurred.
///
/// `text` carries the casing of the first occurrence in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrigramCount {
    /// Three words joined by single spaces.
    pub text: String,
    /// Number of occurrences (case-insensitive).
    pub count: usize,
}

impl TrigramCount {
    /// Creates a new ranked row.
    #[inline]
    pub fn new(text: impl Into<String>, count: usize) -> Self {
        Self {
            text: text.into(),
            count,
        }
    }
}

impl fmt::Display for TrigramCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.text, self.count)
    }
}

/// A snapshot of frequency table statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    /// Number of tokens the table was built from.
    pub tokens: usize,
    /// Total trigram occurrences (sum of all counts).
    pub trigrams: usize,
    /// Number of distinct case-insensitive trigrams.
    pub distinct: usize,
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tokens={} trigrams={} distinct={}",
            self.tokens, self.trigrams, self.distinct
        )
    }
}

/// Report configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Maximum number of ranked trigrams to report.
    /// Default: 3
    pub limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ReportConfig {
    /// Creates a configuration reporting at most `limit` trigrams.
    pub const fn with_limit(limit: usize) -> Self {
        Self { limit }
    }
}

/// Errors that end a triplets run.
///
/// Every variant is fatal. The binary prints the message and exits with
/// [`TripletsError::exit_code`].
#[derive(Error, Debug)]
pub enum TripletsError {
    /// No input path was given.
    #[error("Input file expected")]
    Usage,

    /// The input file is missing or unreadable.
    #[error("cannot read '{}'", path.display())]
    FileAccess {
        /// The path that failed to load.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Fewer than three tokens were extracted, so no trigram exists.
    #[error("Too few words")]
    InsufficientData {
        /// Number of tokens that were found.
        tokens: usize,
    },
}

impl TripletsError {
    /// Process exit status for this error, in sysexits(3) style.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            TripletsError::Usage => 64,
            TripletsError::InsufficientData { .. } => 65,
            TripletsError::FileAccess { .. } => 66,
        }
    }
}
