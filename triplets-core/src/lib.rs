//! Word trigram frequency counting.
//!
//! The pipeline reads a text file whole, splits it into words of ASCII
//! letters and apostrophes, counts every run of three consecutive words
//! ignoring case, and reports the most frequent ones.
//!
//! ```
//! use triplets_core::pipeline::analyze;
//! use triplets_types::ReportConfig;
//!
//! let report = analyze(b"the cat sat, The Cat Sat!", &ReportConfig::default()).unwrap();
//! assert_eq!(report.rows[0].to_string(), "the cat sat - 2");
//! ```

pub mod analyzer;
pub mod pipeline;
pub mod report;
pub mod table;

pub use pipeline::{analyze, analyze_file, read_input};
pub use report::Report;
pub use table::FrequencyTable;
pub use triplets_types::{ReportConfig, TableStats, TrigramCount, TripletsError};
