//! Output formatting.
//!
//! Each ranked trigram becomes one `"<text> - <count>"` line. Lines are
//! joined with `\n` and the whole block ends with a single newline.

use std::fmt;
use std::io::{self, Write};

use triplets_types::{TableStats, TrigramCount};

/// Ranked trigrams plus the statistics of the table they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Most frequent trigrams, best first.
    pub rows: Vec<TrigramCount>,
    /// Statistics of the source table.
    pub stats: TableStats,
}

impl Report {
    /// Writes the report followed by a trailing newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
