//! Statistics and TableStats.

use super::types::FrequencyTable;
use triplets_types::TableStats;

impl FrequencyTable {
    /// Returns table statistics.
    pub fn stats(&self) -> TableStats {
        TableStats {
            tokens: self.tokens,
            trigrams: self.total,
            distinct: self.entries.len(),
        }
    }
}
