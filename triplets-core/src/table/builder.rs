//! Populating a frequency table from a token sequence.

use tracing::debug;
use triplets_types::{TripletsError, TRIGRAM_WORDS};

use super::types::{Entry, FrequencyTable};
use crate::analyzer::trigram::{count_trigrams, extract_trigrams, fold_key_into, join_into};

impl FrequencyTable {
    /// Counts every trigram of `words`.
    ///
    /// # Errors
    ///
    /// Returns [`TripletsError::InsufficientData`] if `words` holds fewer
    /// than three tokens.
    pub fn from_tokens(words: &[&str]) -> Result<Self, TripletsError> {
        if words.len() < TRIGRAM_WORDS {
            return Err(TripletsError::InsufficientData {
                tokens: words.len(),
            });
        }

        let mut table = Self::with_capacity(count_trigrams(words.len()));
        table.tokens = words.len();
        extract_trigrams(words, |window| table.record(window));

        debug!(
            tokens = table.tokens,
            trigrams = table.total,
            distinct = table.entries.len(),
            "frequency table built"
        );

        Ok(table)
    }

    fn record(&mut self, window: &[&str]) {
        let ordinal = self.total;
        self.total += 1;

        fold_key_into(window, &mut self.key_buf);
        if let Some(entry) = self.entries.get_mut(self.key_buf.as_str()) {
            entry.count += 1;
            return;
        }

        join_into(window, &mut self.text_buf);
        self.entries.insert(
            Box::from(self.key_buf.as_str()),
            Entry {
                text: Box::from(self.text_buf.as_str()),
                count: 1,
                first_seen: ordinal,
            },
        );
    }
}
