//! Frequency table and entry definitions.

use rustc_hash::FxHashMap;

/// One distinct trigram in a [`FrequencyTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) text: Box<str>,
    pub(crate) count: usize,
    pub(crate) first_seen: usize,
}

impl Entry {
    /// Display text, cased as it first appeared.
    #[inline(always)]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of case-insensitive occurrences.
    #[inline(always)]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Window index of the first occurrence.
    #[inline(always)]
    pub const fn first_seen(&self) -> usize {
        self.first_seen
    }
}

/// Case-insensitive trigram frequency table.
///
/// Keyed by the ASCII-lowercased trigram; each entry keeps the casing of its
/// first occurrence for display. Built in a single left-to-right pass and
/// read once.
#[derive(Default)]
pub struct FrequencyTable {
    /// Folded key -> entry
    pub(crate) entries: FxHashMap<Box<str>, Entry>,
    /// Tokens the table was built from
    pub(crate) tokens: usize,
    /// Sum of all counts
    pub(crate) total: usize,
    /// Reusable buffer for folded keys
    pub(crate) key_buf: String,
    /// Reusable buffer for display text
    pub(crate) text_buf: String,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with room for `capacity` distinct trigrams.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            ..Self::default()
        }
    }

    /// Number of distinct trigrams.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no trigram has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of tokens the table was built from.
    #[inline]
    pub fn tokens(&self) -> usize {
        self.tokens
    }

    /// Looks up a trigram ignoring ASCII case.
    pub fn get(&self, text: &str) -> Option<&Entry> {
        self.entries.get(text.to_ascii_lowercase().as_str())
    }

    /// Iterates entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }
}
