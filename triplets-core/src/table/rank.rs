//! Top-k selection over a frequency table.
//!
//! Ordering is count descending, then first occurrence ascending. The second
//! key makes ties resolve the way a stable sort over insertion order would,
//! so output is deterministic for a given input.

use core::cmp::Ordering;

use smallvec::SmallVec;
use tracing::trace;
use triplets_types::{TrigramCount, DEFAULT_LIMIT};

use super::types::{Entry, FrequencyTable};

/// Inline buffer for the usual top-3 selection.
pub type Ranked<'a> = SmallVec<[&'a Entry; DEFAULT_LIMIT]>;

/// Total order used for ranking: `Less` means `a` ranks above `b`.
#[inline]
pub fn rank_order(a: &Entry, b: &Entry) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.first_seen.cmp(&b.first_seen))
}

/// Keeps the `limit` best entries in a single pass.
///
/// The buffer stays sorted; each candidate is compared against the current
/// last place before any insertion work is done.
pub fn select_top<'a, I>(entries: I, limit: usize) -> Ranked<'a>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut top = Ranked::new();
    if limit == 0 {
        return top;
    }

    for entry in entries {
        if top.len() == limit && rank_order(entry, top[limit - 1]) != Ordering::Less {
            continue;
        }

        let idx = top
            .iter()
            .position(|&cur| rank_order(entry, cur) == Ordering::Less)
            .unwrap_or(top.len());

        if top.len() == limit {
            top.pop();
        }
        top.insert(idx, entry);
    }

    top
}

impl FrequencyTable {
    /// Returns at most `limit` trigrams, most frequent first.
    pub fn top(&self, limit: usize) -> Vec<TrigramCount> {
        let ranked = select_top(self.entries.values(), limit);
        trace!(limit, selected = ranked.len(), "ranked trigrams");

        ranked
            .into_iter()
            .map(|e| TrigramCount::new(e.text(), e.count()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, count: usize, first_seen: usize) -> Entry {
        Entry {
            text: text.into(),
            count,
            first_seen,
        }
    }

    fn texts(ranked: &Ranked<'_>) -> Vec<String> {
        ranked.iter().map(|e| e.text().to_string()).collect()
    }

    #[test]
    fn higher_count_ranks_first() {
        let a = entry("a", 5, 9);
        let b = entry("b", 2, 0);
        assert_eq!(rank_order(&a, &b), Ordering::Less);
        assert_eq!(rank_order(&b, &a), Ordering::Greater);
    }

    #[test]
    fn ties_break_on_first_occurrence() {
        let early = entry("early", 3, 1);
        let late = entry("late", 3, 7);
        assert_eq!(rank_order(&early, &late), Ordering::Less);
        assert_eq!(rank_order(&early, &early), Ordering::Equal);
    }

    #[test]
    fn selects_best_three() {
        let entries = [
            entry("one", 1, 0),
            entry("four", 4, 1),
            entry("two", 2, 2),
            entry("five", 5, 3),
            entry("three", 3, 4),
        ];

        let top = select_top(entries.iter(), 3);
        assert_eq!(texts(&top), ["five", "four", "three"]);
        assert!(!top.spilled());
    }

    #[test]
    fn fewer_entries_than_limit() {
        let entries = [entry("only", 1, 0), entry("other", 2, 1)];
        let top = select_top(entries.iter(), 3);
        assert_eq!(texts(&top), ["other", "only"]);
    }

    #[test]
    fn zero_limit_selects_nothing() {
        let entries = [entry("a", 1, 0)];
        assert!(select_top(entries.iter(), 0).is_empty());
    }

    #[test]
    fn matches_full_sort() {
        // Deterministic pseudo-random counts with plenty of ties
        let entries: Vec<Entry> = (0..200)
            .map(|i| entry(&format!("t{i}"), (i * 7919) % 13, i))
            .collect();

        let mut sorted: Vec<&Entry> = entries.iter().collect();
        sorted.sort_by(|a, b| rank_order(a, b));

        for limit in [1, 3, 5, 17] {
            let top = select_top(entries.iter(), limit);
            let expected: Vec<&Entry> = sorted.iter().copied().take(limit).collect();
            assert_eq!(top.as_slice(), expected.as_slice(), "limit {limit}");
        }
    }

    #[test]
    fn ties_keep_first_seen_order_regardless_of_iteration_order() {
        let entries = [
            entry("c", 2, 2),
            entry("a", 2, 0),
            entry("d", 2, 3),
            entry("b", 2, 1),
        ];
        let top = select_top(entries.iter(), 3);
        assert_eq!(texts(&top), ["a", "b", "c"]);
    }
}
