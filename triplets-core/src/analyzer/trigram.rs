//! Word trigram extraction.
//!
//! Slides a three-word window over a token sequence. Keys for the frequency
//! table are built into a caller-owned buffer so repeated lookups reuse one
//! allocation.

use triplets_types::TRIGRAM_WORDS;

/// Emits every window of three consecutive words.
///
/// For fewer than three words nothing is emitted.
/// For N words, exactly N-2 windows are emitted.
///
/// # Example
///
/// ```
/// use triplets_core::analyzer::trigram::extract_trigrams;
///
/// let words = ["the", "cat", "sat", "down"];
/// let mut trigrams = Vec::new();
/// extract_trigrams(&words, |w| trigrams.push(w.join(" ")));
///
/// assert_eq!(trigrams, ["the cat sat", "cat sat down"]);
/// ```
#[inline]
pub fn extract_trigrams<'t, F>(words: &'t [&'t str], mut callback: F)
where
    F: FnMut(&'t [&'t str]),
{
    for window in words.windows(TRIGRAM_WORDS) {
        callback(window);
    }
}

/// Number of trigrams a sequence of `words` words produces.
#[inline(always)]
pub const fn count_trigrams(words: usize) -> usize {
    words.saturating_sub(TRIGRAM_WORDS - 1)
}

/// Writes `window` joined by single spaces into `out`, preserving case.
///
/// Clears `out` first.
#[inline]
pub fn join_into(window: &[&str], out: &mut String) {
    out.clear();
    for (i, w) in window.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(w);
    }
}

/// Writes the case-folded key of `window` into `out`.
///
/// Two windows differing only in ASCII letter case produce the same key.
/// Clears `out` first.
#[inline]
pub fn fold_key_into(window: &[&str], out: &mut String) {
    join_into(window, out);
    out.make_ascii_lowercase();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows(words: &[&str]) -> Vec<String> {
        let mut out = Vec::new();
        extract_trigrams(words, |w| out.push(w.join(" ")));
        out
    }

    #[test]
    fn extract_basic() {
        assert_eq!(
            windows(&["a", "b", "c", "d", "e"]),
            ["a b c", "b c d", "c d e"]
        );
    }

    #[test]
    fn extract_short_input() {
        assert!(windows(&[]).is_empty());
        assert!(windows(&["a"]).is_empty());
        assert!(windows(&["a", "b"]).is_empty());
    }

    #[test]
    fn extract_exactly_three() {
        assert_eq!(windows(&["one", "two", "three"]), ["one two three"]);
    }

    #[test]
    fn count_basic() {
        assert_eq!(count_trigrams(0), 0);
        assert_eq!(count_trigrams(2), 0);
        assert_eq!(count_trigrams(3), 1);
        assert_eq!(count_trigrams(9), 7);
    }

    #[test]
    fn count_matches_extraction() {
        let words = ["w"; 12];
        assert_eq!(windows(&words).len(), count_trigrams(words.len()));
    }

    #[test]
    fn fold_ignores_case() {
        let mut a = String::new();
        let mut b = String::new();
        fold_key_into(&["The", "Cat", "Sat"], &mut a);
        fold_key_into(&["the", "cat", "SAT"], &mut b);
        assert_eq!(a, "the cat sat");
        assert_eq!(a, b);
    }

    #[test]
    fn join_preserves_case_and_reuses_buffer() {
        let mut buf = String::from("stale contents");
        join_into(&["Don't", "Stop", "me"], &mut buf);
        assert_eq!(buf, "Don't Stop me");
    }
}
