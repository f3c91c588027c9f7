//! Word Tokenizer Module
//!
//! Splits raw input bytes into words for trigram counting. It is the first
//! stage of the pipeline: the file is read whole, handed to the tokenizer,
//! and the resulting word slices feed the trigram window.
//!
//! ## What Counts as a Word
//!
//! A word is a maximal run of ASCII letters and apostrophes (`[A-Za-z']`).
//! Every other byte is a separator: digits, punctuation, whitespace, and any
//! non-ASCII byte. Runs of separators are swallowed whole, so no empty
//! tokens are ever emitted.
//!
//! ```ignore
//! "a1b c-d e"          -> ["a", "b", "c", "d", "e"]
//! "Don't stop, 2 go!"  -> ["Don't", "stop", "go"]
//! ```
//!
//! ## Zero Allocation
//!
//! Tokens are `&str` slices of the input buffer. The callback form
//! ([`Tokenizer::tokenize`]) never allocates; [`Tokenizer::tokens`] collects
//! the same slices into a `Vec` for callers that need random access.
//!
//! ## Encoding
//!
//! The input is not decoded. Since every word byte is ASCII, any byte
//! sequence is accepted, and invalid UTF-8 simply acts as a separator.

use core::str;

/// Returns `true` if `b` may appear inside a word.
#[inline(always)]
pub const fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'\''
}

/// Streaming word tokenizer.
///
/// Stateless and `Copy`; one instance can be reused across inputs.
///
/// ## Example
///
/// ```
/// use triplets_core::analyzer::tokenizer::Tokenizer;
///
/// let mut words = Vec::new();
/// Tokenizer::new().tokenize(b"the cat, the hat", |word, _pos| words.push(word));
///
/// assert_eq!(words, ["the", "cat", "the", "hat"]);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes `input` and emits `(word, position)` left to right.
    ///
    /// Position is the zero-based index of the word in the sequence.
    #[inline]
    pub fn tokenize<'i, F>(&self, input: &'i [u8], mut emit: F)
    where
        F: FnMut(&'i str, usize),
    {
        let mut start: Option<usize> = None;
        let mut pos = 0usize;

        for (i, &b) in input.iter().enumerate() {
            match (is_word_byte(b), start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    emit(word(&input[s..i]), pos);
                    pos += 1;
                    start = None;
                }
                _ => {}
            }
        }

        if let Some(s) = start {
            emit(word(&input[s..]), pos);
        }
    }

    /// Collects all words of `input` in order.
    #[must_use]
    pub fn tokens<'i>(&self, input: &'i [u8]) -> Vec<&'i str> {
        let mut out = Vec::with_capacity(input.len() / 6);
        self.tokenize(input, |w, _| out.push(w));
        out
    }
}

#[inline(always)]
fn word(bytes: &[u8]) -> &str {
    debug_assert!(bytes.iter().all(|&b| is_word_byte(b)));
    // SAFETY: callers only pass runs where every byte satisfies
    // `is_word_byte`, which admits ASCII letters and `'` only. Pure ASCII is
    // always valid UTF-8.
    unsafe { str::from_utf8_unchecked(bytes) }
}
