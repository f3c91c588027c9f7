//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Tokenizer**: Splits raw bytes into words
//! - **Trigram**: Slides a three-word window and builds table keys

pub mod tokenizer;
pub mod trigram;

pub use tokenizer::Tokenizer;
pub use trigram::{count_trigrams, extract_trigrams};
