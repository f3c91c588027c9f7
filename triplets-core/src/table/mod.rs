//! Case-insensitive trigram frequency table.
//!
//! Memory Layout:
//! - One `FxHashMap` keyed by the ASCII-lowercased trigram
//! - Each entry owns its display text (first-seen casing), its count and the
//!   window index where it first appeared
//! - Key construction goes through reusable buffers, so recording a trigram
//!   that is already present does not allocate
//!
//! Ranking lives in [`rank`]; it selects the top entries without sorting the
//! whole table.

mod builder;
pub mod rank;
mod stats;
mod types;

pub use rank::{rank_order, select_top};
pub use types::{Entry, FrequencyTable};
