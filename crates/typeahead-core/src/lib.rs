//! Prefix autocomplete over a weighted vocabulary.
//!
//! - [`trie::Trie`] indexes words with accumulated frequencies and answers
//!   top-K prefix queries.
//! - [`topk::TopK`] is the bounded selector the trie feeds during traversal.
//! - [`queue::StablePriorityQueue`] orders pending requests by priority, FIFO
//!   among equals.

pub(crate) mod heap;
pub mod queue;
pub mod settings;
pub mod topk;
pub mod trie;
pub mod vocab;

pub use queue::{QueueEntry, StablePriorityQueue};
pub use topk::{ScoredWord, TopK};
pub use trie::Trie;
