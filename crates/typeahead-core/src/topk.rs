//! Bounded top-K selection over a stream of scored items.
//!
//! `TopK` keeps the K highest-scoring items seen so far in a min-heap whose
//! root is the weakest retained item. A candidate only displaces the root when
//! its score is strictly greater, so at the truncation boundary the item seen
//! first wins.

use serde::Serialize;

use crate::heap::{ArrayHeap, HeapOrder};

/// An item that can be ranked by [`TopK`].
pub trait Scored {
    fn score(&self) -> u64;
}

/// A completion candidate: a word and its accumulated frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredWord {
    pub word: String,
    pub frequency: u64,
}

impl ScoredWord {
    pub fn new(word: impl Into<String>, frequency: u64) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

impl Scored for ScoredWord {
    fn score(&self) -> u64 {
        self.frequency
    }
}

impl Scored for u64 {
    fn score(&self) -> u64 {
        *self
    }
}

struct LowestFirst;

impl<T: Scored> HeapOrder<T> for LowestFirst {
    fn precedes(a: &T, b: &T) -> bool {
        a.score() < b.score()
    }
}

pub struct TopK<T> {
    heap: ArrayHeap<T, LowestFirst>,
    k: usize,
}

impl<T: Scored> TopK<T> {
    pub fn new(k: usize) -> Self {
        Self {
            heap: ArrayHeap::with_capacity(k),
            k,
        }
    }

    pub fn capacity(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The weakest retained item, i.e. the one the next candidate must beat.
    pub fn peek_min(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Offer a candidate. Returns true if it was retained.
    ///
    /// Below capacity every candidate is kept. At capacity the candidate must
    /// score strictly higher than the current minimum, which is then evicted.
    pub fn offer(&mut self, item: T) -> bool {
        if self.heap.len() < self.k {
            self.heap.push(item);
            return true;
        }
        match self.heap.peek() {
            Some(min) if item.score() > min.score() => {
                self.heap.pop();
                self.heap.push(item);
                true
            }
            _ => false,
        }
    }

    /// Consume the selector, returning items by score, highest first.
    ///
    /// Equal scores keep their relative position in the heap array.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut items = self.heap.into_vec();
        items.sort_by(|a, b| b.score().cmp(&a.score()));
        items
    }
}

impl<T: Scored> Extend<T> for TopK<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.offer(item);
        }
    }
}
