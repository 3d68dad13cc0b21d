//! Stable priority queue for pending lookup requests.
//!
//! Entries leave in descending priority order. Equal priorities leave in the
//! order they were enqueued: every entry is stamped with a per-queue sequence
//! number, and the heap compares `(priority desc, sequence asc)`.

#[cfg(test)]
mod tests;

use tracing::trace;

use crate::heap::{ArrayHeap, HeapOrder};

#[derive(Debug, Clone, PartialEq)]
pub struct QueueEntry<R> {
    pub request: R,
    pub priority: f64,
    pub sequence: u64,
}

impl<R> QueueEntry<R> {
    pub fn into_request(self) -> R {
        self.request
    }
}

struct HighestFirst;

impl<R> HeapOrder<QueueEntry<R>> for HighestFirst {
    fn precedes(a: &QueueEntry<R>, b: &QueueEntry<R>) -> bool {
        if a.priority != b.priority {
            return a.priority > b.priority;
        }
        a.sequence < b.sequence
    }
}

/// Map a priority that is not a number to 0. Infinities are kept, they
/// still compare.
pub fn normalize_priority(priority: f64) -> f64 {
    if priority.is_nan() {
        0.0
    } else {
        priority
    }
}

/// Coerce raw priority text: any float parses, anything else is 0.
pub fn coerce_priority(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map_or(0.0, normalize_priority)
}

pub struct StablePriorityQueue<R> {
    heap: ArrayHeap<QueueEntry<R>, HighestFirst>,
    next_sequence: u64,
}

impl<R> StablePriorityQueue<R> {
    pub fn new() -> Self {
        Self {
            heap: ArrayHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: ArrayHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    /// Enqueue `request` and return the sequence number it was stamped with.
    pub fn enqueue(&mut self, request: R, priority: f64) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        let priority = normalize_priority(priority);
        trace!(sequence, priority, pending = self.heap.len(), "enqueue");
        self.heap.push(QueueEntry {
            request,
            priority,
            sequence,
        });
        sequence
    }

    /// Remove the highest-priority entry, earliest first among equals.
    pub fn dequeue(&mut self) -> Option<QueueEntry<R>> {
        let entry = self.heap.pop()?;
        trace!(
            sequence = entry.sequence,
            priority = entry.priority,
            "dequeue"
        );
        Some(entry)
    }

    pub fn peek(&self) -> Option<&QueueEntry<R>> {
        self.heap.peek()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Dequeue everything, in dequeue order.
    pub fn drain(&mut self) -> Drain<'_, R> {
        Drain { queue: self }
    }
}

impl<R> Default for StablePriorityQueue<R> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Drain<'a, R> {
    queue: &'a mut StablePriorityQueue<R>,
}

impl<R> Iterator for Drain<'_, R> {
    type Item = QueueEntry<R>;

    fn next(&mut self) -> Option<QueueEntry<R>> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.queue.len();
        (n, Some(n))
    }
}
