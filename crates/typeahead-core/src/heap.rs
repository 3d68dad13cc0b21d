//! Array-backed binary heap ordered by a [`HeapOrder`]. Backs both the top-K
//! selector and the request queue.

use std::marker::PhantomData;

/// Ordering used by [`ArrayHeap`].
pub(crate) trait HeapOrder<T> {
    /// Returns true if `a` must sit strictly closer to the root than `b`.
    fn precedes(a: &T, b: &T) -> bool;
}

pub(crate) struct ArrayHeap<T, O> {
    data: Vec<T>,
    _order: PhantomData<O>,
}

impl<T, O: HeapOrder<T>> ArrayHeap<T, O> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            _order: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Remove the root. The last element moves to the root and sifts down.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            return Some(last);
        }
        let top = std::mem::replace(&mut self.data[0], last);
        self.sift_down(0);
        Some(top)
    }

    /// The backing array in heap layout (root first).
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) >> 1;
            if !O::precedes(&self.data[i], &self.data[parent]) {
                break;
            }
            self.data.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.data.len();
        loop {
            let left = (i << 1) + 1;
            let right = left + 1;
            let mut best = i;
            if left < n && O::precedes(&self.data[left], &self.data[best]) {
                best = left;
            }
            if right < n && O::precedes(&self.data[right], &self.data[best]) {
                best = right;
            }
            if best == i {
                break;
            }
            self.data.swap(i, best);
            i = best;
        }
    }
}

impl<T, O: HeapOrder<T>> Default for ArrayHeap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}
