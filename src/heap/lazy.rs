use std::{cmp::Reverse, collections::BinaryHeap};

/// Min-heap with push/pop only.
///
/// Entries are never updated in place; whoever pops them has to check whether they are still
/// meaningful and discard them otherwise.
#[derive(Debug, Clone)]
pub struct LazyMinHeap<E: Ord> {
    heap: BinaryHeap<Reverse<E>>,
}

impl<E: Ord> Default for LazyMinHeap<E> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<E: Ord> LazyMinHeap<E> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, entry: E) {
        self.heap.push(Reverse(entry));
    }

    /// Returns the smallest entry
    pub fn peek(&self) -> Option<&E> {
        self.heap.peek().map(|Reverse(e)| e)
    }

    /// Removes and returns the smallest entry
    pub fn pop(&mut self) -> Option<E> {
        self.heap.pop().map(|Reverse(e)| e)
    }

    /// Removes all entries but keeps the allocation
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
