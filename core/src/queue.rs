use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Min-priority queue over `BinaryHeap`.
///
/// Items with equal keys come out in the order they were pushed, which keeps
/// Dijkstra, Prim's and Kruskal's deterministic for a given graph. Decrease-key
/// is not supported: callers push an improved entry and skip the stale one
/// when it surfaces.
#[derive(Debug)]
pub(crate) struct MinQueue<K, T> {
    heap: BinaryHeap<Reverse<Entry<K, T>>>,
    pushed: u64,
}

#[derive(Debug)]
struct Entry<K, T> {
    key: K,
    seq: u64,
    item: T,
}

impl<K: Ord, T> PartialEq for Entry<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<K: Ord, T> Eq for Entry<K, T> {}

impl<K: Ord, T> PartialOrd for Entry<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, T> Ord for Entry<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<K: Ord, T> MinQueue<K, T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            pushed: 0,
        }
    }

    pub(crate) fn push(&mut self, key: K, item: T) {
        let seq = self.pushed;
        self.pushed += 1;
        self.heap.push(Reverse(Entry { key, seq, item }));
    }

    /// Remove the item with the smallest key. `None` once exhausted.
    pub(crate) fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

    /// Smallest key and its item, without removing them.
    pub(crate) fn peek(&self) -> Option<(&K, &T)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.key, &entry.item))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
