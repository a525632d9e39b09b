//! The A* frontier.
//!
//! Entries are stored in a min-heap keyed by `(f_score, insertion_seq)`.
//! Lower scores are popped first; ties are broken by insertion order
//! (FIFO). Membership is tracked in a bitmap indexed by arena index.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry {
    f: f32,
    /// Monotonically increasing counter used to break ties.
    /// Lower = inserted earlier = popped first.
    seq: u64,
    idx: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A stable priority queue of arena indices with O(1) membership tests.
#[derive(Debug)]
pub struct OpenSet {
    heap: BinaryHeap<Reverse<Entry>>,
    member: Vec<bool>,
    seq: u64,
}

impl OpenSet {
    /// An empty set able to hold indices `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            member: vec![false; capacity],
            seq: 0,
        }
    }

    /// Insert `idx` with priority `f`. The caller checks
    /// [`contains`](Self::contains) first.
    pub fn push(&mut self, idx: usize, f: f32) {
        let seq = self.seq;
        self.seq += 1;
        self.member[idx] = true;
        self.heap.push(Reverse(Entry { f, seq, idx }));
    }

    /// Remove the entry with the lowest score (ties broken FIFO), returning
    /// its index and score.
    pub fn pop(&mut self) -> Option<(usize, f32)> {
        let Reverse(entry) = self.heap.pop()?;
        self.member[entry.idx] = false;
        Some((entry.idx, entry.f))
    }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.member.get(idx).copied().unwrap_or(false)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
