//! Binary heap engine shared by the priority queue variants.
//!
//! One engine, parameterized by comparison direction. The FIFO tie-break
//! rule (earlier insertion dequeues first) lives here and only here; the
//! [`Rank`] implementations contribute nothing but the direction applied
//! to unequal priorities.

use crate::Priority;

use core::cmp::Ordering;
use core::marker::PhantomData;

/// Comparison direction for a [`PriorityHeap`].
///
/// Implementors decide which of two *unequal* priorities dequeues first.
/// Equal priorities are not theirs to break; the engine orders those by
/// insertion sequence.
pub trait Rank {
    /// Returns `true` if an item whose priority compares as `ord` against
    /// another's dequeues before it.
    ///
    /// Never called with [`Ordering::Equal`].
    fn favors(ord: Ordering) -> bool;
}

/// Higher priorities dequeue first.
#[derive(Debug, Clone, Copy)]
pub enum MaxFirst {}

/// Lower priorities dequeue first.
#[derive(Debug, Clone, Copy)]
pub enum MinFirst {}

impl Rank for MaxFirst {
    #[inline]
    fn favors(ord: Ordering) -> bool {
        ord == Ordering::Greater
    }
}

impl Rank for MinFirst {
    #[inline]
    fn favors(ord: Ordering) -> bool {
        ord == Ordering::Less
    }
}

/// A payload and its ordering keys, as stored in the heap array.
#[derive(Debug, Clone)]
struct HeapItem<T, P> {
    value: T,
    priority: P,
    /// Heap-wide insertion sequence; the FIFO tie-break key.
    seq: u64,
    /// Current index in the heap array, maintained by every swap.
    pos: usize,
}

/// A binary heap with a pluggable comparison direction and FIFO tie-break.
///
/// The heap array doubles as the binary tree: `parent(i) = (i - 1) / 2`,
/// children at `2i + 1` and `2i + 2`. Each item records its own array
/// index, updated on every swap.
///
/// Most callers want the façades in [`pqueue`](crate::pqueue) rather than
/// this engine; they pin the direction into the type so a live queue's
/// ordering cannot be flipped.
///
/// # Example
///
/// ```
/// use lanes::{MinFirst, PriorityHeap};
///
/// let mut heap: PriorityHeap<&str, u32, MinFirst> = PriorityHeap::new();
/// heap.enqueue("later", 20);
/// heap.enqueue("soon", 10);
///
/// assert_eq!(heap.dequeue(), Some("soon"));
/// assert_eq!(heap.dequeue(), Some("later"));
/// assert_eq!(heap.dequeue(), None);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityHeap<T, P: Priority, R: Rank> {
    items: Vec<HeapItem<T, P>>,
    /// Incremented on every enqueue; resets to zero when a dequeue finds
    /// the heap empty. The reset bounds counter growth and is unobservable:
    /// an empty heap has no pending ties.
    counter: u64,
    _rank: PhantomData<R>,
}

impl<T, P: Priority, R: Rank> Default for PriorityHeap<T, P, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Priority, R: Rank> PriorityHeap<T, P, R> {
    /// Creates an empty heap.
    #[inline]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            counter: 0,
            _rank: PhantomData,
        }
    }

    /// Creates a heap with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            counter: 0,
            _rank: PhantomData,
        }
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the capacity of the heap array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Inserts `value` with the given priority.
    ///
    /// The new item receives the next insertion sequence, so a priority tie
    /// on the way up never overtakes an earlier-inserted equal: the fresh
    /// item carries the largest sequence in the heap.
    pub fn enqueue(&mut self, value: T, priority: P) {
        let pos = self.items.len();
        self.items.push(HeapItem {
            value,
            priority,
            seq: self.counter,
            pos,
        });
        self.counter += 1;
        self.sift_up(pos);
    }

    /// Removes and returns the extremal element.
    ///
    /// Returns `None` if the heap is empty; an empty dequeue also restarts
    /// the insertion counter from zero.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            self.counter = 0;
            return None;
        }

        let last = self.items.len() - 1;
        self.swap(0, last);
        let item = self.items.pop().expect("heap checked non-empty above");
        if !self.items.is_empty() {
            self.sift_down(0);
        }

        Some(item.value)
    }

    /// Removes all elements and restarts the insertion counter.
    pub fn clear(&mut self) {
        self.items.clear();
        self.counter = 0;
    }

    /// Returns `true` if `a` dequeues strictly before `b`.
    ///
    /// Priority decides; equal priorities fall back to insertion sequence.
    /// The sequence comparison always favors the earlier insertion, no
    /// matter which way `R` runs.
    #[inline]
    fn precedes(a: &HeapItem<T, P>, b: &HeapItem<T, P>) -> bool {
        match a.priority.rank(&b.priority) {
            Ordering::Equal => a.seq < b.seq,
            ord => R::favors(ord),
        }
    }

    /// Swaps two items and patches their recorded positions.
    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
        self.items[i].pos = i;
        self.items[j].pos = j;
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if Self::precedes(&self.items[pos], &self.items[parent]) {
                self.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }

            // Descend toward the better child.
            let right = left + 1;
            let mut child = left;
            if right < len && Self::precedes(&self.items[right], &self.items[left]) {
                child = right;
            }

            if Self::precedes(&self.items[child], &self.items[pos]) {
                self.swap(pos, child);
                pos = child;
            } else {
                break;
            }
        }
    }
}
