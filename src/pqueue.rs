//! Priority queue façades over the shared heap engine.
//!
//! Each façade pins a comparison direction into its type at construction,
//! so a live queue's ordering cannot be flipped. Beyond the direction they
//! are identical: `enqueue`, `dequeue`, `len`, and nothing else of note.

use crate::Priority;
use crate::heap::{MaxFirst, MinFirst, PriorityHeap};

/// A priority queue that dequeues the highest priority first.
///
/// Elements of equal priority dequeue in insertion order.
///
/// # Example
///
/// ```
/// use lanes::MaxPriorityQueue;
///
/// let mut pq = MaxPriorityQueue::new();
/// pq.enqueue("low", 1.0);
/// pq.enqueue("high", 10.0);
/// pq.enqueue("mid", 5.0);
///
/// assert_eq!(pq.dequeue(), Some("high"));
/// assert_eq!(pq.dequeue(), Some("mid"));
/// assert_eq!(pq.dequeue(), Some("low"));
/// assert_eq!(pq.dequeue(), None);
/// ```
#[derive(Debug, Clone)]
pub struct MaxPriorityQueue<T, P: Priority = f64> {
    heap: PriorityHeap<T, P, MaxFirst>,
}

/// A priority queue that dequeues the lowest priority first.
///
/// Elements of equal priority dequeue in insertion order.
///
/// # Example
///
/// ```
/// use lanes::MinPriorityQueue;
///
/// let mut pq = MinPriorityQueue::new();
/// pq.enqueue("expensive", 10.0);
/// pq.enqueue("cheap", 1.0);
///
/// assert_eq!(pq.dequeue(), Some("cheap"));
/// assert_eq!(pq.dequeue(), Some("expensive"));
/// ```
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<T, P: Priority = f64> {
    heap: PriorityHeap<T, P, MinFirst>,
}

/// A minimal-latency scheduler primitive: lowest cost dequeues next.
///
/// Structurally identical to [`MinPriorityQueue`]; the name exists for
/// call sites where priorities are costs and "inverse priority" reads
/// better than "min priority".
pub type InversePriorityQueue<T, P = f64> = MinPriorityQueue<T, P>;

macro_rules! facade_impl {
    ($name:ident) => {
        impl<T, P: Priority> $name<T, P> {
            /// Creates an empty queue.
            #[inline]
            pub const fn new() -> Self {
                Self {
                    heap: PriorityHeap::new(),
                }
            }

            /// Creates a queue with pre-allocated capacity.
            #[inline]
            pub fn with_capacity(capacity: usize) -> Self {
                Self {
                    heap: PriorityHeap::with_capacity(capacity),
                }
            }

            /// Returns the number of elements in the queue.
            #[inline]
            pub fn len(&self) -> usize {
                self.heap.len()
            }

            /// Returns `true` if the queue is empty.
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.heap.is_empty()
            }

            /// Inserts `value` with the given priority. Never fails.
            #[inline]
            pub fn enqueue(&mut self, value: T, priority: P) {
                self.heap.enqueue(value, priority);
            }

            /// Removes and returns the next element under this queue's
            /// ordering, or `None` if the queue is empty.
            #[inline]
            pub fn dequeue(&mut self) -> Option<T> {
                self.heap.dequeue()
            }

            /// Removes all elements.
            #[inline]
            pub fn clear(&mut self) {
                self.heap.clear();
            }
        }

        impl<T, P: Priority> Default for $name<T, P> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

facade_impl!(MaxPriorityQueue);
facade_impl!(MinPriorityQueue);
