//! In-memory stacks, queues, linked lists, and FIFO-stable priority queues.
//!
//! This crate provides small, single-owner containers meant to be embedded
//! inside a scheduler or event loop. The centerpiece is the priority queue
//! family: binary-heap-backed queues that dequeue by priority while
//! preserving first-in-first-out order among elements of equal priority.
//!
//! # The ordering contract
//!
//! Priority alone does not total-order a queue's contents: two elements can
//! share a priority. Every element therefore carries a heap-wide insertion
//! sequence, and the pair `(priority, sequence)` orders the queue
//! lexicographically. The sequence comparison always favors the earlier
//! insertion, regardless of which direction the priority comparison runs:
//!
//! ```
//! use lanes::MaxPriorityQueue;
//!
//! let mut pq = MaxPriorityQueue::new();
//! pq.enqueue("a", 0.0);
//! pq.enqueue("b", 5.0);
//! pq.enqueue("c", 10.0);
//! pq.enqueue("d", 5.0);
//!
//! // Highest priority first; the two 5.0s drain in insertion order.
//! assert_eq!(pq.dequeue(), Some("c"));
//! assert_eq!(pq.dequeue(), Some("b"));
//! assert_eq!(pq.dequeue(), Some("d"));
//! assert_eq!(pq.dequeue(), Some("a"));
//! assert_eq!(pq.dequeue(), None);
//! ```
//!
//! Three public orderings share one engine:
//!
//! | Queue | Dequeued first | Tie-break |
//! |-------|----------------|-----------|
//! | [`MaxPriorityQueue`] | highest priority | earlier insertion |
//! | [`MinPriorityQueue`] | lowest priority | earlier insertion |
//! | [`InversePriorityQueue`] | lowest priority | earlier insertion |
//!
//! [`InversePriorityQueue`] is an alias of [`MinPriorityQueue`]; the name
//! survives from its use as a minimal-latency scheduler primitive, where
//! "inverse priority" reads as "lowest cost runs next".
//!
//! # Data structures
//!
//! | Structure | Use case | Key operations |
//! |-----------|----------|----------------|
//! | [`MaxPriorityQueue`] / [`MinPriorityQueue`] | prioritized lanes | O(log n) enqueue/dequeue |
//! | [`Queue`] / [`NodeQueue`] | FIFO-only lanes | O(1) enqueue/dequeue |
//! | [`Stack`] / [`NodeStack`] | LIFO scratch | O(1) push/pop/peek |
//! | [`LinkedList`] | by-position access | O(1) push, O(n) positional ops |
//!
//! The stack and queue each come in two backings — contiguous ([`Stack`],
//! [`Queue`]) and linked-list ([`NodeStack`], [`NodeQueue`]) — with the
//! same surface; the [`Lifo`] and [`Fifo`] traits let callers stay generic
//! over the backing.
//!
//! # Empty is an outcome, not an error
//!
//! Draining operations (`dequeue`, `pop`) return `Option::None` on an empty
//! container. A scheduling loop hits the empty case constantly; checking a
//! sentinel there is cheaper than unwinding an error.
//!
//! # Thread safety
//!
//! None of these containers synchronize. Every operation runs to completion
//! on the caller's thread with no suspension point; a caller needing shared
//! access must serialize it externally (one exclusive owner, a mutex, or an
//! actor boundary).

#![warn(missing_docs)]

pub mod heap;
pub mod list;
pub mod pqueue;
pub mod priority;
pub mod queue;
pub mod stack;

pub use heap::{MaxFirst, MinFirst, PriorityHeap, Rank};
pub use list::LinkedList;
pub use pqueue::{InversePriorityQueue, MaxPriorityQueue, MinPriorityQueue};
pub use priority::Priority;
pub use queue::{Fifo, NodeQueue, Queue};
pub use stack::{Lifo, NodeStack, Stack};
