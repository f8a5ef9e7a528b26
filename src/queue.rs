//! FIFO queues: a ring-buffer backing and a linked-list backing.

use crate::LinkedList;

use std::collections::VecDeque;

/// Don't bother shedding capacity below this many elements.
const SHRINK_FLOOR: usize = 10;

/// Shrink after a dequeue leaves a long queue strictly below half of its
/// capacity. Note the strict bound: a queue at exactly half stays put
/// (the stack's threshold is inclusive).
const fn should_shrink(len: usize, capacity: usize) -> bool {
    len > SHRINK_FLOOR && len < capacity / 2
}

/// Operations common to every queue backing.
///
/// Lets callers stay generic over the ring-buffer-backed [`Queue`] and the
/// linked-list-backed [`NodeQueue`].
pub trait Fifo<T> {
    /// Appends a value to the tail of the queue.
    fn enqueue(&mut self, value: T);

    /// Removes and returns the head value, or `None` if the queue is empty.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns a reference to the head value without removing it.
    fn peek(&self) -> Option<&T>;

    /// Returns the number of elements in the queue.
    fn len(&self) -> usize;

    /// Returns `true` if the queue is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A first-in-first-out queue backed by a ring buffer.
///
/// Dequeuing from an empty queue is a defined outcome (`None`), not an
/// error. After a dequeue leaves the queue occupying less than half of its
/// capacity, the excess capacity is released.
///
/// # Example
///
/// ```
/// use lanes::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[inline]
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates a queue with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a value to the tail of the queue.
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the head value, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let value = self.items.pop_front()?;

        let len = self.items.len();
        if should_shrink(len, self.items.capacity()) {
            self.items.shrink_to(len);
        }

        Some(value)
    }

    /// Returns a reference to the head value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Fifo<T> for Queue<T> {
    #[inline]
    fn enqueue(&mut self, value: T) {
        Queue::enqueue(self, value);
    }

    #[inline]
    fn dequeue(&mut self) -> Option<T> {
        Queue::dequeue(self)
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        Queue::peek(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Queue::len(self)
    }
}

/// A first-in-first-out queue backed by a singly-linked list.
///
/// Same surface as [`Queue`], built on the [`LinkedList`] slot arena:
/// dequeues free a slot for reuse instead of sliding the ring buffer, and
/// enqueues never move settled elements.
///
/// # Example
///
/// ```
/// use lanes::NodeQueue;
///
/// let mut queue = NodeQueue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Debug, Clone)]
pub struct NodeQueue<T> {
    nodes: LinkedList<T>,
}

impl<T> Default for NodeQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeQueue<T> {
    /// Creates an empty queue.
    #[inline]
    pub const fn new() -> Self {
        Self {
            nodes: LinkedList::new(),
        }
    }

    /// Creates a queue with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: LinkedList::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a value to the tail of the queue.
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.nodes.push_back(value);
    }

    /// Removes and returns the head value, or `None` if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.nodes.remove(0)
    }

    /// Returns a reference to the head value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.nodes.front()
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<T> Fifo<T> for NodeQueue<T> {
    #[inline]
    fn enqueue(&mut self, value: T) {
        NodeQueue::enqueue(self, value);
    }

    #[inline]
    fn dequeue(&mut self) -> Option<T> {
        NodeQueue::dequeue(self)
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        NodeQueue::peek(self)
    }

    #[inline]
    fn len(&self) -> usize {
        NodeQueue::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let queue: Queue<u64> = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert!(queue.peek().is_none());
    }

    #[test]
    fn fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        queue.enqueue("c");

        assert_eq!(queue.dequeue(), Some("a"));
        assert_eq!(queue.dequeue(), Some("b"));
        assert_eq!(queue.dequeue(), Some("c"));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut queue = Queue::new();
        queue.enqueue(42);
        queue.enqueue(43);

        assert_eq!(queue.peek(), Some(&42));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue(), Some(42));
        assert_eq!(queue.peek(), Some(&43));
    }

    #[test]
    fn empty_dequeue_is_idempotent() {
        let mut queue: Queue<u64> = Queue::new();
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn interleaved_enqueue_dequeue() {
        let mut queue = Queue::new();

        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Some(1));

        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn clear() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn drain_after_bulk_enqueue() {
        let mut queue = Queue::with_capacity(1024);
        for i in 0..1000u64 {
            queue.enqueue(i);
        }

        for expected in 0..1000u64 {
            assert_eq!(queue.dequeue(), Some(expected));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn shrink_threshold_is_strict() {
        // Exactly half the capacity does not shrink; strictly below does.
        assert!(!should_shrink(20, 40));
        assert!(should_shrink(19, 40));

        // Short queues never shrink.
        assert!(!should_shrink(10, 1000));
        assert!(should_shrink(11, 1000));
    }

    #[test]
    fn node_queue_fifo_order() {
        let mut queue = NodeQueue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        queue.enqueue("c");

        assert_eq!(queue.dequeue(), Some("a"));
        assert_eq!(queue.dequeue(), Some("b"));
        assert_eq!(queue.dequeue(), Some("c"));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn node_queue_peek_does_not_remove() {
        let mut queue = NodeQueue::new();
        queue.enqueue(42);
        queue.enqueue(43);

        assert_eq!(queue.peek(), Some(&42));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue(), Some(42));
        assert_eq!(queue.peek(), Some(&43));
    }

    #[test]
    fn node_queue_empty_dequeue_is_idempotent() {
        let mut queue: NodeQueue<u64> = NodeQueue::new();
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.dequeue(), None);

        queue.enqueue(1);
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn node_queue_interleaved() {
        let mut queue = NodeQueue::new();

        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Some(1));

        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);

        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn backings_agree_through_fifo_trait() {
        fn round_trip<Q: Fifo<u64>>(queue: &mut Q) -> Vec<u64> {
            for i in 0..100 {
                queue.enqueue(i);
            }
            let mut drained = Vec::new();
            while let Some(v) = queue.dequeue() {
                drained.push(v);
            }
            drained
        }

        let mut ring: Queue<u64> = Queue::new();
        let mut node: NodeQueue<u64> = NodeQueue::new();
        assert_eq!(round_trip(&mut ring), round_trip(&mut node));
        assert!(Fifo::is_empty(&ring));
        assert!(Fifo::is_empty(&node));
    }
}
