//! LIFO stacks: a vector backing and a linked-list backing.

use crate::LinkedList;

/// Don't bother shedding capacity below this many elements.
const SHRINK_FLOOR: usize = 10;

/// Shrink after a pop leaves a long stack at or below half of its
/// capacity. The bound is inclusive, unlike the queue's.
const fn should_shrink(len: usize, capacity: usize) -> bool {
    len > SHRINK_FLOOR && len <= capacity / 2
}

/// Operations common to every stack backing.
///
/// Lets callers stay generic over the vector-backed [`Stack`] and the
/// linked-list-backed [`NodeStack`].
pub trait Lifo<T> {
    /// Pushes a value onto the top of the stack.
    fn push(&mut self, value: T);

    /// Removes and returns the top value, or `None` if the stack is empty.
    fn pop(&mut self) -> Option<T>;

    /// Returns a reference to the top value without removing it.
    fn peek(&self) -> Option<&T>;

    /// Returns the number of elements in the stack.
    fn len(&self) -> usize;

    /// Returns `true` if the stack is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A last-in-first-out stack backed by a vector.
///
/// Popping from an empty stack is a defined outcome (`None`), not an
/// error. After a pop leaves the stack occupying less than half of its
/// capacity, the excess capacity is released.
///
/// # Example
///
/// ```
/// use lanes::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a stack with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a value onto the top of the stack.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top value, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        let value = self.items.pop()?;

        let len = self.items.len();
        if should_shrink(len, self.items.capacity()) {
            self.items.shrink_to(len);
        }

        Some(value)
    }

    /// Returns a reference to the top value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Lifo<T> for Stack<T> {
    #[inline]
    fn push(&mut self, value: T) {
        Stack::push(self, value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Stack::pop(self)
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        Stack::peek(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Stack::len(self)
    }
}

/// A last-in-first-out stack backed by a singly-linked list.
///
/// Same surface as [`Stack`], built on the [`LinkedList`] slot arena:
/// pushes and pops work at the list head, and freed slots are reused.
///
/// # Example
///
/// ```
/// use lanes::NodeStack;
///
/// let mut stack = NodeStack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct NodeStack<T> {
    nodes: LinkedList<T>,
}

impl<T> Default for NodeStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeStack<T> {
    /// Creates an empty stack.
    #[inline]
    pub const fn new() -> Self {
        Self {
            nodes: LinkedList::new(),
        }
    }

    /// Creates a stack with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: LinkedList::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pushes a value onto the top of the stack.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.nodes.push_front(value);
    }

    /// Removes and returns the top value, or `None` if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.nodes.remove(0)
    }

    /// Returns a reference to the top value without removing it.
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

impl<T> Lifo<T> for NodeStack<T> {
    #[inline]
    fn push(&mut self, value: T) {
        NodeStack::push(self, value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        NodeStack::pop(self)
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        NodeStack::peek(self)
    }

    #[inline]
    fn len(&self) -> usize {
        NodeStack::len(self)
    }
}
