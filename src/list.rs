//! Singly-linked list with by-position access.
//!
//! Nodes live in a slot arena and link by index rather than by pointer:
//! removal frees a slot onto an internal free list and later insertions
//! reuse it. One backing allocation, no unsafe.

/// Sentinel index meaning "no slot".
const NONE: usize = usize::MAX;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: usize,
}

/// A singly-linked list addressed by position.
///
/// Positions are 0-based from the head. `push_front` and `push_back` are
/// O(1); positional operations walk the links and are O(n).
///
/// # Example
///
/// ```
/// use lanes::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.push_back("b");
/// list.push_back("c");
/// list.push_front("a");
///
/// assert_eq!(list.get(1), Some(&"b"));
/// assert_eq!(list.remove(1), Some("b"));
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: NONE,
            tail: NONE,
            len: 0,
        }
    }

    /// Creates a list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NONE,
            tail: NONE,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prepends a value to the head of the list.
    pub fn push_front(&mut self, value: T) {
        let slot = self.alloc(value, self.head);
        if self.len == 0 {
            self.tail = slot;
        }
        self.head = slot;
        self.len += 1;
    }

    /// Appends a value to the tail of the list.
    pub fn push_back(&mut self, value: T) {
        let slot = self.alloc(value, NONE);
        if self.len == 0 {
            self.head = slot;
        } else if let Some(tail) = self.slots[self.tail].as_mut() {
            tail.next = slot;
        }
        self.tail = slot;
        self.len += 1;
    }

    /// Returns a reference to the head value.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.slots.get(self.head)?.as_ref().map(|n| &n.value)
    }

    /// Returns a reference to the tail value.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.slots.get(self.tail)?.as_ref().map(|n| &n.value)
    }

    /// Returns a reference to the value at `pos`, or `None` if out of range.
    pub fn get(&self, pos: usize) -> Option<&T> {
        let slot = self.slot_at(pos)?;
        self.slots.get(slot)?.as_ref().map(|n| &n.value)
    }

    /// Returns a mutable reference to the value at `pos`, or `None` if out
    /// of range.
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        let slot = self.slot_at(pos)?;
        self.slots.get_mut(slot)?.as_mut().map(|n| &mut n.value)
    }

    /// Inserts a value at `pos`, shifting later positions up by one.
    ///
    /// `insert(0, v)` is `push_front`; `insert(len, v)` is `push_back`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    pub fn insert(&mut self, pos: usize, value: T) {
        assert!(
            pos <= self.len,
            "position {pos} out of bounds for length {}",
            self.len
        );

        if pos == 0 {
            self.push_front(value);
            return;
        }
        if pos == self.len {
            self.push_back(value);
            return;
        }

        let prev = self.slot_at(pos - 1).expect("list links out of sync");
        let next = self.slots[prev].as_ref().map_or(NONE, |n| n.next);
        let slot = self.alloc(value, next);
        if let Some(prev_node) = self.slots[prev].as_mut() {
            prev_node.next = slot;
        }
        self.len += 1;
    }

    /// Removes and returns the value at `pos`, or `None` if out of range.
    ///
    /// The freed slot is reused by later insertions.
    pub fn remove(&mut self, pos: usize) -> Option<T> {
        if pos >= self.len {
            return None;
        }

        if pos == 0 {
            let slot = self.head;
            let node = self.slots.get_mut(slot)?.take()?;
            self.head = node.next;
            self.free.push(slot);
            self.len -= 1;
            if self.len == 0 {
                self.head = NONE;
                self.tail = NONE;
            }
            return Some(node.value);
        }

        let prev = self.slot_at(pos - 1)?;
        let slot = self.slots.get(prev)?.as_ref()?.next;
        let node = self.slots.get_mut(slot)?.take()?;
        if let Some(prev_node) = self.slots[prev].as_mut() {
            prev_node.next = node.next;
        }
        if slot == self.tail {
            self.tail = prev;
        }
        self.free.push(slot);
        self.len -= 1;

        Some(node.value)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = NONE;
        self.tail = NONE;
        self.len = 0;
    }

    /// Returns an iterator over the values from head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            slot: self.head,
        }
    }

    /// Returns the slot index holding position `pos`.
    fn slot_at(&self, pos: usize) -> Option<usize> {
        if pos >= self.len {
            return None;
        }
        let mut slot = self.head;
        for _ in 0..pos {
            slot = self.slots.get(slot)?.as_ref()?.next;
        }
        Some(slot)
    }

    /// Places a value in a free slot (reusing one if available) and
    /// returns the slot index. Does not touch the list links.
    fn alloc(&mut self, value: T, next: usize) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(Node { value, next });
                slot
            }
            None => {
                self.slots.push(Some(Node { value, next }));
                self.slots.len() - 1
            }
        }
    }
}

/// An iterator over the values of a [`LinkedList`], head to tail.
///
/// Created by [`LinkedList::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    slot: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.list.slots.get(self.slot)?.as_ref()?;
        self.slot = node.next;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
