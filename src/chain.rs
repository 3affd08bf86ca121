// Purpose: Sentinel-bounded doubly linked chain whose nodes live in an index arena.

use std::{fmt, iter::FusedIterator, marker::PhantomData, mem};

/// Outward link of a sentinel (header.prev / trailer.next).
const NIL: usize = usize::MAX;

// =====================
// Struct Definitions
// =====================

/// Node storage shared by `DoublyLinkedList` and `Deque`.
///
/// Slots `0` and `1` are allocated on construction and never freed: they are
/// the header and trailer sentinels. Which of the two is the header changes
/// on `reverse`, so the roles are tracked in `header` / `trailer`.
///
/// Links are slot indices. Deleted slots are pushed on `vacant` and handed
/// out again by the next insertion.
pub(crate) struct Chain<T> {
    slots: Vec<Slot<T>>,
    vacant: Vec<usize>,
    header: usize,
    trailer: usize,
    len: usize,
}

/// A sentinel or vacant slot has no element.
struct Slot<T> {
    element: Option<T>,
    prev: usize,
    next: usize,
}

/// Borrowed view of a node in a doubly linked chain.
///
/// A `Node` borrows the whole container, so it cannot be held across a call
/// that changes the chain.
pub struct Node<'a, T> {
    chain: &'a Chain<T>,
    id: usize,
}

/// Immutable reference iterator, front to back (double ended).
pub struct Iter<'a, T> {
    chain: &'a Chain<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

/// Mutable reference iterator, front to back (double ended).
pub struct IterMut<'a, T> {
    slots: *mut Slot<T>,
    front: usize,
    back: usize,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

/// Consuming iterator.
pub struct IntoIter<T> {
    chain: Chain<T>,
}

// =====================
// Inherent impl blocks
// =====================

impl<T> Slot<T> {
    fn sentinel() -> Self {
        Self {
            element: None,
            prev: NIL,
            next: NIL,
        }
    }
}

impl<T> Chain<T> {
    pub(crate) fn new() -> Self {
        let mut chain = Self {
            slots: vec![Slot::sentinel(), Slot::sentinel()],
            vacant: Vec::new(),
            header: 0,
            trailer: 1,
            len: 0,
        };
        chain.link(0, 1);
        chain
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn header(&self) -> usize {
        self.header
    }

    pub(crate) fn trailer(&self) -> usize {
        self.trailer
    }

    pub(crate) fn next(&self, id: usize) -> usize {
        self.slots[id].next
    }

    pub(crate) fn prev(&self, id: usize) -> usize {
        self.slots[id].prev
    }

    pub(crate) fn first(&self) -> Option<usize> {
        let id = self.next(self.header);
        (id != self.trailer).then_some(id)
    }

    pub(crate) fn last(&self) -> Option<usize> {
        let id = self.prev(self.trailer);
        (id != self.header).then_some(id)
    }

    pub(crate) fn element(&self, id: usize) -> &T {
        match &self.slots[id].element {
            Some(element) => element,
            None => unreachable!("slot {id} is a sentinel or vacant"),
        }
    }

    pub(crate) fn element_mut(&mut self, id: usize) -> &mut T {
        match &mut self.slots[id].element {
            Some(element) => element,
            None => unreachable!("slot {id} is a sentinel or vacant"),
        }
    }

    pub(crate) fn node(&self, id: usize) -> Node<'_, T> {
        Node { chain: self, id }
    }

    /// Makes `next` follow `prev`.
    pub(crate) fn link(&mut self, prev: usize, next: usize) {
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
    }

    /// Stores `element` in a new node spliced between `prev` and `next`,
    /// which must be adjacent. Every insertion goes through here.
    pub(crate) fn insert_between(&mut self, element: T, prev: usize, next: usize) -> usize {
        let slot = Slot {
            element: Some(element),
            prev,
            next,
        };
        let id = match self.vacant.pop() {
            Some(id) => {
                self.slots[id] = slot;
                id
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };
        self.slots[prev].next = id;
        self.slots[next].prev = id;
        self.len += 1;
        id
    }

    /// Unlinks the node from both neighbours, clears its links, recycles the
    /// slot and returns the element. Every removal goes through here.
    pub(crate) fn delete_node(&mut self, id: usize) -> T {
        debug_assert!(id != self.header && id != self.trailer);
        let (prev, next) = (self.slots[id].prev, self.slots[id].next);
        self.link(prev, next);

        let slot = &mut self.slots[id];
        slot.prev = NIL;
        slot.next = NIL;
        let element = slot.element.take();

        self.vacant.push(id);
        self.len -= 1;
        match element {
            Some(element) => element,
            None => unreachable!("slot {id} is a sentinel or vacant"),
        }
    }

    pub(crate) fn push_back(&mut self, element: T) -> usize {
        self.insert_between(element, self.prev(self.trailer), self.trailer)
    }

    pub(crate) fn push_front(&mut self, element: T) -> usize {
        self.insert_between(element, self.header, self.next(self.header))
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let id = self.last()?;
        Some(self.delete_node(id))
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let id = self.first()?;
        Some(self.delete_node(id))
    }

    /// Walks `index` steps from the first node. `index == len` lands on the
    /// trailer.
    pub(crate) fn node_at(&self, index: usize) -> usize {
        debug_assert!(index <= self.len);
        let mut id = self.next(self.header);
        for _ in 0..index {
            id = self.next(id);
        }
        id
    }

    /// First node, from the front, whose element satisfies `predicate`.
    pub(crate) fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        let mut id = self.next(self.header);
        while id != self.trailer {
            if predicate(self.element(id)) {
                return Some(id);
            }
            id = self.next(id);
        }
        None
    }

    /// Swaps `prev` and `next` on every node, sentinels included, then swaps
    /// the header and trailer roles.
    pub(crate) fn reverse(&mut self) {
        let mut id = self.header;
        while id != NIL {
            let slot = &mut self.slots[id];
            let next = slot.next;
            mem::swap(&mut slot.prev, &mut slot.next);
            id = next;
        }
        mem::swap(&mut self.header, &mut self.trailer);
    }

    /// Drops every element and resets the sentinel pair.
    pub(crate) fn clear(&mut self) {
        self.slots.truncate(2);
        self.vacant.clear();
        self.header = 0;
        self.trailer = 1;
        self.slots[0].prev = NIL;
        self.slots[1].next = NIL;
        self.link(0, 1);
        self.len = 0;
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: self,
            front: self.next(self.header),
            back: self.prev(self.trailer),
            remaining: self.len,
        }
    }

    pub(crate) fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            front: self.next(self.header),
            back: self.prev(self.trailer),
            remaining: self.len,
            slots: self.slots.as_mut_ptr(),
            _marker: PhantomData,
        }
    }

    pub(crate) fn into_iter(self) -> IntoIter<T> {
        IntoIter { chain: self }
    }
}

impl<'a, T> Node<'a, T> {
    /// The element stored in this node.
    pub fn element(&self) -> &'a T {
        self.chain.element(self.id)
    }

    /// The following node, or `None` at the end of the chain.
    pub fn next(&self) -> Option<Node<'a, T>> {
        let id = self.chain.next(self.id);
        (id != self.chain.trailer).then_some(Node {
            chain: self.chain,
            id,
        })
    }

    /// The preceding node, or `None` at the start of the chain.
    pub fn prev(&self) -> Option<Node<'a, T>> {
        let id = self.chain.prev(self.id);
        (id != self.chain.header).then_some(Node {
            chain: self.chain,
            id,
        })
    }
}

// =====================
// Trait Implementations
// =====================

impl<T> Clone for Node<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Node<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Node<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Node").field(self.element()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front;
        self.front = self.chain.next(id);
        self.remaining -= 1;
        Some(self.chain.element(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back;
        self.back = self.chain.prev(id);
        self.remaining -= 1;
        Some(self.chain.element(id))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // `remaining` stops the walk before any slot is visited twice, so the
        // yielded references never alias.
        let slot = unsafe { &mut *self.slots.add(self.front) };
        self.front = slot.next;
        self.remaining -= 1;
        slot.element.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = unsafe { &mut *self.slots.add(self.back) };
        self.back = slot.prev;
        self.remaining -= 1;
        slot.element.as_mut()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.len(), Some(self.chain.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chain.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

// =====================
// Tests
// =====================
