use std::fmt;

use crate::{
    doubly_linked_list::DoublyLinkedList,
    error::{Error, Result},
};

const NAME: &str = "Queue";

/// FIFO queue over a doubly linked list: enqueue at the tail, dequeue at the
/// head, both O(1).
pub struct Queue<T> {
    data: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            data: DoublyLinkedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn enqueue(&mut self, element: T) {
        self.data.append(element);
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.data
            .popleft()
            .map_err(|_| Error::empty("dequeue from", NAME))
    }

    pub fn front(&self) -> Result<&T> {
        self.data
            .head()
            .map(|node| node.element())
            .map_err(|_| Error::empty("read the front of", NAME))
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(NAME).field(&self.data).finish()
    }
}
