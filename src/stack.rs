use std::fmt;

use crate::{
    error::{Error, Result},
    singly_linked_list::SinglyLinkedList,
};

const NAME: &str = "Stack";

/// LIFO stack. The top of the stack is the head of a singly linked list, so
/// every operation is O(1).
pub struct Stack<T> {
    data: SinglyLinkedList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            data: SinglyLinkedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn push(&mut self, element: T) {
        self.data.appendleft(element);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.data
            .popleft()
            .map_err(|_| Error::empty("pop from", NAME))
    }

    pub fn top(&self) -> Result<&T> {
        self.data
            .head()
            .map(|node| node.element())
            .map_err(|_| Error::empty("read the top of", NAME))
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes in iteration order, so the last item ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        for element in iter {
            stack.push(element);
        }
        stack
    }
}

// top first
impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(NAME).field(&self.data).finish()
    }
}
