use std::{
    fmt,
    ops::{Add, AddAssign},
};

use tracing::debug;

use crate::{
    chain::{Chain, IntoIter, Iter, IterMut, Node},
    deep_clone::DeepClone,
    error::{Error, Result},
};

const NAME: &str = "DoublyLinkedList";

/// A doubly linked list bounded by a header and a trailer sentinel, giving
/// O(1) insertion and removal at both ends.
pub struct DoublyLinkedList<T> {
    chain: Chain<T>,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// The first node. Use [`Node::element`] for its value.
    pub fn head(&self) -> Result<Node<'_, T>> {
        self.chain
            .first()
            .map(|id| self.chain.node(id))
            .ok_or(Error::empty("read the head of", NAME))
    }

    /// The last node.
    pub fn tail(&self) -> Result<Node<'_, T>> {
        self.chain
            .last()
            .map(|id| self.chain.node(id))
            .ok_or(Error::empty("read the tail of", NAME))
    }

    pub fn append(&mut self, element: T) {
        self.chain.push_back(element);
    }

    pub fn appendleft(&mut self, element: T) {
        self.chain.push_front(element);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.chain.pop_back().ok_or(Error::empty("pop from", NAME))
    }

    pub fn popleft(&mut self) -> Result<T> {
        self.chain
            .pop_front()
            .ok_or(Error::empty("popleft from", NAME))
    }

    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.chain.find(|e| e == element).is_some()
    }

    pub fn count(&self, element: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|&e| e == element).count()
    }

    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Reverses the list in place. Every node, sentinels included, has its
    /// links swapped and the sentinels trade roles.
    pub fn reverse(&mut self) {
        self.chain.reverse();
    }

    /// Rebuilds the list element by element; no node is shared.
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        let mut list = Self::new();
        for element in self.iter() {
            list.append(element.clone());
        }
        list
    }

    pub fn deep_copy(&self) -> Self
    where
        T: DeepClone,
    {
        self.iter().map(DeepClone::deep_clone).collect()
    }

    /// Moves every element of `other` onto the back of `self`.
    ///
    /// This is a destructive merge: `other` is left empty but otherwise
    /// intact, with its own sentinels, and can be reused.
    pub fn append_list(&mut self, other: &mut Self) {
        debug!(moved = other.len(), "merging {NAME}");
        while let Some(element) = other.chain.pop_front() {
            self.chain.push_back(element);
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.chain.iter_mut()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: DeepClone> DeepClone for DoublyLinkedList<T> {
    fn deep_clone(&self) -> Self {
        self.deep_copy()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for DoublyLinkedList<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

/// Moves `other`'s elements onto `self` and returns `self`.
impl<T> Add for DoublyLinkedList<T> {
    type Output = Self;

    fn add(mut self, mut other: Self) -> Self {
        self.append_list(&mut other);
        self
    }
}

impl<T> AddAssign for DoublyLinkedList<T> {
    fn add_assign(&mut self, mut other: Self) {
        self.append_list(&mut other);
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.chain.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
