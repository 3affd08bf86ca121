// Purpose: Forward-only linked list with owned boxed links and no tail pointer.

use std::{
    fmt,
    ops::{Add, AddAssign},
};

use crate::{
    deep_clone::DeepClone,
    error::{Error, Result},
};

const NAME: &str = "SinglyLinkedList";

/// A singly linked list.
///
/// Only the head is stored, so `append`, `pop` and `tail` walk the whole
/// chain (O(n)). Front operations are O(1).
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

type Link<T> = Option<Box<ListNode<T>>>;

struct ListNode<T> {
    element: T,
    next: Link<T>,
}

/// Borrowed view of a node. Holding one keeps the list borrowed.
pub struct Node<'a, T> {
    node: &'a ListNode<T>,
}

pub struct IntoIter<T>(SinglyLinkedList<T>);

pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
    remaining: usize,
}

pub struct IterMut<'a, T> {
    next: Option<&'a mut ListNode<T>>,
    remaining: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first node.
    pub fn head(&self) -> Result<Node<'_, T>> {
        self.head
            .as_deref()
            .map(|node| Node { node })
            .ok_or(Error::empty("read the head of", NAME))
    }

    /// The last node, found by walking from the head.
    pub fn tail(&self) -> Result<Node<'_, T>> {
        let mut node = self
            .head
            .as_deref()
            .ok_or(Error::empty("read the tail of", NAME))?;
        while let Some(next) = node.next.as_deref() {
            node = next;
        }
        Ok(Node { node })
    }

    /// Returns the link after `position` nodes. `link_at(0)` is the head
    /// link and `link_at(len)` is the empty link past the last node.
    fn link_at(&mut self, position: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..position {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    /// Inserts `element` after the last node.
    pub fn append(&mut self, element: T) {
        let len = self.len;
        *self.link_at(len) = Some(Box::new(ListNode {
            element,
            next: None,
        }));
        self.len += 1;
    }

    /// Inserts `element` in front of the head.
    pub fn appendleft(&mut self, element: T) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { element, next }));
        self.len += 1;
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::empty("pop from", NAME));
        }
        let len = self.len;
        let last = self
            .link_at(len - 1)
            .take()
            .ok_or(Error::empty("pop from", NAME))?;
        self.len -= 1;
        Ok(last.element)
    }

    /// Removes and returns the first element.
    pub fn popleft(&mut self) -> Result<T> {
        let head = self.head.take().ok_or(Error::empty("popleft from", NAME))?;
        self.head = head.next;
        self.len -= 1;
        Ok(head.element)
    }

    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == element)
    }

    pub fn count(&self, element: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|&e| e == element).count()
    }

    /// Reverses the list in place by re-pointing every `next` link.
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    /// A new list with freshly allocated nodes holding clones of the
    /// elements.
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn deep_copy(&self) -> Self
    where
        T: DeepClone,
    {
        self.iter().map(DeepClone::deep_clone).collect()
    }

    /// Moves every node of `other` onto the end of `self`, leaving `other`
    /// empty. The nodes are relinked, not copied.
    pub fn append_list(&mut self, other: &mut Self) {
        let len = self.len;
        *self.link_at(len) = other.head.take();
        self.len += other.len;
        other.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }
}

impl<'a, T> Node<'a, T> {
    pub fn element(&self) -> &'a T {
        &self.node.element
    }

    pub fn next(&self) -> Option<Node<'a, T>> {
        self.node.next.as_deref().map(|node| Node { node })
    }
}

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

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Iterative so long lists do not recurse through `Box` drops.
impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: DeepClone> DeepClone for SinglyLinkedList<T> {
    fn deep_clone(&self) -> Self {
        self.deep_copy()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let len = self.len;
        let mut added = 0;
        let mut link = self.link_at(len);
        for element in iter {
            let node = link.insert(Box::new(ListNode {
                element,
                next: None,
            }));
            link = &mut node.next;
            added += 1;
        }
        self.len += added;
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for SinglyLinkedList<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for SinglyLinkedList<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

/// Splices `other` onto `self` and returns `self`.
impl<T> Add for SinglyLinkedList<T> {
    type Output = Self;

    fn add(mut self, mut other: Self) -> Self {
        self.append_list(&mut other);
        self
    }
}

impl<T> AddAssign for SinglyLinkedList<T> {
    fn add_assign(&mut self, mut other: Self) {
        self.append_list(&mut other);
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.popleft().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
