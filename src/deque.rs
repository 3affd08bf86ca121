// Purpose: Bounded double-ended queue over a sentinel-bounded doubly linked chain.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Add, Index, IndexMut, Mul, MulAssign},
};

use tracing::{debug, trace};

use crate::{
    chain::{Chain, IntoIter, Iter, IterMut},
    deep_clone::DeepClone,
    error::{Error, Result},
};

const NAME: &str = "Deque";

// =====================
// Struct Definitions
// =====================

/// A double-ended queue with an optional maximum length.
///
/// Elements live in a doubly linked chain, so both ends are O(1). Indexed
/// access walks from the front and is O(n).
///
/// When `maxlen` is set and the deque is full, appending on one end evicts
/// the element at the other end. With `maxlen == Some(0)` every append is
/// silently dropped. `maxlen` cannot change after construction.
pub struct Deque<T> {
    chain: Chain<T>,
    maxlen: Option<usize>,
}

#[derive(Clone, Copy)]
enum End {
    Front,
    Back,
}

// =====================
// Inherent impl blocks
// =====================

impl<T> Deque<T> {
    /// An empty, unbounded deque.
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
            maxlen: None,
        }
    }

    /// An empty deque holding at most `maxlen` elements.
    pub fn with_maxlen(maxlen: usize) -> Self {
        Self {
            chain: Chain::new(),
            maxlen: Some(maxlen),
        }
    }

    /// Appends every element of `iter` in order. With a bound, only the last
    /// `maxlen` elements survive.
    pub fn from_iter_with_maxlen<I>(iter: I, maxlen: Option<usize>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut deque = Self {
            chain: Chain::new(),
            maxlen,
        };
        deque.extend(iter);
        deque
    }

    pub fn maxlen(&self) -> Option<usize> {
        self.maxlen
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.maxlen.is_some_and(|maxlen| self.len() >= maxlen)
    }

    /// Makes space for one element that will be inserted at the end opposite
    /// to `evict`. Returns `false` when the element must be dropped instead.
    fn make_room(&mut self, evict: End) -> bool {
        let Some(maxlen) = self.maxlen else {
            return true;
        };
        if maxlen == 0 {
            trace!("maxlen is 0, dropping inserted element");
            return false;
        }
        if self.len() >= maxlen {
            let (victim, end) = match evict {
                End::Front => (self.chain.first(), "front"),
                End::Back => (self.chain.last(), "back"),
            };
            if let Some(id) = victim {
                drop(self.chain.delete_node(id));
                trace!(maxlen, end, "evicted element");
            }
        }
        true
    }

    /// Adds `element` to the back, evicting the front element when full.
    pub fn append(&mut self, element: T) {
        if self.make_room(End::Front) {
            self.chain.push_back(element);
        }
    }

    /// Adds `element` to the front, evicting the back element when full.
    pub fn appendleft(&mut self, element: T) {
        if self.make_room(End::Back) {
            self.chain.push_front(element);
        }
    }

    pub fn pop(&mut self) -> Result<T> {
        self.chain.pop_back().ok_or(Error::empty("pop from", NAME))
    }

    pub fn popleft(&mut self) -> Result<T> {
        self.chain
            .pop_front()
            .ok_or(Error::empty("popleft from", NAME))
    }

    /// Prepends each element of `iter` in turn, so they end up in reverse
    /// order at the front.
    pub fn extend_left<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.appendleft(element);
        }
    }

    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Translates a possibly negative index into a position in `0..len`.
    fn validate_index(&self, index: isize) -> Result<usize> {
        let len = self.len();
        let position = if index < 0 {
            index + len as isize
        } else {
            index
        };
        if position < 0 || position >= len as isize {
            return Err(Error::IndexOutOfRange {
                container: NAME,
                index,
                len,
            });
        }
        Ok(position as usize)
    }

    /// Like `validate_index`, but `len` itself is accepted as an exclusive
    /// bound.
    fn validate_bound(&self, bound: isize) -> Result<usize> {
        let len = self.len();
        if bound == len as isize {
            return Ok(len);
        }
        self.validate_index(bound)
    }

    fn find_node_at_index<I: TryInto<isize>>(&self, index: I) -> Result<usize> {
        let position = self.validate_index(to_offset(index)?)?;
        Ok(self.chain.node_at(position))
    }

    /// The element at `index`; negative indices count from the back.
    pub fn get<I: TryInto<isize>>(&self, index: I) -> Result<&T> {
        let id = self.find_node_at_index(index)?;
        Ok(self.chain.element(id))
    }

    pub fn get_mut<I: TryInto<isize>>(&mut self, index: I) -> Result<&mut T> {
        let id = self.find_node_at_index(index)?;
        Ok(self.chain.element_mut(id))
    }

    /// Replaces the element at `index`, returning the old one.
    pub fn set<I: TryInto<isize>>(&mut self, index: I, element: T) -> Result<T> {
        let id = self.find_node_at_index(index)?;
        Ok(mem::replace(self.chain.element_mut(id), element))
    }

    /// Unlinks and returns the element at `index`.
    pub fn remove_at<I: TryInto<isize>>(&mut self, index: I) -> Result<T> {
        let id = self.find_node_at_index(index)?;
        Ok(self.chain.delete_node(id))
    }

    /// Inserts `element` before the element currently at `index`.
    /// `index == len` appends.
    ///
    /// Inserting never evicts: a full bounded deque rejects the insertion.
    pub fn insert<I: TryInto<isize>>(&mut self, index: I, element: T) -> Result<()> {
        let index = to_offset(index)?;
        let len = self.len();
        let position = if index == len as isize {
            len
        } else {
            self.validate_index(index)?
        };
        if let Some(maxlen) = self.maxlen {
            if len >= maxlen {
                return Err(Error::CapacityExceeded {
                    container: NAME,
                    maxlen,
                });
            }
        }

        let next = self.chain.node_at(position);
        let prev = self.chain.prev(next);
        self.chain.insert_between(element, prev, next);
        Ok(())
    }

    /// Removes the first element equal to `value`, scanning from the front.
    pub fn remove(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let id = self
            .chain
            .find(|element| element == value)
            .ok_or(Error::ValueNotFound { container: NAME })?;
        Ok(self.chain.delete_node(id))
    }

    /// Position of the first element equal to `value` in `start..end`.
    ///
    /// `end` defaults to `len`, so the whole tail is searched. Both bounds
    /// accept negative indices.
    pub fn index<I: TryInto<isize>>(&self, value: &T, start: I, end: Option<I>) -> Result<usize>
    where
        T: PartialEq,
    {
        let not_found = Error::ValueNotFound { container: NAME };
        if self.is_empty() {
            return Err(not_found);
        }
        let start = self.validate_index(to_offset(start)?)?;
        let end = match end {
            Some(end) => self.validate_bound(to_offset(end)?)?,
            None => self.len(),
        };
        if start >= end {
            return Err(not_found);
        }

        let mut id = self.chain.node_at(start);
        for position in start..end {
            if self.chain.element(id) == value {
                return Ok(position);
            }
            id = self.chain.next(id);
        }
        Err(not_found)
    }

    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|&element| element == value).count()
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.chain.find(|element| element == value).is_some()
    }

    /// Rotates `n` steps to the right, or to the left when `n` is negative.
    ///
    /// Only the node that becomes the new front is looked up; the chain is
    /// then relinked around it:
    ///
    /// ```text
    /// before: header -> 1 2 3 [4] 5 -> trailer      rotate(2)
    /// after:  header -> [4] 5 1 2 3 -> trailer
    /// ```
    pub fn rotate<N: TryInto<isize>>(&mut self, n: N) -> Result<()> {
        let n = to_offset(n)?;
        if self.is_empty() {
            return Ok(());
        }
        let len = self.len();
        let steps = n.rem_euclid(len as isize) as usize;
        debug!(requested = n, steps, "rotating {NAME}");
        if steps == 0 {
            return Ok(());
        }

        let (header, trailer) = (self.chain.header(), self.chain.trailer());
        let first = self.chain.next(header);
        let last = self.chain.prev(trailer);
        let new_first = self.chain.node_at(len - steps);
        let new_last = self.chain.prev(new_first);

        self.chain.link(header, new_first);
        self.chain.link(last, first);
        self.chain.link(new_last, trailer);
        Ok(())
    }

    /// Reverses the deque in place.
    pub fn reverse(&mut self) {
        if self.len() > 1 {
            self.chain.reverse();
        }
    }

    /// Fresh nodes, same `maxlen`, cloned elements. Values behind shared
    /// handles (`Rc`, `Arc`) stay shared.
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        Self::from_iter_with_maxlen(self.iter().cloned(), self.maxlen)
    }

    /// Fresh nodes, same `maxlen`, elements deep-cloned.
    pub fn deep_copy(&self) -> Self
    where
        T: DeepClone,
    {
        Self::from_iter_with_maxlen(self.iter().map(DeepClone::deep_clone), self.maxlen)
    }

    /// `times` concatenated copies of the deque, under the same `maxlen`.
    pub fn repeat(&self, times: usize) -> Self
    where
        T: Clone,
    {
        let mut result = Self {
            chain: Chain::new(),
            maxlen: self.maxlen,
        };
        for _ in 0..times {
            result.extend(self.iter().cloned());
        }
        result
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.chain.iter_mut()
    }
}

fn to_offset<I: TryInto<isize>>(index: I) -> Result<isize> {
    index
        .try_into()
        .map_err(|_| Error::InvalidIndexType { container: NAME })
}

// =====================
// Trait Implementations
// =====================

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: DeepClone> DeepClone for Deque<T> {
    fn deep_clone(&self) -> Self {
        self.deep_copy()
    }
}

// Extend for Deque<T>; the eviction policy applies per element
impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with_maxlen(iter, None)
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for Deque<T> {
    fn from(slice: &[T]) -> Self {
        slice.iter().cloned().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

// &a + &b: a copy of `a` extended with clones of `b`
impl<T: Clone> Add<&Deque<T>> for &Deque<T> {
    type Output = Deque<T>;

    fn add(self, other: &Deque<T>) -> Deque<T> {
        let mut result = self.copy();
        result.extend(other.iter().cloned());
        result
    }
}

impl<T> Add for Deque<T> {
    type Output = Deque<T>;

    fn add(mut self, other: Deque<T>) -> Deque<T> {
        self.extend(other);
        self
    }
}

impl<T: Clone> Mul<usize> for &Deque<T> {
    type Output = Deque<T>;

    fn mul(self, times: usize) -> Deque<T> {
        self.repeat(times)
    }
}

impl<T: Clone> MulAssign<usize> for Deque<T> {
    fn mul_assign(&mut self, times: usize) {
        let snapshot = self.copy();
        self.clear();
        for _ in 0..times {
            self.extend(snapshot.iter().cloned());
        }
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.chain.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// Comparisons look at the elements only, not at maxlen.
impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: PartialOrd> PartialOrd for Deque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for Deque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque")
            .field("elements", &self.iter().collect::<Vec<_>>())
            .field("maxlen", &self.maxlen)
            .finish()
    }
}

// Deque([1, 2, 3], 5) or Deque([1, 2, 3], None)
impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{NAME}([")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        match self.maxlen {
            Some(maxlen) => write!(f, "], {maxlen})"),
            None => write!(f, "], None)"),
        }
    }
}

// =====================
// Tests
// =====================

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn contents<T: Clone>(deque: &Deque<T>) -> Vec<T> {
        deque.iter().cloned().collect()
    }

    #[test]
    fn test_append_both_ends() {
        let mut deque = Deque::new();
        deque.append(10);
        deque.append(20);
        deque.appendleft(5);

        assert_eq!(contents(&deque), vec![5, 10, 20]);
        assert_eq!(deque.len(), 3);
        assert_eq!(deque.maxlen(), None);
        assert!(!deque.is_full());
    }

    #[test]
    fn test_pop_front_and_pop_back() {
        let mut deque = Deque::from([1, 2, 3]);

        assert_eq!(deque.popleft(), Ok(1));
        assert_eq!(deque.pop(), Ok(3));
        assert_eq!(deque.popleft(), Ok(2));
        assert_eq!(deque.pop(), Err(Error::empty("pop from", NAME)));
    }

    #[test]
    fn test_failed_popleft_leaves_deque_unchanged() {
        let mut deque: Deque<i32> = Deque::new();
        let err = deque.popleft().unwrap_err();

        assert!(matches!(err, Error::EmptyContainer { .. }));
        assert_eq!(err.to_string(), "cannot popleft from an empty Deque");
        assert_eq!(deque.len(), 0);

        deque.append(1);
        assert_eq!(contents(&deque), vec![1]);
    }

    #[test]
    fn test_popleft_appendleft_round_trip() {
        let mut deque = Deque::from_iter_with_maxlen([1, 2, 3], Some(5));
        let front = deque.popleft().unwrap();
        deque.appendleft(front);

        assert_eq!(deque.get(0), Ok(&1));
        assert_eq!(deque.len(), 3);
    }

    #[test]
    fn test_bounded_append_evicts_front() {
        let mut deque = Deque::with_maxlen(3);
        for i in 1..=4 {
            deque.append(i);
        }

        assert_eq!(contents(&deque), vec![2, 3, 4]);
        assert!(deque.is_full());
    }

    #[test]
    fn test_bounded_appendleft_evicts_back() {
        let mut deque = Deque::from_iter_with_maxlen([1, 2, 3], Some(3));
        deque.appendleft(0);

        assert_eq!(contents(&deque), vec![0, 1, 2]);
    }

    #[test]
    fn test_bounded_keeps_last_k() {
        for (k, m) in [(1, 1), (3, 2), (4, 9)] {
            let deque = Deque::from_iter_with_maxlen(0..k + m, Some(k));
            assert_eq!(deque.len(), k);
            assert_eq!(contents(&deque), (m..k + m).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_maxlen_zero_drops_everything() {
        let mut deque = Deque::with_maxlen(0);
        deque.append(1);
        deque.appendleft(2);
        deque.extend([3, 4]);

        assert!(deque.is_empty());
        assert!(deque.is_full());
        assert_eq!(
            deque.insert(0, 5),
            Err(Error::CapacityExceeded {
                container: NAME,
                maxlen: 0
            })
        );
    }

    #[traced_test]
    #[test]
    fn test_eviction_is_traced() {
        let mut deque = Deque::with_maxlen(1);
        deque.append('a');
        deque.append('b');
        deque.appendleft('c');

        assert_eq!(contents(&deque), vec!['c']);
        assert!(logs_contain("evicted element"));
        assert!(logs_contain("front"));
        assert!(logs_contain("back"));
    }

    #[test]
    fn test_extend_and_extend_left() {
        let mut deque = Deque::from([3]);
        deque.extend(vec![4, 5]);
        deque.extend_left(vec![2, 1]);
        assert_eq!(contents(&deque), vec![1, 2, 3, 4, 5]);

        let mut bounded = Deque::with_maxlen(2);
        bounded.extend_left([1, 2, 3]);
        assert_eq!(contents(&bounded), vec![3, 2]);
    }

    #[test]
    fn test_get_with_negative_index() {
        let deque = Deque::from(["a", "b", "c"]);

        assert_eq!(deque.get(0), Ok(&"a"));
        assert_eq!(deque.get(-1), Ok(&"c"));
        assert_eq!(deque.get(-3), Ok(&"a"));
        assert_eq!(
            deque.get(3),
            Err(Error::IndexOutOfRange {
                container: NAME,
                index: 3,
                len: 3
            })
        );
        assert_eq!(
            deque.get(-4),
            Err(Error::IndexOutOfRange {
                container: NAME,
                index: -4,
                len: 3
            })
        );
    }

    #[test]
    fn test_unrepresentable_index() {
        let mut deque = Deque::from([1, 2, 3]);
        let invalid = Error::InvalidIndexType { container: NAME };

        assert_eq!(deque.get(u64::MAX), Err(invalid.clone()));
        assert_eq!(deque.remove_at(i128::MIN), Err(invalid.clone()));
        assert_eq!(deque.rotate(u128::MAX), Err(invalid));
        assert_eq!(contents(&deque), vec![1, 2, 3]);
    }

    #[test]
    fn test_set_get_mut_and_remove_at() {
        let mut deque = Deque::from([1, 2, 3, 4]);

        assert_eq!(deque.set(1, 20), Ok(2));
        *deque.get_mut(-1).unwrap() = 40;
        assert_eq!(contents(&deque), vec![1, 20, 3, 40]);

        assert_eq!(deque.remove_at(-2), Ok(3));
        assert_eq!(deque.remove_at(0), Ok(1));
        assert_eq!(contents(&deque), vec![20, 40]);
        assert_eq!(deque.len(), 2);
        assert!(deque.remove_at(2).is_err());
        assert!(deque.set(5, 0).is_err());
        assert_eq!(contents(&deque), vec![20, 40]);
    }

    #[test]
    fn test_index_operator() {
        let mut deque = Deque::from([1, 2, 3]);
        deque[1] = 7;
        assert_eq!(deque[0], 1);
        assert_eq!(deque[1], 7);
        assert_eq!(deque[2], 3);
    }

    #[test]
    #[should_panic(expected = "Deque index out of range: 3 (len 3)")]
    fn test_index_operator_out_of_range() {
        let deque = Deque::from([1, 2, 3]);
        let _value = deque[3];
    }

    #[test]
    fn test_insert() {
        let mut deque = Deque::from([1, 2, 4]);

        deque.insert(2, 3).unwrap();
        assert_eq!(deque.get(2), Ok(&3));
        deque.insert(0, 0).unwrap();
        deque.insert(5, 5).unwrap();
        assert_eq!(contents(&deque), vec![0, 1, 2, 3, 4, 5]);

        deque.insert(-1, 9).unwrap();
        assert_eq!(contents(&deque), vec![0, 1, 2, 3, 4, 9, 5]);

        assert!(matches!(
            deque.insert(8, 0),
            Err(Error::IndexOutOfRange { index: 8, .. })
        ));
        assert_eq!(deque.len(), 7);

        let mut empty = Deque::new();
        empty.insert(0, 'x').unwrap();
        assert_eq!(contents(&empty), vec!['x']);
    }

    #[test]
    fn test_insert_then_get_at_every_position() {
        for i in 0..=4 {
            let mut deque = Deque::from([10, 11, 12, 13]);
            deque.insert(i, 99).unwrap();
            assert_eq!(deque.get(i), Ok(&99));
            assert_eq!(deque.len(), 5);
        }
    }

    #[test]
    fn test_insert_into_full_deque() {
        let mut deque = Deque::from_iter_with_maxlen([1, 2], Some(2));
        assert_eq!(
            deque.insert(1, 9).unwrap_err().to_string(),
            "Deque already at its maximum size (2)"
        );
        assert_eq!(contents(&deque), vec![1, 2]);
    }

    #[test]
    fn test_remove_first_match() {
        let mut deque = Deque::from([1, 2, 2, 3]);

        assert_eq!(deque.remove(&2), Ok(2));
        assert_eq!(contents(&deque), vec![1, 2, 3]);
        assert_eq!(
            deque.remove(&9),
            Err(Error::ValueNotFound { container: NAME })
        );
        assert_eq!(contents(&deque), vec![1, 2, 3]);
    }

    #[test]
    fn test_index_search() {
        let deque = Deque::from(['a', 'b', 'c', 'b', 'd']);

        assert_eq!(deque.index(&'b', 0, None), Ok(1));
        assert_eq!(deque.index(&'b', 2, None), Ok(3));
        // the last element is part of the default range
        assert_eq!(deque.index(&'d', 0, None), Ok(4));
        assert_eq!(deque.index(&'d', -1, None), Ok(4));
        assert_eq!(deque.index(&'b', 0, Some(-1)), Ok(1));
        assert_eq!(deque.index(&'c', 0, Some(5)), Ok(2));
        assert!(deque.index(&'c', 0, Some(0)).is_err());

        let not_found = Err(Error::ValueNotFound { container: NAME });
        assert_eq!(deque.index(&'d', 0, Some(4)), not_found);
        assert_eq!(deque.index(&'a', 1, None), not_found);
        assert_eq!(deque.index(&'z', 0, None), not_found);
        assert_eq!(deque.index(&'b', 3, Some(2)), not_found);
        assert!(matches!(
            deque.index(&'a', 5, None),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            deque.index(&'a', 0, Some(6)),
            Err(Error::IndexOutOfRange { .. })
        ));

        let empty: Deque<char> = Deque::new();
        assert_eq!(empty.index(&'a', 0, None), not_found);
    }

    #[test]
    fn test_count_and_contains() {
        let deque = Deque::from([1, 1, 2, 1]);
        assert_eq!(deque.count(&1), 3);
        assert_eq!(deque.count(&5), 0);
        assert!(deque.contains(&2));
        assert!(!deque.contains(&3));
    }

    #[test]
    fn test_rotate() {
        let mut deque = Deque::from([1, 2, 3, 4, 5]);

        deque.rotate(2).unwrap();
        assert_eq!(contents(&deque), vec![4, 5, 1, 2, 3]);

        deque.rotate(-1).unwrap();
        assert_eq!(contents(&deque), vec![5, 1, 2, 3, 4]);

        deque.rotate(10).unwrap();
        assert_eq!(contents(&deque), vec![5, 1, 2, 3, 4]);

        deque.rotate(-6).unwrap();
        assert_eq!(contents(&deque), vec![1, 2, 3, 4, 5]);

        // ends still work after relinking
        deque.append(6);
        deque.appendleft(0);
        assert_eq!(contents(&deque), vec![0, 1, 2, 3, 4, 5, 6]);
        let backward: Vec<_> = deque.iter().rev().copied().collect();
        assert_eq!(backward, vec![6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_rotate_round_trip() {
        let original: Vec<_> = (0..7).collect();
        for n in -15..=15 {
            let mut deque = Deque::from(original.clone());
            deque.rotate(n).unwrap();
            deque.rotate(-n).unwrap();
            assert_eq!(contents(&deque), original, "rotate({n})");
        }
    }

    #[test]
    fn test_rotate_empty_and_single() {
        let mut empty: Deque<i32> = Deque::new();
        assert_eq!(empty.rotate(3), Ok(()));
        assert!(empty.is_empty());

        let mut single = Deque::from([1]);
        single.rotate(-4).unwrap();
        assert_eq!(contents(&single), vec![1]);
    }

    #[test]
    fn test_reverse() {
        let mut deque = Deque::from([1, 2, 3, 4]);
        deque.reverse();
        assert_eq!(contents(&deque), vec![4, 3, 2, 1]);
        assert_eq!(deque.get(0), Ok(&4));
        assert_eq!(deque.get(-1), Ok(&1));

        deque.reverse();
        assert_eq!(contents(&deque), vec![1, 2, 3, 4]);
        assert_eq!(deque.get(0), Ok(&1));
        assert_eq!(deque.get(-1), Ok(&4));

        deque.reverse();
        deque.rotate(1).unwrap();
        deque.insert(2, 0).unwrap();
        assert_eq!(contents(&deque), vec![1, 4, 0, 3, 2]);

        let mut single = Deque::from([1]);
        single.reverse();
        assert_eq!(contents(&single), vec![1]);
    }

    #[test]
    fn test_clear() {
        let mut deque = Deque::from_iter_with_maxlen([1, 2, 3], Some(3));
        deque.clear();
        assert!(deque.is_empty());
        assert_eq!(deque.maxlen(), Some(3));

        deque.extend([4, 5, 6, 7]);
        assert_eq!(contents(&deque), vec![5, 6, 7]);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut original = Deque::from_iter_with_maxlen([1, 2, 3], Some(4));
        let mut copy = original.copy();

        assert_eq!(copy.maxlen(), Some(4));
        copy.append(4);
        copy[0] = 10;

        assert_eq!(original.len(), 3);
        assert_eq!(contents(&original), vec![1, 2, 3]);
        assert_eq!(contents(&copy), vec![10, 2, 3, 4]);

        original.popleft().unwrap();
        assert_eq!(copy.len(), 4);
    }

    #[test]
    fn test_shallow_and_deep_copy() {
        use std::{cell::RefCell, rc::Rc};

        let deque = Deque::from([Rc::new(RefCell::new(vec![1]))]);
        let shallow = deque.clone();
        let deep = deque.deep_copy();

        deque[0].borrow_mut().push(2);

        assert_eq!(*shallow[0].borrow(), vec![1, 2]);
        assert_eq!(*deep[0].borrow(), vec![1]);
        assert!(Rc::ptr_eq(&deque[0], &shallow[0]));
        assert!(!Rc::ptr_eq(&deque[0], &deep[0]));
    }

    #[test]
    fn test_add() {
        let left = Deque::from([1, 2]);
        let right = Deque::from([3]);

        let sum = &left + &right;
        assert_eq!(contents(&sum), vec![1, 2, 3]);
        assert_eq!(contents(&left), vec![1, 2]);
        assert_eq!(contents(&right), vec![3]);

        let bounded = Deque::from_iter_with_maxlen([1, 2], Some(2));
        let sum = &bounded + &right;
        assert_eq!(contents(&sum), vec![2, 3]);
        assert_eq!(sum.maxlen(), Some(2));

        let moved = left + right;
        assert_eq!(contents(&moved), vec![1, 2, 3]);
    }

    #[test]
    fn test_mul() {
        let deque = Deque::from([1, 2]);

        assert_eq!(contents(&(&deque * 3)), vec![1, 2, 1, 2, 1, 2]);
        assert!((&deque * 0).is_empty());
        assert_eq!(deque.repeat(1), deque);

        let bounded = Deque::from_iter_with_maxlen([1, 2], Some(3));
        assert_eq!(contents(&(&bounded * 2)), vec![2, 1, 2]);
    }

    #[test]
    fn test_mul_assign() {
        let mut deque = Deque::from(vec!['a', 'b']);
        deque *= 2;
        assert_eq!(contents(&deque), vec!['a', 'b', 'a', 'b']);

        deque *= 0;
        assert!(deque.is_empty());
    }

    #[test]
    fn test_comparisons() {
        let a = Deque::from([1, 2, 3]);
        let b = Deque::from_iter_with_maxlen([1, 2, 3], Some(10));
        let c = Deque::from([1, 2, 4]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert!(Deque::from([1, 2]) < a);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_display_and_debug() {
        let deque = Deque::from_iter_with_maxlen([1, 2, 3], Some(5));
        assert_eq!(deque.to_string(), "Deque([1, 2, 3], 5)");
        assert_eq!(Deque::<i32>::new().to_string(), "Deque([], None)");
        assert_eq!(
            format!("{:?}", Deque::from(["x"])),
            "Deque { elements: [\"x\"], maxlen: None }"
        );
    }

    #[test]
    fn test_from_slice() {
        let values = [1, 2, 3];
        let deque = Deque::from(&values[..]);
        assert_eq!(contents(&deque), vec![1, 2, 3]);
    }

    #[test]
    fn test_iterators() {
        let mut deque = Deque::from([10, 20, 30]);
        for val in &mut deque {
            *val += 1;
        }
        let refs: Vec<_> = (&deque).into_iter().collect();
        assert_eq!(refs, vec![&11, &21, &31]);

        let mut iter = deque.iter_mut();
        *iter.next_back().unwrap() = 0;
        assert_eq!(deque.iter().len(), 3);

        let owned: Vec<_> = deque.into_iter().collect();
        assert_eq!(owned, vec![11, 21, 0]);
    }

    #[test]
    fn test_drop() {
        use std::sync::{Arc, Mutex};
        struct DropCounter(Arc<Mutex<usize>>);
        impl Drop for DropCounter {
            fn drop(&mut self) {
                let mut count = self.0.lock().unwrap();
                *count += 1;
            }
        }
        let counter = Arc::new(Mutex::new(0));
        {
            let mut deque = Deque::with_maxlen(3);
            for _ in 0..5 {
                deque.append(DropCounter(counter.clone()));
            }
            // two were evicted already
            assert_eq!(*counter.lock().unwrap(), 2);
            deque.remove_at(0).unwrap();
            assert_eq!(*counter.lock().unwrap(), 3);
        }
        assert_eq!(*counter.lock().unwrap(), 5);
    }
}
