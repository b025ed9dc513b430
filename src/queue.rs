//! Bounded double-ended priority queue
//!
//! [`MinMaxPriorityQueue`] wraps a [`MinMaxHeap`] with an optional maximum size and
//! two families of accessors:
//!
//! | Lenient (empty → `None`/`false`)     | Strict (empty → `Err(NoSuchElement)`) |
//! |--------------------------------------|---------------------------------------|
//! | `peek`, `peek_first`, `peek_last`    | `first`, `last`                       |
//! | `poll`, `poll_first`, `poll_last`    | `remove_first`, `remove_last`         |
//! | `offer` (full → `false`)             | `add` (allocation failure → `Err`)    |
//!
//! "First" is the least element under the queue's comparator and "last" the
//! greatest. A bounded queue always evicts from the last end.
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_queue::{MinMaxPriorityQueue, QueueError};
//!
//! let mut queue = MinMaxPriorityQueue::create_from([1, 7, 2, 56, 2, 5, 23, 68, 0, 3]);
//!
//! assert_eq!(queue.remove_first(), Ok(0));
//! assert_eq!(queue.peek(), Some(&1));
//! assert_eq!(queue.remove_last(), Ok(68));
//! assert_eq!(queue.peek_last(), Some(&56));
//!
//! queue.clear();
//! assert_eq!(queue.poll_first(), None);
//! assert_eq!(queue.remove_first(), Err(QueueError::NoSuchElement));
//! ```

use std::fmt;

use crate::builder::Builder;
use crate::capacity::{self, Offer, UNBOUNDED};
use crate::min_max::MinMaxHeap;
use crate::ordering::{Comparator, Natural};
use crate::traits::{DoubleEndedHeap, Heap, QueueError};

/// A double-ended priority queue with an optional maximum size
///
/// Not internally synchronized: wrap it in a `Mutex` to share it between threads.
#[derive(Clone)]
pub struct MinMaxPriorityQueue<T, C = Natural> {
    heap: MinMaxHeap<T, C>,
    maximum_size: Option<usize>,
}

impl<T: Ord> MinMaxPriorityQueue<T, Natural> {
    /// Creates an empty, unbounded queue in natural order
    pub fn create() -> Self {
        Builder::new().create()
    }

    /// Creates an unbounded queue in natural order holding `elements`
    pub fn create_from<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Builder::new().create_from(elements)
    }

    /// Starts configuring a queue in natural order
    pub fn builder() -> Builder<T, Natural> {
        Builder::new()
    }
}

impl<T, C: Comparator<T>> MinMaxPriorityQueue<T, C> {
    /// Starts configuring a queue ordered by `comparator`
    pub fn ordered_by(comparator: C) -> Builder<T, C> {
        Builder::with_comparator(comparator)
    }

    pub(crate) fn from_parts(heap: MinMaxHeap<T, C>, maximum_size: Option<usize>) -> Self {
        Self { heap, maximum_size }
    }

    /// The maximum size as a bound for the capacity arithmetic
    #[inline]
    fn ceiling(&self) -> usize {
        self.maximum_size.unwrap_or(UNBOUNDED)
    }

    /// Returns the number of elements in the queue
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of reserved slots (not the maximum size)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Returns the maximum size, `None` if the queue is unbounded
    pub fn maximum_size(&self) -> Option<usize> {
        self.maximum_size
    }

    /// Returns true if the queue holds its maximum number of elements
    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.ceiling()
    }

    /// Returns the ordering in use
    pub fn comparator(&self) -> &C {
        self.heap.comparator()
    }

    /// Returns the least element; same as [`peek_first`](Self::peek_first)
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek_min()
    }

    /// Returns the least element, or `None` if the queue is empty
    #[inline]
    pub fn peek_first(&self) -> Option<&T> {
        self.heap.peek_min()
    }

    /// Returns the greatest element, or `None` if the queue is empty
    #[inline]
    pub fn peek_last(&self) -> Option<&T> {
        self.heap.peek_max()
    }

    /// Returns the least element
    ///
    /// # Errors
    /// Returns [`QueueError::NoSuchElement`] if the queue is empty.
    pub fn first(&self) -> Result<&T, QueueError> {
        self.peek_first().ok_or(QueueError::NoSuchElement)
    }

    /// Returns the greatest element
    ///
    /// # Errors
    /// Returns [`QueueError::NoSuchElement`] if the queue is empty.
    pub fn last(&self) -> Result<&T, QueueError> {
        self.peek_last().ok_or(QueueError::NoSuchElement)
    }

    /// Returns true if an element equal to `element` is in the queue
    ///
    /// # Time Complexity
    /// O(n)
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.heap.iter().any(|candidate| candidate == element)
    }

    /// Inserts `element`, reporting what happened at the ceiling
    ///
    /// # Example
    ///
    /// ```rust
    /// use rust_minmax_queue::{MinMaxPriorityQueue, Offer};
    ///
    /// let mut queue = MinMaxPriorityQueue::builder().maximum_size(2).create_from([1, 5]);
    /// assert_eq!(queue.insert(3), Offer::Evicted(5));
    /// assert_eq!(queue.insert(9), Offer::Rejected(9));
    /// ```
    pub fn insert(&mut self, element: T) -> Offer<T> {
        let ceiling = self.ceiling();
        capacity::admit(&mut self.heap, ceiling, element)
    }

    /// Inserts `element`; returns false if a full queue turned it away
    pub fn offer(&mut self, element: T) -> bool {
        self.insert(element).is_accepted()
    }

    /// Inserts `element` without aborting on allocation failure
    ///
    /// Returns `Ok(false)` only for capacity rejection, as [`offer`](Self::offer)
    /// does.
    ///
    /// # Errors
    /// Returns [`QueueError::CapacityOverflow`] if the storage cannot grow; the queue
    /// is left unchanged.
    pub fn add(&mut self, element: T) -> Result<bool, QueueError> {
        let ceiling = self.ceiling();
        capacity::try_make_room(&mut self.heap, ceiling)?;
        Ok(self.offer(element))
    }

    /// Offers every element of `elements`; returns how many were accepted
    pub fn add_all<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        elements
            .into_iter()
            .map(|element| self.offer(element))
            .filter(|&accepted| accepted)
            .count()
    }

    /// Removes the least element; same as [`poll_first`](Self::poll_first)
    pub fn poll(&mut self) -> Option<T> {
        self.heap.pop_min()
    }

    /// Removes and returns the least element, or `None` if the queue is empty
    pub fn poll_first(&mut self) -> Option<T> {
        self.heap.pop_min()
    }

    /// Removes and returns the greatest element, or `None` if the queue is empty
    pub fn poll_last(&mut self) -> Option<T> {
        self.heap.pop_max()
    }

    /// Removes and returns the least element
    ///
    /// # Errors
    /// Returns [`QueueError::NoSuchElement`] if the queue is empty.
    pub fn remove_first(&mut self) -> Result<T, QueueError> {
        self.poll_first().ok_or(QueueError::NoSuchElement)
    }

    /// Removes and returns the greatest element
    ///
    /// # Errors
    /// Returns [`QueueError::NoSuchElement`] if the queue is empty.
    pub fn remove_last(&mut self) -> Result<T, QueueError> {
        self.poll_last().ok_or(QueueError::NoSuchElement)
    }

    /// Removes one element equal to `element`; returns false if there was none
    ///
    /// # Time Complexity
    /// O(n) to find the element, O(log n) to remove it
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_by(|candidate| candidate == element).is_some()
    }

    /// Removes and returns the first element (in storage order) matching
    /// `predicate`
    pub fn remove_by<P>(&mut self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let index = self.heap.position(predicate)?;
        self.heap.remove_at(index)
    }

    /// Removes every element, keeping the reserved storage and the maximum size
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Changes the maximum size
    ///
    /// Lowering it below the current length evicts greatest elements until the
    /// queue fits; they are returned greatest first.
    ///
    /// # Panics
    ///
    /// Panics if `maximum_size` is zero.
    pub fn set_maximum_size(&mut self, maximum_size: usize) -> Vec<T> {
        assert!(maximum_size > 0, "maximum size must be positive");
        self.maximum_size = Some(maximum_size);
        capacity::evict_down_to(&mut self.heap, maximum_size)
    }

    /// Removes the maximum size
    pub fn clear_maximum_size(&mut self) {
        self.maximum_size = None;
    }

    /// Iterates over the elements in storage order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// Copies the elements out in storage order (not sorted)
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.heap.as_slice().to_vec()
    }

    /// Consumes the queue, returning the elements in storage order
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_vec()
    }

    /// Consumes the queue, returning the elements from first to last
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }

    /// Checks the min-max ordering of the whole queue
    pub fn is_intact(&self) -> bool {
        self.heap.is_intact()
    }
}

impl<T: fmt::Debug, C: Comparator<T>> fmt::Debug for MinMaxPriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinMaxPriorityQueue")
            .field("elements", &self.heap.as_slice())
            .field("capacity", &self.heap.capacity())
            .field("maximum_size", &self.maximum_size())
            .finish()
    }
}

impl<T: Ord> Default for MinMaxPriorityQueue<T, Natural> {
    fn default() -> Self {
        Self::create()
    }
}

impl<T, C: Comparator<T>> Extend<T> for MinMaxPriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T: Ord> FromIterator<T> for MinMaxPriorityQueue<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::create_from(iter)
    }
}

impl<T, C: Comparator<T>> IntoIterator for MinMaxPriorityQueue<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Iterates in storage order (not sorted)
    fn into_iter(self) -> Self::IntoIter {
        self.heap.into_vec().into_iter()
    }
}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a MinMaxPriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.heap.iter()
    }
}

impl<T, C: Comparator<T> + Default> Heap<T> for MinMaxPriorityQueue<T, C> {
    fn new() -> Self {
        Builder::with_comparator(C::default()).create()
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, item: T) {
        let _ = self.insert(item);
    }

    fn peek(&self) -> Option<&T> {
        self.peek_first()
    }

    fn pop(&mut self) -> Option<T> {
        self.poll_first()
    }
}

impl<T, C: Comparator<T> + Default> DoubleEndedHeap<T> for MinMaxPriorityQueue<T, C> {
    fn peek_max(&self) -> Option<&T> {
        self.peek_last()
    }

    fn pop_max(&mut self) -> Option<T> {
        self.poll_last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::Reversed;

    #[test]
    fn test_empty_queue() {
        let mut queue: MinMaxPriorityQueue<i32> = MinMaxPriorityQueue::create();
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.peek_last(), None);
        assert_eq!(queue.poll_first(), None);
        assert_eq!(queue.poll_last(), None);
        assert_eq!(queue.first(), Err(QueueError::NoSuchElement));
        assert_eq!(queue.last(), Err(QueueError::NoSuchElement));
        assert_eq!(queue.remove_first(), Err(QueueError::NoSuchElement));
        assert_eq!(queue.remove_last(), Err(QueueError::NoSuchElement));
        assert!(!queue.is_full());
    }

    #[test]
    fn test_offer_when_full() {
        let mut queue = MinMaxPriorityQueue::builder()
            .maximum_size(3)
            .create_from([5, 15, 20]);
        assert!(queue.is_full());
        assert!(queue.offer(10));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek_first(), Some(&5));
        assert!(!queue.contains(&20));
        assert!(!queue.offer(30));
        assert_eq!(queue.into_sorted_vec(), vec![5, 10, 15]);
    }

    #[test]
    fn test_add_reports_rejection() {
        let mut queue = MinMaxPriorityQueue::builder()
            .maximum_size(1)
            .create_from([4]);
        assert_eq!(queue.add(9), Ok(false));
        assert_eq!(queue.add(2), Ok(true));
        assert_eq!(queue.peek(), Some(&2));
    }

    #[test]
    fn test_add_all_counts_accepted() {
        let mut queue = MinMaxPriorityQueue::builder()
            .maximum_size(3)
            .create_from([5, 15, 20]);
        assert_eq!(queue.add_all([1, 10, 30]), 2);
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.peek_last(), Some(&10));
    }

    #[test]
    fn test_remove_arbitrary() {
        let mut queue = MinMaxPriorityQueue::create_from([4, 8, 1, 9, 3, 8]);
        assert!(queue.remove(&8));
        assert!(queue.is_intact());
        assert!(queue.contains(&8));
        assert!(queue.remove(&8));
        assert!(!queue.remove(&8));
        assert!(!queue.contains(&8));
        assert_eq!(queue.remove_by(|&value| value == 9), Some(9));
        assert_eq!(queue.remove_by(|&value| value > 100), None);
        assert!(queue.is_intact());
        assert_eq!(queue.into_sorted_vec(), vec![1, 3, 4]);
    }

    #[test]
    fn test_strict_accessors() {
        let mut queue = MinMaxPriorityQueue::create_from([3, 1, 2]);
        assert_eq!(queue.first(), Ok(&1));
        assert_eq!(queue.last(), Ok(&3));
        assert_eq!(queue.remove_last(), Ok(3));
        assert_eq!(queue.remove_first(), Ok(1));
        assert_eq!(queue.poll(), Some(2));
        assert_eq!(queue.remove_last(), Err(QueueError::NoSuchElement));
    }

    #[test]
    fn test_set_maximum_size_evicts_greatest() {
        let mut queue = MinMaxPriorityQueue::create_from(1..=6);
        assert_eq!(queue.maximum_size(), None);
        assert_eq!(queue.set_maximum_size(4), vec![6, 5]);
        assert_eq!(queue.maximum_size(), Some(4));
        assert!(queue.is_full());
        assert!(!queue.offer(7));

        assert!(queue.set_maximum_size(10).is_empty());
        assert!(queue.offer(7));

        queue.clear_maximum_size();
        assert_eq!(queue.maximum_size(), None);
        queue.extend(8..20);
        assert_eq!(queue.len(), 17);
    }

    #[test]
    #[should_panic(expected = "maximum size must be positive")]
    fn test_set_zero_maximum_size_panics() {
        let mut queue = MinMaxPriorityQueue::create_from([1]);
        let _ = queue.set_maximum_size(0);
    }

    #[test]
    fn test_clear_keeps_settings() {
        let mut queue = MinMaxPriorityQueue::builder()
            .maximum_size(5)
            .create_from(0..5);
        let capacity = queue.capacity();
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), capacity);
        assert_eq!(queue.maximum_size(), Some(5));
    }

    #[test]
    fn test_reversed_queue() {
        let mut queue = MinMaxPriorityQueue::ordered_by(Reversed(Natural)).create_from([2, 9, 4]);
        assert_eq!(queue.peek_first(), Some(&9));
        assert_eq!(queue.peek_last(), Some(&2));
        assert_eq!(queue.poll_first(), Some(9));
        assert_eq!(queue.poll_last(), Some(2));
    }

    #[test]
    fn test_collect_and_iterate() {
        let queue: MinMaxPriorityQueue<i32> = [5, 3, 8].into_iter().collect();
        let mut seen: Vec<i32> = queue.iter().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![3, 5, 8]);

        let by_ref: i32 = (&queue).into_iter().sum();
        assert_eq!(by_ref, 16);

        let mut copied = queue.to_vec();
        copied.sort_unstable();
        assert_eq!(copied, seen);

        let mut owned: Vec<i32> = queue.into_iter().collect();
        owned.sort_unstable();
        assert_eq!(owned, seen);
    }

    #[test]
    fn test_heap_traits() {
        let mut queue: MinMaxPriorityQueue<i32> = Heap::new();
        queue.push(4);
        queue.push(1);
        queue.push(7);
        assert_eq!(Heap::peek(&queue), Some(&1));
        assert_eq!(queue.peek_max(), Some(&7));
        assert_eq!(queue.pop_max(), Some(7));
        assert_eq!(Heap::pop(&mut queue), Some(1));
        assert_eq!(Heap::len(&queue), 1);
    }

    #[test]
    fn test_debug_output() {
        let queue = MinMaxPriorityQueue::builder()
            .expected_size(2)
            .maximum_size(3)
            .create_from([1]);
        assert_eq!(
            format!("{:?}", queue),
            "MinMaxPriorityQueue { elements: [1], capacity: 2, maximum_size: Some(3) }"
        );
    }
}
