//! Min-Max Heap implementation
//!
//! A min-max heap is a complete binary tree stored in an array where even depths
//! are *min levels* and odd depths are *max levels*:
//! - a node on a min level is no greater than any of its descendants
//! - a node on a max level is no less than any of its descendants
//!
//! The minimum is therefore the root and the maximum is one of the root's two
//! children, which gives O(1) access to both ends of the order from one array.
//!
//! # Time Complexity
//!
//! | Operation             | Complexity |
//! |-----------------------|------------|
//! | `push`                | O(log n)   |
//! | `peek_min`/`peek_max` | O(1)       |
//! | `pop_min`/`pop_max`   | O(log n)   |
//! | `remove_at`           | O(log n)   |
//! | `from_vec` (heapify)  | O(n)       |
//!
//! # Algorithm Overview
//!
//! **Sift-up** (after appending a leaf): compare with the parent, which sits on the
//! opposite kind of level. If the new element belongs on the parent's side, swap and
//! keep climbing along the parent's grandparent chain; otherwise climb along the
//! element's own grandparent chain. Only strictly better elements move, so equal
//! elements stay where they were placed.
//!
//! **Sift-down** (after replacing an extreme): pick the most extreme element among
//! the up to six children and grandchildren. A grandchild is swapped up and the
//! displaced element is compared against the intermediate child it now sits under,
//! then the process repeats from the grandchild. A child is swapped once and the
//! process stops, since the displaced element now sits on a level of the opposite
//! role where it already bounds everything below.
//!
//! **Arbitrary removal** moves the last leaf into the gap, sifts it up, then sifts
//! down whatever ends up in the gap. The moved element can belong above the gap's
//! parent (a large leaf moved under a small max-level node); in that case the parent
//! drops into the gap and has to be sifted down in its place.
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_queue::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::new();
//! for value in [1, 7, 2, 56, 2, 5, 23, 68, 0, 3] {
//!     heap.push(value);
//! }
//!
//! assert_eq!(heap.peek_min(), Some(&0));
//! assert_eq!(heap.peek_max(), Some(&68));
//! assert_eq!(heap.pop_max(), Some(68));
//! assert_eq!(heap.peek_max(), Some(&56));
//! ```

use std::fmt;

use crate::capacity::{grown_capacity, UNBOUNDED};
use crate::ordering::{Comparator, Natural};
use crate::storage::{
    grandparent, left_child, level_of, parent, right_child, ImplicitTree, Level,
};
use crate::traits::{DoubleEndedHeap, Heap, QueueError};

/// A min-max heap ordered by a [`Comparator`]
///
/// The root is the least element under the comparator and the greatest element is
/// found at index 1 or 2. This type has no size limit; see
/// [`MinMaxPriorityQueue`](crate::MinMaxPriorityQueue) for the bounded queue.
#[derive(Clone)]
pub struct MinMaxHeap<T, C = Natural> {
    tree: ImplicitTree<T>,
    comparator: C,
}

impl<T: Ord> MinMaxHeap<T, Natural> {
    /// Creates an empty heap in natural order
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Creates an empty heap in natural order with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T, C: Comparator<T>> MinMaxHeap<T, C> {
    /// Creates an empty heap ordered by `comparator`
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    /// Creates an empty heap ordered by `comparator` with room for `capacity`
    /// elements
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            tree: ImplicitTree::with_capacity(capacity),
            comparator,
        }
    }

    /// Builds a heap from arbitrary elements in one bottom-up pass
    ///
    /// The storage reserves at least `capacity` slots.
    ///
    /// # Time Complexity
    /// O(n)
    pub fn from_vec(elements: Vec<T>, capacity: usize, comparator: C) -> Self {
        let mut heap = Self {
            tree: ImplicitTree::from_vec(elements, capacity),
            comparator,
        };
        heap.heapify();
        heap
    }

    /// Returns true if the heap is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of elements in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns the number of reserved slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }

    /// Returns the ordering in use
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Reserves room for at least `requested` elements in total
    pub fn reserve(&mut self, requested: usize) {
        self.tree.grow(requested);
    }

    /// Fallible version of [`reserve`](Self::reserve)
    ///
    /// # Errors
    /// Returns [`QueueError::CapacityOverflow`] if the allocation fails; the heap is
    /// left unchanged.
    pub fn try_reserve(&mut self, requested: usize) -> Result<(), QueueError> {
        self.tree
            .try_grow(requested)
            .map_err(|source| QueueError::CapacityOverflow { requested, source })
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push(&mut self, element: T) {
        if self.tree.is_full() {
            self.tree.grow(grown_capacity(self.tree.capacity(), UNBOUNDED));
        }
        self.tree.push(element);
        self.sift_up(self.tree.len() - 1);
    }

    /// Returns the least element
    #[inline]
    pub fn peek_min(&self) -> Option<&T> {
        self.tree.get(0)
    }

    /// Returns the greatest element
    ///
    /// With two or more elements this is the greater of the root's children
    /// (the left one on ties).
    #[inline]
    pub fn peek_max(&self) -> Option<&T> {
        self.max_index().map(|index| &self.tree[index])
    }

    /// Index of the greatest element, `None` when empty
    pub fn max_index(&self) -> Option<usize> {
        match self.tree.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ if self.prefers(Level::Min, 1, 2) => Some(2),
            _ => Some(1),
        }
    }

    /// Removes and returns the least element
    pub fn pop_min(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.remove_extreme(0))
    }

    /// Removes and returns the greatest element
    pub fn pop_max(&mut self) -> Option<T> {
        let index = self.max_index()?;
        Some(self.remove_extreme(index))
    }

    /// Removes and returns the element at `index` (in storage order)
    ///
    /// Returns `None` if `index` is out of bounds.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.tree.len() {
            return None;
        }
        let removed = self.tree.swap_remove(index);
        if index < self.tree.len() {
            self.reposition(index);
        }
        Some(removed)
    }

    /// Storage index of the first element matching `predicate`
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.tree.iter().position(predicate)
    }

    /// Removes every element, keeping the reserved storage
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Iterates over the elements in storage order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.tree.iter()
    }

    /// Elements in storage order (not sorted)
    pub fn as_slice(&self) -> &[T] {
        self.tree.as_slice()
    }

    /// Consumes the heap, returning the elements in storage order
    pub fn into_vec(self) -> Vec<T> {
        self.tree.into_vec()
    }

    /// Consumes the heap, returning the elements from least to greatest
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(element) = self.pop_min() {
            sorted.push(element);
        }
        sorted
    }

    /// Checks the min-max ordering of every node against its parent and
    /// grandparent
    ///
    /// A heap built only through this API is always intact; the check exists for
    /// tests and for detecting comparators that are not total orders.
    pub fn is_intact(&self) -> bool {
        (1..self.tree.len()).all(|index| {
            let level = level_of(index);
            let against_parent = !self.prefers(level.opposite(), index, parent(index));
            let against_grandparent =
                index < 3 || !self.prefers(level, index, grandparent(index));
            against_parent && against_grandparent
        })
    }

    /// True if the element at `a` should sit above the element at `b` on a level
    /// with role `level` (strictly less for min levels, strictly greater for max)
    #[inline]
    fn prefers(&self, level: Level, a: usize, b: usize) -> bool {
        let ordering = self.comparator.compare(&self.tree[a], &self.tree[b]);
        match level {
            Level::Min => ordering.is_lt(),
            Level::Max => ordering.is_gt(),
        }
    }

    /// Most extreme index in `candidates` for `level`; earlier indices win ties
    fn extreme_of(
        &self,
        level: Level,
        mut candidates: impl Iterator<Item = usize>,
    ) -> Option<usize> {
        let first = candidates.next()?;
        Some(candidates.fold(first, |best, candidate| {
            if self.prefers(level, candidate, best) {
                candidate
            } else {
                best
            }
        }))
    }

    fn extreme_descendant(&self, index: usize, level: Level) -> Option<usize> {
        let child = left_child(index);
        let grandchild = left_child(child);
        let len = self.tree.len();
        self.extreme_of(
            level,
            (child..(child + 2).min(len)).chain(grandchild..(grandchild + 4).min(len)),
        )
    }

    /// Moves the element at `index` towards the root
    fn sift_up(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let level = level_of(index);
        let parent = parent(index);
        if self.prefers(level.opposite(), index, parent) {
            self.tree.swap(index, parent);
            self.sift_up_along(parent, level.opposite());
        } else {
            self.sift_up_along(index, level);
        }
    }

    /// Climbs the grandparent chain, which keeps the same level role
    fn sift_up_along(&mut self, mut index: usize, level: Level) {
        while index > 2 {
            let grandparent = grandparent(index);
            if !self.prefers(level, index, grandparent) {
                break;
            }
            self.tree.swap(index, grandparent);
            index = grandparent;
        }
    }

    /// Moves the element at `index` towards the leaves
    fn sift_down(&mut self, mut index: usize) {
        loop {
            let level = level_of(index);
            let Some(extreme) = self.extreme_descendant(index, level) else {
                return;
            };
            if !self.prefers(level, extreme, index) {
                return;
            }
            self.tree.swap(extreme, index);
            if extreme <= right_child(index) {
                return;
            }
            let between = parent(extreme);
            if self.prefers(level.opposite(), extreme, between) {
                self.tree.swap(extreme, between);
            }
            index = extreme;
        }
    }

    /// Repairs the heap after the last leaf was moved into `index`
    fn reposition(&mut self, index: usize) {
        self.sift_up(index);
        self.sift_down(index);
    }

    /// Removes the root or the max-level extreme and sifts its replacement down
    fn remove_extreme(&mut self, index: usize) -> T {
        let removed = self.tree.swap_remove(index);
        if index < self.tree.len() {
            self.sift_down(index);
        }
        removed
    }

    fn heapify(&mut self) {
        for index in (0..self.tree.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MinMaxHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinMaxHeap")
            .field("elements", &self.tree.as_slice())
            .field("capacity", &self.tree.capacity())
            .finish()
    }
}

impl<T: Ord> Default for MinMaxHeap<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T> + Default> Heap<T> for MinMaxHeap<T, C> {
    fn new() -> Self {
        Self::with_comparator(C::default())
    }

    fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn push(&mut self, item: T) {
        MinMaxHeap::push(self, item);
    }

    fn peek(&self) -> Option<&T> {
        self.peek_min()
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_min()
    }
}

impl<T, C: Comparator<T> + Default> DoubleEndedHeap<T> for MinMaxHeap<T, C> {
    fn peek_max(&self) -> Option<&T> {
        MinMaxHeap::peek_max(self)
    }

    fn pop_max(&mut self) -> Option<T> {
        MinMaxHeap::pop_max(self)
    }
}
