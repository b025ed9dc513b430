//! Implicit binary tree storage
//!
//! The heap is a complete binary tree laid out breadth-first in one contiguous
//! array. No links are stored: every relationship is index arithmetic.
//!
//! ```text
//! index:   0 | 1  2 | 3  4  5  6 | 7 ...
//! depth:   0 |  1   |     2      |  3
//! level:  min| max  |    min     | max
//! ```
//!
//! # Capacity
//!
//! [`ImplicitTree`] keeps its own record of how many slots it has *reserved*
//! instead of reporting `Vec::capacity`, which the allocator is free to round up.
//! Growth is always explicit (`grow`/`try_grow`) so that the capacity policy in
//! [`capacity`](crate::capacity) fully determines what `capacity()` returns.

use std::collections::TryReserveError;
use std::ops::Index;

use log::trace;

/// Heap-order role of a tree depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Even depth: the node is no greater than any of its descendants
    Min,
    /// Odd depth: the node is no less than any of its descendants
    Max,
}

impl Level {
    /// The role of the adjacent depth
    #[inline]
    pub fn opposite(self) -> Level {
        match self {
            Level::Min => Level::Max,
            Level::Max => Level::Min,
        }
    }
}

/// Index of the parent of `index`
///
/// The root has no parent; calling this with `0` is a logic error.
#[inline]
pub fn parent(index: usize) -> usize {
    debug_assert!(index > 0, "the root has no parent");
    (index - 1) / 2
}

/// Index of the left child of `index` (may be past the end of the tree)
#[inline]
pub fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Index of the right child of `index` (may be past the end of the tree)
#[inline]
pub fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Index of the grandparent of `index`
///
/// Only nodes at depth 2 or deeper (`index >= 3`) have a grandparent.
#[inline]
pub fn grandparent(index: usize) -> usize {
    debug_assert!(index > 2, "nodes above depth 2 have no grandparent");
    parent(parent(index))
}

/// Depth of `index` in the tree, i.e. `floor(log2(index + 1))`
#[inline]
pub fn depth(index: usize) -> u32 {
    usize::BITS - 1 - (index + 1).leading_zeros()
}

/// Heap-order role of the depth `index` sits at
#[inline]
pub fn level_of(index: usize) -> Level {
    if depth(index) % 2 == 0 {
        Level::Min
    } else {
        Level::Max
    }
}

/// Contiguous storage for an implicit complete binary tree
#[derive(Debug, Clone)]
pub struct ImplicitTree<T> {
    slots: Vec<T>,
    /// Reserved slots reported by `capacity()`; always `>= slots.len()`
    allocated: usize,
}

impl<T> ImplicitTree<T> {
    /// Creates an empty tree with room for `capacity` elements
    ///
    /// The reported capacity is always `capacity`. Memory is reserved up front only
    /// if the allocator can provide it; otherwise the slots fill in as elements
    /// arrive.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(Vec::new(), capacity)
    }

    /// Wraps existing elements (in tree order) with room for at least `capacity`
    /// elements
    pub fn from_vec(mut slots: Vec<T>, capacity: usize) -> Self {
        let allocated = capacity.max(slots.len());
        let additional = allocated - slots.len();
        if slots.try_reserve_exact(additional).is_err() {
            trace!("could not reserve {} heap slots up front", additional);
        }
        Self { slots, allocated }
    }

    /// Number of elements stored
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no elements are stored
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of reserved slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.allocated
    }

    /// Returns true if every reserved slot is in use
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.allocated
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    /// Appends a new last leaf
    ///
    /// Callers are expected to `grow` beforehand; a full tree grows by a single
    /// slot so that the element is never lost.
    pub fn push(&mut self, element: T) {
        if self.is_full() {
            self.grow(self.allocated + 1);
        }
        self.slots.push(element);
    }

    /// Removes the element at `index`, moving the last leaf into its slot
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> T {
        self.slots.swap_remove(index)
    }

    /// Reserves room for at least `requested` elements
    ///
    /// Existing elements keep their positions. Requests that do not exceed the
    /// current capacity are no-ops.
    pub fn grow(&mut self, requested: usize) {
        if requested <= self.allocated {
            return;
        }
        self.slots.reserve_exact(requested - self.slots.len());
        trace!("grew heap storage from {} to {} slots", self.allocated, requested);
        self.allocated = requested;
    }

    /// Fallible version of [`grow`](Self::grow)
    ///
    /// On failure the tree is left untouched.
    pub fn try_grow(&mut self, requested: usize) -> Result<(), TryReserveError> {
        if requested <= self.allocated {
            return Ok(());
        }
        self.slots.try_reserve_exact(requested - self.slots.len())?;
        trace!("grew heap storage from {} to {} slots", self.allocated, requested);
        self.allocated = requested;
        Ok(())
    }

    /// Removes every element, keeping the reserved slots
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    /// Consumes the tree, returning its elements in tree order
    pub fn into_vec(self) -> Vec<T> {
        self.slots
    }
}

impl<T> Index<usize> for ImplicitTree<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}
