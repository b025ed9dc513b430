//! Common traits for double-ended heap data structures
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Heap`]: Base trait for single-ended (min-first) heaps
//! - [`DoubleEndedHeap`]: Extended trait adding access to the maximum element
//!
//! The base [`Heap`] trait follows Rust's standard heap API patterns, except that
//! the element at the front is the *least* one, as ordered by the heap's comparator.

use std::collections::TryReserveError;

use thiserror::Error;

/// Error type for queue operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// A strict operation (`remove_first`, `remove_last`, `first`, `last`) was
    /// called on an empty queue
    #[error("no such element: the queue is empty")]
    NoSuchElement,
    /// The backing storage could not be grown to the requested number of slots
    #[error("cannot grow queue storage to {requested} slots")]
    CapacityOverflow {
        /// Number of slots that was requested
        requested: usize,
        /// Allocator error reported by the backing `Vec`
        #[source]
        source: TryReserveError,
    },
}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps. Use
/// [`Reversed`](crate::ordering::Reversed) to flip the order.
///
/// # Example
///
/// ```rust
/// use rust_minmax_queue::{Heap, MinMaxHeap};
///
/// let mut heap: MinMaxHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(Heap::peek(&heap), Some(&1));
/// assert_eq!(Heap::pop(&mut heap), Some(1));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// Bounded implementations may drop the element (or evict another one) when
    /// they are full.
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}

/// Extended heap trait with access to the maximum element
///
/// # Example
///
/// ```rust
/// use rust_minmax_queue::{DoubleEndedHeap, Heap, MinMaxHeap};
///
/// let mut heap: MinMaxHeap<i32> = Heap::new();
/// heap.push(10);
/// heap.push(30);
/// heap.push(20);
///
/// assert_eq!(DoubleEndedHeap::peek_max(&heap), Some(&30));
/// assert_eq!(DoubleEndedHeap::pop_max(&mut heap), Some(30));
/// assert_eq!(DoubleEndedHeap::pop_max(&mut heap), Some(20));
/// ```
pub trait DoubleEndedHeap<T>: Heap<T> {
    /// Returns the maximum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_max(&self) -> Option<&T>;

    /// Removes and returns the maximum element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop_max(&mut self) -> Option<T>;
}
