//! Builder for configuring a [`MinMaxPriorityQueue`]
//!
//! ```rust
//! use rust_minmax_queue::{MinMaxPriorityQueue, Natural};
//!
//! let queue = MinMaxPriorityQueue::ordered_by(Natural.reversed())
//!     .expected_size(32)
//!     .maximum_size(3)
//!     .create_from([5, 15, 20, 10]);
//!
//! // Reversed order: the first element is the largest, the smallest is evicted.
//! assert_eq!(queue.peek_first(), Some(&20));
//! assert_eq!(queue.peek_last(), Some(&10));
//! assert_eq!(queue.capacity(), 4);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::capacity::{initial_capacity, UNBOUNDED};
use crate::min_max::MinMaxHeap;
use crate::ordering::{Comparator, Natural};
use crate::queue::MinMaxPriorityQueue;

/// Configuration for a new [`MinMaxPriorityQueue`]: ordering, expected size and
/// maximum size
pub struct Builder<T, C = Natural> {
    comparator: C,
    expected_size: Option<usize>,
    maximum_size: Option<usize>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Builder<T, Natural> {
    /// A builder for an unbounded queue in natural order
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T> Default for Builder<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Builder<T, C> {
    /// A builder for an unbounded queue ordered by `comparator`
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            comparator,
            expected_size: None,
            maximum_size: None,
            _marker: PhantomData,
        }
    }

    /// Replaces the ordering
    pub fn ordered_by<D>(self, comparator: D) -> Builder<T, D> {
        Builder {
            comparator,
            expected_size: self.expected_size,
            maximum_size: self.maximum_size,
            _marker: PhantomData,
        }
    }

    /// Sets the initial capacity hint
    ///
    /// The queue still starts with room for all initial elements, and never with
    /// more than `maximum_size + 1` slots. The hint is reserved up front only as
    /// far as the allocator allows; past that the storage grows on demand, so an
    /// oversized hint such as `usize::MAX` does not panic.
    pub fn expected_size(mut self, expected_size: usize) -> Self {
        self.expected_size = Some(expected_size);
        self
    }

    /// Limits the queue to `maximum_size` elements
    ///
    /// # Panics
    ///
    /// Panics if `maximum_size` is zero.
    pub fn maximum_size(mut self, maximum_size: usize) -> Self {
        assert!(maximum_size > 0, "maximum size must be positive");
        self.maximum_size = Some(maximum_size);
        self
    }
}

impl<T, C: Comparator<T>> Builder<T, C> {
    fn ceiling(&self) -> usize {
        self.maximum_size.unwrap_or(UNBOUNDED)
    }

    /// Creates an empty queue
    pub fn create(self) -> MinMaxPriorityQueue<T, C> {
        let capacity = initial_capacity(self.expected_size, self.ceiling(), 0);
        MinMaxPriorityQueue::from_parts(
            MinMaxHeap::with_capacity_and_comparator(capacity, self.comparator),
            self.maximum_size,
        )
    }

    /// Creates a queue holding `elements`
    ///
    /// A batch that fits under the maximum size is arranged in a single O(n) pass.
    /// A larger batch is offered one element at a time, so only the least
    /// `maximum_size` elements are kept.
    pub fn create_from<I>(self, elements: I) -> MinMaxPriorityQueue<T, C>
    where
        I: IntoIterator<Item = T>,
    {
        let elements: Vec<T> = elements.into_iter().collect();
        let capacity = initial_capacity(self.expected_size, self.ceiling(), elements.len());

        if elements.len() <= self.ceiling() {
            let heap = MinMaxHeap::from_vec(elements, capacity, self.comparator);
            return MinMaxPriorityQueue::from_parts(heap, self.maximum_size);
        }

        let mut queue = MinMaxPriorityQueue::from_parts(
            MinMaxHeap::with_capacity_and_comparator(capacity, self.comparator),
            self.maximum_size,
        );
        queue.add_all(elements);
        queue
    }
}

impl<T, C: Clone> Clone for Builder<T, C> {
    fn clone(&self) -> Self {
        Self {
            comparator: self.comparator.clone(),
            expected_size: self.expected_size,
            maximum_size: self.maximum_size,
            _marker: PhantomData,
        }
    }
}

impl<T, C> fmt::Debug for Builder<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("expected_size", &self.expected_size)
            .field("maximum_size", &self.maximum_size)
            .finish_non_exhaustive()
    }
}
