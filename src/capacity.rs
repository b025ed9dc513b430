//! Capacity management for bounded queues
//!
//! Two different sizes are tracked for a queue:
//!
//! - the **maximum size**: a hard ceiling on the number of elements, fixed by the
//!   caller (`UNBOUNDED` when absent);
//! - the **capacity**: how many slots the backing storage has reserved.
//!
//! Capacity follows a fixed growth policy. It starts at [`DEFAULT_CAPACITY`] (or the
//! configured expected size), more than doubles while small, grows by half once it
//! reaches 64 slots, and never exceeds `maximum size + 1`.
//!
//! # Admission at the ceiling
//!
//! Once a queue holds `maximum size` elements, a new element is admitted only if it
//! is strictly less than the current greatest element, which is evicted to make
//! room. An element that ties with or exceeds the greatest is handed back as
//! [`Offer::Rejected`]. Rejection is a normal outcome, not an error.

use log::debug;

use crate::min_max::MinMaxHeap;
use crate::ordering::Comparator;
use crate::traits::QueueError;

/// Capacity used when no expected size is configured
pub const DEFAULT_CAPACITY: usize = 11;

/// Maximum size of a queue without a ceiling
pub const UNBOUNDED: usize = usize::MAX;

/// Outcome of inserting into a possibly bounded queue
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Offer<T> {
    /// The element was added without displacing anything
    Accepted,
    /// The element was added and the previous greatest element was evicted
    Evicted(T),
    /// The queue was full and the element would have been its greatest; it is
    /// returned unchanged
    Rejected(T),
}

impl<T> Offer<T> {
    /// Returns true if the offered element is now in the queue
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Offer::Rejected(_))
    }

    /// The element evicted to make room, if any
    pub fn evicted(self) -> Option<T> {
        match self {
            Offer::Evicted(element) => Some(element),
            _ => None,
        }
    }

    /// The offered element, if it was turned away
    pub fn rejected(self) -> Option<T> {
        match self {
            Offer::Rejected(element) => Some(element),
            _ => None,
        }
    }
}

/// Capacity to allocate for a new queue
///
/// At least `expected_size` (default [`DEFAULT_CAPACITY`]) and at least
/// `initial_len`, capped at `maximum_size + 1`.
pub fn initial_capacity(
    expected_size: Option<usize>,
    maximum_size: usize,
    initial_len: usize,
) -> usize {
    let wanted = expected_size.unwrap_or(DEFAULT_CAPACITY).max(initial_len);
    cap_at_maximum_size(wanted, maximum_size)
}

/// Capacity to grow to once `current` slots are all in use
pub fn grown_capacity(current: usize, maximum_size: usize) -> usize {
    let grown = if current < 64 {
        (current + 1) * 2
    } else {
        (current / 2).saturating_mul(3)
    };
    cap_at_maximum_size(grown, maximum_size)
}

#[inline]
fn cap_at_maximum_size(queue_size: usize, maximum_size: usize) -> usize {
    queue_size.min(maximum_size.saturating_add(1))
}

/// Inserts `element`, evicting the greatest element if the heap is at
/// `maximum_size`
pub(crate) fn admit<T, C: Comparator<T>>(
    heap: &mut MinMaxHeap<T, C>,
    maximum_size: usize,
    element: T,
) -> Offer<T> {
    if heap.len() < maximum_size {
        if heap.len() == heap.capacity() {
            heap.reserve(grown_capacity(heap.capacity(), maximum_size));
        }
        heap.push(element);
        return Offer::Accepted;
    }

    let beats_worst = heap
        .peek_max()
        .is_some_and(|worst| heap.comparator().compare(&element, worst).is_lt());
    if !beats_worst {
        return Offer::Rejected(element);
    }
    match heap.pop_max() {
        Some(evicted) => {
            heap.push(element);
            debug!("queue at maximum size {}: evicted greatest element", maximum_size);
            Offer::Evicted(evicted)
        }
        None => Offer::Rejected(element),
    }
}

/// Reserves a free slot for the next admission, failing instead of aborting if
/// the allocation cannot be made
pub(crate) fn try_make_room<T, C: Comparator<T>>(
    heap: &mut MinMaxHeap<T, C>,
    maximum_size: usize,
) -> Result<(), QueueError> {
    if heap.len() < maximum_size && heap.len() == heap.capacity() {
        heap.try_reserve(grown_capacity(heap.capacity(), maximum_size))?;
    }
    Ok(())
}

/// Evicts greatest elements until at most `maximum_size` remain
///
/// Returns the evicted elements, greatest first.
pub(crate) fn evict_down_to<T, C: Comparator<T>>(
    heap: &mut MinMaxHeap<T, C>,
    maximum_size: usize,
) -> Vec<T> {
    let excess = heap.len().saturating_sub(maximum_size);
    let mut evicted = Vec::with_capacity(excess);
    while heap.len() > maximum_size {
        match heap.pop_max() {
            Some(element) => evicted.push(element),
            None => break,
        }
    }
    if !evicted.is_empty() {
        debug!(
            "evicted {} elements to fit maximum size {}",
            evicted.len(),
            maximum_size
        );
    }
    evicted
}
