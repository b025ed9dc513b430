//! Bounded Double-Ended Priority Queues for Rust
//!
//! This crate provides a min-max heap and a priority queue built on top of it that
//! gives O(1) access to *both* the smallest and the largest element, with O(log n)
//! insertion and removal at either end.
//!
//! # Features
//!
//! - **Min-Max Heap**: a single implicit binary tree whose levels alternate between
//!   min-ordering and max-ordering, so both extremes sit within the first three slots
//! - **Bounded queues**: an optional maximum size; once full, each insertion evicts the
//!   current greatest element, or is rejected if it would be the greatest itself
//! - **Pluggable ordering**: natural order, reversed order, key extraction or any
//!   `Fn(&T, &T) -> Ordering` closure
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_queue::MinMaxPriorityQueue;
//!
//! let mut queue = MinMaxPriorityQueue::builder().maximum_size(3).create();
//! for value in [5, 15, 20] {
//!     queue.offer(value);
//! }
//!
//! // Full: 10 beats the current worst element, so 20 is evicted.
//! assert!(queue.offer(10));
//! assert_eq!(queue.peek_first(), Some(&5));
//! assert_eq!(queue.peek_last(), Some(&15));
//!
//! // 99 would be the worst element, so it is turned away.
//! assert!(!queue.offer(99));
//! assert_eq!(queue.len(), 3);
//! ```
//!
//! # Thread safety
//!
//! None of the types here lock internally. Every mutation takes `&mut self`, so a
//! queue shared between threads must be wrapped in a `Mutex` (or similar) by the
//! caller.

pub mod builder;
pub mod capacity;
pub mod min_max;
pub mod ordering;
pub mod queue;
pub mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use builder::Builder;
pub use capacity::Offer;
pub use min_max::MinMaxHeap;
pub use ordering::{ByKey, Comparator, Natural, Reversed};
pub use queue::MinMaxPriorityQueue;
pub use traits::{DoubleEndedHeap, Heap, QueueError};
