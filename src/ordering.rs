//! Ordering policies for heap elements
//!
//! A [`Comparator`] decides which of two elements is "smaller". The heap keeps the
//! smallest element at the root and treats the greatest one as the element to evict
//! when a bounded queue overflows, so wrapping the comparator in [`Reversed`] flips
//! both ends of the queue.
//!
//! Provided policies:
//!
//! | Policy          | Order                                   |
//! |-----------------|-----------------------------------------|
//! | [`Natural`]     | `Ord::cmp`                              |
//! | [`Reversed<C>`] | `C` with operands swapped               |
//! | [`ByKey<F>`]    | `Ord::cmp` on a key extracted by `F`    |
//! | closures        | any `Fn(&T, &T) -> Ordering`            |
//!
//! A comparator must be a total order. Supplying one that is not (for example one
//! that is not transitive) does not cause undefined behaviour, but the order in
//! which elements come out of the queue is then unspecified.

use std::cmp::Ordering;

/// A total order over elements of type `T`
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use rust_minmax_queue::{Comparator, Natural};
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
/// assert_eq!(Natural.reversed().compare(&1, &2), Ordering::Greater);
///
/// let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
/// assert_eq!(by_abs.reversed().compare(&-3, &2), Ordering::Less);
/// ```
pub trait Comparator<T> {
    /// Compares two elements
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// The same order with its operands swapped
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }
}

/// Natural (`Ord`) ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl Natural {
    /// Descending natural order
    pub fn reversed(self) -> Reversed<Natural> {
        Reversed(self)
    }
}

impl<T: Ord> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reverse of another ordering
///
/// `Reversed(Natural)` turns a queue into one whose first element is the largest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<C> Reversed<C> {
    /// Unwraps the original order
    pub fn reversed(self) -> C {
        self.0
    }
}

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Ordering on a key extracted from each element
///
/// # Example
///
/// ```rust
/// use rust_minmax_queue::{ByKey, MinMaxPriorityQueue};
///
/// let mut queue = MinMaxPriorityQueue::ordered_by(ByKey(|s: &&str| s.len())).create();
/// queue.offer("pear");
/// queue.offer("fig");
/// queue.offer("banana");
/// assert_eq!(queue.peek_first(), Some(&"fig"));
/// assert_eq!(queue.peek_last(), Some(&"banana"));
/// ```
#[derive(Clone, Copy, Default)]
pub struct ByKey<F>(pub F);

impl<F> ByKey<F> {
    /// Descending order of the same key
    pub fn reversed(self) -> Reversed<ByKey<F>> {
        Reversed(self)
    }
}

impl<T, K, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
