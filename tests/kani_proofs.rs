//! Kani verification proofs for the min-max heap and the bounded queue
//!
//! Kani is AWS's model checker for Rust. Each harness checks a property for every
//! possible choice of the symbolic inputs, up to the unwinding bound.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use rust_minmax_queue::{MinMaxHeap, MinMaxPriorityQueue, Natural, Offer};

/// Proof that push increments the length and keeps both ends correct
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_push_tracks_extremes() {
    let mut heap: MinMaxHeap<u8> = MinMaxHeap::with_capacity(4);
    let values: [u8; 4] = kani::any();

    for (pushed, &value) in values.iter().enumerate() {
        heap.push(value);
        assert!(heap.len() == pushed + 1);
    }

    let min = values.iter().min().copied();
    let max = values.iter().max().copied();
    assert!(heap.peek_min().copied() == min);
    assert!(heap.peek_max().copied() == max);
    assert!(heap.is_intact());
}

/// Proof that pop_min and pop_max return the extremes and keep the ordering
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_pops_return_extremes() {
    let values: [u8; 5] = kani::any();
    let mut heap = MinMaxHeap::from_vec(values.to_vec(), 5, Natural);

    let min = values.iter().min().copied();
    let max = values.iter().max().copied();
    assert!(heap.pop_min() == min);
    assert!(heap.pop_max() == max);
    assert!(heap.len() == 3);
    assert!(heap.is_intact());
}

/// Proof that removing any index of a seven element heap keeps the ordering
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_remove_at_keeps_ordering() {
    let values: [u8; 7] = kani::any();
    let index: usize = kani::any();
    kani::assume(index < 7);

    let mut heap = MinMaxHeap::from_vec(values.to_vec(), 7, Natural);
    let removed = heap.remove_at(index);

    assert!(removed.is_some());
    assert!(heap.len() == 6);
    assert!(heap.is_intact());
}

/// Proof that a full bounded queue never exceeds its maximum size and only evicts
/// an element greater than the newcomer
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_bounded_offer() {
    let values: [u8; 3] = kani::any();
    let element: u8 = kani::any();

    let mut queue = MinMaxPriorityQueue::builder()
        .maximum_size(3)
        .create_from(values);
    let worst = queue.peek_last().copied();

    match queue.insert(element) {
        Offer::Accepted => panic!("a full queue accepted without evicting"),
        Offer::Evicted(evicted) => {
            assert!(Some(evicted) == worst);
            assert!(element < evicted);
        }
        Offer::Rejected(rejected) => {
            assert!(rejected == element);
            assert!(worst.is_some_and(|worst| element >= worst));
        }
    }
    assert!(queue.len() == 3);
    assert!(queue.capacity() == 4);
    assert!(queue.is_intact());
}
