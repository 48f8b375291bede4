//! Kani verification proofs for the leftist priority queue
//!
//! Kani is AWS's model checker for Rust. It checks every execution of these
//! harnesses up to the given unwinding bounds.
//!
//! To run these proofs:
//!   cargo kani

#[cfg(kani)]
use leftist_heap::{PriorityQueue, QueueError};

/// Proof that insert always increments the count
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_insert_increments_count() {
    let mut queue: PriorityQueue<u32, u32> = PriorityQueue::new();
    let first: u32 = kani::any();
    queue.insert(first, kani::any());
    let before = queue.count();

    queue.insert(kani::any(), kani::any());
    assert!(queue.count() == before + 1);
    assert!(!queue.is_empty());
}

/// Proof that peek returns the minimum of three arbitrary priorities
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_peek_is_minimum() {
    let mut queue: PriorityQueue<u8, ()> = PriorityQueue::new();
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();
    queue.insert(a, ());
    queue.insert(b, ());
    queue.insert(c, ());

    let min = a.min(b).min(c);
    assert!(queue.peek_minimum() == Ok(&min));
}

/// Proof that extraction yields non-decreasing priorities
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_extraction_order() {
    let mut queue: PriorityQueue<u8, u8> = PriorityQueue::new();
    for _ in 0..3 {
        queue.insert(kani::any(), kani::any());
    }

    let (p1, _) = queue.extract_entry().unwrap();
    let (p2, _) = queue.extract_entry().unwrap();
    let (p3, _) = queue.extract_entry().unwrap();
    assert!(p1 <= p2 && p2 <= p3);
    assert!(queue.extract_minimum() == Err(QueueError::Empty));
}

/// Proof that merging preserves every invariant
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_merge_preserves_invariants() {
    let mut left: PriorityQueue<u8, ()> = PriorityQueue::new();
    let mut right: PriorityQueue<u8, ()> = PriorityQueue::new();
    left.insert(kani::any(), ());
    left.insert(kani::any(), ());
    right.insert(kani::any(), ());

    left.merge(right);
    assert!(left.count() == 3);
    assert!(left.validate().is_ok());
}

/// Proof that operations on an empty queue fail without changing it
#[cfg(kani)]
#[kani::proof]
fn verify_empty_queue_errors() {
    let mut queue: PriorityQueue<u32, u32> = PriorityQueue::new();
    assert!(queue.peek_minimum() == Err(QueueError::Empty));
    assert!(queue.extract_minimum() == Err(QueueError::Empty));
    assert!(queue.count() == 0);
}
