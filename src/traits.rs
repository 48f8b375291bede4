//! Common traits and error types for the priority queue
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Heap`]: Base trait with the `BinaryHeap`-style push/peek/pop API
//! - [`MergeableHeap`]: Extends [`Heap`] with merging of two heaps
//!
//! The leftist heap's own API ([`PriorityQueue`](crate::PriorityQueue)) is
//! richer and reports misuse through [`QueueError`]; these traits exist so
//! generic code can be written against any min-heap.

use thiserror::Error;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `peek_minimum` or `extract_minimum` was called on an empty queue
    #[error("priority queue is empty")]
    Empty,
}

/// A structural problem found by [`PriorityQueue::validate`](crate::PriorityQueue::validate).
///
/// Depths are counted from the root, which sits at depth 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A child's priority compares less than its parent's
    #[error("heap order violated at depth {depth}: child is smaller than its parent")]
    HeapOrder { depth: usize },
    /// A node's left child has a smaller rank than its right child
    #[error("leftist property violated at depth {depth}: left rank {left} < right rank {right}")]
    Leftist { depth: usize, left: u8, right: u8 },
    /// A node's cached rank disagrees with its right child's rank
    #[error("rank mismatch at depth {depth}: cached {cached}, expected {expected}")]
    RankMismatch {
        depth: usize,
        cached: u8,
        expected: u8,
    },
    /// The number of reachable nodes differs from the recorded length
    #[error("length mismatch: {counted} nodes reachable but length is {recorded}")]
    LengthMismatch { counted: usize, recorded: usize },
}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap` which stores values directly (using `Ord`), these heaps
/// store (priority, item) pairs to separate the ordering key from the data.
///
/// # Example
///
/// ```rust
/// use leftist_heap::Heap;
/// use leftist_heap::PriorityQueue;
///
/// let mut heap: PriorityQueue<i32, &str> = Heap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(Heap::peek(&heap), Some((&1, &"one")));
/// assert_eq!(Heap::pop(&mut heap), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    fn pop(&mut self) -> Option<(P, T)>;
}

/// Heaps that can absorb another heap of the same type
pub trait MergeableHeap<T, P: Ord>: Heap<T, P> {
    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(log n₁ + log n₂) for the leftist heap.
    fn merge(&mut self, other: Self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(QueueError::Empty.to_string(), "priority queue is empty");
        assert_eq!(
            InvariantViolation::Leftist {
                depth: 2,
                left: 0,
                right: 1
            }
            .to_string(),
            "leftist property violated at depth 2: left rank 0 < right rank 1"
        );
        assert_eq!(
            InvariantViolation::LengthMismatch {
                counted: 3,
                recorded: 4
            }
            .to_string(),
            "length mismatch: 3 nodes reachable but length is 4"
        );
    }
}
