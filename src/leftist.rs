//! Leftist Heap implementation
//!
//! A leftist heap is a heap-ordered binary tree in which every node's left
//! subtree has a null path length (rank) at least as large as its right
//! subtree's. That keeps the right spine logarithmic, and since merging only
//! ever walks right spines, two heaps combine in O(log n₁ + log n₂).
//!
//! Everything is built on merge:
//! - `insert` merges the current tree with a single-node tree
//! - `extract_minimum` discards the root and merges its two children
//! - `merge` merges the two roots
//!
//! Tree nodes are immutable. Each operation consumes the nodes along the
//! merge path and builds replacements around the untouched subtrees.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `insert`          | O(log n)   |
//! | `peek_minimum`    | O(1)       |
//! | `extract_minimum` | O(log n)   |
//! | `merge`           | O(log n)   |
//! | `from_iter`       | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::{PriorityQueue, QueueError};
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert(5, "e");
//! queue.insert(3, "c");
//! queue.insert(8, "h");
//! queue.insert(1, "a");
//! queue.insert(4, "d");
//!
//! assert_eq!(queue.peek_minimum(), Ok(&1));
//! assert_eq!(queue.extract_minimum(), Ok("a"));
//! assert_eq!(queue.extract_minimum(), Ok("c"));
//! assert_eq!(queue.count(), 3);
//!
//! queue.clear();
//! assert_eq!(queue.extract_minimum(), Err(QueueError::Empty));
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::compare::{Compare, NaturalOrder, ReverseOrder};
use crate::leftist_tree::{self, Link, Node};
use crate::traits::{Heap, InvariantViolation, MergeableHeap, QueueError};
use crate::visit::TreeVisitor;

/// Debug builds re-validate the whole tree after each mutation up to this size.
const DEBUG_VALIDATE_LIMIT: usize = 256;

/// A mergeable min-priority queue backed by a leftist tree.
///
/// `P` is the priority, ordered by the comparator `C` ([`NaturalOrder`]
/// unless configured otherwise). `V` is an opaque payload.
///
/// Elements with equal priorities come out in an unspecified but
/// deterministic order.
pub struct PriorityQueue<P, V, C = NaturalOrder> {
    root: Link<P, V>,
    len: usize,
    comparator: C,
}

impl<P, V, C> Drop for PriorityQueue<P, V, C> {
    fn drop(&mut self) {
        leftist_tree::dismantle(self.root.take());
    }
}

impl<P: Ord, V> PriorityQueue<P, V> {
    /// Creates an empty min-queue ordered by `P`'s `Ord` impl.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<P: Ord, V> PriorityQueue<P, V, ReverseOrder> {
    /// Creates an empty queue that extracts the *largest* priority first.
    pub fn max_heap() -> Self {
        Self::with_comparator(ReverseOrder)
    }
}

impl<P, V, C: Compare<P>> PriorityQueue<P, V, C> {
    /// Creates an empty queue ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            len: 0,
            comparator,
        }
    }

    /// Returns the comparator ordering this queue.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of elements in the queue.
    pub fn count(&self) -> usize {
        self.len
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Adds `value` with the given priority.
    pub fn insert(&mut self, priority: P, value: V) {
        let node = Some(Node::singleton(priority, value));
        self.root = leftist_tree::merge(self.root.take(), node, &self.comparator);
        self.len += 1;
        trace!(len = self.len, "inserted element");
        self.debug_validate();
    }

    /// Returns the smallest priority without removing it.
    ///
    /// # Errors
    /// [`QueueError::Empty`] if the queue holds no elements.
    pub fn peek_minimum(&self) -> Result<&P, QueueError> {
        match self.root.as_deref() {
            Some(root) => Ok(root.priority()),
            None => {
                debug!("peek_minimum on empty queue");
                Err(QueueError::Empty)
            }
        }
    }

    /// Returns the smallest priority and its value without removing them.
    pub fn peek(&self) -> Option<(&P, &V)> {
        self.root
            .as_deref()
            .map(|root| (root.priority(), root.value()))
    }

    /// Removes the element with the smallest priority and returns its value.
    ///
    /// # Errors
    /// [`QueueError::Empty`] if the queue holds no elements; the queue is
    /// left untouched.
    pub fn extract_minimum(&mut self) -> Result<V, QueueError> {
        self.extract_entry().map(|(_, value)| value)
    }

    /// Removes the element with the smallest priority, returning both halves.
    pub fn extract_entry(&mut self) -> Result<(P, V), QueueError> {
        let Some(root) = self.root.take() else {
            debug!("extract_minimum on empty queue");
            return Err(QueueError::Empty);
        };
        let (priority, value, left, right) = root.into_parts();
        self.root = leftist_tree::merge(left, right, &self.comparator);
        self.len -= 1;
        trace!(len = self.len, "extracted minimum");
        self.debug_validate();
        Ok((priority, value))
    }

    /// Removes and returns the minimum entry, or `None` when empty.
    pub fn pop(&mut self) -> Option<(P, V)> {
        self.extract_entry().ok()
    }

    /// Moves every element of `other` into this queue.
    ///
    /// `self` wins ties against `other`. Both queues are expected to use
    /// equivalent comparators; this queue's comparator is the one applied.
    pub fn merge(&mut self, mut other: Self) {
        let other_root = other.root.take();
        let other_len = std::mem::take(&mut other.len);
        self.root = leftist_tree::merge(self.root.take(), other_root, &self.comparator);
        self.len += other_len;
        trace!(len = self.len, merged = other_len, "merged queues");
        self.debug_validate();
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        leftist_tree::dismantle(self.root.take());
        self.len = 0;
    }

    /// Removes all elements, yielding them in ascending priority order.
    ///
    /// Elements the iterator has not yielded when it is dropped are
    /// discarded.
    pub fn drain(&mut self) -> Drain<'_, P, V, C> {
        Drain { queue: self }
    }

    /// Consumes the queue, returning its entries in ascending priority order.
    pub fn into_sorted_vec(self) -> Vec<(P, V)> {
        self.into_iter().collect()
    }

    /// Walks the tree in pre-order, reporting each node to `visitor`.
    pub fn visit<W: TreeVisitor<P, V> + ?Sized>(&self, visitor: &mut W) {
        leftist_tree::walk(&self.root, |node, depth, side| {
            visitor.visit_node(depth, side, node.priority(), node.value(), node.rank())
        });
    }

    /// Checks every structural invariant of the underlying tree.
    ///
    /// A failure here means the queue itself is broken (or the comparator is
    /// not a total order); it is never caused by ordinary use.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        leftist_tree::validate(&self.root, &self.comparator, self.len)
    }

    #[inline]
    fn debug_validate(&self) {
        if cfg!(debug_assertions) && self.len <= DEBUG_VALIDATE_LIMIT {
            if let Err(violation) = self.validate() {
                panic!("leftist heap corrupted: {violation}");
            }
        }
    }

    /// Builds a queue in O(n) by merging trees pairwise, round-robin.
    fn build<I>(iter: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = (P, V)>,
    {
        let mut trees: VecDeque<Box<Node<P, V>>> = iter
            .into_iter()
            .map(|(priority, value)| Node::singleton(priority, value))
            .collect();
        let len = trees.len();
        while let Some(first) = trees.pop_front() {
            let Some(second) = trees.pop_front() else {
                trees.push_front(first);
                break;
            };
            if let Some(merged) = leftist_tree::merge(Some(first), Some(second), &comparator) {
                trees.push_back(merged);
            }
        }
        let queue = Self {
            root: trees.pop_front(),
            len,
            comparator,
        };
        trace!(len, "built queue from iterator");
        queue.debug_validate();
        queue
    }
}

impl<P: Ord, V> Default for PriorityQueue<P, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: fmt::Debug, V, C> fmt::Debug for PriorityQueue<P, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.len)
            .field("minimum", &self.root.as_deref().map(|root| root.priority()))
            .finish()
    }
}

impl<P: Ord, V> FromIterator<(P, V)> for PriorityQueue<P, V> {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        Self::build(iter, NaturalOrder)
    }
}

impl<P, V, C: Compare<P>> Extend<(P, V)> for PriorityQueue<P, V, C> {
    fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, iter: I) {
        for (priority, value) in iter {
            self.insert(priority, value);
        }
    }
}

impl<P, V, C: Compare<P>> IntoIterator for PriorityQueue<P, V, C> {
    type Item = (P, V);
    type IntoIter = IntoSorted<P, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoSorted { queue: self }
    }
}

/// Owning iterator over a queue's entries in ascending priority order.
pub struct IntoSorted<P, V, C = NaturalOrder> {
    queue: PriorityQueue<P, V, C>,
}

impl<P, V, C: Compare<P>> Iterator for IntoSorted<P, V, C> {
    type Item = (P, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len, Some(self.queue.len))
    }
}

impl<P, V, C: Compare<P>> ExactSizeIterator for IntoSorted<P, V, C> {}

impl<P, V, C: Compare<P>> FusedIterator for IntoSorted<P, V, C> {}

/// Draining iterator returned by [`PriorityQueue::drain`].
pub struct Drain<'a, P, V, C = NaturalOrder>
where
    C: Compare<P>,
{
    queue: &'a mut PriorityQueue<P, V, C>,
}

impl<P, V, C: Compare<P>> Iterator for Drain<'_, P, V, C> {
    type Item = (P, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len, Some(self.queue.len))
    }
}

impl<P, V, C: Compare<P>> ExactSizeIterator for Drain<'_, P, V, C> {}

impl<P, V, C: Compare<P>> FusedIterator for Drain<'_, P, V, C> {}

impl<P, V, C: Compare<P>> Drop for Drain<'_, P, V, C> {
    fn drop(&mut self) {
        self.queue.clear();
    }
}

impl<T, P: Ord> Heap<T, P> for PriorityQueue<P, T> {
    fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, priority: P, item: T) {
        self.insert(priority, item)
    }

    fn peek(&self) -> Option<(&P, &T)> {
        PriorityQueue::peek(self)
    }

    fn pop(&mut self) -> Option<(P, T)> {
        PriorityQueue::pop(self)
    }
}

impl<T, P: Ord> MergeableHeap<T, P> for PriorityQueue<P, T> {
    fn merge(&mut self, other: Self) {
        PriorityQueue::merge(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::FnComparator;
    use crate::visit::TreeRenderer;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_example_scenario() {
        init_tracing();
        let mut queue = PriorityQueue::new();
        queue.insert(5, "e");
        queue.insert(3, "c");
        queue.insert(8, "h");
        queue.insert(1, "a");
        queue.insert(4, "d");

        assert_eq!(queue.peek_minimum(), Ok(&1));
        let drained: Vec<_> = std::iter::from_fn(|| queue.extract_minimum().ok()).collect();
        assert_eq!(drained, vec!["a", "c", "d", "e", "h"]);
        assert_eq!(queue.count(), 0);
        assert_eq!(queue.peek_minimum(), Err(QueueError::Empty));
    }

    #[test]
    fn test_empty_queue_errors_leave_state_unchanged() {
        let mut queue: PriorityQueue<i32, ()> = PriorityQueue::new();
        assert_eq!(queue.peek_minimum(), Err(QueueError::Empty));
        assert_eq!(queue.extract_minimum(), Err(QueueError::Empty));
        assert_eq!(queue.count(), 0);
        assert!(queue.is_empty());
        assert_eq!(queue.validate(), Ok(()));

        queue.insert(1, ());
        assert_eq!(queue.extract_minimum(), Ok(()));
        assert_eq!(queue.extract_minimum(), Err(QueueError::Empty));
        assert_eq!(queue.count(), 0);
    }

    #[test]
    fn test_count_tracks_inserts_and_extractions() {
        let mut queue = PriorityQueue::new();
        for i in 0..10 {
            queue.insert(i % 3, i);
            assert_eq!(queue.count(), i as usize + 1);
        }
        for remaining in (0..10).rev() {
            queue.extract_minimum().unwrap();
            assert_eq!(queue.count(), remaining);
        }
    }

    #[test]
    fn test_peek_returns_entry() {
        let mut queue = PriorityQueue::new();
        assert_eq!(queue.peek(), None);
        queue.insert(2, 'b');
        queue.insert(1, 'a');
        assert_eq!(queue.peek(), Some((&1, &'a')));
        assert_eq!(queue.count(), 2);
    }

    #[test]
    fn test_equal_priorities_existing_element_wins() {
        let mut queue = PriorityQueue::new();
        queue.insert(1, "first");
        queue.insert(1, "second");
        assert_eq!(queue.extract_minimum(), Ok("first"));
        assert_eq!(queue.extract_minimum(), Ok("second"));
    }

    #[test]
    fn test_merge_queues() {
        let mut left: PriorityQueue<i32, &str> = [(5, "five"), (3, "three"), (10, "ten")]
            .into_iter()
            .collect();
        let right: PriorityQueue<i32, &str> =
            [(1, "one"), (7, "seven"), (4, "four")].into_iter().collect();

        left.merge(right);
        assert_eq!(left.count(), 6);
        assert_eq!(left.peek_minimum(), Ok(&1));
        assert_eq!(left.validate(), Ok(()));

        let priorities: Vec<i32> = left.into_iter().map(|(p, _)| p).collect();
        assert_eq!(priorities, vec![1, 3, 4, 5, 7, 10]);
    }

    #[test]
    fn test_merge_with_empty() {
        let mut queue = PriorityQueue::new();
        queue.merge(PriorityQueue::new());
        assert!(queue.is_empty());

        let mut other = PriorityQueue::new();
        other.insert(2, 'b');
        queue.merge(other);
        assert_eq!(queue.count(), 1);
        queue.merge(PriorityQueue::new());
        assert_eq!(queue.extract_minimum(), Ok('b'));
    }

    #[test]
    fn test_max_heap() {
        let mut queue = PriorityQueue::max_heap();
        for p in [3, 9, 1, 7] {
            queue.insert(p, p * 10);
        }
        assert_eq!(queue.peek_minimum(), Ok(&9));
        assert_eq!(queue.extract_minimum(), Ok(90));
        assert_eq!(queue.extract_minimum(), Ok(70));
    }

    #[test]
    fn test_custom_comparator() {
        let by_len = FnComparator::new(|a: &String, b: &String| a.len().cmp(&b.len()));
        let mut queue = PriorityQueue::with_comparator(by_len);
        queue.insert("ccc".to_string(), 3);
        queue.insert("a".to_string(), 1);
        queue.insert("bb".to_string(), 2);
        assert_eq!(queue.peek_minimum().map(String::as_str), Ok("a"));
        let values: Vec<i32> = queue.drain().map(|(_, v)| v).collect();
        assert_eq!(values, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_partial_clears_queue() {
        let mut queue: PriorityQueue<i32, i32> = (0..20).map(|i| (i, i)).collect();
        {
            let mut drain = queue.drain();
            assert_eq!(drain.len(), 20);
            assert_eq!(drain.next(), Some((0, 0)));
            assert_eq!(drain.next(), Some((1, 1)));
        }
        assert!(queue.is_empty());
        assert_eq!(queue.count(), 0);
        queue.insert(5, 5);
        assert_eq!(queue.count(), 1);
    }

    #[test]
    fn test_from_iter_and_extend() {
        let mut queue: PriorityQueue<i32, char> =
            vec![(5, 'e'), (3, 'c'), (7, 'g'), (1, 'a'), (4, 'd')]
                .into_iter()
                .collect();
        assert_eq!(queue.count(), 5);
        assert_eq!(queue.validate(), Ok(()));

        queue.extend([(2, 'b'), (6, 'f')]);
        let values: String = queue.into_sorted_vec().into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, "abcdefg");
    }

    #[test]
    fn test_into_iter_exact_size() {
        let queue: PriorityQueue<u8, ()> = (0..7).rev().map(|i| (i, ())).collect();
        let mut iter = queue.into_iter();
        assert_eq!(iter.len(), 7);
        iter.next();
        assert_eq!(iter.len(), 6);
    }

    #[test]
    fn test_clear() {
        let mut queue: PriorityQueue<i32, i32> = (0..100).map(|i| (i, i)).collect();
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.peek_minimum(), Err(QueueError::Empty));
        assert_eq!(queue.validate(), Ok(()));
    }

    #[test]
    fn test_heap_trait() {
        let mut heap: PriorityQueue<i32, &str> = Heap::new();
        Heap::push(&mut heap, 2, "two");
        Heap::push(&mut heap, 1, "one");
        assert_eq!(Heap::len(&heap), 2);
        assert_eq!(Heap::peek(&heap), Some((&1, &"one")));

        let mut other: PriorityQueue<i32, &str> = Heap::new();
        Heap::push(&mut other, 0, "zero");
        MergeableHeap::merge(&mut heap, other);
        assert_eq!(Heap::pop(&mut heap), Some((0, "zero")));
        assert_eq!(Heap::pop(&mut heap), Some((1, "one")));
        assert_eq!(Heap::pop(&mut heap), Some((2, "two")));
        assert_eq!(Heap::pop(&mut heap), None);
        assert!(Heap::is_empty(&heap));
    }

    #[test]
    fn test_visit_renders_tree() {
        let mut queue = PriorityQueue::new();
        queue.insert(1, 'a');
        queue.insert(2, 'b');
        queue.insert(3, 'c');

        let mut renderer = TreeRenderer::new();
        queue.visit(&mut renderer);
        assert_eq!(
            renderer.finish(),
            "1 => 'a' [rank 2]\n  L: 2 => 'b' [rank 1]\n  R: 3 => 'c' [rank 1]\n"
        );
    }

    #[test]
    fn test_debug_format() {
        let mut queue = PriorityQueue::new();
        queue.insert(4, ());
        queue.insert(2, ());
        assert_eq!(
            format!("{:?}", queue),
            "PriorityQueue { len: 2, minimum: Some(2) }"
        );
    }

    #[test]
    fn test_descending_inserts_drop_without_overflow() {
        let mut queue = PriorityQueue::new();
        for i in (0..300_000).rev() {
            queue.insert(i, ());
        }
        assert_eq!(queue.count(), 300_000);
        assert_eq!(queue.peek_minimum(), Ok(&0));
        drop(queue);
    }

    #[test]
    fn test_values_need_no_capabilities() {
        struct Opaque(u32);

        let mut queue = PriorityQueue::new();
        queue.insert(2, Opaque(20));
        queue.insert(1, Opaque(10));
        assert_eq!(queue.extract_minimum().map(|o| o.0), Ok(10));
        assert_eq!(queue.extract_minimum().map(|o| o.0), Ok(20));
    }
}
