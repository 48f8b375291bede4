//! Mergeable priority queues on leftist heaps
//!
//! This crate provides [`PriorityQueue`], a min-priority queue backed by an
//! immutable leftist tree. Two queues merge in logarithmic time, and every
//! other mutating operation is expressed as a merge.
//!
//! # Features
//!
//! - **Leftist heap**: O(log n) insert, extract-minimum and merge; O(1) peek
//! - **Pluggable ordering**: natural order, reverse order, or any comparison
//!   closure ([`compare`])
//! - **Diagnostics**: [`PriorityQueue::validate`] checks every invariant and
//!   [`TreeVisitor`] exposes the tree shape
//! - **Compatibility**: the [`Heap`] trait and a `BinaryHeap`-shaped wrapper
//!   ([`stdlib_compat::StdHeap`])
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::PriorityQueue;
//!
//! let mut jobs = PriorityQueue::new();
//! jobs.insert(3, "compile");
//! jobs.insert(1, "fetch");
//!
//! let mut urgent = PriorityQueue::new();
//! urgent.insert(0, "page on-call");
//! jobs.merge(urgent);
//!
//! assert_eq!(jobs.extract_minimum(), Ok("page on-call"));
//! assert_eq!(jobs.extract_minimum(), Ok("fetch"));
//! assert_eq!(jobs.count(), 1);
//! ```

pub mod compare;
pub mod leftist;
mod leftist_tree;
pub mod rank;
pub mod stdlib_compat;
pub mod traits;
pub mod visit;

pub use compare::{Compare, FnComparator, NaturalOrder, ReverseOrder};
pub use leftist::{Drain, IntoSorted, PriorityQueue};
pub use traits::{Heap, InvariantViolation, MergeableHeap, QueueError};
pub use visit::{Side, TreeRenderer, TreeVisitor};
