//! Ordering policies for priorities.
//!
//! A [`PriorityQueue`](crate::PriorityQueue) always pops the element whose
//! priority compares smallest under its comparator. The default,
//! [`NaturalOrder`], uses the priority type's `Ord` impl; [`ReverseOrder`]
//! turns the queue into a max-heap; [`FnComparator`] accepts any closure
//! for priority types that are not `Ord` or need a different order.
//!
//! The comparator must describe a total order. An inconsistent comparator
//! cannot cause memory unsafety, but pops will come out in an unspecified
//! order.

use std::cmp::Ordering;
use std::fmt;

/// A total order over priorities of type `P`.
pub trait Compare<P: ?Sized> {
    /// Compares two priorities.
    fn compare(&self, a: &P, b: &P) -> Ordering;

    /// Returns true if `a` may sit above `b` in the heap, i.e. `a <= b`.
    #[inline]
    fn precedes(&self, a: &P, b: &P) -> bool {
        self.compare(a, b) != Ordering::Greater
    }
}

/// Orders priorities by their `Ord` impl (min-heap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<P: Ord + ?Sized> Compare<P> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &P, b: &P) -> Ordering {
        a.cmp(b)
    }
}

/// Orders priorities by the reverse of their `Ord` impl (max-heap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<P: Ord + ?Sized> Compare<P> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &P, b: &P) -> Ordering {
        b.cmp(a)
    }
}

/// Wraps a comparison closure.
///
/// ```rust
/// use leftist_heap::{FnComparator, PriorityQueue};
///
/// // Order floats with `total_cmp`, which `f64` lacks an `Ord` impl for.
/// let mut queue = PriorityQueue::with_comparator(FnComparator::new(|a: &f64, b: &f64| a.total_cmp(b)));
/// queue.insert(2.5, "b");
/// queue.insert(-1.0, "a");
/// assert_eq!(queue.extract_minimum(), Ok("a"));
/// ```
#[derive(Clone, Copy)]
pub struct FnComparator<F> {
    f: F,
}

impl<F> FnComparator<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComparator").finish_non_exhaustive()
    }
}

impl<P: ?Sized, F> Compare<P> for FnComparator<F>
where
    F: Fn(&P, &P) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &P, b: &P) -> Ordering {
        (self.f)(a, b)
    }
}
