//! Rank (null path length) type for leftist tree nodes.
//!
//! # Why u8?
//!
//! The rank of a leftist tree node is the length of the shortest path from
//! that node down to a missing child. A node of rank `r` has a complete
//! binary tree of height `r` hanging below it, so an `n`-node tree has
//! rank at most `⌊log₂(n + 1)⌋`.
//!
//! For practical purposes:
//! - 2⁶⁴ nodes → rank at most 64
//! - 2²⁵⁵ nodes → rank at most 255
//!
//! `u8` therefore covers any tree that fits in memory, and keeps the
//! per-node bookkeeping to a single byte next to the two child pointers.
//!
//! # Runtime Checks
//!
//! [`checked_increment`] panics if the limit is ever exceeded, which would
//! mean a node was built with a malformed right child.

/// Type alias for a node's null path length.
pub type Rank = u8;

/// Rank of an absent subtree.
pub const EMPTY_RANK: Rank = 0;

/// Maximum representable rank.
pub const MAX_RANK: Rank = u8::MAX;

/// Increment a rank, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`. A leftist tree would need more than 2²⁵⁵
/// nodes to get there.
///
/// # Example
///
/// ```rust
/// use leftist_heap::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1).expect(
        "rank overflow: a leftist tree of rank r holds at least 2^r - 1 nodes, \
         so u8::MAX cannot be exceeded by a tree that fits in memory",
    )
}

/// Upper bound on the rank of a leftist tree holding `len` nodes.
///
/// This is `⌊log₂(len + 1)⌋`, which also bounds the length of the right
/// spine walked by a merge.
///
/// ```rust
/// use leftist_heap::rank::max_rank_for;
///
/// assert_eq!(max_rank_for(0), 0);
/// assert_eq!(max_rank_for(1), 1);
/// assert_eq!(max_rank_for(6), 2);
/// assert_eq!(max_rank_for(7), 3);
/// ```
#[inline]
pub fn max_rank_for(len: usize) -> Rank {
    // ilog2 of a value in 1..=2^64 is at most 64
    (len as u128 + 1).ilog2() as Rank
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_increment() {
        assert_eq!(checked_increment(0), 1);
        assert_eq!(checked_increment(127), 128);
        assert_eq!(checked_increment(254), 255);
    }

    #[test]
    #[should_panic(expected = "rank overflow")]
    fn test_checked_increment_overflow() {
        checked_increment(MAX_RANK);
    }

    #[test]
    fn test_max_rank_for() {
        assert_eq!(max_rank_for(2), 1);
        assert_eq!(max_rank_for(3), 2);
        assert_eq!(max_rank_for(1023), 10);
        assert_eq!(max_rank_for(usize::MAX), 64);
    }

    #[test]
    fn test_rank_is_one_byte() {
        assert_eq!(std::mem::size_of::<Rank>(), 1);
        assert_eq!(EMPTY_RANK, 0);
    }
}
