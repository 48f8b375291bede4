//! Immutable leftist tree nodes and the merge primitive.
//!
//! A node is built exactly once by [`Node::new`], which places the child of
//! higher rank on the left and caches `rank(right) + 1`. Nodes expose no
//! setters: every structural change consumes existing nodes and builds new
//! ones around the moved subtrees.
//!
//! Only the right spine is ever walked by [`merge`], and its length is
//! bounded by the rank, so merging is logarithmic. The left spine has no
//! such bound (strictly decreasing inserts produce a left chain of length
//! n), so whole-tree walks here use an explicit stack.

use crate::compare::Compare;
use crate::rank::{checked_increment, Rank, EMPTY_RANK};
use crate::traits::InvariantViolation;

/// Optional owned subtree
pub(crate) type Link<P, V> = Option<Box<Node<P, V>>>;

/// A leftist tree node
pub(crate) struct Node<P, V> {
    priority: P,
    value: V,
    left: Link<P, V>,
    right: Link<P, V>,
    rank: Rank,
}

/// Position of a node relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Root,
    Left,
    Right,
}

/// Null path length of a subtree: 0 when absent, else the cached rank.
#[inline]
pub(crate) fn null_path_length<P, V>(link: &Link<P, V>) -> Rank {
    link.as_ref().map_or(EMPTY_RANK, |node| node.rank)
}

impl<P, V> Node<P, V> {
    /// Builds a node over two valid leftist trees.
    ///
    /// The caller guarantees `priority` is no greater than either child's
    /// priority; only the leftist property is established here.
    pub(crate) fn new(priority: P, value: V, left: Link<P, V>, right: Link<P, V>) -> Box<Self> {
        let (left, right) = if null_path_length(&left) < null_path_length(&right) {
            (right, left)
        } else {
            (left, right)
        };
        let rank = checked_increment(null_path_length(&right));
        Box::new(Node {
            priority,
            value,
            left,
            right,
            rank,
        })
    }

    pub(crate) fn singleton(priority: P, value: V) -> Box<Self> {
        Self::new(priority, value, None, None)
    }

    #[inline]
    pub(crate) fn priority(&self) -> &P {
        &self.priority
    }

    #[inline]
    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) fn rank(&self) -> Rank {
        self.rank
    }

    /// Consumes the node, handing back its entry and both subtrees.
    pub(crate) fn into_parts(self) -> (P, V, Link<P, V>, Link<P, V>) {
        (self.priority, self.value, self.left, self.right)
    }
}

/// Merges two leftist trees into one.
///
/// On equal priorities `h1` becomes the root.
pub(crate) fn merge<P, V, C>(h1: Link<P, V>, h2: Link<P, V>, cmp: &C) -> Link<P, V>
where
    C: Compare<P> + ?Sized,
{
    match (h1, h2) {
        (None, h2) => h2,
        (h1, None) => h1,
        (Some(a), Some(b)) => {
            if cmp.precedes(&a.priority, &b.priority) {
                Some(join(a, b, cmp))
            } else {
                Some(join(b, a, cmp))
            }
        }
    }
}

/// Keeps `root`'s entry and left child; its right child absorbs `other`.
fn join<P, V, C>(root: Box<Node<P, V>>, other: Box<Node<P, V>>, cmp: &C) -> Box<Node<P, V>>
where
    C: Compare<P> + ?Sized,
{
    let (priority, value, left, right) = root.into_parts();
    Node::new(priority, value, left, merge(right, Some(other), cmp))
}

/// Pre-order walk over every node, calling `f(node, depth, side)`.
pub(crate) fn walk<P, V, F>(root: &Link<P, V>, mut f: F)
where
    F: FnMut(&Node<P, V>, usize, Side),
{
    let mut stack: Vec<(&Node<P, V>, usize, Side)> = Vec::new();
    if let Some(node) = root.as_deref() {
        stack.push((node, 0, Side::Root));
    }
    while let Some((node, depth, side)) = stack.pop() {
        f(node, depth, side);
        if let Some(right) = node.right.as_deref() {
            stack.push((right, depth + 1, Side::Right));
        }
        if let Some(left) = node.left.as_deref() {
            stack.push((left, depth + 1, Side::Left));
        }
    }
}

/// Checks heap order, the leftist property, cached ranks and the node count.
pub(crate) fn validate<P, V, C>(
    root: &Link<P, V>,
    cmp: &C,
    len: usize,
) -> Result<(), InvariantViolation>
where
    C: Compare<P> + ?Sized,
{
    let mut counted = 0;
    let mut stack: Vec<(&Node<P, V>, usize)> = Vec::new();
    if let Some(node) = root.as_deref() {
        stack.push((node, 0));
    }
    while let Some((node, depth)) = stack.pop() {
        counted += 1;

        let left = null_path_length(&node.left);
        let right = null_path_length(&node.right);
        if left < right {
            return Err(InvariantViolation::Leftist { depth, left, right });
        }
        let expected = right + 1;
        if node.rank != expected {
            return Err(InvariantViolation::RankMismatch {
                depth,
                cached: node.rank,
                expected,
            });
        }

        for child in [node.left.as_deref(), node.right.as_deref()]
            .into_iter()
            .flatten()
        {
            if !cmp.precedes(&node.priority, &child.priority) {
                return Err(InvariantViolation::HeapOrder { depth: depth + 1 });
            }
            stack.push((child, depth + 1));
        }
    }

    if counted != len {
        return Err(InvariantViolation::LengthMismatch {
            counted,
            recorded: len,
        });
    }
    Ok(())
}

/// Frees a tree without recursing down its (possibly long) left spine.
pub(crate) fn dismantle<P, V>(root: Link<P, V>) {
    let mut stack: Vec<Box<Node<P, V>>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        let (_, _, left, right) = node.into_parts();
        stack.extend(left);
        stack.extend(right);
    }
}
