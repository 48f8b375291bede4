//! Diagnostic tree traversal.
//!
//! The queue's contract never depends on tree shape, but seeing the shape
//! helps when debugging or teaching. [`PriorityQueue::visit`](crate::PriorityQueue::visit)
//! reports every node to a [`TreeVisitor`] in pre-order (parent, then left
//! subtree, then right subtree). [`TreeRenderer`] is a visitor that draws
//! the tree as indented text.

use std::fmt::{self, Write};

use crate::rank::Rank;

pub use crate::leftist_tree::Side;

/// Receives the nodes of a leftist tree in pre-order.
pub trait TreeVisitor<P, V> {
    /// Called once per node. `depth` is 0 at the root.
    fn visit_node(&mut self, depth: usize, side: Side, priority: &P, value: &V, rank: Rank);
}

/// Renders a tree as indented text, one node per line.
///
/// ```rust
/// use leftist_heap::{PriorityQueue, TreeRenderer};
///
/// let mut queue = PriorityQueue::new();
/// queue.insert(1, "a");
/// queue.insert(2, "b");
///
/// let mut renderer = TreeRenderer::new();
/// queue.visit(&mut renderer);
/// assert_eq!(renderer.finish(), "1 => \"a\" [rank 1]\n  L: 2 => \"b\" [rank 1]\n");
/// ```
#[derive(Debug, Clone)]
pub struct TreeRenderer {
    out: String,
    indent: usize,
}

impl TreeRenderer {
    pub fn new() -> Self {
        Self::with_indent(2)
    }

    /// Uses `indent` spaces per level of depth.
    pub fn with_indent(indent: usize) -> Self {
        Self {
            out: String::new(),
            indent,
        }
    }

    /// Returns the rendered text.
    pub fn finish(self) -> String {
        self.out
    }
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: fmt::Debug, V: fmt::Debug> TreeVisitor<P, V> for TreeRenderer {
    fn visit_node(&mut self, depth: usize, side: Side, priority: &P, value: &V, rank: Rank) {
        let label = match side {
            Side::Root => "",
            Side::Left => "L: ",
            Side::Right => "R: ",
        };
        // Writing into a String cannot fail.
        let _ = writeln!(
            self.out,
            "{:width$}{label}{priority:?} => {value:?} [rank {rank}]",
            "",
            width = depth * self.indent,
        );
    }
}
