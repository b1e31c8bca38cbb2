//! Implicit subtree representation
//!
//! Subtree = root index into the insertion sequence + open value window
//! Children computed by scanning forward from the root index:
//!   Left child: first later value `< pivot` still inside the window
//!   Right child: first later value `>= pivot` still inside the window
//!
//! No node is ever allocated; the sequence itself is the tree.

use std::fmt;

/// Handle to one subtree of the BST a sequence would build.
///
/// `root` is the index of the subtree's root in the original sequence
/// (`None` for an empty subtree). `(min, max)` is the open value window
/// every member of this subtree must fall into; it is carried as `i64`
/// so the unbounded window never collides with real `i32` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct SubtreeRef {
    /// Index of the subtree root, or `None` when the subtree is empty
    pub root: Option<usize>,

    /// Lower window bound (inclusive)
    pub min: i64,

    /// Upper window bound (exclusive)
    pub max: i64,
}

impl SubtreeRef {
    /// Handle for the whole tree: root at index 0, unbounded window.
    pub fn whole(sequence: &[i32]) -> Self {
        Self {
            root: (!sequence.is_empty()).then_some(0),
            min: i64::MIN,
            max: i64::MAX,
        }
    }

    /// Check if this subtree holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Left child: first element after the root that is smaller than the
    /// root value and still inside the window. The child's window shrinks
    /// to `(min, pivot)`.
    pub fn left_child(&self, sequence: &[i32]) -> SubtreeRef {
        let Some(root) = self.root else {
            return *self;
        };

        let pivot = sequence[root];
        let next = (root + 1..sequence.len())
            .find(|&idx| sequence[idx] < pivot && i64::from(sequence[idx]) >= self.min);

        SubtreeRef {
            root: next,
            min: self.min,
            max: i64::from(pivot),
        }
    }

    /// Right child: first element after the root that is greater-or-equal
    /// to the root value and still inside the window. The child's window
    /// shrinks to `(pivot, max)`.
    pub fn right_child(&self, sequence: &[i32]) -> SubtreeRef {
        let Some(root) = self.root else {
            return *self;
        };

        let pivot = sequence[root];
        let next = (root + 1..sequence.len())
            .find(|&idx| sequence[idx] >= pivot && i64::from(sequence[idx]) < self.max);

        SubtreeRef {
            root: next,
            min: i64::from(pivot),
            max: self.max,
        }
    }
}

impl fmt::Display for SubtreeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(idx) => write!(f, "[{} in ({}, {})]", idx, self.min, self.max),
            None => write!(f, "[empty]"),
        }
    }
}
