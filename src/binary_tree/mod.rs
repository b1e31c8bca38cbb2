//! Binary tree exercises
//!
//! Plain (non-search) binary tree with uniquely owned children, plus the
//! two catalogue operations over it: root-to-leaf branch sums and
//! in-place inversion.

use std::mem;

/// Binary tree node; children are uniquely owned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct BinaryTree {
    /// Stored value
    pub value: i32,
    /// Left child
    pub left: Option<Box<BinaryTree>>,
    /// Right child
    pub right: Option<Box<BinaryTree>>,
}

impl BinaryTree {
    /// Leaf node with no children.
    pub fn leaf(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Node with the given children.
    pub fn node(value: i32, left: Option<BinaryTree>, right: Option<BinaryTree>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Sum of every root-to-leaf branch, leaves ordered left to right.
    pub fn branch_sums(&self) -> Vec<i32> {
        let mut sums = Vec::new();
        self.accumulate_branch_sums(0, &mut sums);
        sums
    }

    fn accumulate_branch_sums(&self, running_sum: i32, sums: &mut Vec<i32>) {
        let running_sum = running_sum + self.value;

        if self.left.is_none() && self.right.is_none() {
            sums.push(running_sum);
            return;
        }

        if let Some(left) = &self.left {
            left.accumulate_branch_sums(running_sum, sums);
        }
        if let Some(right) = &self.right {
            right.accumulate_branch_sums(running_sum, sums);
        }
    }

    /// Swap every node's children in place.
    pub fn invert(&mut self) {
        mem::swap(&mut self.left, &mut self.right);
        if let Some(left) = self.left.as_mut() {
            left.invert();
        }
        if let Some(right) = self.right.as_mut() {
            right.invert();
        }
    }
}
