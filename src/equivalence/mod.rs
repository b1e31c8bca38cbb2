//! Insertion-order BST equivalence
//!
//! Two integer sequences are equivalent when inserting their elements in
//! order builds structurally identical binary search trees. Neither tree
//! is ever constructed: the first element is necessarily the root, every
//! later element lands in the left partition (`< root`) or the right
//! partition (`>= root`), and the first element of a partition is that
//! subtree's root in turn.
//!
//! Two variants with identical contracts:
//! - [`same_bsts`]: materializes the partitions, O(n²) time *and* space
//! - [`same_bsts_optimized`]: index + window arithmetic over the original
//!   sequences, O(n²) time but only O(d) space for recursion

mod subtree;

pub use subtree::SubtreeRef;

use crate::util::partition_by_pivot;

/// Decide whether two sequences build the same BST, by materializing the
/// smaller / greater-or-equal partitions at every level.
pub fn same_bsts(first: &[i32], second: &[i32]) -> bool {
    if first.len() != second.len() {
        return false;
    }

    let (Some((&root_a, rest_a)), Some((&root_b, rest_b))) =
        (first.split_first(), second.split_first())
    else {
        // Equal lengths, so both are empty
        return true;
    };

    if root_a != root_b {
        return false;
    }

    let (left_a, right_a) = partition_by_pivot(root_a, rest_a);
    let (left_b, right_b) = partition_by_pivot(root_b, rest_b);

    same_bsts(&left_a, &left_b) && same_bsts(&right_a, &right_b)
}

/// Decide whether two sequences build the same BST without allocating
/// sub-arrays.
///
/// Walks both implicit trees in lockstep via [`SubtreeRef`] handles:
/// matched empty subtrees are equivalent, an empty/non-empty pair is a
/// mismatch, and matched roots must carry equal values before recursing
/// into the (left, left) and (right, right) child pairs.
pub fn same_bsts_optimized(first: &[i32], second: &[i32]) -> bool {
    if first.len() != second.len() {
        return false;
    }

    same_subtrees(
        first,
        second,
        SubtreeRef::whole(first),
        SubtreeRef::whole(second),
    )
}

fn same_subtrees(first: &[i32], second: &[i32], a: SubtreeRef, b: SubtreeRef) -> bool {
    let (root_a, root_b) = match (a.root, b.root) {
        (None, None) => return true,
        (Some(root_a), Some(root_b)) => (root_a, root_b),
        _ => return false,
    };

    if first[root_a] != second[root_b] {
        return false;
    }

    same_subtrees(first, second, a.left_child(first), b.left_child(second))
        && same_subtrees(first, second, a.right_child(first), b.right_child(second))
}
