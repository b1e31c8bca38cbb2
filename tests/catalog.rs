//! End-to-end tests over the catalogue's sample cases

use treewise::arrays::{apartment_hunting, four_number_sum, three_number_sum, two_number_sum};
use treewise::bst::{self, Bst, BstOp};
use treewise::{right_smaller_than, same_bsts, same_bsts_optimized};

use test_helpers::*;

#[test]
fn test_equivalence_sample_pair_in_both_variants() {
    let (first, second) = EQUIVALENT_SEQUENCES;

    assert!(same_bsts(&first, &second));
    assert!(same_bsts_optimized(&first, &second));

    // Letting 11 reach 15's left subtree before 12 changes the shape
    let reshaped = [10, 8, 5, 15, 2, 94, 11, 12, 81];
    assert!(!same_bsts(&first, &reshaped));
    assert!(!same_bsts_optimized(&first, &reshaped));
}

#[test]
fn test_right_smaller_than_sample_case() {
    assert_eq!(
        right_smaller_than(&[8, 5, 11, -1, 3, 4, 2]),
        [5, 4, 4, 0, 1, 1, 0]
    );
}

#[test]
fn test_equivalence_checker_agrees_with_materialized_trees() {
    // The two sample sequences must also build identical Bst values
    // when the trees are constructed for real.
    let (first, second) = EQUIVALENT_SEQUENCES;
    assert_eq!(Bst::from_values(&first), Bst::from_values(&second));

    let reshaped = [10, 8, 5, 15, 2, 94, 11, 12, 81];
    assert_ne!(Bst::from_values(&first), Bst::from_values(&reshaped));
}

#[test]
fn test_construct_bst_operation_sequence() {
    let script = "insert 10\ninsert 5\ninsert 15\ncontains 5\nremove 5\ninsert 2";
    let operations: Vec<BstOp> = script
        .lines()
        .map(|line| line.parse().expect("script lines are well-formed"))
        .collect();

    let tree = bst::construct(&operations);
    assert_eq!(tree.in_order(), [2, 10, 15]);
    assert_eq!(tree.closest_value(4), Some(2));
}

#[test]
fn test_branch_sums_and_inversion_round_trip() {
    let mut tree = sample_binary_tree();
    assert_eq!(tree.branch_sums(), [15, 16, 18, 10, 11]);

    tree.invert();
    assert_eq!(tree.branch_sums(), [11, 10, 18, 16, 15]);

    tree.invert();
    assert_eq!(tree, sample_binary_tree());
}

#[test]
fn test_array_exercises_sample_cases() {
    assert_eq!(
        two_number_sum(&[3, 5, -4, 8, 11, 1, -1, 6], 10),
        Some((11, -1))
    );
    assert_eq!(
        three_number_sum(&[12, 3, 1, 2, -6, 5, -8, 6], 0),
        [[-8, 2, 6], [-8, 3, 5], [-6, 1, 5]]
    );
    assert_eq!(
        four_number_sum(&[7, 6, 4, -1, 1, 2], 16),
        [[7, 6, 4, -1], [7, 6, 1, 2]]
    );
}

#[test]
fn test_apartment_hunting_sample_case() {
    let requirement_sets: [&[(&str, bool)]; 5] = [
        &[("gym", false), ("school", true), ("store", false)],
        &[("gym", true), ("school", false), ("store", false)],
        &[("gym", true), ("school", true), ("store", false)],
        &[("gym", false), ("school", true), ("store", false)],
        &[("gym", false), ("school", true), ("store", true)],
    ];
    let blocks: Vec<_> = requirement_sets
        .iter()
        .map(|flags| {
            flags
                .iter()
                .map(|&(name, value)| (name.to_string(), value))
                .collect()
        })
        .collect();
    let requirements: Vec<String> = ["gym", "school", "store"]
        .iter()
        .map(|name| name.to_string())
        .collect();

    assert_eq!(apartment_hunting(&blocks, &requirements), Some(3));
}
