use proptest::prelude::*;
use treewise::{same_bsts, same_bsts_optimized};

/// Short sequences over a narrow value range, so duplicate values and
/// equal prefixes actually occur.
fn sequences() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-8..8i32, 0..14)
}

/// A sequence together with one of its permutations; permutations are
/// where non-trivially equivalent pairs live.
fn permutation_pairs() -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    sequences().prop_flat_map(|sequence| {
        let original = Just(sequence.clone());
        (original, Just(sequence).prop_shuffle())
    })
}

proptest! {
    #[test]
    fn reflexivity(sequence in sequences()) {
        prop_assert!(same_bsts(&sequence, &sequence));
        prop_assert!(same_bsts_optimized(&sequence, &sequence));
    }

    #[test]
    fn symmetry(a in sequences(), b in sequences()) {
        prop_assert_eq!(same_bsts(&a, &b), same_bsts(&b, &a));
        prop_assert_eq!(same_bsts_optimized(&a, &b), same_bsts_optimized(&b, &a));
    }

    #[test]
    fn naive_and_optimized_agree(a in sequences(), b in sequences()) {
        prop_assert_eq!(same_bsts(&a, &b), same_bsts_optimized(&a, &b));
    }

    #[test]
    fn naive_and_optimized_agree_on_permutations((a, b) in permutation_pairs()) {
        prop_assert_eq!(same_bsts(&a, &b), same_bsts_optimized(&a, &b));
    }

    #[test]
    fn equivalent_sequences_share_first_element(
        (a, b) in permutation_pairs()
    ) {
        // The first inserted element is always the root, so equivalence
        // forces identical first elements.
        if same_bsts_optimized(&a, &b) && !a.is_empty() {
            prop_assert_eq!(a[0], b[0]);
        }
    }
}
