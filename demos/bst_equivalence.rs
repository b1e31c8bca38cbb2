//! Walk through the insertion-order equivalence check on the sample
//! sequences.
//!
//! Run with: cargo run --example bst_equivalence

use treewise::{same_bsts, same_bsts_optimized, SubtreeRef};

fn main() {
    let first = [10, 15, 8, 12, 94, 81, 5, 2, 11];
    let second = [10, 8, 5, 15, 2, 12, 11, 94, 81];

    println!("first:  {first:?}");
    println!("second: {second:?}");
    println!();

    let root = SubtreeRef::whole(&first);
    println!("implicit root:        {root}");
    println!("implicit left child:  {}", root.left_child(&first));
    println!("implicit right child: {}", root.right_child(&first));
    println!();

    println!("same_bsts:           {}", same_bsts(&first, &second));
    println!("same_bsts_optimized: {}", same_bsts_optimized(&first, &second));

    // Letting 11 reach 15's left subtree before 12 changes the tree shape
    let reshaped = [10, 8, 5, 15, 2, 94, 11, 12, 81];
    println!();
    println!("reshaped: {reshaped:?}");
    println!(
        "same_bsts_optimized(first, reshaped): {}",
        same_bsts_optimized(&first, &reshaped)
    );
}
