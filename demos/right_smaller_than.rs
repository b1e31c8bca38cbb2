//! Right-smaller-than counts for the sample sequence.
//!
//! Run with: cargo run --example right_smaller_than

use treewise::right_smaller_than;

fn main() {
    let sequence = [8, 5, 11, -1, 3, 4, 2];
    let counts = right_smaller_than(&sequence);

    println!("sequence: {sequence:?}");
    println!("counts:   {counts:?}");
    println!();

    for (idx, (&value, &count)) in sequence.iter().zip(&counts).enumerate() {
        println!("{count} element(s) to the right of index {idx} are smaller than {value}");
    }
}
