//! Apartment hunting
//!
//! Each city block advertises which requirements it satisfies. The best
//! block minimizes the distance to the farthest-away requirement.
//!
//! Per requirement, two sweeps (left-to-right, then right-to-left) give
//! every block its distance to the nearest satisfying block; the answer
//! is the block whose worst such distance is smallest. O(b·r) time.

use std::collections::HashMap;

/// A block's requirement flags; absent keys read as unsatisfied.
pub type Block = HashMap<String, bool>;

/// Index of the block minimizing the maximum distance to any
/// requirement, or `None` when there are no blocks.
///
/// A requirement satisfied by no block leaves every distance saturated,
/// so such inputs still pick a block rather than failing.
pub fn apartment_hunting(blocks: &[Block], requirements: &[String]) -> Option<usize> {
    if blocks.is_empty() {
        return None;
    }

    let n = blocks.len();
    let mut max_distances = vec![0usize; n];

    for requirement in requirements {
        let min_distances = min_distances_for(blocks, requirement);
        for (block_idx, &distance) in min_distances.iter().enumerate() {
            max_distances[block_idx] = max_distances[block_idx].max(distance);
        }
    }

    max_distances
        .iter()
        .enumerate()
        .min_by_key(|&(_, &distance)| distance)
        .map(|(block_idx, _)| block_idx)
}

/// Distance from every block to the nearest block satisfying
/// `requirement`, via a forward then a backward sweep.
fn min_distances_for(blocks: &[Block], requirement: &str) -> Vec<usize> {
    let n = blocks.len();
    let mut distances = vec![usize::MAX; n];

    let mut closest: Option<usize> = None;
    for (idx, block) in blocks.iter().enumerate() {
        if satisfies(block, requirement) {
            closest = Some(idx);
        }
        if let Some(closest) = closest {
            distances[idx] = idx - closest;
        }
    }

    let mut closest: Option<usize> = None;
    for (idx, block) in blocks.iter().enumerate().rev() {
        if satisfies(block, requirement) {
            closest = Some(idx);
        }
        if let Some(closest) = closest {
            distances[idx] = distances[idx].min(closest - idx);
        }
    }

    distances
}

fn satisfies(block: &Block, requirement: &str) -> bool {
    block.get(requirement).copied().unwrap_or(false)
}
