//! Utility functions

mod partition;

pub use partition::partition_by_pivot;
