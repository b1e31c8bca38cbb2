//! Typed BST operations
//!
//! Text form is one `<op> <value>` pair per line (`insert 10`,
//! `contains 5`, `remove 10`); [`construct`] replays a parsed operation
//! list against a fresh tree, logging each step.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use super::Bst;

/// One operation against a [`Bst`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum BstOp {
    /// Insert the value
    Insert(i32),
    /// Report whether the value is present
    Contains(i32),
    /// Remove one occurrence of the value
    Remove(i32),
}

/// Errors from parsing the text form of a [`BstOp`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseOpError {
    /// Operation name is not insert/contains/remove
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    /// Line had no value token
    #[error("missing value for operation '{0}'")]
    MissingValue(String),

    /// Value token is not an integer
    #[error("invalid value '{0}': {1}")]
    InvalidValue(String, #[source] std::num::ParseIntError),

    /// Empty line
    #[error("empty operation")]
    Empty,
}

impl FromStr for BstOp {
    type Err = ParseOpError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let op = tokens.next().ok_or(ParseOpError::Empty)?;
        let value = tokens
            .next()
            .ok_or_else(|| ParseOpError::MissingValue(op.to_string()))?;
        let value: i32 = value
            .parse()
            .map_err(|err| ParseOpError::InvalidValue(value.to_string(), err))?;

        match op {
            "insert" => Ok(BstOp::Insert(value)),
            "contains" => Ok(BstOp::Contains(value)),
            "remove" => Ok(BstOp::Remove(value)),
            other => Err(ParseOpError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for BstOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BstOp::Insert(value) => write!(f, "insert {value}"),
            BstOp::Contains(value) => write!(f, "contains {value}"),
            BstOp::Remove(value) => write!(f, "remove {value}"),
        }
    }
}

/// Replay `operations` in order against a fresh tree.
///
/// `contains` and `remove` against an empty tree are skipped, and a
/// `remove` that would empty a single-node tree is skipped as well, so
/// the replayed tree never loses its last node once it has one.
pub fn construct(operations: &[BstOp]) -> Bst {
    let mut tree = Bst::new();

    for op in operations {
        match *op {
            BstOp::Insert(value) => {
                tree.insert(value);
                debug!("value {value} inserted, tree: {tree}");
            }
            BstOp::Contains(value) => {
                if tree.is_empty() {
                    debug!("tree is empty, skipping contains");
                } else {
                    debug!("tree contains {value}: {}", tree.contains(value));
                }
            }
            BstOp::Remove(value) => {
                if tree.is_empty() {
                    debug!("tree is empty, skipping remove");
                } else if tree.root().is_some_and(|root| {
                    root.left.is_none() && root.right.is_none()
                }) {
                    debug!("tree has a single node, skipping remove");
                } else {
                    tree.remove(value);
                    debug!("value {value} removed, tree: {tree}");
                }
            }
        }
    }

    tree
}
