//! Per-step traversal cost.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Energy cost of entering a cell.
///
/// Impassability is an explicit variant rather than an infinite float, so
/// callers must match on it before doing arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalCost {
    /// Finite energy per step (>= 1 in a valid cost table)
    Passable(f32),
    /// Cell cannot be entered
    Impassable,
}

impl TraversalCost {
    /// Finite cost, or `None` for impassable cells.
    #[inline]
    pub fn value(self) -> Option<f32> {
        match self {
            TraversalCost::Passable(cost) => Some(cost),
            TraversalCost::Impassable => None,
        }
    }

    /// Can the cell be entered?
    #[inline]
    pub fn is_passable(self) -> bool {
        matches!(self, TraversalCost::Passable(_))
    }
}

impl fmt::Display for TraversalCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalCost::Passable(cost) => write!(f, "{}", cost),
            TraversalCost::Impassable => f.write_str("impassable"),
        }
    }
}
