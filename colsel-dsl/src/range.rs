//! Range partitioning around a pivot column
//!
//! Each operation is a single forward pass carrying one flag. The flag flips
//! at most once, on the first column the predicate accepts, so later matches
//! never affect the result.
//!
//! | Operation | Starts | Pivot included | Pivot absent |
//! |-----------|--------|----------------|--------------|
//! | After     | off    | no             | empty        |
//! | From      | off    | yes            | empty        |
//! | Before    | on     | no             | everything   |
//! | UpTo      | on     | yes            | everything   |
//!
//! The functions are generic over the element type so the same code runs
//! over resolved columns, bare paths, or anything else with an order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four pivot-relative range operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeOp {
    /// Everything after the pivot, pivot excluded
    After,
    /// The pivot and everything after it
    From,
    /// Everything before the pivot, pivot excluded
    Before,
    /// Everything before the pivot, pivot included
    UpTo,
}

impl RangeOp {
    pub const ALL: [RangeOp; 4] = [RangeOp::After, RangeOp::From, RangeOp::Before, RangeOp::UpTo];

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeOp::After => "after",
            RangeOp::From => "from",
            RangeOp::Before => "before",
            RangeOp::UpTo => "up_to",
        }
    }

    /// Whether the pivot column itself is part of the result.
    pub fn includes_pivot(&self) -> bool {
        matches!(self, RangeOp::From | RangeOp::UpTo)
    }

    /// Apply this operation to `columns`.
    pub fn partition<T, I, F>(&self, columns: I, matches: F) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> bool,
    {
        match self {
            RangeOp::After => all_after(columns, matches),
            RangeOp::From => all_from(columns, matches),
            RangeOp::Before => all_before(columns, matches),
            RangeOp::UpTo => all_up_to(columns, matches),
        }
    }
}

impl fmt::Display for RangeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Columns after the first match, exclusive. Empty if nothing matches.
pub fn all_after<T, I, F>(columns: I, mut matches: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    let mut taking = false;
    columns
        .into_iter()
        .filter(|column| {
            if taking {
                true
            } else {
                taking = matches(column);
                false
            }
        })
        .collect()
}

/// Columns from the first match onward, inclusive. Empty if nothing matches.
pub fn all_from<T, I, F>(columns: I, mut matches: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    let mut taking = false;
    columns
        .into_iter()
        .filter(|column| {
            if !taking {
                taking = matches(column);
            }
            taking
        })
        .collect()
}

/// Columns before the first match, exclusive. Everything if nothing matches.
pub fn all_before<T, I, F>(columns: I, mut matches: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    let mut taking = true;
    columns
        .into_iter()
        .filter(|column| {
            if taking {
                taking = !matches(column);
            }
            taking
        })
        .collect()
}

/// Columns up to the first match, inclusive. Everything if nothing matches.
pub fn all_up_to<T, I, F>(columns: I, mut matches: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    let mut taking = true;
    columns
        .into_iter()
        .filter(|column| {
            if !taking {
                return false;
            }
            if matches(column) {
                taking = false;
            }
            true
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
