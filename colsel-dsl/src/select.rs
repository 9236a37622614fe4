//! Selection entry point
//!
//! `select_range` is the one call every higher-level operation goes through:
//! unwrap the scope, resolve the pivot, partition once.

use crate::matcher::PivotReference;
use crate::range::RangeOp;
use crate::unwrap::all_columns;
use colsel_core::{
    ColselResult, ColumnPath, ColumnsResolver, ResolvedColumn, SelectionConfig, SelectionError,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectOp {
    /// Every column of the (unwrapped) scope; takes no pivot
    All,
    After,
    From,
    Before,
    UpTo,
}

impl SelectOp {
    /// The range operation behind this op, `None` for `All`.
    pub fn range(&self) -> Option<RangeOp> {
        match self {
            SelectOp::All => None,
            SelectOp::After => Some(RangeOp::After),
            SelectOp::From => Some(RangeOp::From),
            SelectOp::Before => Some(RangeOp::Before),
            SelectOp::UpTo => Some(RangeOp::UpTo),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self.range() {
            Some(op) => op.as_str(),
            None => "all",
        }
    }
}

impl From<RangeOp> for SelectOp {
    fn from(op: RangeOp) -> Self {
        match op {
            RangeOp::After => SelectOp::After,
            RangeOp::From => SelectOp::From,
            RangeOp::Before => SelectOp::Before,
            RangeOp::UpTo => SelectOp::UpTo,
        }
    }
}

impl fmt::Display for SelectOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered columns picked by a selection.
///
/// Borrows from the table the scope was resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSelection<'a> {
    columns: Vec<ResolvedColumn<'a>>,
}

impl<'a> ColumnSelection<'a> {
    pub fn new(columns: Vec<ResolvedColumn<'a>>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[ResolvedColumn<'a>] {
        &self.columns
    }

    pub fn paths(&self) -> Vec<ColumnPath> {
        self.columns.iter().map(|c| c.path().clone()).collect()
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, path: &ColumnPath) -> bool {
        self.columns.iter().any(|c| c.path() == path)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedColumn<'a>> {
        self.columns.iter()
    }

    pub fn into_vec(self) -> Vec<ResolvedColumn<'a>> {
        self.columns
    }
}

impl<'a> IntoIterator for ColumnSelection<'a> {
    type Item = ResolvedColumn<'a>;
    type IntoIter = std::vec::IntoIter<ResolvedColumn<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s ColumnSelection<'a> {
    type Item = &'s ResolvedColumn<'a>;
    type IntoIter = std::slice::Iter<'s, ResolvedColumn<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

/// Select a contiguous range of columns from `scope`.
///
/// `All` ignores `pivot`. Every other operation requires one; an absent pivot
/// is `SelectionError::MissingPivot`. A pivot that matches no column is not
/// an error: `After`/`From` select nothing, `Before`/`UpTo` select everything.
pub fn select_range<'a, R>(
    scope: &R,
    operation: SelectOp,
    pivot: Option<PivotReference<'_>>,
    config: &SelectionConfig,
) -> ColselResult<ColumnSelection<'a>>
where
    R: ColumnsResolver<'a> + ?Sized,
{
    let set = all_columns(scope, config.remove_paths)?;
    let scope_len = set.len();

    let Some(op) = operation.range() else {
        if pivot.is_some() {
            tracing::trace!("pivot ignored for 'all' selection");
        }
        tracing::debug!(operation = %operation, scope_len, "selected all columns");
        return Ok(ColumnSelection::new(set.into_columns()));
    };

    let pivot = pivot.ok_or_else(|| SelectionError::MissingPivot {
        operation: op.to_string(),
    })?;
    let pivot = pivot.resolve(&set, config)?;

    let mut found = false;
    let columns = op.partition(set.into_columns(), |column| {
        let hit = pivot.matches(column);
        found |= hit;
        hit
    });

    if !found {
        tracing::trace!(operation = %op, ?pivot, "pivot matched no column");
    }
    tracing::debug!(
        operation = %op,
        scope_len,
        selected = columns.len(),
        "selected column range"
    );

    Ok(ColumnSelection::new(columns))
}

/// All columns of `scope`, unwrapping a single column group.
pub fn all_cols<'a, R>(scope: &R) -> ColselResult<ColumnSelection<'a>>
where
    R: ColumnsResolver<'a> + ?Sized,
{
    select_range(scope, SelectOp::All, None, &SelectionConfig::default())
}

/// Columns after `pivot`, exclusive.
pub fn all_cols_after<'a, 'p, R>(
    scope: &R,
    pivot: impl Into<PivotReference<'p>>,
) -> ColselResult<ColumnSelection<'a>>
where
    R: ColumnsResolver<'a> + ?Sized,
{
    select_range(scope, SelectOp::After, Some(pivot.into()), &SelectionConfig::default())
}

/// Columns from `pivot` onward, inclusive.
pub fn all_cols_from<'a, 'p, R>(
    scope: &R,
    pivot: impl Into<PivotReference<'p>>,
) -> ColselResult<ColumnSelection<'a>>
where
    R: ColumnsResolver<'a> + ?Sized,
{
    select_range(scope, SelectOp::From, Some(pivot.into()), &SelectionConfig::default())
}

/// Columns before `pivot`, exclusive.
pub fn all_cols_before<'a, 'p, R>(
    scope: &R,
    pivot: impl Into<PivotReference<'p>>,
) -> ColselResult<ColumnSelection<'a>>
where
    R: ColumnsResolver<'a> + ?Sized,
{
    select_range(scope, SelectOp::Before, Some(pivot.into()), &SelectionConfig::default())
}

/// Columns up to `pivot`, inclusive.
pub fn all_cols_up_to<'a, 'p, R>(
    scope: &R,
    pivot: impl Into<PivotReference<'p>>,
) -> ColselResult<ColumnSelection<'a>>
where
    R: ColumnsResolver<'a> + ?Sized,
{
    select_range(scope, SelectOp::UpTo, Some(pivot.into()), &SelectionConfig::default())
}

// =============================================================================
// TESTS
// =============================================================================
