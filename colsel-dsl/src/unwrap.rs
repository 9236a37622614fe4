//! Column-group unwrapping
//!
//! Every "all columns" entry point starts here: a scope that resolves to
//! exactly one column group is replaced by that group's direct children.
//! Unwrapping is exactly one level deep.

use colsel_core::{ColselResult, ColumnPath, ColumnsResolver, ResolvedColumn};

/// The flat, ordered working sequence a range operation runs over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet<'a> {
    columns: Vec<ResolvedColumn<'a>>,
    group_path: Option<ColumnPath>,
    relative_paths: bool,
}

impl<'a> ColumnSet<'a> {
    /// A working set that is not the inside of a group.
    pub fn flat(columns: Vec<ResolvedColumn<'a>>) -> Self {
        Self {
            columns,
            group_path: None,
            relative_paths: false,
        }
    }

    pub fn columns(&self) -> &[ResolvedColumn<'a>] {
        &self.columns
    }

    /// Absolute path of the group whose children these are, if the scope
    /// was unwrapped.
    pub fn group_path(&self) -> Option<&ColumnPath> {
        self.group_path.as_ref()
    }

    /// Whether column paths are relative to `group_path`.
    pub fn has_relative_paths(&self) -> bool {
        self.relative_paths
    }

    /// Absolute path of `column`, which must belong to this set.
    pub fn absolute_path(&self, column: &ResolvedColumn<'_>) -> ColumnPath {
        match (&self.group_path, self.relative_paths) {
            (Some(group), true) => group.join(column.path()),
            _ => column.path().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn into_columns(self) -> Vec<ResolvedColumn<'a>> {
        self.columns
    }
}

/// The single group a column list denotes, if it denotes exactly one.
pub fn single_group<'c, 'a>(columns: &'c [ResolvedColumn<'a>]) -> Option<&'c ResolvedColumn<'a>> {
    match columns {
        [only] if only.is_group() => Some(only),
        _ => None,
    }
}

/// Unwrap an already-resolved column list.
///
/// With `remove_paths`, children get paths relative to the group
/// (`g.m` becomes `m`); otherwise they keep their absolute paths.
pub fn unwrap_columns(columns: Vec<ResolvedColumn<'_>>, remove_paths: bool) -> ColumnSet<'_> {
    let Some(group) = single_group(&columns) else {
        return ColumnSet::flat(columns);
    };

    let group_path = group.path().clone();
    let children = group
        .children()
        .into_iter()
        .map(|child| {
            if remove_paths {
                let relative = ColumnPath::single(child.name());
                child.with_path(relative)
            } else {
                child
            }
        })
        .collect::<Vec<_>>();

    tracing::trace!(
        group = %group_path,
        children = children.len(),
        remove_paths,
        "unwrapped column group scope"
    );

    ColumnSet {
        columns: children,
        group_path: Some(group_path),
        relative_paths: remove_paths,
    }
}

/// Resolve `scope` and unwrap it if it is a single column group.
pub fn all_columns<'a, R>(scope: &R, remove_paths: bool) -> ColselResult<ColumnSet<'a>>
where
    R: ColumnsResolver<'a> + ?Sized,
{
    let columns = scope.resolve()?;
    Ok(unwrap_columns(columns, remove_paths))
}

// =============================================================================
// TESTS
// =============================================================================
