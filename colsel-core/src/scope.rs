//! Selection scopes and the column resolver seam

use crate::{ColumnPath, ResolveError, ResolvedColumn, Table};
use std::marker::PhantomData;

/// Produces the ordered, path-tagged columns visible at a scope.
///
/// This is the boundary to whatever owns the table data. Implementations
/// must return columns in canonical left-to-right order and must not mutate
/// the underlying table while a selection is running.
pub trait ColumnsResolver<'a> {
    fn resolve(&self) -> Result<Vec<ResolvedColumn<'a>>, ResolveError>;
}

impl<'a> ColumnsResolver<'a> for &'a Table {
    fn resolve(&self) -> Result<Vec<ResolvedColumn<'a>>, ResolveError> {
        let table: &'a Table = *self;
        Ok(table.top_level())
    }
}

/// Context a selection operation is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionScope<'a> {
    /// All top-level columns of the table
    Root(&'a Table),
    /// A single column group; resolving a leaf here is an error
    Group { table: &'a Table, path: ColumnPath },
    /// An arbitrary list of columns addressed from the table root
    Columns {
        table: &'a Table,
        paths: Vec<ColumnPath>,
    },
}

impl<'a> SelectionScope<'a> {
    pub fn root(table: &'a Table) -> Self {
        SelectionScope::Root(table)
    }

    pub fn group(table: &'a Table, path: impl Into<ColumnPath>) -> Self {
        SelectionScope::Group {
            table,
            path: path.into(),
        }
    }

    pub fn columns(table: &'a Table, paths: Vec<ColumnPath>) -> Self {
        SelectionScope::Columns { table, paths }
    }

    pub fn table(&self) -> &'a Table {
        match self {
            SelectionScope::Root(table)
            | SelectionScope::Group { table, .. }
            | SelectionScope::Columns { table, .. } => *table,
        }
    }
}

impl<'a> ColumnsResolver<'a> for SelectionScope<'a> {
    fn resolve(&self) -> Result<Vec<ResolvedColumn<'a>>, ResolveError> {
        match self {
            SelectionScope::Root(table) => Ok(table.top_level()),
            SelectionScope::Group { table, path } => {
                let column = table.resolve_path(path)?;
                if !column.is_group() {
                    return Err(ResolveError::NotAColumnGroup { path: path.clone() });
                }
                Ok(vec![column])
            }
            SelectionScope::Columns { table, paths } => paths
                .iter()
                .map(|path| table.resolve_path(path))
                .collect(),
        }
    }
}

/// Typed handle to a column.
///
/// `T` is the element type the caller expects; the selection core only
/// uses the path.
#[derive(Debug)]
pub struct ColumnAccessor<T> {
    path: ColumnPath,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ColumnAccessor<T> {
    pub fn new(path: impl Into<ColumnPath>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// Accessor for a child of this (group) column.
    pub fn child<U>(&self, name: impl Into<String>) -> ColumnAccessor<U> {
        ColumnAccessor::new(self.path.child(name))
    }

    pub fn path(&self) -> &ColumnPath {
        &self.path
    }
}

impl<T> Clone for ColumnAccessor<T> {
    fn clone(&self) -> Self {
        Self::new(self.path.clone())
    }
}

// =============================================================================
// TESTS
// =============================================================================
