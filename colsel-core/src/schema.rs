//! Column schema types
//!
//! The selection core never looks at column values, only at names, nesting
//! and order, so a table is modelled purely by its column schema.

use crate::{ColumnPath, ResolveError};
use serde::{Deserialize, Serialize};

/// One column of a table or column group.
///
/// Groups are tagged explicitly so unwrapping is a pattern match rather than
/// a capability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnSchema {
    /// Value column
    Leaf { name: String },
    /// Nested set of columns embedded as one column
    Group {
        name: String,
        #[serde(default)]
        children: Vec<ColumnSchema>,
    },
}

impl ColumnSchema {
    pub fn leaf(name: impl Into<String>) -> Self {
        ColumnSchema::Leaf { name: name.into() }
    }

    pub fn group(name: impl Into<String>, children: Vec<ColumnSchema>) -> Self {
        ColumnSchema::Group {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ColumnSchema::Leaf { name } | ColumnSchema::Group { name, .. } => name,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, ColumnSchema::Group { .. })
    }

    /// Direct children; empty for a leaf.
    pub fn children(&self) -> &[ColumnSchema] {
        match self {
            ColumnSchema::Leaf { .. } => &[],
            ColumnSchema::Group { children, .. } => children,
        }
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&ColumnSchema> {
        self.children().iter().find(|c| c.name() == name)
    }
}

/// Ordered top-level column schema of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Table {
    #[serde(default)]
    pub columns: Vec<ColumnSchema>,
}

impl Table {
    pub fn new(columns: Vec<ColumnSchema>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    /// Walk `path` from the table root through nested groups.
    ///
    /// The root path addresses nothing; at each level the first column with
    /// a matching name wins.
    pub fn column_at(&self, path: &ColumnPath) -> Option<&ColumnSchema> {
        let (first, rest) = path.segments().split_first()?;
        let mut current = self.columns.iter().find(|c| c.name() == first)?;
        for segment in rest {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Resolve `path` to a column with its absolute path attached.
    pub fn resolve_path(&self, path: &ColumnPath) -> Result<ResolvedColumn<'_>, ResolveError> {
        self.column_at(path)
            .map(|column| ResolvedColumn::new(path.clone(), column))
            .ok_or_else(|| ResolveError::ColumnNotFound { path: path.clone() })
    }

    /// Top-level columns in table order.
    pub fn top_level(&self) -> Vec<ResolvedColumn<'_>> {
        self.columns
            .iter()
            .map(|column| ResolvedColumn::new(ColumnPath::single(column.name()), column))
            .collect()
    }
}

/// A column handle borrowed from a table, tagged with its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn<'a> {
    path: ColumnPath,
    column: &'a ColumnSchema,
}

impl<'a> ResolvedColumn<'a> {
    pub fn new(path: ColumnPath, column: &'a ColumnSchema) -> Self {
        Self { path, column }
    }

    pub fn path(&self) -> &ColumnPath {
        &self.path
    }

    pub fn column(&self) -> &'a ColumnSchema {
        self.column
    }

    pub fn name(&self) -> &'a str {
        self.column.name()
    }

    pub fn is_group(&self) -> bool {
        self.column.is_group()
    }

    /// Direct children in group order, each path extended by the child's name.
    pub fn children(&self) -> Vec<ResolvedColumn<'a>> {
        self.column
            .children()
            .iter()
            .map(|child| ResolvedColumn::new(self.path.child(child.name()), child))
            .collect()
    }

    /// Same column, different path.
    pub fn with_path(self, path: ColumnPath) -> Self {
        Self {
            path,
            column: self.column,
        }
    }

    pub fn into_path(self) -> ColumnPath {
        self.path
    }
}

// =============================================================================
// TESTS
// =============================================================================
