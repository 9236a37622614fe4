//! COLSEL Test Utilities
//!
//! Centralized test infrastructure for the COLSEL workspace:
//! - Proptest generators for paths, schemas and tables
//! - Test fixtures for common table shapes
//! - Custom assertions for selections

// Re-export core types for convenience
pub use colsel_core::{
    ColselError, ColselResult, ColumnAccessor, ColumnPath, ColumnSchema, ColumnsResolver,
    ResolveError, ResolvedColumn, SelectionConfig, SelectionScope, Table,
};
pub use colsel_dsl::{ColumnSelection, PivotReference, RangeOp, SelectOp};

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for generating COLSEL types.

    use super::*;
    use proptest::prelude::*;

    /// Generate a plausible column name.
    pub fn arb_column_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,7}"
    }

    /// Generate `0..max` column names, pairwise distinct.
    pub fn arb_distinct_names(max: usize) -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(arb_column_name(), 0..max).prop_map(|names| {
            names
                .into_iter()
                .enumerate()
                .map(|(i, name)| format!("{}_{}", name, i))
                .collect()
        })
    }

    /// Generate a ColumnPath of 1..=depth segments.
    pub fn arb_column_path(depth: usize) -> impl Strategy<Value = ColumnPath> {
        prop::collection::vec(arb_column_name(), 1..=depth.max(1)).prop_map(ColumnPath::new)
    }

    /// Generate a table of leaf columns only.
    pub fn arb_flat_table(max: usize) -> impl Strategy<Value = Table> {
        arb_distinct_names(max)
            .prop_map(|names| Table::new(names.into_iter().map(ColumnSchema::leaf).collect()))
    }

    /// Generate a ColumnSchema tree with sibling names kept distinct.
    pub fn arb_column_schema() -> impl Strategy<Value = ColumnSchema> {
        let leaf = arb_column_name().prop_map(ColumnSchema::leaf);
        leaf.prop_recursive(3, 32, 5, |inner| {
            (arb_column_name(), prop::collection::vec(inner, 0..5))
                .prop_map(|(name, children)| ColumnSchema::group(name, distinct_siblings(children)))
        })
    }

    /// Generate a nested table with sibling names kept distinct.
    pub fn arb_table() -> impl Strategy<Value = Table> {
        prop::collection::vec(arb_column_schema(), 0..6)
            .prop_map(|columns| Table::new(distinct_siblings(columns)))
    }

    /// Generate a table plus the path of one of its groups, if it has any.
    pub fn arb_table_with_group() -> impl Strategy<Value = (Table, Option<ColumnPath>)> {
        arb_table().prop_flat_map(|table| {
            let groups = group_paths(&table);
            let pick = if groups.is_empty() {
                Just(None).boxed()
            } else {
                prop::sample::select(groups).prop_map(Some).boxed()
            };
            (Just(table), pick)
        })
    }

    /// Generate a RangeOp variant.
    pub fn arb_range_op() -> impl Strategy<Value = RangeOp> {
        prop_oneof![
            Just(RangeOp::After),
            Just(RangeOp::From),
            Just(RangeOp::Before),
            Just(RangeOp::UpTo),
        ]
    }

    /// Generate a SelectOp variant.
    pub fn arb_select_op() -> impl Strategy<Value = SelectOp> {
        prop_oneof![
            Just(SelectOp::All),
            arb_range_op().prop_map(SelectOp::from),
        ]
    }

    /// Suffix every name with its index so siblings never collide.
    fn distinct_siblings(columns: Vec<ColumnSchema>) -> Vec<ColumnSchema> {
        columns
            .into_iter()
            .enumerate()
            .map(|(i, column)| match column {
                ColumnSchema::Leaf { name } => ColumnSchema::leaf(format!("{}_{}", name, i)),
                ColumnSchema::Group { name, children } => {
                    ColumnSchema::group(format!("{}_{}", name, i), children)
                }
            })
            .collect()
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Fixed tables used across test suites.

    use super::*;

    /// `[x, g { m, n }, y]`
    pub fn nested_table() -> Table {
        Table::new(vec![
            ColumnSchema::leaf("x"),
            ColumnSchema::group("g", vec![ColumnSchema::leaf("m"), ColumnSchema::leaf("n")]),
            ColumnSchema::leaf("y"),
        ])
    }

    /// A flat table with the given column names, in order.
    pub fn flat_table(names: &[&str]) -> Table {
        Table::new(names.iter().map(|n| ColumnSchema::leaf(*n)).collect())
    }

    /// Same shape as `colsel-dsl/tests/fixtures/people.yaml`.
    pub fn people_table() -> Table {
        Table::new(vec![
            ColumnSchema::leaf("id"),
            ColumnSchema::group(
                "name",
                vec![
                    ColumnSchema::leaf("first"),
                    ColumnSchema::leaf("middle"),
                    ColumnSchema::leaf("last"),
                ],
            ),
            ColumnSchema::leaf("age"),
            ColumnSchema::group(
                "address",
                vec![
                    ColumnSchema::leaf("street"),
                    ColumnSchema::leaf("city"),
                    ColumnSchema::group(
                        "geo",
                        vec![ColumnSchema::leaf("lat"), ColumnSchema::leaf("lon")],
                    ),
                    ColumnSchema::leaf("zip"),
                ],
            ),
            ColumnSchema::leaf("weight"),
        ])
    }
}

// ============================================================================
// HELPERS & ASSERTIONS
// ============================================================================

/// Absolute paths of every group in `table`, depth first.
pub fn group_paths(table: &Table) -> Vec<ColumnPath> {
    fn walk(columns: &[ColumnSchema], prefix: &ColumnPath, out: &mut Vec<ColumnPath>) {
        for column in columns {
            if column.is_group() {
                let path = prefix.child(column.name());
                walk(column.children(), &path, out);
                out.push(path);
            }
        }
    }

    let mut out = Vec::new();
    walk(table.columns(), &ColumnPath::root(), &mut out);
    out
}

/// Dotted paths of a selection, in order.
pub fn selected_paths(selection: &ColumnSelection<'_>) -> Vec<String> {
    selection.iter().map(|c| c.path().to_string()).collect()
}

/// Assert a selection holds exactly `expected` (dotted paths), in order.
pub fn assert_selected(selection: &ColumnSelection<'_>, expected: &[&str]) {
    let actual = selected_paths(selection);
    assert_eq!(
        actual, expected,
        "selection mismatch: got {:?}, expected {:?}",
        actual, expected
    );
}
