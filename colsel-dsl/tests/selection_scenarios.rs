//! Integration tests for column range selection
//!
//! Tests verify:
//! - Literal scenarios over flat tables (middle, first, absent pivot, empty)
//! - Group scopes with relative and absolute pivots
//! - Every pivot reference form (path, name, dotted, accessor, selector, filter)
//! - Resolution errors surface before range logic runs
//! - YAML / TOML request fixtures end to end

use colsel_dsl::{
    all_cols, all_cols_after, all_cols_before, all_cols_from, all_cols_up_to, parse_request_yaml,
    parse_selection_file, parse_table_yaml, select_range, SelectOp,
};
use colsel_test_utils::fixtures::*;
use colsel_test_utils::*;

const PEOPLE_YAML: &str = include_str!("fixtures/people.yaml");
const SELECTIONS_TOML: &str = include_str!("fixtures/selections.toml");

fn run(scope: &SelectionScope<'_>, op: SelectOp, pivot: &str) -> Vec<String> {
    let selection = select_range(
        scope,
        op,
        Some(PivotReference::dotted(pivot)),
        &SelectionConfig::default(),
    )
    .expect("selection should succeed");
    selected_paths(&selection)
}

// ============================================================================
// FLAT TABLE SCENARIOS
// ============================================================================

#[test]
fn test_pivot_in_middle() {
    let table = flat_table(&["a", "b", "c", "d"]);
    let scope = SelectionScope::root(&table);

    assert_eq!(run(&scope, SelectOp::After, "c"), vec!["d"]);
    assert_eq!(run(&scope, SelectOp::From, "c"), vec!["c", "d"]);
    assert_eq!(run(&scope, SelectOp::Before, "c"), vec!["a", "b"]);
    assert_eq!(run(&scope, SelectOp::UpTo, "c"), vec!["a", "b", "c"]);
}

#[test]
fn test_absent_pivot_is_not_an_error() {
    let table = flat_table(&["a", "b"]);
    let scope = SelectionScope::root(&table);

    assert!(run(&scope, SelectOp::After, "z").is_empty());
    assert!(run(&scope, SelectOp::From, "z").is_empty());
    assert_eq!(run(&scope, SelectOp::Before, "z"), vec!["a", "b"]);
    assert_eq!(run(&scope, SelectOp::UpTo, "z"), vec!["a", "b"]);
}

#[test]
fn test_empty_table() {
    let table = flat_table(&[]);
    let scope = SelectionScope::root(&table);

    for op in [SelectOp::All, SelectOp::After, SelectOp::From, SelectOp::Before, SelectOp::UpTo] {
        let selection = select_range(
            &scope,
            op,
            Some(PivotReference::name("anything")),
            &SelectionConfig::default(),
        )
        .unwrap();
        assert!(selection.is_empty(), "{} on an empty table", op);
    }
}

#[test]
fn test_pivot_is_first_column() {
    let table = flat_table(&["a", "b", "c"]);
    let scope = SelectionScope::root(&table);

    assert_eq!(run(&scope, SelectOp::After, "a"), vec!["b", "c"]);
    assert_eq!(run(&scope, SelectOp::From, "a"), vec!["a", "b", "c"]);
    assert!(run(&scope, SelectOp::Before, "a").is_empty());
    assert_eq!(run(&scope, SelectOp::UpTo, "a"), vec!["a"]);
}

// ============================================================================
// GROUP SCOPES
// ============================================================================

#[test]
fn test_group_scope_relative_and_absolute_pivot() {
    let table = nested_table();
    let scope = SelectionScope::group(&table, ["g"]);

    assert_selected(&all_cols(&scope).unwrap(), &["g.m", "g.n"]);
    assert_selected(&all_cols_up_to(&scope, "m").unwrap(), &["g.m"]);
    assert_selected(
        &all_cols_up_to(&scope, ColumnPath::from(["g", "m"])).unwrap(),
        &["g.m"],
    );
}

#[test]
fn test_group_scope_with_relative_paths() {
    let table = nested_table();
    let scope = SelectionScope::group(&table, ["g"]);
    let config = SelectionConfig::default().with_relative_paths();

    let selection = select_range(
        &scope,
        SelectOp::From,
        Some(PivotReference::name("n")),
        &config,
    )
    .unwrap();
    assert_selected(&selection, &["n"]);
}

#[test]
fn test_relative_paths_accept_relative_and_absolute_pivots() {
    let table = nested_table();
    let scope = SelectionScope::group(&table, ["g"]);
    let config = SelectionConfig::default().with_relative_paths();

    let by_name = select_range(&scope, SelectOp::UpTo, Some(PivotReference::name("m")), &config)
        .unwrap();
    let by_path = select_range(
        &scope,
        SelectOp::UpTo,
        Some(PivotReference::path(ColumnPath::from(["g", "m"]))),
        &config,
    )
    .unwrap();

    assert_selected(&by_name, &["m"]);
    assert_selected(&by_path, &["m"]);

    let after = select_range(
        &scope,
        SelectOp::After,
        Some(PivotReference::dotted("g.m")),
        &config,
    )
    .unwrap();
    assert_selected(&after, &["n"]);
}

#[test]
fn test_nested_group_scope() {
    let table = people_table();
    let scope = SelectionScope::group(&table, ["address", "geo"]);

    assert_selected(&all_cols_after(&scope, "lat").unwrap(), &["address.geo.lon"]);
    assert_selected(
        &all_cols_before(&scope, ColumnPath::from(["address", "geo", "lon"])).unwrap(),
        &["address.geo.lat"],
    );
}

#[test]
fn test_group_children_are_not_flattened() {
    let table = people_table();
    let scope = SelectionScope::group(&table, ["address"]);

    let selection = all_cols_from(&scope, "city").unwrap();
    assert_selected(&selection, &["address.city", "address.geo", "address.zip"]);
    assert!(selection.columns()[1].is_group());
}

#[test]
fn test_root_scope_does_not_resolve_relative_names_inside_groups() {
    let table = nested_table();
    let scope = SelectionScope::root(&table);

    // "m" only exists as g.m, which is not visible at the root.
    assert_selected(&all_cols_up_to(&scope, "m").unwrap(), &["x", "g", "y"]);
    assert!(all_cols_after(&scope, "m").unwrap().is_empty());
}

#[test]
fn test_single_group_column_scope_is_unwrapped() {
    let table = people_table();
    let scope = SelectionScope::columns(&table, vec![ColumnPath::single("name")]);
    assert_selected(
        &all_cols_after(&scope, "first").unwrap(),
        &["name.middle", "name.last"],
    );
}

#[test]
fn test_multi_column_scope_is_ranged_as_given() {
    let table = people_table();
    let scope = SelectionScope::columns(
        &table,
        vec![
            ColumnPath::single("weight"),
            ColumnPath::single("id"),
            ColumnPath::from(["name", "last"]),
        ],
    );
    assert_selected(&all_cols_before(&scope, "id").unwrap(), &["weight"]);
    assert_selected(
        &all_cols_from(&scope, "id").unwrap(),
        &["id", "name.last"],
    );
}

// ============================================================================
// PIVOT REFERENCE FORMS
// ============================================================================

#[test]
fn test_accessor_pivot() {
    let table = people_table();
    let scope = SelectionScope::root(&table);
    let age: ColumnAccessor<u32> = ColumnAccessor::new(["age"]);

    assert_selected(&all_cols_up_to(&scope, &age).unwrap(), &["id", "name", "age"]);
}

#[test]
fn test_selector_pivot() {
    let table = people_table();
    let scope = SelectionScope::group(&table, ["name"]);

    let middle = PivotReference::selector(|cols| {
        cols.iter()
            .find(|c| c.name().starts_with("mid"))
            .map(|c| c.path().clone())
    });
    let selection =
        select_range(&scope, SelectOp::After, Some(middle), &SelectionConfig::default()).unwrap();
    assert_selected(&selection, &["name.last"]);
}

#[test]
fn test_filter_pivot_uses_first_match() {
    let table = people_table();
    let scope = SelectionScope::root(&table);

    let first_group = PivotReference::filter(|c| c.is_group());
    let selection = select_range(
        &scope,
        SelectOp::Before,
        Some(first_group),
        &SelectionConfig::default(),
    )
    .unwrap();
    assert_selected(&selection, &["id"]);
}

#[test]
fn test_filter_pivot_borrowing_caller_state() {
    let table = people_table();
    let scope = SelectionScope::root(&table);
    let wanted = String::from("age");

    let selection = select_range(
        &scope,
        SelectOp::From,
        Some(PivotReference::filter(|c| c.name() == wanted)),
        &SelectionConfig::default(),
    )
    .unwrap();
    assert_selected(&selection, &["age", "address", "weight"]);
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_group_scope_on_leaf_is_rejected() {
    let table = people_table();
    let err = all_cols_after(&SelectionScope::group(&table, ["age"]), "x").unwrap_err();
    assert_eq!(
        err,
        ColselError::Resolve(ResolveError::NotAColumnGroup {
            path: ColumnPath::single("age")
        })
    );
}

#[test]
fn test_missing_scope_column_is_rejected() {
    let table = people_table();
    let err = all_cols(&SelectionScope::group(&table, ["address", "country"])).unwrap_err();
    assert!(matches!(
        err,
        ColselError::Resolve(ResolveError::ColumnNotFound { .. })
    ));
}

// ============================================================================
// REQUEST FIXTURES
// ============================================================================

#[test]
fn test_people_fixture_matches_builder() {
    assert_eq!(parse_table_yaml(PEOPLE_YAML).unwrap(), people_table());
}

#[test]
fn test_selections_fixture() {
    let table = parse_table_yaml(PEOPLE_YAML).unwrap();
    let file = parse_selection_file(SELECTIONS_TOML).unwrap();
    let config = file.config.clone().unwrap_or_default();

    let results: Vec<Vec<String>> = file
        .selections
        .iter()
        .map(|request| selected_paths(&request.execute(&table, &config).unwrap()))
        .collect();

    assert_eq!(results[0], vec!["address", "weight"]);
    assert_eq!(results[1], vec!["address.street", "address.city"]);
    assert_eq!(results[2], vec!["address.geo", "address.zip"]);
    assert_eq!(results[3], vec!["lat", "lon"]);
    assert_eq!(results[4], vec!["lat"]);
}

#[test]
fn test_yaml_request_end_to_end() {
    let table = people_table();
    let request = parse_request_yaml(
        r#"
scope:
  columns: [id, name, age]
op: before
pivot: age
"#,
    )
    .unwrap();
    let selection = request.execute(&table, &SelectionConfig::default()).unwrap();
    assert_selected(&selection, &["id", "name"]);
}
