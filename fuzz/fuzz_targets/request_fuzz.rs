//! Fuzz test for YAML selection requests
//!
//! This fuzz target parses arbitrary YAML as a selection request and, when it
//! parses, executes it against a fixed table to find:
//! - Panics or crashes in parsing, scope building or range selection
//! - Selections that are not a subsequence of their scope
//!
//! Run with: cargo +nightly fuzz run request_fuzz -- -max_total_time=60

#![no_main]

use colsel_core::{ColumnSchema, SelectionConfig, Table};
use colsel_dsl::{all_columns, parse_request_yaml};
use libfuzzer_sys::fuzz_target;

fn table() -> Table {
    Table::new(vec![
        ColumnSchema::leaf("x"),
        ColumnSchema::group(
            "g",
            vec![
                ColumnSchema::leaf("m"),
                ColumnSchema::group("h", vec![ColumnSchema::leaf("k")]),
                ColumnSchema::leaf("n"),
            ],
        ),
        ColumnSchema::leaf("y"),
    ])
}

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(request) = parse_request_yaml(input) else {
        return;
    };

    let table = table();
    let config = SelectionConfig::default();

    // Errors are fine (unknown scope columns, leaf group scopes); panics are not
    let Ok(selection) = request.execute(&table, &config) else {
        return;
    };

    // Every selection is an order-preserving subsequence of its scope
    let Ok(scope) = request.scope(&table, &config) else {
        panic!("scope failed after execute succeeded");
    };
    let remove_paths = request.remove_paths.unwrap_or(config.remove_paths);
    let Ok(set) = all_columns(&scope, remove_paths) else {
        panic!("unwrapping failed after execute succeeded");
    };

    let mut scope_iter = set.columns().iter();
    for column in selection.iter() {
        assert!(
            scope_iter.any(|c| c == column),
            "Selected column {} out of scope order",
            column.path()
        );
    }
});
