//! COLSEL DSL - Column Range Selection
//!
//! Selects contiguous ranges of columns (after / from / before / up to a pivot
//! column) from a table or from inside a column group.
//!
//! Architecture:
//! ```text
//! SelectionScope (root | group | columns)
//!     ↓
//! Column-group unwrapping (one level, optional relative paths)
//!     ↓
//! PivotReference → Pivot (path matcher or predicate)
//!     ↓
//! Range partitioner (single pass, first match wins)
//!     ↓
//! ColumnSelection (borrowed, original order)
//! ```
//!
//! Requests can also be written as YAML or TOML and executed via `config`.

pub mod config;
pub mod matcher;
pub mod range;
pub mod select;
pub mod unwrap;

// Re-export key types for convenience
pub use config::{
    parse_request_toml, parse_request_yaml, parse_selection_file, parse_table_yaml, ScopeConfig,
    SelectionFile, SelectionRequest,
};
pub use matcher::{PathMatcher, Pivot, PivotReference};
pub use range::{all_after, all_before, all_from, all_up_to, RangeOp};
pub use select::*;
pub use unwrap::{all_columns, single_group, unwrap_columns, ColumnSet};
