//! Selection request parser
//! Uses serde_yaml / toml for ALL parsing (no custom mini-syntax)

use crate::matcher::PivotReference;
use crate::select::{select_range, ColumnSelection, SelectOp};
use colsel_core::{
    ColselError, ColselResult, ConfigError, SelectionConfig, SelectionScope, Table,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// CONFIG STRUCTS (The Schema)
// ============================================================================

/// Scope a request is evaluated against.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScopeConfig {
    /// Top-level columns of the table
    #[default]
    Root,
    /// Dotted path of a column group
    Group(String),
    /// Dotted paths of individual columns
    Columns(Vec<String>),
}

/// One column selection, as written in YAML or TOML.
///
/// ```yaml
/// scope:
///   group: address
/// operation: up_to
/// pivot: city
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SelectionRequest {
    /// Written as a one-key map (`{ group: g }`) or a bare `root`
    #[serde(default, with = "serde_yaml::with::singleton_map")]
    pub scope: ScopeConfig,
    /// Accepts both "operation" and "op"
    #[serde(alias = "op")]
    pub operation: SelectOp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot: Option<String>,
    /// Overrides `SelectionConfig::remove_paths` for this request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_paths: Option<bool>,
}

/// A batch of requests, as written in a TOML file.
///
/// ```toml
/// [[selection]]
/// operation = "after"
/// pivot = "x"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SelectionFile {
    #[serde(default)]
    pub config: Option<SelectionConfig>,
    #[serde(default, rename = "selection")]
    pub selections: Vec<SelectionRequest>,
}

// ============================================================================
// PARSER FUNCTIONS
// ============================================================================

pub fn parse_request_yaml(content: &str) -> ColselResult<SelectionRequest> {
    let request: SelectionRequest =
        serde_yaml::from_str(content).map_err(|e| ConfigError::YamlParse(e.to_string()))?;
    validate_request(&request)?;
    Ok(request)
}

pub fn parse_request_toml(content: &str) -> ColselResult<SelectionRequest> {
    let request: SelectionRequest =
        toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;
    validate_request(&request)?;
    Ok(request)
}

pub fn parse_selection_file(content: &str) -> ColselResult<SelectionFile> {
    let file: SelectionFile =
        toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;
    if let Some(config) = &file.config {
        config.validate()?;
    }
    for request in &file.selections {
        validate_request(request)?;
    }
    Ok(file)
}

/// Parse a table schema from YAML.
///
/// ```yaml
/// columns:
///   - { kind: leaf, name: id }
///   - kind: group
///     name: address
///     children:
///       - { kind: leaf, name: city }
/// ```
pub fn parse_table_yaml(content: &str) -> ColselResult<Table> {
    serde_yaml::from_str(content)
        .map_err(|e| ColselError::Config(ConfigError::YamlParse(e.to_string())))
}

/// Structural checks serde cannot express.
fn validate_request(request: &SelectionRequest) -> Result<(), ConfigError> {
    match (&request.operation, &request.pivot) {
        (SelectOp::All, Some(pivot)) => Err(ConfigError::InvalidValue {
            field: "pivot".to_string(),
            value: pivot.clone(),
            reason: "operation 'all' takes no pivot".to_string(),
        }),
        (op, None) if op.range().is_some() => Err(ConfigError::InvalidValue {
            field: "pivot".to_string(),
            value: String::new(),
            reason: format!("operation '{}' requires a pivot", op),
        }),
        _ => Ok(()),
    }
}

// ============================================================================
// EXECUTION
// ============================================================================

impl SelectionRequest {
    /// Build the scope this request names, parsing paths with `config`.
    pub fn scope<'a>(
        &self,
        table: &'a Table,
        config: &SelectionConfig,
    ) -> ColselResult<SelectionScope<'a>> {
        let scope = match &self.scope {
            ScopeConfig::Root => SelectionScope::root(table),
            ScopeConfig::Group(path) => SelectionScope::group(table, config.parse_path(path)?),
            ScopeConfig::Columns(paths) => {
                let paths = paths
                    .iter()
                    .map(|p| config.parse_path(p))
                    .collect::<ColselResult<Vec<_>>>()?;
                SelectionScope::columns(table, paths)
            }
        };
        Ok(scope)
    }

    /// Run this request against `table`.
    pub fn execute<'a>(
        &self,
        table: &'a Table,
        config: &SelectionConfig,
    ) -> ColselResult<ColumnSelection<'a>> {
        config.validate()?;

        let mut config = config.clone();
        if let Some(remove_paths) = self.remove_paths {
            config.remove_paths = remove_paths;
        }

        let scope = self.scope(table, &config)?;
        let pivot = self.pivot.as_deref().map(PivotReference::dotted);
        select_range(&scope, self.operation, pivot, &config)
    }
}

// =============================================================================
// TESTS
// =============================================================================
