//! Error types for COLSEL operations

use crate::ColumnPath;
use thiserror::Error;

/// Column path parsing errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("Column path is empty")]
    Empty,

    #[error("Empty segment at position {position} in column path '{input}'")]
    EmptySegment { input: String, position: usize },
}

/// Scope resolution errors, raised before any range logic runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Column not found: {path}")]
    ColumnNotFound { path: ColumnPath },

    #[error("Not a column group: {path}")]
    NotAColumnGroup { path: ColumnPath },
}

/// Selection invocation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Operation '{operation}' requires a pivot column")]
    MissingPivot { operation: String },
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    YamlParse(String),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Master error type for all COLSEL errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColselError {
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for COLSEL operations.
pub type ColselResult<T> = Result<T, ColselError>;

// =============================================================================
// TESTS
// =============================================================================
