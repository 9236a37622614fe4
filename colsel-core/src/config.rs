//! Configuration types

use crate::*;
use serde::{Deserialize, Serialize};

/// Selection behavior shared by every entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionConfig {
    /// Rewrite group children to paths relative to the group when a scope
    /// is unwrapped.
    #[serde(default)]
    pub remove_paths: bool,
    /// Separator used when parsing dotted pivot and scope paths.
    #[serde(default = "default_path_separator")]
    pub path_separator: char,
}

fn default_path_separator() -> char {
    DEFAULT_PATH_SEPARATOR
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            remove_paths: false,
            path_separator: DEFAULT_PATH_SEPARATOR,
        }
    }
}

impl SelectionConfig {
    /// Same configuration with relative child paths enabled.
    pub fn with_relative_paths(mut self) -> Self {
        self.remove_paths = true;
        self
    }

    /// Validate the configuration.
    /// Returns Ok(()) if valid, Err(ColselError::Config) if invalid.
    ///
    /// Validates:
    /// - path_separator is not whitespace
    /// - path_separator is not a name character (alphanumeric or `_`)
    pub fn validate(&self) -> ColselResult<()> {
        if self.path_separator.is_whitespace() {
            return Err(ColselError::Config(ConfigError::InvalidValue {
                field: "path_separator".to_string(),
                value: format!("{:?}", self.path_separator),
                reason: "path_separator must not be whitespace".to_string(),
            }));
        }

        if self.path_separator.is_alphanumeric() || self.path_separator == '_' {
            return Err(ColselError::Config(ConfigError::InvalidValue {
                field: "path_separator".to_string(),
                value: format!("{:?}", self.path_separator),
                reason: "path_separator must not be a name character".to_string(),
            }));
        }

        Ok(())
    }

    /// Parse a dotted path with the configured separator.
    pub fn parse_path(&self, input: &str) -> ColselResult<ColumnPath> {
        Ok(ColumnPath::parse_with(input, self.path_separator)?)
    }
}

// =============================================================================
// TESTS
// =============================================================================
