//! Serializable selection requests and table schemas (YAML / TOML)

mod parser;

pub use parser::*;
