//! COLSEL Core - Column Types
//!
//! Pure data structures for column selection. All other crates depend on this.
//! Tables are modelled by their column schema only: names, nesting and order.
//! No selection logic lives here; see `colsel-dsl`.

mod config;
mod error;
mod path;
mod schema;
mod scope;

pub use config::*;
pub use error::*;
pub use path::*;
pub use schema::*;
pub use scope::*;
