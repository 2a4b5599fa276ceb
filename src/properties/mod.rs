//! Java properties files: parsing, key ordering and output escaping.

mod escape;
mod store;

pub use escape::{escape, escape_key};
pub use store::{PropertiesError, PropertiesStore, PropertyEntry, sorted_keys};
