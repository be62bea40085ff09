//! Fuzzy search over filtered experience records

mod engine;
mod fuzzy;
mod types;

pub use engine::{search, SearchEngine};
pub use fuzzy::{FuzzyMatch, Matcher};
pub use types::{FieldMatch, SearchField, SearchResult};
