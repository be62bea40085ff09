//! Experience data model, filtering, and dataset loading for the CV view

mod config;
mod filter;
mod loader;
mod types;

pub use config::{Config, ConfigError, FieldWeights, SearchConfig};
pub use filter::{
    category_counts, displayable_highlight_count, filter_experience, filter_highlights,
    filter_indices, skill_counts,
};
pub use loader::{load_experience, parse_experience, Dataset, LoadError};
pub use types::{toggle_member, Category, ExperienceRecord, Highlight, SkillSet};
