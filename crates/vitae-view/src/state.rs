//! User-controlled view state

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use vitae_core::{Category, SkillSet};

/// Everything the user has picked on the experience page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub active_category: Category,
    pub active_skills: SkillSet,
    pub search_query: String,
    /// Cards showing every highlight
    pub expanded_ids: BTreeSet<String>,
    /// Card briefly emphasized after a search-result click
    pub highlighted_id: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a category or skill restriction is active.
    ///
    /// Lets callers tell "nothing matched" apart from "nothing filtered".
    pub fn is_filtering(&self) -> bool {
        !self.active_category.is_all() || !self.active_skills.is_empty()
    }
}
