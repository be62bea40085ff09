//! Search result types

use serde::Serialize;
use vitae_core::FieldWeights;

/// Record fields searched, in match-reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Company,
    Skills,
    Description,
    Highlights,
}

impl SearchField {
    pub const ALL: [SearchField; 5] = [
        SearchField::Title,
        SearchField::Company,
        SearchField::Skills,
        SearchField::Description,
        SearchField::Highlights,
    ];

    pub fn weight(self, weights: &FieldWeights) -> f64 {
        match self {
            SearchField::Title => weights.title,
            SearchField::Company => weights.company,
            SearchField::Skills => weights.skills,
            SearchField::Description => weights.description,
            SearchField::Highlights => weights.highlights,
        }
    }
}

/// One matched field value (or list element)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMatch {
    pub field: SearchField,
    pub value: String,
    pub score: f64,
    /// Char offsets of the matched region, for highlighting
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub company: String,
    pub match_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_text: Option<String>,
    /// Lower is better
    pub score: f64,
    pub matches: Vec<FieldMatch>,
}
