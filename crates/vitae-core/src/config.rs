//! Configuration for filtering, search, and view behavior

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-field weights used when ranking search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub title: f64,
    pub company: f64,
    pub skills: f64,
    pub description: f64,
    pub highlights: f64,
}

impl FieldWeights {
    pub fn new() -> Self {
        Self {
            title: 0.3,
            company: 0.3,
            skills: 0.2,
            description: 0.1,
            highlights: 0.1,
        }
    }
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self::new()
    }
}

/// Fuzzy search tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Max normalized edit cost for a fragment to count (0 = exact only)
    pub threshold: f64,

    /// Trimmed queries shorter than this perform no search
    pub min_query_len: usize,

    /// Min exactly matching chars inside a fuzzy match
    pub min_match_char_len: usize,

    /// Preview length before the ellipsis is appended
    pub preview_len: usize,

    /// Exponent on the field-length norm (0 disables length normalization)
    pub field_norm_weight: f64,

    pub weights: FieldWeights,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            threshold: 0.3,
            min_query_len: 2,
            min_match_char_len: 2,
            preview_len: 80,
            field_norm_weight: 1.0,
            weights: FieldWeights::new(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// View configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Known category tags offered by the category filter
    pub categories: Vec<String>,

    /// Highlights shown before a card needs expanding
    pub collapsed_highlight_count: usize,

    /// How long a selected search result stays highlighted
    pub highlight_duration_ms: u64,

    pub search: SearchConfig,
}

impl Config {
    pub fn new() -> Self {
        Self {
            categories: vec![
                "product".to_string(),
                "strategy".to_string(),
                "tech".to_string(),
            ],
            collapsed_highlight_count: 3,
            highlight_duration_ms: 2000,
            search: SearchConfig::new(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn highlight_duration(&self) -> Duration {
        Duration::from_millis(self.highlight_duration_ms)
    }

    pub fn is_known_category(&self, tag: &str) -> bool {
        self.categories.iter().any(|c| c.eq_ignore_ascii_case(tag))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
