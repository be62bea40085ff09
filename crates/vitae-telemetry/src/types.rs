//! Analytics event type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SEARCH_SUBMITTED: &str = "search_submitted";
pub const SEARCH_NO_RESULTS: &str = "search_no_results";
pub const SEARCH_RESULT_SELECTED: &str = "search_result_selected";
pub const CATEGORY_CHANGED: &str = "category_changed";
pub const SKILLS_CHANGED: &str = "skills_changed";

/// A named event with a free-form payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timestamp: Utc::now(),
            properties: Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn search_submitted(query: &str, results: usize, filtered: usize) -> Self {
        Self::new(SEARCH_SUBMITTED)
            .with("query", query)
            .with("results_count", results)
            .with("filtered_results_count", filtered)
    }

    pub fn search_no_results(query: &str, filtered: usize) -> Self {
        Self::new(SEARCH_NO_RESULTS)
            .with("query", query)
            .with("filtered_results_count", filtered)
    }

    pub fn search_result_selected(id: &str, query: &str) -> Self {
        Self::new(SEARCH_RESULT_SELECTED)
            .with("id", id)
            .with("query", query)
    }

    pub fn category_changed(category: &str) -> Self {
        Self::new(CATEGORY_CHANGED).with("category", category)
    }

    pub fn skills_changed<'a>(skills: impl IntoIterator<Item = &'a String>) -> Self {
        let skills: Vec<Value> = skills.into_iter().map(|s| Value::from(s.as_str())).collect();
        Self::new(SKILLS_CHANGED).with("skills", skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_submitted_payload() {
        let event = AnalyticsEvent::search_submitted("react", 2, 5);
        assert_eq!(event.name, SEARCH_SUBMITTED);
        assert_eq!(event.get("query"), Some(&Value::from("react")));
        assert_eq!(event.get("results_count"), Some(&Value::from(2)));
        assert_eq!(event.get("filtered_results_count"), Some(&Value::from(5)));
    }

    #[test]
    fn test_skills_changed_payload() {
        let skills = vec!["React".to_string(), "SQL".to_string()];
        let event = AnalyticsEvent::skills_changed(&skills);
        assert_eq!(event.get("skills"), Some(&serde_json::json!(["React", "SQL"])));
    }

    #[test]
    fn test_event_backwards_compatible() {
        let json = r#"{"name":"search_submitted","timestamp":"2025-01-01T00:00:00Z"}"#;
        let parsed: AnalyticsEvent = serde_json::from_str(json).unwrap();
        assert!(parsed.properties.is_empty());
    }
}
