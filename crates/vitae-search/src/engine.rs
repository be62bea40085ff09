//! Weighted fuzzy search over experience records

use crate::fuzzy::Matcher;
use crate::types::{FieldMatch, SearchField, SearchResult};
use vitae_core::{ExperienceRecord, SearchConfig};

/// Rank `records` against `query`.
///
/// Trimmed queries shorter than `min_query_len` chars return nothing. Results
/// are best first; equal scores keep the order of `records`.
pub fn search(
    records: &[&ExperienceRecord],
    query: &str,
    config: &SearchConfig,
) -> Vec<SearchResult> {
    let query = query.trim();
    if query.is_empty() || query.chars().count() < config.min_query_len {
        return Vec::new();
    }

    let matcher = Matcher::new(query, config.threshold, config.min_match_char_len);
    let total_weight: f64 = SearchField::ALL
        .iter()
        .map(|f| f.weight(&config.weights))
        .sum();

    let mut results: Vec<SearchResult> = records
        .iter()
        .filter_map(|record| score_record(record, &matcher, config, total_weight))
        .collect();

    // sort_by is stable, so ties keep filtered-list order
    results.sort_by(|a, b| a.score.total_cmp(&b.score));
    results
}

fn score_record(
    record: &ExperienceRecord,
    matcher: &Matcher,
    config: &SearchConfig,
    total_weight: f64,
) -> Option<SearchResult> {
    let mut matches = Vec::new();
    let mut score = 1.0;

    for field in SearchField::ALL {
        let weight = if total_weight > 0.0 {
            field.weight(&config.weights) / total_weight
        } else {
            1.0 / SearchField::ALL.len() as f64
        };

        for value in field_values(record, field) {
            let Some(hit) = matcher.find(value) else {
                continue;
            };
            let norm = field_norm(value, config.field_norm_weight);
            score *= hit.score.max(f64::EPSILON).powf(weight * norm);
            matches.push(FieldMatch {
                field,
                value: value.to_string(),
                score: hit.score,
                start: hit.start,
                end: hit.end,
            });
        }
    }

    if matches.is_empty() {
        return None;
    }

    let preview_text = matches
        .first()
        .map(|m| truncate_preview(preview_source(record, m), config.preview_len));

    Some(SearchResult {
        id: record.id.clone(),
        title: record.title.clone(),
        company: record.company.clone(),
        match_count: matches.len(),
        preview_text,
        score,
        matches,
    })
}

fn field_values(record: &ExperienceRecord, field: SearchField) -> Vec<&str> {
    match field {
        SearchField::Title => vec![record.title.as_str()],
        SearchField::Company => vec![record.company.as_str()],
        SearchField::Skills => record.skills.iter().map(String::as_str).collect(),
        SearchField::Description => vec![record.description.as_str()],
        SearchField::Highlights => record.highlights.iter().map(|h| h.text()).collect(),
    }
}

/// List fields preview their first element, not the element that matched
fn preview_source<'a>(record: &'a ExperienceRecord, hit: &'a FieldMatch) -> &'a str {
    let first = match hit.field {
        SearchField::Skills => record.skills.first().map(String::as_str),
        SearchField::Highlights => record.highlights.first().map(|h| h.text()),
        _ => None,
    };
    first.unwrap_or(&hit.value)
}

/// Longer values count slightly less for the same hit
fn field_norm(value: &str, norm_weight: f64) -> f64 {
    let tokens = value.split_whitespace().count().max(1) as f64;
    let norm = 1.0 / tokens.powf(0.5 * norm_weight);
    (norm * 1000.0).round() / 1000.0
}

fn truncate_preview(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut preview: String = value.chars().take(max_chars).collect();
    preview.push_str("...");
    preview
}

/// Search with memoization of the last `(records, query)` pair.
///
/// Records are immutable for the lifetime of a dataset, so the ordered list of
/// ids identifies a filtered view.
#[derive(Debug, Default)]
pub struct SearchEngine {
    config: SearchConfig,
    memo: Option<Memo>,
}

#[derive(Debug)]
struct Memo {
    ids: Vec<String>,
    query: String,
    results: Vec<SearchResult>,
}

impl Memo {
    fn is_for(&self, records: &[&ExperienceRecord], query: &str) -> bool {
        self.query == query
            && self.ids.len() == records.len()
            && self.ids.iter().zip(records).all(|(id, r)| *id == r.id)
    }
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config, memo: None }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn search(&mut self, records: &[&ExperienceRecord], query: &str) -> &[SearchResult] {
        let cached = self.memo.as_ref().is_some_and(|m| m.is_for(records, query));
        if !cached {
            let results = search(records, query, &self.config);
            tracing::debug!(
                query,
                candidates = records.len(),
                results = results.len(),
                "search recomputed"
            );
            self.memo = Some(Memo {
                ids: records.iter().map(|r| r.id.clone()).collect(),
                query: query.to_string(),
                results,
            });
        }

        match &self.memo {
            Some(memo) => &memo.results,
            None => &[],
        }
    }
}
