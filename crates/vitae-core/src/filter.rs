//! Category and skill filtering over experience records

use crate::types::{Category, ExperienceRecord, Highlight, SkillSet};
use std::collections::HashMap;

/// Records passing both the category and skill predicates, in original order.
///
/// An empty `skills` set disables the skill predicate. A non-empty set keeps
/// records sharing at least one skill with it.
pub fn filter_experience<'a>(
    records: &'a [ExperienceRecord],
    category: &Category,
    skills: &SkillSet,
) -> Vec<&'a ExperienceRecord> {
    filter_indices(records, category, skills)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}

/// Positions of the records `filter_experience` would return
pub fn filter_indices(
    records: &[ExperienceRecord],
    category: &Category,
    skills: &SkillSet,
) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| category.matches(record))
        .filter(|(_, record)| skills.is_empty() || record.shares_skill(skills))
        .map(|(idx, _)| idx)
        .collect()
}

/// Highlights visible under the active skill filter, in original order.
///
/// Plain and neutral highlights always survive.
pub fn filter_highlights<'a>(
    highlights: &'a [Highlight],
    skills: &SkillSet,
) -> Vec<&'a Highlight> {
    if skills.is_empty() {
        return highlights.iter().collect();
    }

    highlights
        .iter()
        .filter(|h| h.is_neutral() || h.skills().iter().any(|s| skills.contains(s)))
        .collect()
}

/// Number of highlights a card would show under `skills`
pub fn displayable_highlight_count(record: &ExperienceRecord, skills: &SkillSet) -> usize {
    filter_highlights(&record.highlights, skills).len()
}

/// How many records list each skill, most common first (ties by name)
pub fn skill_counts(records: &[ExperienceRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        // A skill listed twice on one record still counts once
        let mut seen: Vec<&str> = Vec::with_capacity(record.skills.len());
        for skill in &record.skills {
            let skill = skill.as_str();
            if !seen.contains(&skill) {
                seen.push(skill);
                *counts.entry(skill).or_insert(0) += 1;
            }
        }
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(skill, count)| (skill.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Records per category, starting with `all`
pub fn category_counts(
    records: &[ExperienceRecord],
    categories: &[String],
) -> Vec<(Category, usize)> {
    let mut counts = vec![(Category::All, records.len())];
    for tag in categories {
        let category = Category::tag(tag);
        let count = records.iter().filter(|r| category.matches(r)).count();
        counts.push((category, count));
    }
    counts
}
