//! Core types for the experience view

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Active skill filter. Ordered so JSON output and logs are deterministic.
pub type SkillSet = BTreeSet<String>;

/// Toggle one skill: add it when absent, remove it when present.
///
/// Returns a new set; the input is left untouched.
pub fn toggle_member(set: &SkillSet, item: &str) -> SkillSet {
    let mut next = set.clone();
    if !next.remove(item) {
        next.insert(item.to_string());
    }
    next
}

/// Role category filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// No category restriction
    #[default]
    All,
    /// Records tagged with this label (stored lowercase)
    Tag(String),
}

impl Category {
    pub fn tag(name: &str) -> Self {
        Category::Tag(name.to_lowercase())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Category::All)
    }

    pub fn matches(&self, record: &ExperienceRecord) -> bool {
        match self {
            Category::All => true,
            Category::Tag(tag) => record.has_tag(tag),
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.is_empty() {
            Ok(Category::All)
        } else {
            Ok(Category::tag(trimmed))
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(category) => category,
            Err(never) => match never {},
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::All => f.write_str("all"),
            Category::Tag(tag) => f.write_str(tag),
        }
    }
}

/// One bullet under a role.
///
/// Older data stores bullets as bare strings; newer entries carry the skills
/// they demonstrate so the skill filter can hide unrelated bullets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Highlight {
    Plain(String),
    Scoped {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        skills: Option<Vec<String>>,
    },
}

impl Highlight {
    pub fn text(&self) -> &str {
        match self {
            Highlight::Plain(text) => text,
            Highlight::Scoped { text, .. } => text,
        }
    }

    /// Skills this highlight is scoped to (empty for neutral highlights)
    pub fn skills(&self) -> &[String] {
        match self {
            Highlight::Plain(_) => &[],
            Highlight::Scoped { skills, .. } => skills.as_deref().unwrap_or(&[]),
        }
    }

    /// Neutral highlights are shown under every skill filter
    pub fn is_neutral(&self) -> bool {
        self.skills().is_empty()
    }
}

/// One professional role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    pub start_date: String,
    /// `None` means the role is ongoing
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub highlights: Vec<Highlight>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
}

impl ExperienceRecord {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// True when the record lists at least one skill from `skills`
    pub fn shares_skill(&self, skills: &SkillSet) -> bool {
        self.skills.iter().any(|s| skills.contains(s))
    }

    pub fn start(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(parse_date)
    }

    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }
}

/// Optional fields written as `null` read the same as absent ones
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse `YYYY-MM-DD`, or `YYYY-MM` as the first day of that month.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d"))
        .ok()
}
