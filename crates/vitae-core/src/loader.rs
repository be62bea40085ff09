//! Loading and validating the experience dataset

use crate::types::{parse_date, ExperienceRecord};
use serde_json::Value;
use std::collections::HashSet;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed experience data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected an array of records or an object with an \"experience\" array, found {0}")]
    Shape(&'static str),
    #[error("experience record at index {index} is malformed: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("experience record at index {0} has an empty id")]
    EmptyId(usize),
    #[error("duplicate experience id {0:?}")]
    DuplicateId(String),
    #[error("experience {id:?} has an invalid {field}: {value:?}")]
    InvalidDate {
        id: String,
        field: &'static str,
        value: String,
    },
}

/// Immutable, validated experience records shared by every view
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[ExperienceRecord]>,
}

impl Dataset {
    /// Validate and wrap records. Ids must be non-empty and unique.
    pub fn new(records: Vec<ExperienceRecord>) -> Result<Self, LoadError> {
        validate(&records)?;
        Ok(Self {
            records: records.into(),
        })
    }

    pub fn records(&self) -> &[ExperienceRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&ExperienceRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

impl Deref for Dataset {
    type Target = [ExperienceRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

/// Parse either a bare array of records or the `cv.json` object shape.
///
/// Records are decoded one at a time so an error names the record that broke.
pub fn parse_experience(json: &str) -> Result<Dataset, LoadError> {
    let raw: Value = serde_json::from_str(json)?;
    let items = match raw {
        Value::Array(items) => items,
        Value::Object(mut doc) => match doc.remove("experience") {
            Some(Value::Array(items)) => items,
            Some(other) => return Err(LoadError::Shape(kind(&other))),
            None => return Err(LoadError::Shape("an object without \"experience\"")),
        },
        other => return Err(LoadError::Shape(kind(&other))),
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| LoadError::Record { index, source })
        })
        .collect::<Result<Vec<ExperienceRecord>, _>>()?;
    let dataset = Dataset::new(records)?;
    tracing::debug!(records = dataset.len(), "parsed experience dataset");
    Ok(dataset)
}

pub fn load_experience(path: &Path) -> Result<Dataset, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_experience(&contents)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn validate(records: &[ExperienceRecord]) -> Result<(), LoadError> {
    let mut ids = HashSet::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        if record.id.trim().is_empty() {
            return Err(LoadError::EmptyId(idx));
        }
        if !ids.insert(record.id.as_str()) {
            return Err(LoadError::DuplicateId(record.id.clone()));
        }
        if parse_date(&record.start_date).is_none() {
            return Err(LoadError::InvalidDate {
                id: record.id.clone(),
                field: "startDate",
                value: record.start_date.clone(),
            });
        }
        if let Some(end) = &record.end_date {
            if parse_date(end).is_none() {
                return Err(LoadError::InvalidDate {
                    id: record.id.clone(),
                    field: "endDate",
                    value: end.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CV: &str = r#"{
        "name": "ignored",
        "experience": [
            {"id": "1", "title": "Product Manager", "company": "Acme", "startDate": "2022-01", "tags": ["product"], "skills": ["React"]},
            {"id": "2", "title": "Analyst", "company": "Initech", "startDate": "2019-06-01", "endDate": "2021-12-31"}
        ]
    }"#;

    #[test]
    fn test_parse_document_shape() {
        let dataset = parse_experience(CV).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.get("2").unwrap().company, "Initech");
        assert_eq!(dataset.position("2"), Some(1));
        assert!(dataset.get("3").is_none());
    }

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[{"id": "a", "title": "T", "company": "C", "startDate": "2020-02"}]"#;
        let dataset = parse_experience(json).unwrap();
        assert_eq!(dataset.records()[0].id, "a");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
            {"id": "a", "title": "T", "company": "C", "startDate": "2020-02"},
            {"id": "a", "title": "U", "company": "D", "startDate": "2021-02"}
        ]"#;
        let err = parse_experience(json).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let json = r#"[{"id": " ", "title": "T", "company": "C", "startDate": "2020-02"}]"#;
        assert!(matches!(parse_experience(json), Err(LoadError::EmptyId(0))));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let json = r#"[{"id": "a", "title": "T", "company": "C", "startDate": "2020-02", "endDate": "soon"}]"#;
        let err = parse_experience(json).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDate { field: "endDate", .. }));
    }

    #[test]
    fn test_null_optional_fields_read_as_empty() {
        let json = r#"[
            {"id": "a", "title": "T", "company": "C", "startDate": "2020-02",
             "skills": null, "tags": null, "highlights": null, "location": null}
        ]"#;
        let dataset = parse_experience(json).unwrap();
        assert!(dataset.records()[0].skills.is_empty());
        assert!(dataset.records()[0].tags.is_empty());
    }

    #[test]
    fn test_malformed_record_is_named() {
        let json = r#"[
            {"id": "a", "title": "T", "company": "C", "startDate": "2020-02"},
            {"id": "b", "company": "C", "startDate": "2020-02"}
        ]"#;
        let err = parse_experience(json).unwrap_err();
        assert!(matches!(err, LoadError::Record { index: 1, .. }));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_unexpected_shape() {
        assert!(matches!(parse_experience("42"), Err(LoadError::Shape("a number"))));
        assert!(matches!(
            parse_experience(r#"{"experience": "none"}"#),
            Err(LoadError::Shape("a string"))
        ));
        assert!(matches!(
            parse_experience(r#"{"name": "x"}"#),
            Err(LoadError::Shape(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cv.json");
        std::fs::write(&path, CV).unwrap();

        let dataset = load_experience(&path).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_experience(Path::new("/nonexistent/cv.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_dataset_clones_share_records() {
        let dataset = parse_experience(CV).unwrap();
        let other = dataset.clone();
        assert!(std::ptr::eq(dataset.records(), other.records()));
    }
}
