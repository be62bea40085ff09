//! JSON Lines helpers for event logs

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Append one record as a single line, creating the file and parents as needed
pub fn append_jsonl<T: Serialize>(path: &Path, record: &T) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut line = serde_json::to_vec(record)?;
    line.push(b'\n');

    // One write per record keeps lines whole when several writers append
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(&line)?;
    Ok(())
}

/// Read every well-formed record. A missing file is an empty log.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> std::io::Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Truncated trailing lines are skipped
        if let Ok(record) = serde_json::from_str(line) {
            records.push(record);
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Entry {
        query: String,
        results: usize,
    }

    #[test]
    fn test_append_then_read() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested/events.jsonl");

        let entries = vec![
            Entry {
                query: "react".to_string(),
                results: 2,
            },
            Entry {
                query: "sql".to_string(),
                results: 0,
            },
        ];
        for entry in &entries {
            append_jsonl(&path, entry).unwrap();
        }

        let read: Vec<Entry> = read_jsonl(&path).unwrap();
        assert_eq!(read, entries);
    }

    #[test]
    fn test_read_skips_malformed_lines() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("events.jsonl");
        std::fs::write(&path, "{\"query\":\"a\",\"results\":1}\n\nnot json\n{\"query\":\"b\"").unwrap();

        let read: Vec<Entry> = read_jsonl(&path).unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].query, "a");
    }

    #[test]
    fn test_read_missing_file() {
        let read: Vec<Entry> = read_jsonl(Path::new("/nonexistent/events.jsonl")).unwrap();
        assert!(read.is_empty());
    }
}
