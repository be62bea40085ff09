use crate::cli::GlobalOptions;
use serde_json::{json, Value};
use std::collections::BTreeSet;
use vitae_core::ExperienceRecord;

pub fn run(opts: &GlobalOptions) -> anyhow::Result<()> {
    let config = super::load_config(opts)?;
    let dataset = super::load_dataset(opts)?;

    let report = report(dataset.records(), &config.categories);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn report(records: &[ExperienceRecord], known: &[String]) -> Value {
    let tags: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.tags.iter().map(String::as_str))
        .collect();
    let skills: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.skills.iter().map(String::as_str))
        .collect();
    // Tags no category button would ever select
    let unfiltered_tags: Vec<&str> = tags
        .iter()
        .copied()
        .filter(|tag| !known.iter().any(|k| k.eq_ignore_ascii_case(tag)))
        .collect();

    json!({
        "valid": true,
        "records": records.len(),
        "current": records.iter().filter(|r| r.is_current()).count(),
        "earliest_start": records.iter().filter_map(|r| r.start()).min(),
        "distinct_skills": skills.len(),
        "tags": tags,
        "unfiltered_tags": unfiltered_tags,
    })
}
