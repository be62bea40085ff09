use crate::cli::GlobalOptions;
use serde_json::{json, Value};
use vitae_core::{category_counts, skill_counts, ExperienceRecord};

pub fn run(opts: &GlobalOptions) -> anyhow::Result<()> {
    let config = super::load_config(opts)?;
    let dataset = super::load_dataset(opts)?;

    let output = summarize(dataset.records(), &config.categories);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn summarize(records: &[ExperienceRecord], categories: &[String]) -> Value {
    let skills: Vec<Value> = skill_counts(records)
        .into_iter()
        .map(|(name, count)| json!({ "name": name, "count": count }))
        .collect();
    let categories: Vec<Value> = category_counts(records, categories)
        .into_iter()
        .map(|(category, count)| json!({ "category": category, "count": count }))
        .collect();

    json!({ "skills": skills, "categories": categories })
}
