use crate::cli::{FilterArgs, GlobalOptions};
use serde_json::json;

pub fn run(opts: &GlobalOptions, query: &str, filter: &FilterArgs) -> anyhow::Result<()> {
    let mut view = super::open_view(opts, filter)?;
    view.set_search_query(query);

    let min_len = view.config().search.min_query_len;
    if query.trim().chars().count() < min_len {
        tracing::info!(min_len, "query too short, nothing searched");
    }

    let output = json!({
        "query": query.trim(),
        "category": view.state().active_category,
        "skills": view.state().active_skills,
        "filtered_count": view.filtered_records().len(),
        "results": view.results(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
