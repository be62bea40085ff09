use crate::cli::{FilterArgs, GlobalOptions};
use serde_json::{json, Value};
use vitae_view::{Card, ViewState};

pub fn run(opts: &GlobalOptions, filter: &FilterArgs) -> anyhow::Result<()> {
    let view = super::open_view(opts, filter)?;
    println!("{}", serde_json::to_string_pretty(&render(&view))?);
    Ok(())
}

fn render(view: &ViewState) -> Value {
    let state = view.state();
    let records: Vec<Value> = view.cards().iter().map(card_json).collect();

    json!({
        "category": state.active_category,
        "skills": state.active_skills,
        "filtering": view.is_filtering(),
        "count": records.len(),
        "records": records,
    })
}

fn card_json(card: &Card<'_>) -> Value {
    let record = card.record;
    let highlights: Vec<&str> = card.highlights.iter().map(|h| h.text()).collect();

    json!({
        "id": record.id,
        "title": record.title,
        "company": record.company,
        "location": record.location,
        "start": record.start(),
        "end": record.end(),
        "current": record.is_current(),
        "tags": record.tags,
        "skills": record.skills,
        "highlights": highlights,
        "expandable": card.expandable,
    })
}
