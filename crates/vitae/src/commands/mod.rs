pub mod filter;
pub mod search;
pub mod skills;
pub mod validate;
pub mod version;

use crate::cli::{FilterArgs, GlobalOptions};
use anyhow::Context;
use std::sync::Arc;
use vitae_core::{load_experience, Category, Config, Dataset, SkillSet};
use vitae_telemetry::JsonlSink;
use vitae_view::ViewState;

pub(crate) fn load_config(opts: &GlobalOptions) -> anyhow::Result<Config> {
    match &opts.config {
        Some(path) => Ok(Config::from_file(path)?),
        None => Ok(Config::default()),
    }
}

pub(crate) fn load_dataset(opts: &GlobalOptions) -> anyhow::Result<Dataset> {
    let dataset = load_experience(&opts.data)
        .with_context(|| format!("loading experience data from {}", opts.data.display()))?;
    tracing::debug!(records = dataset.len(), path = %opts.data.display(), "dataset loaded");
    Ok(dataset)
}

/// Build a view with the requested filters applied
pub(crate) fn open_view(opts: &GlobalOptions, filter: &FilterArgs) -> anyhow::Result<ViewState> {
    let config = load_config(opts)?;
    let dataset = load_dataset(opts)?;

    let mut view = ViewState::new(dataset, config);
    if let Some(path) = &opts.events {
        view = view.with_analytics(Arc::new(JsonlSink::new(path)));
    }

    let category: Category = match filter.category.parse() {
        Ok(category) => category,
        Err(never) => match never {},
    };
    if !category.is_all() {
        view.set_active_category(category);
    }
    if !filter.skills.is_empty() {
        let skills: SkillSet = filter.skills.iter().cloned().collect();
        view.set_active_skills(skills);
    }
    Ok(view)
}
