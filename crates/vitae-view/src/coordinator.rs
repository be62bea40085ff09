//! Owns the filter state and keeps derived views in sync with it

use crate::state::FilterState;
use crate::timer::{CancelableDelay, DelayTicket};
use std::sync::Arc;
use std::time::Instant;
use vitae_core::{
    displayable_highlight_count, filter_highlights, filter_indices, toggle_member, Category,
    Config, Dataset, ExperienceRecord, Highlight, SkillSet,
};
use vitae_search::{SearchEngine, SearchResult};
use vitae_telemetry::{AnalyticsEvent, AnalyticsSink};

/// One visible experience card as the presentation layer should draw it
#[derive(Debug, Clone)]
pub struct Card<'a> {
    pub record: &'a ExperienceRecord,
    /// Highlights surviving the skill filter
    pub highlights: Vec<&'a Highlight>,
    pub expandable: bool,
    pub expanded: bool,
    pub highlighted: bool,
    collapsed_count: usize,
}

impl<'a> Card<'a> {
    /// Highlights to draw given the expansion state
    pub fn shown_highlights(&self) -> &[&'a Highlight] {
        if self.expanded || !self.expandable {
            &self.highlights
        } else {
            &self.highlights[..self.collapsed_count.min(self.highlights.len())]
        }
    }

    pub fn hidden_count(&self) -> usize {
        self.highlights.len() - self.shown_highlights().len()
    }
}

/// View-state coordinator for one page view.
///
/// Every mutator recomputes the derived pipeline (category and skill filter,
/// then search over the filtered records) before returning, so readers never
/// see a half-updated view.
pub struct ViewState {
    dataset: Dataset,
    config: Config,
    state: FilterState,
    highlight_timer: CancelableDelay,
    search: SearchEngine,
    analytics: Option<Arc<dyn AnalyticsSink>>,
    filter_key: Option<(Category, SkillSet)>,
    filtered: Vec<usize>,
    results: Vec<SearchResult>,
}

impl ViewState {
    pub fn new(dataset: Dataset, config: Config) -> Self {
        let search = SearchEngine::new(config.search.clone());
        let mut view = Self {
            dataset,
            config,
            state: FilterState::new(),
            highlight_timer: CancelableDelay::new(),
            search,
            analytics: None,
            filter_key: None,
            filtered: Vec::new(),
            results: Vec::new(),
        };
        view.refresh();
        view
    }

    pub fn with_analytics(mut self, sink: Arc<dyn AnalyticsSink>) -> Self {
        self.analytics = Some(sink);
        self
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Records passing the category and skill filters, in dataset order
    pub fn filtered_records(&self) -> Vec<&ExperienceRecord> {
        self.filtered.iter().map(|&idx| &self.dataset[idx]).collect()
    }

    /// Ranked search results over the filtered records
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn is_filtering(&self) -> bool {
        self.state.is_filtering()
    }

    pub fn highlighted_id(&self) -> Option<&str> {
        self.state.highlighted_id.as_deref()
    }

    /// When the current highlight will be cleared, for hosts scheduling their own wakeup
    pub fn highlight_deadline(&self) -> Option<Instant> {
        self.highlight_timer.deadline()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.state.expanded_ids.contains(id)
    }

    /// A card can expand only when it has more highlights than fit collapsed
    pub fn is_expandable(&self, id: &str) -> bool {
        self.dataset.get(id).is_some_and(|record| {
            displayable_highlight_count(record, &self.state.active_skills)
                > self.config.collapsed_highlight_count
        })
    }

    /// Highlights of `id` visible under the active skills
    pub fn visible_highlights(&self, id: &str) -> Vec<&Highlight> {
        match self.dataset.get(id) {
            Some(record) => filter_highlights(&record.highlights, &self.state.active_skills),
            None => Vec::new(),
        }
    }

    /// Cards for every filtered record
    pub fn cards(&self) -> Vec<Card<'_>> {
        let collapsed_count = self.config.collapsed_highlight_count;
        self.filtered_records()
            .into_iter()
            .map(|record| {
                let highlights = filter_highlights(&record.highlights, &self.state.active_skills);
                Card {
                    record,
                    expandable: highlights.len() > collapsed_count,
                    expanded: self.state.expanded_ids.contains(&record.id),
                    highlighted: self.state.highlighted_id.as_deref() == Some(record.id.as_str()),
                    highlights,
                    collapsed_count,
                }
            })
            .collect()
    }

    /// Switch category. Always collapses every card.
    pub fn set_active_category(&mut self, category: Category) {
        if let Category::Tag(tag) = &category {
            if !self.config.is_known_category(tag) {
                tracing::warn!(category = %tag, "unknown category, no records will match");
            }
        }

        self.apply_category(category);
        self.refresh();
        self.emit(AnalyticsEvent::category_changed(
            &self.state.active_category.to_string(),
        ));
    }

    /// Replace the active skill set wholesale
    pub fn set_active_skills(&mut self, skills: SkillSet) {
        self.state.active_skills = skills;
        self.refresh();
        self.collapse_unexpandable();
        self.emit(AnalyticsEvent::skills_changed(&self.state.active_skills));
    }

    /// Add `skill` when absent, remove it when present
    pub fn toggle_skill(&mut self, skill: &str) {
        let next = toggle_member(&self.state.active_skills, skill);
        self.set_active_skills(next);
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.state.search_query = query.to_string();
        self.refresh();

        if self.is_searchable(query) {
            let query = query.trim();
            let event = if self.results.is_empty() {
                AnalyticsEvent::search_no_results(query, self.filtered.len())
            } else {
                AnalyticsEvent::search_submitted(query, self.results.len(), self.filtered.len())
            };
            self.emit(event);
        }
    }

    /// Clear the query and start over from the full category list
    pub fn clear_search(&mut self) {
        let category_changed = !self.state.active_category.is_all();
        self.state.search_query.clear();
        self.apply_category(Category::All);
        self.refresh();
        if category_changed {
            self.emit(AnalyticsEvent::category_changed(&Category::All.to_string()));
        }
    }

    pub fn select_search_result(&mut self, id: &str) -> DelayTicket {
        self.select_search_result_at(id, Instant::now())
    }

    /// Highlight `id` until the configured duration elapses.
    ///
    /// A newer selection replaces the pending clear, so only the latest
    /// highlight is ever cleared by the timer.
    pub fn select_search_result_at(&mut self, id: &str, now: Instant) -> DelayTicket {
        self.state.highlighted_id = Some(id.to_string());
        let ticket = self
            .highlight_timer
            .schedule(now, self.config.highlight_duration());

        let query = self.state.search_query.trim().to_string();
        self.emit(AnalyticsEvent::search_result_selected(id, &query));
        ticket
    }

    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Run due timers. Returns true when the highlight was cleared.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        if self.highlight_timer.fire_if_due(now) {
            self.clear_highlight();
            return true;
        }
        false
    }

    /// Clear the highlight if `ticket` is the latest selection
    pub fn expire_highlight(&mut self, ticket: DelayTicket) -> bool {
        if self.highlight_timer.fire(ticket) {
            self.clear_highlight();
            return true;
        }
        false
    }

    /// Flip expansion of `id`. Returns whether the card is expanded afterwards.
    ///
    /// Cards that fit collapsed stay collapsed.
    pub fn toggle_expanded(&mut self, id: &str) -> bool {
        if self.state.expanded_ids.remove(id) {
            return false;
        }
        if !self.is_expandable(id) {
            tracing::debug!(id, "card not expandable, toggle ignored");
            return false;
        }
        self.state.expanded_ids.insert(id.to_string());
        true
    }

    fn apply_category(&mut self, category: Category) {
        self.state.active_category = category;
        self.state.expanded_ids.clear();
    }

    /// Expanded cards whose visible highlights now fit collapsed lose the flag
    fn collapse_unexpandable(&mut self) {
        let stale: Vec<String> = self
            .state
            .expanded_ids
            .iter()
            .filter(|id| !self.is_expandable(id))
            .cloned()
            .collect();
        for id in stale {
            tracing::debug!(id = %id, "card no longer expandable, collapsed");
            self.state.expanded_ids.remove(&id);
        }
    }

    fn clear_highlight(&mut self) {
        if let Some(id) = self.state.highlighted_id.take() {
            tracing::debug!(id = %id, "highlight expired");
        }
    }

    fn is_searchable(&self, query: &str) -> bool {
        let query = query.trim();
        !query.is_empty() && query.chars().count() >= self.config.search.min_query_len
    }

    /// Recompute filter then search. The filtered list is reused while the
    /// category and skills are unchanged.
    fn refresh(&mut self) {
        let key = (
            self.state.active_category.clone(),
            self.state.active_skills.clone(),
        );
        if self.filter_key.as_ref() != Some(&key) {
            self.filtered = filter_indices(self.dataset.records(), &key.0, &key.1);
            tracing::debug!(
                category = %key.0,
                skills = key.1.len(),
                visible = self.filtered.len(),
                "filter recomputed"
            );
            self.filter_key = Some(key);
        }

        let records = self.dataset.records();
        let candidates: Vec<&ExperienceRecord> =
            self.filtered.iter().map(|&idx| &records[idx]).collect();
        self.results = self
            .search
            .search(&candidates, &self.state.search_query)
            .to_vec();
    }

    fn emit(&self, event: AnalyticsEvent) {
        let Some(sink) = &self.analytics else {
            return;
        };
        if let Err(err) = sink.track(&event) {
            tracing::debug!(
                sink = sink.name(),
                event = %event.name,
                error = %err,
                "analytics event dropped"
            );
        }
    }
}

impl std::fmt::Debug for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewState")
            .field("records", &self.dataset.len())
            .field("state", &self.state)
            .field("visible", &self.filtered.len())
            .field("results", &self.results.len())
            .field("analytics", &self.analytics.as_ref().map(|s| s.name()))
            .finish()
    }
}
