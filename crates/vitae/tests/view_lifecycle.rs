mod common;

use common::{sample_dataset, sample_view, skills};
use std::sync::Arc;
use std::time::{Duration, Instant};
use vitae_core::{Category, Config};
use vitae_telemetry::{
    AnalyticsSink, MemorySink, CATEGORY_CHANGED, SEARCH_NO_RESULTS, SEARCH_RESULT_SELECTED,
    SEARCH_SUBMITTED, SKILLS_CHANGED,
};
use vitae_view::ViewState;

fn card_ids(view: &ViewState) -> Vec<String> {
    view.cards().iter().map(|c| c.record.id.clone()).collect()
}

#[test]
fn test_initial_view_shows_everything() {
    let view = sample_view();
    assert_eq!(card_ids(&view), vec!["1", "2", "3", "4"]);
    assert!(!view.is_filtering());
    assert!(view.results().is_empty());
    assert!(view.highlighted_id().is_none());
}

#[test]
fn test_category_then_skill_narrowing() {
    let mut view = sample_view();

    view.set_active_category(Category::tag("product"));
    assert_eq!(card_ids(&view), vec!["1", "4"]);

    view.toggle_skill("Rust");
    assert_eq!(card_ids(&view), vec!["4"]);

    view.toggle_skill("Rust");
    assert_eq!(card_ids(&view), vec!["1", "4"]);
}

#[test]
fn test_search_runs_over_filtered_records() {
    let mut view = sample_view();
    view.set_active_category(Category::tag("strategy"));
    view.set_search_query("product");

    assert!(view.is_filtering());
    for result in view.results() {
        assert_eq!(result.id, "2");
    }

    view.set_active_category(Category::tag("product"));
    assert!(view.results().iter().any(|r| r.id == "1"));
    assert!(view.results().iter().all(|r| r.id == "1" || r.id == "4"));
}

#[test]
fn test_clear_search_resets_category() {
    let mut view = sample_view();
    view.set_active_category(Category::tag("tech"));
    view.set_search_query("rust");
    assert!(!view.results().is_empty());

    view.clear_search();
    assert_eq!(view.state().search_query, "");
    assert_eq!(view.state().active_category, Category::All);
    assert!(view.results().is_empty());
    assert_eq!(card_ids(&view).len(), 4);
}

#[test]
fn test_category_change_collapses_cards() {
    let mut view = sample_view();
    assert!(view.toggle_expanded("1"));
    assert!(view.toggle_expanded("4"));
    assert!(view.is_expanded("1"));

    view.set_active_category(Category::tag("product"));
    assert!(!view.is_expanded("1"));
    assert!(!view.is_expanded("4"));
}

#[test]
fn test_expandability_follows_skill_filter() {
    let mut view = sample_view();
    assert!(view.is_expandable("4"));

    // design system, plus the plain and empty-skill highlights
    view.set_active_skills(skills(&["React"]));
    assert_eq!(view.visible_highlights("4").len(), 3);
    assert!(!view.is_expandable("4"));
    assert!(!view.toggle_expanded("4"));

    let card = view
        .cards()
        .into_iter()
        .find(|c| c.record.id == "4")
        .unwrap();
    assert_eq!(card.shown_highlights().len(), 3);
    assert_eq!(card.hidden_count(), 0);
}

#[test]
fn test_collapsed_card_hides_extra_highlights() {
    let mut view = sample_view();
    let card = view
        .cards()
        .into_iter()
        .find(|c| c.record.id == "4")
        .unwrap();
    assert!(card.expandable);
    assert_eq!(card.shown_highlights().len(), 3);
    assert_eq!(card.hidden_count(), 2);

    view.toggle_expanded("4");
    let card = view
        .cards()
        .into_iter()
        .find(|c| c.record.id == "4")
        .unwrap();
    assert_eq!(card.shown_highlights().len(), 5);
}

#[test]
fn test_latest_selection_owns_the_highlight() {
    let mut view = sample_view();
    let start = Instant::now();

    view.select_search_result_at("1", start);
    view.select_search_result_at("4", start + Duration::from_millis(1500));

    // First selection's deadline passes without clearing the second
    assert!(!view.tick_at(start + Duration::from_millis(2100)));
    assert_eq!(view.highlighted_id(), Some("4"));

    assert!(view.tick_at(start + Duration::from_millis(3600)));
    assert!(view.highlighted_id().is_none());
}

#[test]
fn test_stale_ticket_does_not_clear() {
    let mut view = sample_view();
    let first = view.select_search_result("1");
    let second = view.select_search_result("4");

    assert!(!view.expire_highlight(first));
    assert_eq!(view.highlighted_id(), Some("4"));
    assert!(view.expire_highlight(second));
    assert!(view.highlighted_id().is_none());
}

#[test]
fn test_highlight_duration_is_configurable() {
    let config = Config {
        highlight_duration_ms: 100,
        ..Config::default()
    };
    let mut view = ViewState::new(sample_dataset(), config);
    let start = Instant::now();

    view.select_search_result_at("2", start);
    assert!(!view.tick_at(start + Duration::from_millis(99)));
    assert!(view.tick_at(start + Duration::from_millis(100)));
}

#[test]
fn test_analytics_events_follow_user_actions() {
    let sink = Arc::new(MemorySink::new());
    let mut view = sample_view().with_analytics(sink.clone() as Arc<dyn AnalyticsSink>);

    view.set_active_category(Category::tag("product"));
    view.toggle_skill("React");
    view.set_search_query("react");
    view.set_search_query("qqqqqq");
    view.set_search_query("q");
    view.select_search_result("1");

    assert_eq!(
        sink.names(),
        vec![
            CATEGORY_CHANGED,
            SKILLS_CHANGED,
            SEARCH_SUBMITTED,
            SEARCH_NO_RESULTS,
            SEARCH_RESULT_SELECTED,
        ]
    );

    let events = sink.events();
    assert_eq!(events[2].get("filtered_results_count"), Some(&serde_json::Value::from(2)));
    assert_eq!(events[4].get("query"), Some(&serde_json::Value::from("q")));
}
