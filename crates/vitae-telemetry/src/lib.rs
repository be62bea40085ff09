//! Fire-and-forget analytics events for the experience view

mod io;
mod sink;
mod types;

pub use io::{append_jsonl, read_jsonl};
pub use sink::{AnalyticsSink, JsonlSink, MemorySink, SinkError};
pub use types::{
    AnalyticsEvent, CATEGORY_CHANGED, SEARCH_NO_RESULTS, SEARCH_RESULT_SELECTED,
    SEARCH_SUBMITTED, SKILLS_CHANGED,
};
