//! Analytics sinks

use crate::io::append_jsonl;
use crate::types::AnalyticsEvent;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to write event: {0}")]
    Io(#[from] std::io::Error),
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

/// Receiver for analytics events.
///
/// Callers treat delivery as best effort: an error is logged and dropped,
/// never surfaced to the user.
pub trait AnalyticsSink: Send + Sync {
    /// Sink name, for logs
    fn name(&self) -> &str {
        "analytics"
    }

    fn track(&self, event: &AnalyticsEvent) -> Result<(), SinkError>;
}

/// Appends events to a JSONL file
#[derive(Debug, Clone)]
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl AnalyticsSink for JsonlSink {
    fn name(&self) -> &str {
        "jsonl"
    }

    fn track(&self, event: &AnalyticsEvent) -> Result<(), SinkError> {
        append_jsonl(&self.path, event)?;
        Ok(())
    }
}

/// Keeps events in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything tracked so far
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.name).collect()
    }
}

impl AnalyticsSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn track(&self, event: &AnalyticsEvent) -> Result<(), SinkError> {
        let mut events = self
            .events
            .lock()
            .map_err(|_| SinkError::Unavailable("memory sink lock poisoned".to_string()))?;
        events.push(event.clone());
        Ok(())
    }
}
