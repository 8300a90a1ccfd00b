use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::models::Trace;
use crate::services::publisher::Publisher;

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// Holding list for the most recent ping. Cleared and refilled under one lock.
    traces: Mutex<Vec<Trace>>,
    /// The broker publisher used by the ping handler.
    pub publisher: Arc<dyn Publisher>,
}

impl AppState {
    /// Creates a new application state around the given publisher.
    pub fn new(publisher: Arc<dyn Publisher>) -> Self {
        info!("Initializing application state");

        Self {
            traces: Mutex::new(Vec::new()),
            publisher,
        }
    }

    /// Resets the holding list, appends `trace` and returns a snapshot of it.
    ///
    /// Clear, append and snapshot happen inside a single critical section, so
    /// concurrent pings never observe each other's records.
    #[instrument(skip_all, fields(trace_id = %trace.id()))]
    pub async fn replace_traces(&self, trace: Trace) -> Vec<Trace> {
        let mut traces = self.traces.lock().await;
        traces.clear();
        traces.push(trace);
        debug!(len = traces.len(), "Holding list replaced");
        traces.clone()
    }
}
