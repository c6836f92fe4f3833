use crate::models::Snapshot;
use chrono::NaiveDateTime;

/// Identity of a request within one parse run: the `Started on` value exactly
/// as logged plus the thread id. The raw text is kept so that the same start
/// time always hashes the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey {
    pub started: String,
    pub thread: String,
}

impl RequestKey {
    pub fn new(started: &str, thread: &str) -> Self {
        Self {
            started: started.to_string(),
            thread: thread.to_string(),
        }
    }
}

/// Reconstructed history of a single long running request.
#[derive(Debug, Clone)]
pub struct RequestTimeline {
    pub key: RequestKey,
    pub started_at: NaiveDateTime,
    pub thread: String,
    pub request: String,
    pub snapshots: Vec<Snapshot>,
}

impl RequestTimeline {
    pub fn new(key: RequestKey, started_at: NaiveDateTime, request: &str) -> Self {
        let thread = key.thread.clone();
        Self {
            key,
            started_at,
            thread,
            request: request.to_string(),
            snapshots: Vec::new(),
        }
    }

    /// Elapsed time reported by the most recent snapshot.
    pub fn duration(&self) -> f64 {
        self.snapshots.last().map_or(0.0, |s| s.elapsed)
    }

    pub fn last_snapshot_mut(&mut self) -> Option<&mut Snapshot> {
        self.snapshots.last_mut()
    }
}
