//! Traversal observers
//!
//! Observers are told when a cell joins or leaves the current path and when a
//! new word is found. They are informational only and cannot affect the search.

/// Receives traversal progress events
///
/// Every method defaults to a no-op, so implementors only override what they need.
pub trait CellObserver {
    /// A cell has been marked as part of the current path
    fn occupied(&mut self, _row: usize, _col: usize) {}

    /// A cell has been released as the path backtracks
    fn released(&mut self, _row: usize, _col: usize) {}

    /// A word not seen before has been found
    fn found(&mut self, _word: &str) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CellObserver for NoopObserver {}

/// A recorded traversal event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Occupied { row: usize, col: usize },
    Released { row: usize, col: usize },
    Found(String),
}

/// Observer that records events for later replay
///
/// Recording stops once `limit` events have been stored; `is_truncated`
/// reports whether anything was dropped.
#[derive(Debug, Clone)]
pub struct TraceRecorder {
    events: Vec<TraceEvent>,
    limit: usize,
    truncated: bool,
}

impl TraceRecorder {
    /// Default cap on recorded events
    pub const DEFAULT_LIMIT: usize = 200_000;

    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self {
            events: Vec::new(),
            limit,
            truncated: false,
        }
    }

    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }

    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    fn record(&mut self, event: TraceEvent) {
        if self.events.len() < self.limit {
            self.events.push(event);
        } else {
            self.truncated = true;
        }
    }
}

impl Default for TraceRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl CellObserver for TraceRecorder {
    fn occupied(&mut self, row: usize, col: usize) {
        self.record(TraceEvent::Occupied { row, col });
    }

    fn released(&mut self, row: usize, col: usize) {
        self.record(TraceEvent::Released { row, col });
    }

    fn found(&mut self, word: &str) {
        self.record(TraceEvent::Found(word.to_string()));
    }
}
