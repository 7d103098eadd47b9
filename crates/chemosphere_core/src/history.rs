//! In-memory generation history: a capped snapshot series for charting and
//! a capped live-event feed. Nothing here touches disk; state lives and
//! dies with the session.

use chemosphere_data::{GenerationSnapshot, LiveEvent};
use std::collections::VecDeque;

/// Maximum retained live events.
const EVENT_CAPACITY: usize = 256;

/// Rolling record of the simulation's trajectory.
#[derive(Debug, Clone)]
pub struct History {
    capacity: usize,
    snapshots: VecDeque<GenerationSnapshot>,
    events: VecDeque<LiveEvent>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl History {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            snapshots: VecDeque::with_capacity(capacity.min(1024)),
            events: VecDeque::with_capacity(EVENT_CAPACITY),
        }
    }

    /// Appends a snapshot, evicting the oldest once at capacity.
    pub fn record(&mut self, snapshot: GenerationSnapshot) {
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    pub fn push_event(&mut self, event: LiveEvent) {
        if self.events.len() == EVENT_CAPACITY {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    #[must_use]
    pub fn snapshots(&self) -> &VecDeque<GenerationSnapshot> {
        &self.snapshots
    }

    #[must_use]
    pub fn events(&self) -> &VecDeque<LiveEvent> {
        &self.events
    }

    #[must_use]
    pub fn latest(&self) -> Option<&GenerationSnapshot> {
        self.snapshots.back()
    }

    /// Serializes the event feed as JSON lines for streaming consumers.
    #[must_use]
    pub fn events_jsonl(&self) -> String {
        self.events
            .iter()
            .filter_map(|event| serde_json::to_string(event).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
