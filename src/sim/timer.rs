//! Single-threaded delayed-call queue
//!
//! Entries fire on the frame loop once the session clock passes their due
//! time, in (due, insertion) order.

use serde::{Deserialize, Serialize};

/// Deferred effects the frame loop knows how to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Restart the run after a loss
    Restart,
    /// Remove the explosion sprite
    HideExplosion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct Scheduled {
    due_ms: u64,
    seq: u64,
    event: TimerEvent,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimerQueue {
    /// Kept sorted by (due_ms, seq)
    entries: Vec<Scheduled>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `event` at `now_ms + delay_ms`. Returns the due time.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, event: TimerEvent) -> u64 {
        let due_ms = now_ms.saturating_add(delay_ms);
        let entry = Scheduled {
            due_ms,
            seq: self.next_seq,
            event,
        };
        self.next_seq += 1;
        let idx = self
            .entries
            .partition_point(|e| (e.due_ms, e.seq) <= (entry.due_ms, entry.seq));
        self.entries.insert(idx, entry);
        due_ms
    }

    /// Remove and return every event due at or before `now_ms`
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<TimerEvent> {
        let split = self.entries.partition_point(|e| e.due_ms <= now_ms);
        self.entries.drain(..split).map(|e| e.event).collect()
    }

    /// Due time of the earliest pending `event`, if any
    pub fn due_time_of(&self, event: TimerEvent) -> Option<u64> {
        self.entries.iter().find(|e| e.event == event).map(|e| e.due_ms)
    }

    pub fn next_due(&self) -> Option<u64> {
        self.entries.first().map(|e| e.due_ms)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
