//! Outward notifications. The engine never calls UI code; it publishes
//! `GameEvent`s into a queue that the host drains once per frame.

use std::collections::VecDeque;

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    #[serde(rename_all = "camelCase")]
    GameStarted { autopilot: bool },
    #[serde(rename_all = "camelCase")]
    ScoreChanged { score: u32 },
    #[serde(rename_all = "camelCase")]
    BlockPlaced { layer: u32, overlap: f32, overhang: f32 },
    #[serde(rename_all = "camelCase")]
    BlockMissed { layer: u32, autopilot: bool },
    #[serde(rename_all = "camelCase")]
    GameOver { score: u32 },
}

/// Events kept for a host that never drains (e.g. the demo running with no
/// listener). Past this the oldest are dropped.
pub const MAX_PENDING_EVENTS: usize = 256;

#[derive(Debug)]
pub struct EventQueue {
    pending: VecDeque<GameEvent>,
    capacity: usize,
    dropped: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::with_capacity(MAX_PENDING_EVENTS)
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: VecDeque::with_capacity(capacity.min(MAX_PENDING_EVENTS)),
            capacity: capacity.max(1),
            dropped: 0,
        }
    }

    pub fn publish(&mut self, event: GameEvent) {
        if self.pending.len() >= self.capacity {
            self.pending.pop_front();
            self.dropped += 1;
            if self.dropped == 1 {
                log::debug!("event queue full ({}), dropping oldest events", self.capacity);
            }
        }
        self.pending.push_back(event);
    }

    /// Oldest pending event, if any.
    pub fn pop(&mut self) -> Option<GameEvent> {
        self.pending.pop_front()
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Events discarded because nobody drained the queue in time.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
