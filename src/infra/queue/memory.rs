//! In-memory pending queue ordered by priority, FIFO within a priority.

use std::collections::VecDeque;

use crate::core::reaction::Reaction;
use crate::util::serde::Priority;

/// Backlog of reactions waiting for the active slot.
///
/// Always sorted descending by priority; reactions of equal priority keep
/// arrival order.
#[derive(Debug, Clone, Default)]
pub struct PendingQueue {
    items: VecDeque<Reaction>,
}

impl PendingQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert behind every queued reaction of equal or higher priority.
    pub fn insert(&mut self, reaction: Reaction) {
        let priority = reaction.priority();
        let at = self
            .items
            .iter()
            .position(|r| r.priority() < priority)
            .unwrap_or(self.items.len());
        self.items.insert(at, reaction);
    }

    /// Re-queue a reaction that lost the active slot.
    ///
    /// It goes ahead of every queued reaction of equal or lower priority, which
    /// is the head of the queue unless something higher is already waiting.
    pub fn requeue_front(&mut self, reaction: Reaction) {
        let priority = reaction.priority();
        let at = self
            .items
            .iter()
            .position(|r| r.priority() <= priority)
            .unwrap_or(self.items.len());
        self.items.insert(at, reaction);
    }

    /// Remove and return the head.
    pub fn pop_front(&mut self) -> Option<Reaction> {
        self.items.pop_front()
    }

    /// Head without removing it.
    pub fn front(&self) -> Option<&Reaction> {
        self.items.front()
    }

    /// Drop everything and return how many reactions were discarded.
    pub fn clear(&mut self) -> usize {
        let n = self.items.len();
        self.items.clear();
        n
    }

    /// Owned copy in queue order.
    pub fn snapshot(&self) -> Vec<Reaction> {
        self.items.iter().cloned().collect()
    }

    /// Priorities in queue order.
    pub fn priorities(&self) -> Vec<Priority> {
        self.items.iter().map(Reaction::priority).collect()
    }

    /// Current depth.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
