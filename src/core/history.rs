//! Bounded log of reactions that finished their time on screen.

use std::collections::VecDeque;

use crate::core::reaction::Reaction;

/// Capacity used when none is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Most-recent-first buffer that silently drops the oldest entry past capacity.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<Reaction>,
    capacity: usize,
}

impl HistoryLog {
    /// Create a log holding at most `capacity` reactions.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepend a reaction.
    pub fn record(&mut self, reaction: Reaction) {
        self.entries.push_front(reaction);
        self.entries.truncate(self.capacity);
    }

    /// Owned copy, newest first.
    pub fn snapshot(&self) -> Vec<Reaction> {
        self.entries.iter().cloned().collect()
    }

    /// Number of stored reactions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured capacity.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
