//! Trigger resolution: pick the emotion state that answers a trigger.

use std::sync::Arc;

use crate::core::registry::{EmotionRegistry, EmotionState, TriggerType};

/// Pick the state responding to `trigger` with the highest priority.
///
/// Ties go to the earliest state in registry order. Returns `None` when no
/// state responds, which callers treat as a silent drop.
pub fn resolve(registry: &EmotionRegistry, trigger: TriggerType) -> Option<Arc<EmotionState>> {
    registry
        .states()
        .iter()
        .filter(|s| s.responds_to(trigger))
        .fold(None::<&Arc<EmotionState>>, |best, s| match best {
            Some(b) if b.priority >= s.priority => Some(b),
            _ => Some(s),
        })
        .cloned()
}
