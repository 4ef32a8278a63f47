//! Triggers and the reactions built from them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::registry::{EmotionState, TriggerType};
use crate::util::clock::now_ms;
use crate::util::serde::{Priority, ReactionId};

/// A domain event requesting a reaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionTrigger {
    /// What happened.
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
    /// Opaque payload supplied by the producer.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ReactionTrigger {
    /// Trigger without payload.
    pub const fn new(trigger_type: TriggerType) -> Self {
        Self {
            trigger_type,
            data: serde_json::Value::Null,
        }
    }

    /// Trigger carrying `data`.
    pub const fn with_data(trigger_type: TriggerType, data: serde_json::Value) -> Self {
        Self { trigger_type, data }
    }
}

/// One time-boxed occurrence of an emotion state.
///
/// Everything except the `shown` flag is fixed at construction.
#[derive(Debug, Clone, Serialize)]
pub struct Reaction {
    id: ReactionId,
    state: Arc<EmotionState>,
    message: String,
    created_at_ms: u128,
    context: serde_json::Value,
    shown: bool,
    auto_hide: bool,
    hide_after_ms: u64,
}

impl Reaction {
    /// Build a reaction; `hide_after_ms` is the state's duration plus `grace_period_ms`.
    pub fn new(
        id: ReactionId,
        state: Arc<EmotionState>,
        message: impl Into<String>,
        context: serde_json::Value,
        auto_hide: bool,
        grace_period_ms: u64,
    ) -> Self {
        let hide_after_ms = state.duration_ms.saturating_add(grace_period_ms);
        Self {
            id,
            state,
            message: message.into(),
            created_at_ms: now_ms(),
            context,
            shown: false,
            auto_hide,
            hide_after_ms,
        }
    }

    /// Creation-ordered identifier.
    pub const fn id(&self) -> ReactionId {
        self.id
    }

    /// Emotion state this reaction shows.
    pub fn state(&self) -> &EmotionState {
        &self.state
    }

    /// Shortcut for the state's priority.
    pub fn priority(&self) -> Priority {
        self.state.priority
    }

    /// User-facing text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Creation time, milliseconds since the epoch.
    pub const fn created_at_ms(&self) -> u128 {
        self.created_at_ms
    }

    /// Copy of the trigger payload.
    pub const fn context(&self) -> &serde_json::Value {
        &self.context
    }

    /// Whether the reaction has ever been promoted.
    pub const fn is_shown(&self) -> bool {
        self.shown
    }

    /// Whether a hide timer is started on promotion.
    pub const fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    /// Time on screen before expiry.
    pub const fn hide_after_ms(&self) -> u64 {
        self.hide_after_ms
    }

    /// Flip `shown`. Returns `true` only the first time.
    pub(crate) fn mark_shown(&mut self) -> bool {
        !std::mem::replace(&mut self.shown, true)
    }
}
