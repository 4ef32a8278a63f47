//! Untyped entry points and serializable snapshots for non-Rust callers.

use serde::{Deserialize, Serialize};

use crate::core::{Reaction, ReactionEngine, ReactionTrigger, Spawn, TriggerType};
use crate::util::serde::{Generation, ReactionId};

/// Trigger request with a free-form type tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerRequest {
    /// Trigger type tag, e.g. `task_completed`.
    #[serde(rename = "type")]
    pub trigger_type: String,
    /// Opaque payload.
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Pull-based view of the engine state.
#[derive(Debug, Clone, Serialize)]
pub struct EngineSnapshot {
    /// Reaction on screen.
    pub current: Option<Reaction>,
    /// Reactions waiting, in promotion order.
    pub pending: Vec<Reaction>,
    /// Finished reactions, newest first.
    pub history: Vec<Reaction>,
    /// Generation of the latest promotion.
    pub generation: Generation,
}

/// Health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Healthy flag.
    pub ok: bool,
    /// Number of registered emotion states.
    pub emotions: usize,
}

/// Submit a trigger by tag. Unknown tags are dropped like unresolvable triggers.
pub fn submit_trigger<S>(engine: &ReactionEngine<S>, req: TriggerRequest) -> Option<ReactionId>
where
    S: Spawn + Clone + Send + Sync + 'static,
{
    match req.trigger_type.parse::<TriggerType>() {
        Ok(trigger_type) => {
            engine.trigger_reaction(ReactionTrigger::with_data(trigger_type, req.data))
        }
        Err(e) => {
            tracing::debug!("dropping trigger: {}", e);
            None
        }
    }
}

/// Capture the current slot, queue and history.
pub fn snapshot<S>(engine: &ReactionEngine<S>) -> EngineSnapshot {
    EngineSnapshot {
        current: engine.current_reaction(),
        pending: engine.pending(),
        history: engine.history(),
        generation: engine.generation(),
    }
}

/// Return a health payload.
pub fn health<S>(engine: &ReactionEngine<S>) -> Health {
    Health {
        ok: true,
        emotions: engine.registry().len(),
    }
}
