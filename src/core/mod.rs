//! Core scheduling abstractions: catalog, resolution, composition and the
//! single-slot scheduler.

pub mod composer;
pub mod engine;
pub mod error;
pub mod history;
pub mod reaction;
pub mod registry;
pub mod resolver;
pub mod subscription;

pub use composer::{compose_message, MessageComposer, DEFAULT_MESSAGE};
pub use engine::{ReactionEngine, Spawn};
pub use error::{AppResult, ReactionError};
pub use history::HistoryLog;
pub use reaction::{Reaction, ReactionTrigger};
pub use registry::{Animation, EmotionRegistry, EmotionState, TriggerType};
pub use resolver::resolve;
pub use subscription::{Listener, Subscription, SubscriptionBus};
